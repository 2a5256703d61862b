//! Built-in schema definitions served by the default registry.
//!
//! Each definition is a constructor invoked once per request. Base schemas
//! are referenced by id only; inherited structure is never flattened into
//! the subtype here.

use crate::catalog;
use crate::registry::{RequestContext, DOCUMENT_SCHEMA_PATH};
use crate::schema::{Field, FieldType, Schema};

/// The universal Document archetype, root of the inheritance DAG.
pub fn document(context: &RequestContext) -> Schema {
    let mut schema = Schema::new();
    schema.set_description("A resource archetype used to model a singular concept.");

    let uri_syntax = catalog::uri_text_syntax_constraint();

    schema.push_field(
        Field::new("id", FieldType::Text)
            .description("The document's identifier.")
            .constraint(uri_syntax.id()),
    );
    schema.push_field(
        Field::new("parentId", FieldType::Text)
            .description("The document's parent identifier.")
            .constraint(uri_syntax.id()),
    );

    schema.push_link(catalog::self_link(context.request_uri()));

    schema
}

/// The Schema-of-schemas.
pub fn schema(context: &RequestContext) -> Schema {
    let mut schema = Schema::new();
    schema.set_description(
        "A schema describes the structure of a model independent of its format. Schemas \
         provide contractual resource type definitions, which are a crucial component of \
         the interface that binds a server and its clients together.",
    );

    schema.push_base_schema_id(context.uri_for(DOCUMENT_SCHEMA_PATH));

    schema.push_field(Field::new("baseSchemaIds", FieldType::List).description(
        "The schema's base schemas. Schema extension allows a schema's forms to inherit \
         the fields and links of its base schemas. Schema extension is analogous to the \
         interface inheritance model offered by classical object-oriented programming \
         languages like Java and C#.",
    ));
    schema.push_field(Field::new("description", FieldType::Text).description("The description."));
    schema.push_field(
        Field::new("fields", FieldType::List).description("The schema's field definitions."),
    );
    schema.push_field(Field::new("version", FieldType::Integer).description("The Version."));
    schema.push_field(Field::new("constraints", FieldType::List));

    schema
}

/// Describes the relationship between two linked resources.
pub fn link_relation(context: &RequestContext) -> Schema {
    let mut schema = Schema::new();
    schema.set_description("Describes the relationship between two linked resources.");
    schema.push_base_schema_id(context.uri_for(DOCUMENT_SCHEMA_PATH));
    schema
}
