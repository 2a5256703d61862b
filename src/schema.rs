//! The schema data model: schemas, fields, links, and constraints.
//!
//! Entities are built once per request through explicit append operations
//! and become effectively immutable after the resolver assigns the
//! schema's identity. Base schemas are referenced by id only; walking
//! `baseSchemaIds` to produce a merged field/link view is a consumer
//! concern, not this engine's.

use serde::Serialize;
use serde_json::Value;

use crate::error::ResolveError;
use crate::uri;

/// Capitalize the first character; titles default to capitalized names.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// The fixed value-type enumeration for fields.
///
/// Each variant has a canonical name used in constraint-id paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum FieldType {
    Native,
    Model,
    Boolean,
    #[default]
    Text,
    List,
    Map,
    Choice,
    Integer,
    DateTime,
    Long,
    Double,
}

impl FieldType {
    /// Canonical name, as it appears in constraint-id paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Native => "Native",
            FieldType::Model => "Model",
            FieldType::Boolean => "Boolean",
            FieldType::Text => "Text",
            FieldType::List => "List",
            FieldType::Map => "Map",
            FieldType::Choice => "Choice",
            FieldType::Integer => "Integer",
            FieldType::DateTime => "DateTime",
            FieldType::Long => "Long",
            FieldType::Double => "Double",
        }
    }
}

/// One declared property of a schema.
///
/// The name is fixed at construction; the title defaults to the
/// capitalized name. Everything else is set through the consuming builder
/// methods.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    name: String,
    #[serde(rename = "type")]
    field_type: FieldType,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_value: Option<Value>,
    constraints: Vec<String>,
    hidden: bool,
    read_only: bool,
    required: bool,
    transient: bool,
}

impl Field {
    /// Create a field with the given name and type.
    ///
    /// Flags default to false and the title to the capitalized name.
    /// Callers keep field names unique within one schema; a subtype may
    /// still shadow a base schema's field of the same name.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        let name = name.into();
        let title = capitalize(&name);
        Self {
            name,
            field_type,
            title,
            description: None,
            default_value: None,
            constraints: Vec::new(),
            hidden: false,
            read_only: false,
            required: false,
            transient: false,
        }
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Override the default title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the default value.
    pub fn default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Append a constraint id.
    pub fn constraint(mut self, constraint_id: impl Into<String>) -> Self {
        self.constraints.push(constraint_id.into());
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn transient(mut self, transient: bool) -> Self {
        self.transient = transient;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }

    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn constraint_ids(&self) -> &[String] {
        &self.constraints
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// A typed hypermedia relation from a resource to a related resource or
/// action.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Relation identifier URI.
    pub rel: String,
    /// Target URI or URI template.
    pub href: String,
    /// Representation types accepted by the linked action.
    pub request_types: Vec<String>,
    /// Representation types the linked action may respond with.
    pub response_types: Vec<String>,
    /// Boolean-valued availability predicate over resource state.
    pub state_expression: String,
}

impl Link {
    /// Create a link that is always available.
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            request_types: Vec::new(),
            response_types: Vec::new(),
            state_expression: "true".to_string(),
        }
    }
}

/// A named validation rule, referenced from fields and schemas by id.
///
/// The id encodes the constraint kind and its parameters as a query-like
/// suffix; name and title are derived from the id's final path segment.
/// Constraints are declared, never evaluated, by this engine.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraint {
    id: String,
    name: String,
    title: String,
    version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Constraint {
    /// Create a constraint from its identifier URI.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        // Name is the final path segment, with the parameter suffix
        // stripped.
        let name = id
            .split('?')
            .next()
            .unwrap_or_default()
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();
        let title = capitalize(&name);
        Self {
            id,
            name,
            title,
            version: 1,
            description: None,
        }
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn set_version(&mut self, version: u32) {
        self.version = version;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// One resource-type definition.
///
/// Construction always begins from the bare schema: version 1, no base
/// ids, no fields, no links, no constraints. Identity (`id` and the
/// derived `name`) is assigned by the resolver after construction, never
/// by a schema definition itself.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    base_schema_ids: Vec<String>,
    constraints: Vec<String>,
    fields: Vec<Field>,
    links: Vec<Link>,
}

impl Schema {
    /// The bare schema every definition starts from.
    pub fn new() -> Self {
        Self {
            id: None,
            name: None,
            version: 1,
            description: None,
            base_schema_ids: Vec::new(),
            constraints: Vec::new(),
            fields: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Assign the schema's identity and derive its name from it.
    ///
    /// Happens exactly once per request, after the schema is fully built.
    /// Re-assigning the same id yields the same name.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::MalformedUri` if `id` is not an absolute
    /// hierarchical URI.
    pub fn assign_id(&mut self, id: impl Into<String>) -> Result<(), ResolveError> {
        let id = id.into();
        let name = uri::derive_name(&id)?;
        self.id = Some(id);
        self.name = Some(name);
        Ok(())
    }

    /// The parent identifier, derived from the assigned id.
    ///
    /// Returns `Ok(None)` before identity assignment.
    pub fn parent_id(&self) -> Result<Option<String>, ResolveError> {
        match &self.id {
            Some(id) => uri::derive_parent(id).map(Some),
            None => Ok(None),
        }
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn set_version(&mut self, version: u32) {
        self.version = version;
    }

    /// Append a base schema id. Every schema other than Document reaches
    /// the Document schema id through this sequence, directly or
    /// transitively; the inheritance graph is a DAG rooted at Document.
    pub fn push_base_schema_id(&mut self, base_schema_id: impl Into<String>) {
        self.base_schema_ids.push(base_schema_id.into());
    }

    /// Append a field declaration.
    pub fn push_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Append a link.
    pub fn push_link(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Append a schema-level constraint id.
    pub fn push_constraint(&mut self, constraint_id: impl Into<String>) {
        self.constraints.push(constraint_id.into());
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn base_schema_ids(&self) -> &[String] {
        &self.base_schema_ids
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn constraints(&self) -> &[String] {
        &self.constraints
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}
