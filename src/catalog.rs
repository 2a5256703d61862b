//! Built-in relation, constraint, format, and validator namespaces, with
//! factories for the identifiers this engine hands out.

use crate::schema::{Constraint, FieldType, Link};

/// Root of the format identifier namespace.
pub const FORMAT_API_DOCROOT: &str = "http://api.formats.wrml.org";

/// Root of the constraint identifier namespace.
pub const CONSTRAINT_API_DOCROOT: &str = "http://api.constraints.wrml.org";

/// Root of the link relation identifier namespace.
pub const RELATIONS_API_DOCROOT: &str = "http://api.relations.wrml.org";

/// Root of the validator identifier namespace.
pub const VALIDATORS_API_DOCROOT: &str = "http://api.validators.wrml.org";

/// Identifier of the JSON format.
pub const JSON_FORMAT_ID: &str = "http://api.formats.wrml.org/application/json";

/// Relation path of the canonical self link.
pub const SELF_REL_PATH: &str = "/common/self";

/// Create a link whose relation id lives under the relations namespace.
pub fn link(rel_path: &str, href: impl Into<String>) -> Link {
    Link::new(format!("{}{}", RELATIONS_API_DOCROOT, rel_path), href)
}

/// Create the canonical self link for a resource.
pub fn self_link(href: impl Into<String>) -> Link {
    link(SELF_REL_PATH, href)
}

/// Create a constraint whose id lives under the constraints namespace.
pub fn constraint(constraint_path: &str, description: &str) -> Constraint {
    let mut constraint = Constraint::new(format!("{}{}", CONSTRAINT_API_DOCROOT, constraint_path));
    constraint.set_description(description);
    constraint
}

/// Constraint requiring a text field to hold a syntactically valid URI.
pub fn uri_text_syntax_constraint() -> Constraint {
    let validator_id = format!(
        "{}/org/wrml/util/validators/UriSyntaxValidator",
        VALIDATORS_API_DOCROOT
    );
    constraint(
        &format!(
            "/{}/Syntax?validator={}",
            FieldType::Text.as_str(),
            urlencoding::encode(&validator_id)
        ),
        "Constrains the text to conform to the syntax of a URI (see http://www.ietf.org/rfc/rfc3986.txt)",
    )
}

/// Constraint requiring a model field to conform to a specific schema.
pub fn schema_constraint(schema_id: &str) -> Constraint {
    constraint(
        &format!(
            "/{}?schema=\"{}\"",
            FieldType::Model.as_str(),
            urlencoding::encode(schema_id)
        ),
        "Constrains the model to conform to a specified schema.",
    )
}

/// Constraint requiring a choice field to pick one of a menu's selections.
pub fn choice_menu_constraint(choice_menu_id: &str) -> Constraint {
    constraint(
        &format!(
            "/{}?menu=\"{}\"",
            FieldType::Choice.as_str(),
            urlencoding::encode(choice_menu_id)
        ),
        "Constrains the choice to one of the menu's selections.",
    )
}
