//! Request resolution: path to schema, plus the negotiated content type.
//!
//! One request moves through lookup, construction (or synthesis),
//! identity assignment, and negotiation. Every step is a pure
//! request-scoped computation over the read-only registry; nothing
//! survives the request.

use crate::error::ResolveError;
use crate::negotiate;
use crate::registry::{Lookup, RequestContext, SchemaRegistry, SCHEMA_SCHEMA_PATH};
use crate::schema::Schema;

/// Media type of the structured-schema representation.
pub const WRML_MEDIA_TYPE: &str = "application/wrml";

/// Media type of the plain structured-data representation.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Description marker carried by every synthesized schema.
pub const AUTOGENERATED_DESCRIPTION: &str = "An autogenerated Schema.";

/// The representations this engine can label a response with.
const SUPPORTED_TYPES: &[&str] = &[WRML_MEDIA_TYPE, JSON_MEDIA_TYPE];

/// The outcome of one resolved request.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// The fully built, identified schema.
    pub schema: Schema,
    /// The `Content-Type` value for the response.
    pub content_type: String,
}

/// Resolve a request path against a registry.
///
/// A registered constructor wins; an unregistered non-collection path
/// synthesizes a stand-in schema extending Document. The schema's
/// identity is assigned exactly once, after construction, since the name
/// derivation depends on a finalized id. Negotiation runs last and only
/// picks the content-type label; it never changes which schema was built.
///
/// # Errors
///
/// Returns `ResolveError::CollectionNotImplemented` for a collection
/// path, `ResolveError::Registry` for a malformed lookup path, and
/// `ResolveError::MalformedUri` when the request URI cannot be assigned
/// as an identity.
pub fn resolve(
    context: &RequestContext,
    registry: &SchemaRegistry,
) -> Result<Resolution, ResolveError> {
    let mut schema = match registry.lookup(&context.path)? {
        Lookup::Schema(constructor) => constructor(context),
        Lookup::Collection => {
            return Err(ResolveError::CollectionNotImplemented {
                uri: context.request_uri(),
            })
        }
        Lookup::NotFound => synthesize(context, registry),
    };

    schema.assign_id(context.request_uri())?;

    Ok(Resolution {
        schema,
        content_type: select_content_type(context),
    })
}

/// The autogenerated stand-in for an unregistered path: a bare schema
/// extending Document, marked as autogenerated.
fn synthesize(context: &RequestContext, registry: &SchemaRegistry) -> Schema {
    let mut schema = Schema::new();
    schema.push_base_schema_id(registry.default_base_schema_uri(context));
    schema.set_description(AUTOGENERATED_DESCRIPTION);
    schema
}

/// Pick the `Content-Type` label from the request's `Accept` header.
///
/// The schema representation is the default; a client whose best match is
/// plain structured data gets that instead. No mutual match degrades to
/// the default rather than failing.
fn select_content_type(context: &RequestContext) -> String {
    let accept = context.accept.as_deref().unwrap_or_default();
    match negotiate::negotiate(accept, SUPPORTED_TYPES).as_deref() {
        Some(JSON_MEDIA_TYPE) => JSON_MEDIA_TYPE.to_string(),
        _ => format!(
            "{}; schema=\"{}\"",
            WRML_MEDIA_TYPE,
            context.uri_for(SCHEMA_SCHEMA_PATH)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::DOCUMENT_SCHEMA_PATH;

    fn request(path: &str) -> RequestContext {
        RequestContext::new("http", "api.schemas.wrml.org", path)
    }

    #[test]
    fn registered_path_builds_its_definition() {
        let registry = SchemaRegistry::builtin();
        let resolution = resolve(&request(SCHEMA_SCHEMA_PATH), &registry).unwrap();

        let schema = &resolution.schema;
        assert_eq!(
            schema.id(),
            Some("http://api.schemas.wrml.org/org/wrml/model/schema/Schema")
        );
        assert_eq!(schema.name(), Some("Schema"));
        assert_eq!(
            schema.base_schema_ids(),
            &["http://api.schemas.wrml.org/org/wrml/model/Document".to_string()]
        );
        assert!(!schema.fields().is_empty());
    }

    #[test]
    fn unregistered_path_synthesizes() {
        let registry = SchemaRegistry::builtin();
        let resolution = resolve(&request("/foo/bar"), &registry).unwrap();

        let schema = &resolution.schema;
        assert_eq!(schema.id(), Some("http://api.schemas.wrml.org/foo/bar"));
        assert_eq!(schema.name(), Some("bar"));
        assert_eq!(schema.description(), Some(AUTOGENERATED_DESCRIPTION));
        assert_eq!(
            schema.base_schema_ids(),
            &["http://api.schemas.wrml.org/org/wrml/model/Document".to_string()]
        );
        assert!(schema.fields().is_empty());
    }

    #[test]
    fn collection_path_is_not_implemented() {
        let registry = SchemaRegistry::builtin();
        let err = resolve(&request("/org/wrml/model"), &registry).unwrap_err();
        assert!(matches!(err, ResolveError::CollectionNotImplemented { uri }
            if uri == "http://api.schemas.wrml.org/org/wrml/model"));
    }

    #[test]
    fn malformed_path_is_a_registry_error() {
        let registry = SchemaRegistry::builtin();
        let ctx = RequestContext::new("http", "api.schemas.wrml.org", "foo/bar");
        assert!(matches!(
            resolve(&ctx, &registry),
            Err(ResolveError::Registry { .. })
        ));
    }

    #[test]
    fn default_content_type_is_the_schema_representation() {
        let registry = SchemaRegistry::builtin();
        let resolution = resolve(&request(DOCUMENT_SCHEMA_PATH), &registry).unwrap();
        assert_eq!(
            resolution.content_type,
            "application/wrml; schema=\"http://api.schemas.wrml.org/org/wrml/model/schema/Schema\""
        );
    }

    #[test]
    fn json_preference_gets_plain_structured_data() {
        let registry = SchemaRegistry::builtin();
        let ctx = request("/foo/bar").accept("application/json, application/wrml;q=0.5");
        let resolution = resolve(&ctx, &registry).unwrap();
        assert_eq!(resolution.content_type, "application/json");
    }

    #[test]
    fn unsupported_accept_degrades_to_default() {
        let registry = SchemaRegistry::builtin();
        let ctx = request("/foo/bar").accept("image/png");
        let resolution = resolve(&ctx, &registry).unwrap();
        assert!(resolution.content_type.starts_with("application/wrml; schema="));
    }

    #[test]
    fn negotiation_never_changes_the_schema() {
        let registry = SchemaRegistry::builtin();
        let wrml = resolve(&request("/foo/bar"), &registry).unwrap();
        let json = resolve(&request("/foo/bar").accept("application/json"), &registry).unwrap();
        assert_eq!(
            serde_json::to_value(&wrml.schema).unwrap(),
            serde_json::to_value(&json.schema).unwrap()
        );
    }
}
