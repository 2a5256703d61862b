//! WRML Schema Resolver
//!
//! Runtime resolution of hypermedia schema descriptions.
//!
//! For a requested path, this library resolves (or synthesizes) a
//! structured description of a resource type — its fields, links,
//! constraints, and base-schema inheritance chain — and negotiates the
//! response representation from the caller's `Accept` header.
//!
//! # Example
//!
//! ```
//! use wrml_schema::{resolve, RequestContext, SchemaRegistry};
//!
//! let registry = SchemaRegistry::builtin();
//! let request =
//!     RequestContext::new("http", "api.schemas.wrml.org", "/org/wrml/model/schema/Schema")
//!         .accept("application/wrml, application/json;q=0.8");
//!
//! let resolution = resolve(&request, &registry).unwrap();
//!
//! assert_eq!(resolution.schema.name(), Some("Schema"));
//! assert!(resolution.content_type.starts_with("application/wrml; schema="));
//! ```
//!
//! # Resolution outcomes
//!
//! | Request path | Outcome |
//! |--------------|---------|
//! | registered schema path | that definition, identity assigned |
//! | unregistered path | synthesized schema extending Document |
//! | collection (namespace node) | `CollectionNotImplemented` error |
//!
//! Base schemas are referenced by id only. Flattening inherited fields
//! and links into an effective view is the consumer's concern, which
//! keeps schema identity small and avoids duplicating inherited
//! structure across responses.

pub mod catalog;
pub mod definitions;
mod error;
mod negotiate;
mod registry;
mod resolver;
mod schema;
mod uri;

pub use error::ResolveError;
pub use negotiate::{negotiate, parse_accept};
pub use registry::{
    Lookup, RequestContext, SchemaConstructor, SchemaRegistry, DOCUMENT_SCHEMA_PATH,
    LINK_RELATION_SCHEMA_PATH, SCHEMA_SCHEMA_PATH,
};
pub use resolver::{
    resolve, Resolution, AUTOGENERATED_DESCRIPTION, JSON_MEDIA_TYPE, WRML_MEDIA_TYPE,
};
pub use schema::{Constraint, Field, FieldType, Link, Schema};
pub use uri::{derive_name, derive_parent};
