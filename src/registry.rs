//! The request context and the schema-constructor registry.
//!
//! The registry is an explicit map from logical path to constructor,
//! populated at startup and read-only afterwards, safe for unlimited
//! concurrent readers.

use std::collections::BTreeMap;

use crate::definitions;
use crate::error::ResolveError;
use crate::schema::Schema;
use crate::uri;

/// Logical path of the universal Document base schema.
pub const DOCUMENT_SCHEMA_PATH: &str = "/org/wrml/model/Document";

/// Logical path of the Schema-of-schemas.
pub const SCHEMA_SCHEMA_PATH: &str = "/org/wrml/model/schema/Schema";

/// Logical path of the LinkRelation schema.
pub const LINK_RELATION_SCHEMA_PATH: &str = "/org/wrml/core/model/relation/LinkRelation";

/// Builds a schema definition for the current request.
pub type SchemaConstructor = fn(&RequestContext) -> Schema;

/// The request values the engine needs: no ambient server state, just an
/// explicit value passed into the resolver.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub scheme: String,
    pub host: String,
    /// Explicit port; `None` means the scheme default.
    pub port: Option<u16>,
    /// Hierarchical request path, rooted at `/`.
    pub path: String,
    /// Raw `Accept` header, if the client sent one.
    pub accept: Option<String>,
}

impl RequestContext {
    pub fn new(
        scheme: impl Into<String>,
        host: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            port: None,
            path: path.into(),
            accept: None,
        }
    }

    /// Set an explicit port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the `Accept` header.
    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    /// Turn a logical path into an absolute URI on this request's
    /// authority, omitting the port when it is the scheme's default.
    pub fn uri_for(&self, path: &str) -> String {
        let port = match self.port {
            Some(p) if Some(p) != uri::default_port(&self.scheme) => format!(":{}", p),
            _ => String::new(),
        };
        format!("{}://{}{}{}", self.scheme, self.host, port, path)
    }

    /// The absolute URI of the request path itself.
    pub fn request_uri(&self) -> String {
        self.uri_for(&self.path)
    }
}

/// Outcome of a registry lookup.
pub enum Lookup {
    /// A registered schema definition matched the path exactly.
    Schema(SchemaConstructor),
    /// The path is a namespace node above registered definitions.
    Collection,
    /// Nothing registered; the resolver synthesizes a schema.
    NotFound,
}

/// Exact-match map from logical path to schema constructor.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    constructors: BTreeMap<String, SchemaConstructor>,
}

impl SchemaRegistry {
    /// An empty registry; every lookup synthesizes.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry of built-in schema definitions.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(DOCUMENT_SCHEMA_PATH, definitions::document);
        registry.register(SCHEMA_SCHEMA_PATH, definitions::schema);
        registry.register(LINK_RELATION_SCHEMA_PATH, definitions::link_relation);
        registry
    }

    /// Register a constructor for a logical path. Registration happens at
    /// startup; lookups afterwards take `&self` only.
    pub fn register(&mut self, path: impl Into<String>, constructor: SchemaConstructor) {
        self.constructors.insert(path.into(), constructor);
    }

    /// Look up the constructor for a path.
    ///
    /// A path is a `Collection` when it sits on a segment boundary above a
    /// registered definition, the way a directory sits above its files. A
    /// trailing slash is ignored for matching.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::Registry` for a path that is not a rooted
    /// hierarchical path.
    pub fn lookup(&self, path: &str) -> Result<Lookup, ResolveError> {
        if path.is_empty() || !path.starts_with('/') {
            return Err(ResolveError::Registry {
                path: path.to_string(),
                message: "path must be rooted at '/'".to_string(),
            });
        }

        let trimmed = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };

        if let Some(constructor) = self.constructors.get(trimmed) {
            return Ok(Lookup::Schema(*constructor));
        }

        let prefix = if trimmed == "/" {
            "/".to_string()
        } else {
            format!("{}/", trimmed)
        };
        if self.constructors.keys().any(|key| key.starts_with(&prefix)) {
            return Ok(Lookup::Collection);
        }

        Ok(Lookup::NotFound)
    }

    /// The canonical Document schema URI on this request's authority.
    pub fn default_base_schema_uri(&self, context: &RequestContext) -> String {
        context.uri_for(DOCUMENT_SCHEMA_PATH)
    }
}
