//! Error types for schema resolution.

use thiserror::Error;

/// Errors during resolution of a request path to a schema.
///
/// A registry miss is not an error: the resolver synthesizes a schema for
/// unknown paths. Content negotiation never errors either; it degrades to
/// the default representation. Everything here is request-scoped.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The request URI or a constructed URI could not be parsed into
    /// scheme/host/path.
    #[error("malformed uri \"{uri}\": {message}")]
    MalformedUri { uri: String, message: String },

    /// The path names a collection (a namespace node above registered
    /// schemas). Collection resolution is an acknowledged gap; it must
    /// surface as a clear signal, never as a partially built schema.
    #[error("{uri} is a collection; collection resolution is not implemented")]
    CollectionNotImplemented { uri: String },

    /// Registry-level failure distinct from not-found, e.g. a lookup path
    /// that is not a rooted hierarchical path.
    #[error("registry lookup failed for \"{path}\": {message}")]
    Registry { path: String, message: String },
}

impl ResolveError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MalformedUri { .. } | Self::Registry { .. } => 2,
            Self::CollectionNotImplemented { .. } => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        let err = ResolveError::MalformedUri {
            uri: "not a uri".into(),
            message: "relative URL without a base".into(),
        };
        assert_eq!(err.exit_code(), 2);

        let err = ResolveError::Registry {
            path: "org/wrml".into(),
            message: "path must start with '/'".into(),
        };
        assert_eq!(err.exit_code(), 2);

        let err = ResolveError::CollectionNotImplemented {
            uri: "http://api.example.com/org/wrml/model".into(),
        };
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn collection_message_names_the_uri() {
        let err = ResolveError::CollectionNotImplemented {
            uri: "http://api.example.com/org".into(),
        };
        assert!(err.to_string().contains("http://api.example.com/org"));
        assert!(err.to_string().contains("not implemented"));
    }
}
