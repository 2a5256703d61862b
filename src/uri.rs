//! URI derivation for schema identities.
//!
//! A schema's identity is an absolute URI; its name and parent are derived
//! from that URI, never stored independently.

use url::Url;

use crate::error::ResolveError;

/// Parse an absolute hierarchical URI, requiring a host.
pub(crate) fn parse_absolute(uri: &str) -> Result<Url, ResolveError> {
    let parsed = Url::parse(uri).map_err(|e| ResolveError::MalformedUri {
        uri: uri.to_string(),
        message: e.to_string(),
    })?;

    if parsed.host_str().is_none() {
        return Err(ResolveError::MalformedUri {
            uri: uri.to_string(),
            message: "missing host".to_string(),
        });
    }

    Ok(parsed)
}

/// The default port for a scheme, omitted when rendering URIs.
pub(crate) fn default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "http" => Some(80),
        "https" => Some(443),
        _ => None,
    }
}

/// Derive the parent URI by stripping the final path segment.
///
/// Scheme and host are preserved; the port is omitted when it is the
/// scheme's default (`Url::port` already reports default ports as absent).
/// A URI whose path has exactly one segment yields the `scheme://host`
/// root with an empty path.
///
/// # Errors
///
/// Returns `ResolveError::MalformedUri` if the URI cannot be parsed into
/// scheme/host/path.
pub fn derive_parent(uri: &str) -> Result<String, ResolveError> {
    let parsed = parse_absolute(uri)?;

    let path = parsed.path();
    let parent_path = match path.rfind('/') {
        Some(0) | None => "",
        Some(i) => &path[..i],
    };

    let port = match parsed.port() {
        Some(p) => format!(":{}", p),
        None => String::new(),
    };

    Ok(format!(
        "{}://{}{}{}",
        parsed.scheme(),
        parsed.host_str().unwrap_or_default(),
        port,
        parent_path
    ))
}

/// Derive the name (final path segment) of a URI.
///
/// Returns an empty string when the path ends in a separator.
///
/// # Errors
///
/// Returns `ResolveError::MalformedUri` if the URI cannot be parsed.
pub fn derive_name(uri: &str) -> Result<String, ResolveError> {
    let parsed = parse_absolute(uri)?;
    let name = parsed.path().rsplit('/').next().unwrap_or_default();
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_strips_final_segment() {
        let parent = derive_parent("http://api.schemas.wrml.org/org/wrml/model/Document").unwrap();
        assert_eq!(parent, "http://api.schemas.wrml.org/org/wrml/model");
    }

    #[test]
    fn parent_of_single_segment_is_root() {
        let parent = derive_parent("http://api.schemas.wrml.org/Document").unwrap();
        assert_eq!(parent, "http://api.schemas.wrml.org");
    }

    #[test]
    fn parent_preserves_explicit_port() {
        let parent = derive_parent("http://localhost:8080/org/wrml").unwrap();
        assert_eq!(parent, "http://localhost:8080/org");
    }

    #[test]
    fn parent_omits_default_port() {
        // Port 80 is http's default and disappears on parse
        let parent = derive_parent("http://api.schemas.wrml.org:80/org/wrml").unwrap();
        assert_eq!(parent, "http://api.schemas.wrml.org/org");
    }

    #[test]
    fn parent_of_trailing_slash_keeps_path() {
        let parent = derive_parent("http://api.schemas.wrml.org/org/wrml/").unwrap();
        assert_eq!(parent, "http://api.schemas.wrml.org/org/wrml");
    }

    #[test]
    fn name_is_final_segment() {
        let name = derive_name("http://api.schemas.wrml.org/org/wrml/model/Document").unwrap();
        assert_eq!(name, "Document");
    }

    #[test]
    fn name_empty_for_separator_terminated_path() {
        let name = derive_name("http://api.schemas.wrml.org/org/wrml/").unwrap();
        assert_eq!(name, "");
    }

    #[test]
    fn malformed_uri_errors() {
        assert!(matches!(
            derive_parent("not a uri"),
            Err(ResolveError::MalformedUri { .. })
        ));
        assert!(matches!(
            derive_name("mailto:mark@wrml.org"),
            Err(ResolveError::MalformedUri { .. })
        ));
    }

    #[test]
    fn default_ports() {
        assert_eq!(default_port("http"), Some(80));
        assert_eq!(default_port("https"), Some(443));
        assert_eq!(default_port("ftp"), None);
    }
}
