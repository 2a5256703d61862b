//! Quality-value content negotiation.
//!
//! Parses an `Accept`-style header into media types ranked by quality and
//! picks the best mutually supported one. Pure functions, no request
//! context.

/// Parse an `Accept` header into `(media type, quality)` pairs, sorted by
/// descending quality.
///
/// The header is case insensitive and whitespace is insignificant. A
/// candidate without an explicit `;q=` parameter defaults to quality 1.0;
/// an unparsable quality reads as 0. The sort is stable, so equal
/// qualities keep their header order.
pub fn parse_accept(header: &str) -> Vec<(String, f32)> {
    let normalized: String = header
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let mut ranked: Vec<(String, f32)> = normalized
        .split(',')
        .filter(|candidate| !candidate.is_empty())
        .map(|candidate| match candidate.split_once(";q=") {
            Some((media_type, quality)) => {
                (media_type.to_string(), quality.parse().unwrap_or(0.0))
            }
            None => (candidate.to_string(), 1.0),
        })
        .collect();

    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}

/// Pick the best supported media type for an `Accept` header.
///
/// Walks the parsed candidates in descending-quality order and returns the
/// first that appears (case-insensitively) in `supported` with a quality
/// greater than zero. A candidate with explicit `q=0` is excluded even if
/// otherwise eligible.
///
/// Returns `None` when nothing matches; the caller falls back to a default
/// representation rather than failing the request.
pub fn negotiate(header: &str, supported: &[&str]) -> Option<String> {
    let supported: Vec<String> = supported.iter().map(|s| s.to_lowercase()).collect();

    parse_accept(header)
        .into_iter()
        .find(|(media_type, quality)| *quality > 0.0 && supported.contains(media_type))
        .map(|(media_type, _)| media_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ranks_by_quality() {
        let ranked = parse_accept("application/json;q=0.8, text/html;q=1.0");
        assert_eq!(ranked[0].0, "text/html");
        assert_eq!(ranked[1].0, "application/json");
    }

    #[test]
    fn parse_defaults_quality_to_one() {
        let ranked = parse_accept("application/wrml");
        assert_eq!(ranked, vec![("application/wrml".to_string(), 1.0)]);
    }

    #[test]
    fn parse_is_case_and_whitespace_insensitive() {
        let ranked = parse_accept(" Application/JSON ; q=0.5 ");
        assert_eq!(ranked, vec![("application/json".to_string(), 0.5)]);
    }

    #[test]
    fn parse_unparsable_quality_reads_as_zero() {
        let ranked = parse_accept("text/html;q=high");
        assert_eq!(ranked, vec![("text/html".to_string(), 0.0)]);
    }

    #[test]
    fn negotiate_picks_highest_quality_supported() {
        let best = negotiate(
            "application/json;q=0.8, text/html;q=1.0",
            &["application/json", "text/html"],
        );
        assert_eq!(best.as_deref(), Some("text/html"));
    }

    #[test]
    fn negotiate_skips_unsupported_candidates() {
        let best = negotiate(
            "application/xhtml+xml, application/json;q=0.7",
            &["application/json"],
        );
        assert_eq!(best.as_deref(), Some("application/json"));
    }

    #[test]
    fn negotiate_excludes_explicit_zero_quality() {
        assert_eq!(negotiate("text/plain;q=0", &["text/plain"]), None);
    }

    #[test]
    fn negotiate_empty_header_is_none() {
        assert_eq!(negotiate("", &["application/json"]), None);
    }

    #[test]
    fn negotiate_no_match_is_none() {
        assert_eq!(negotiate("image/png", &["application/json"]), None);
    }

    #[test]
    fn negotiate_ties_keep_header_order() {
        let best = negotiate("text/html, application/json", &["application/json", "text/html"]);
        assert_eq!(best.as_deref(), Some("text/html"));
    }
}
