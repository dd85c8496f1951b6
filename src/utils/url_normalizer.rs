//! URL normalization and validation.
//!
//! Normalization is deliberately light: trim whitespace and default a
//! missing scheme to `http://`. Validation is a weak heuristic that only
//! rejects obviously malformed input.

use url::{ParseError, Url};

/// Normalizes a raw user-submitted URL.
///
/// Trims surrounding whitespace; an empty result is returned unchanged
/// (callers must treat empty as invalid). When the trimmed string has no
/// scheme, `http://` is prepended. The string is never re-serialized, so
/// an already schemed URL passes through byte for byte.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }

    match Url::parse(trimmed) {
        Err(ParseError::RelativeUrlWithoutBase) => format!("http://{trimmed}"),
        _ => trimmed.to_string(),
    }
}

/// Returns true iff the normalized URL has a host containing at least one `.`.
///
/// This intentionally weak heuristic performs no TLD validation and no
/// reachability check. Single-label hosts such as `localhost` are rejected;
/// that restriction is observable behavior and preserved as-is.
pub fn is_valid(normalized: &str) -> bool {
    match Url::parse(normalized) {
        Ok(url) => url.host_str().is_some_and(|host| host.contains('.')),
        Err(_) => false,
    }
}

/// Returns true iff the custom alias is non-empty and every character is
/// alphanumeric, `-`, or `_`.
///
/// An empty alias means "no custom alias requested" and must be filtered
/// out by the caller before validation.
pub fn is_valid_alias(custom: &str) -> bool {
    !custom.is_empty()
        && custom
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}
