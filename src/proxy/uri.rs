//! Outbound URI composition.
//!
//! # Responsibilities
//! - Merge a configured root URI with the request's matched sub-path
//! - Insert a single separator only when neither side carries one
//!
//! # Design Decisions
//! - Pure string composition; no percent-encoding, no normalization
//! - A doubled `//` (root ends with `/` and sub-path starts with one) is
//!   preserved verbatim rather than collapsed, so upstreams see exactly
//!   what was configured

/// Compose the outbound URI from a root URI and the matched sub-path.
///
/// A blank sub-path returns the root unchanged.
pub fn compose(root_uri: &str, sub_path: &str) -> String {
    if sub_path.trim().is_empty() {
        return root_uri.to_string();
    }

    let mut uri = String::with_capacity(root_uri.len() + sub_path.len() + 1);
    uri.push_str(root_uri);
    if !root_uri.ends_with('/') && !sub_path.starts_with('/') {
        uri.push('/');
    }
    uri.push_str(sub_path);
    uri
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_sub_path_returns_root_unchanged() {
        assert_eq!(compose("http://api.internal/v1", ""), "http://api.internal/v1");
        assert_eq!(compose("http://api.internal/v1", "   "), "http://api.internal/v1");
    }

    #[test]
    fn separator_inserted_when_neither_side_has_one() {
        assert_eq!(
            compose("http://api.internal/v1", "users/42"),
            "http://api.internal/v1/users/42"
        );
    }

    #[test]
    fn no_separator_inserted_when_sub_path_has_one() {
        assert_eq!(
            compose("http://api.internal/v1", "/users/42"),
            "http://api.internal/v1/users/42"
        );
    }

    #[test]
    fn no_separator_inserted_when_root_has_one() {
        assert_eq!(
            compose("http://api.internal/v1/", "users/42"),
            "http://api.internal/v1/users/42"
        );
    }

    #[test]
    fn doubled_separator_is_preserved() {
        // Both sides carry a slash; the composed URI keeps both.
        assert_eq!(
            compose("http://api.internal/v1/", "/users/42"),
            "http://api.internal/v1//users/42"
        );
    }
}
