//! Header-value template resolution.
//!
//! # Responsibilities
//! - Split the raw `proxy_headers` configuration string into
//!   `name:valueTemplate` entries
//! - Replace `{identifier}` placeholders with request attribute text
//! - Trim resolved values and collect them in configuration order
//!
//! # Design Decisions
//! - Resolution is a pure function of (template, attributes); no captured
//!   state, testable in isolation
//! - Every placeholder resolves independently: a missing or non-text
//!   attribute becomes the empty string (never a literal "null") and only
//!   that placeholder is affected
//! - Malformed entries are skipped with a warning; configuration mistakes
//!   must not take the request down

use crate::proxy::attributes::{AttributeValue, RequestAttributes};
use crate::proxy::context::ProxyHeaders;

/// Resolve every `{identifier}` in `template` against the attribute
/// snapshot. An unterminated `{` is copied through literally.
pub fn resolve_template(template: &str, attributes: &RequestAttributes) -> String {
    let mut resolved = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        resolved.push_str(&rest[..start]);
        let after_brace = &rest[start + 1..];
        match after_brace.find('}') {
            Some(end) => {
                let name = &after_brace[..end];
                match attributes.get(name) {
                    Some(AttributeValue::Text(value)) => resolved.push_str(value),
                    Some(AttributeValue::Opaque) => {
                        tracing::warn!(
                            placeholder = name,
                            "attribute is not text-typed, substituting empty string"
                        );
                    }
                    None => {
                        tracing::warn!(
                            placeholder = name,
                            "no attribute for placeholder, substituting empty string"
                        );
                    }
                }
                rest = &after_brace[end + 1..];
            }
            None => {
                resolved.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    resolved.push_str(rest);
    resolved
}

/// Resolve a raw comma-separated `name:valueTemplate` configuration string
/// into the final header mapping.
///
/// Entries that do not split on `:` into exactly two tokens are skipped.
/// A later entry with an already-seen name overwrites the earlier value.
/// Resolved values are trimmed of surrounding whitespace.
pub fn resolve_headers(proxy_headers: &str, attributes: &RequestAttributes) -> ProxyHeaders {
    let mut headers = ProxyHeaders::new();

    for entry in proxy_headers.split(',') {
        // Empty segments (trailing commas, blank config) are not mistakes.
        if entry.trim().is_empty() {
            continue;
        }

        let tokens: Vec<&str> = entry.split(':').collect();
        if tokens.len() != 2 {
            tracing::warn!(entry = %entry, "cannot split header entry on ':', ignoring");
            continue;
        }

        let value = resolve_template(tokens[1], attributes);
        headers.insert(tokens[0], value.trim());
    }

    headers
}
