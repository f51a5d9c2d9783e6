//! Pipeline driver: one inbound request to one outbound descriptor.
//!
//! # Data Flow
//! ```text
//! plan_request(resolver, key, method, sub_path, attributes)
//!     → resolver.lookup(key)          (absent/blank root URI → None)
//!     → uri::compose(root, sub_path)
//!     → placeholder::resolve_headers  (per configured header entry)
//!     → ProxyRequestContext::build    (bad method token → error)
//! ```
//!
//! # Design Decisions
//! - Linear flow, no loops: each stage either degrades in place or ends
//!   the request
//! - An unknown resource is a routine miss (info log, absent result); an
//!   unsupported method is a malformed request (explicit error)

use crate::config::resolver::ConfigResolver;
use crate::proxy::context::{ProxyHeaders, ProxyRequestContext};
use crate::proxy::{placeholder, uri, ProxyError, RequestAttributes};

/// Translate one inbound request into an outbound descriptor.
///
/// Returns `Ok(None)` when no root URI is configured for `resource_key`;
/// URI composition and header resolution are never reached in that case.
pub fn plan_request(
    resolver: &ConfigResolver,
    resource_key: &str,
    method_token: &str,
    sub_path: &str,
    attributes: &RequestAttributes,
) -> Result<Option<ProxyRequestContext>, ProxyError> {
    let Some(resource) = resolver.lookup(resource_key) else {
        tracing::info!(resource_key = %resource_key, "unknown resource key");
        return Ok(None);
    };
    let Some(root_uri) = resource.uri.as_deref().filter(|u| !u.trim().is_empty()) else {
        tracing::info!(resource_key = %resource_key, "no root URI configured for resource key");
        return Ok(None);
    };

    let uri = uri::compose(root_uri, sub_path);

    let headers = match resource.proxy_headers.as_deref() {
        Some(raw) => placeholder::resolve_headers(raw, attributes),
        None => ProxyHeaders::new(),
    };

    let context = ProxyRequestContext::build(
        resource_key,
        method_token,
        uri,
        resource.username.clone(),
        resource.password.as_deref(),
        headers,
    )?;

    tracing::debug!(
        resource_key = %resource_key,
        method = %context.method(),
        uri = %context.uri(),
        "proxy context built"
    );
    Ok(Some(context))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{ProxyConfig, ResourceConfig};
    use crate::proxy::HttpVerb;

    fn resolver_with(key: &str, resource: ResourceConfig) -> ConfigResolver {
        let mut config = ProxyConfig::default();
        config.resources.insert(key.to_string(), resource);
        ConfigResolver::new(config)
    }

    #[test]
    fn unknown_resource_key_yields_absent_result() {
        let resolver = ConfigResolver::new(ProxyConfig::default());
        let attributes = RequestAttributes::new();

        let planned = plan_request(&resolver, "nope", "GET", "/users", &attributes).unwrap();
        assert!(planned.is_none());
    }

    #[test]
    fn blank_root_uri_yields_absent_result() {
        let resolver = resolver_with(
            "acct",
            ResourceConfig {
                uri: Some("   ".into()),
                ..ResourceConfig::default()
            },
        );
        let attributes = RequestAttributes::new();

        let planned = plan_request(&resolver, "acct", "GET", "/users", &attributes).unwrap();
        assert!(planned.is_none());
    }

    #[test]
    fn unsupported_method_aborts_with_error() {
        let resolver = resolver_with(
            "acct",
            ResourceConfig {
                uri: Some("http://api.internal/v1".into()),
                ..ResourceConfig::default()
            },
        );
        let attributes = RequestAttributes::new();

        let err = plan_request(&resolver, "acct", "BREW", "/users", &attributes).unwrap_err();
        assert_eq!(err, ProxyError::UnsupportedMethod("BREW".into()));
    }

    #[test]
    fn full_translation_of_a_configured_request() {
        let resolver = resolver_with(
            "acct",
            ResourceConfig {
                uri: Some("http://api.internal/v1".into()),
                username: Some("svc".into()),
                password: Some("secret".into()),
                proxy_headers: Some("X-User:{userId}".into()),
            },
        );
        let mut attributes = RequestAttributes::new();
        attributes.set_text("userId", "42");

        let context = plan_request(&resolver, "acct", "GET", "/users/42", &attributes)
            .unwrap()
            .expect("resource is configured");

        assert_eq!(context.uri(), "http://api.internal/v1/users/42");
        assert_eq!(context.method(), HttpVerb::Get);
        assert_eq!(context.username(), Some("svc"));
        assert_eq!(context.password(), Some(b"secret".as_slice()));
        assert_eq!(context.headers().get("X-User"), Some("42"));
        assert_eq!(context.headers().len(), 1);
    }

    #[test]
    fn resource_without_header_config_builds_empty_header_map() {
        let resolver = resolver_with(
            "plain",
            ResourceConfig {
                uri: Some("http://api.internal/v1".into()),
                ..ResourceConfig::default()
            },
        );
        let attributes = RequestAttributes::new();

        let context = plan_request(&resolver, "plain", "DELETE", "", &attributes)
            .unwrap()
            .expect("resource is configured");

        assert_eq!(context.uri(), "http://api.internal/v1");
        assert!(context.headers().is_empty());
        assert_eq!(context.username(), None);
        assert_eq!(context.password(), None);
    }
}
