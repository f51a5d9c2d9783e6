//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits for deserialization from config files.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root configuration for the REST proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Upstream resource definitions, keyed by resource key.
    pub resources: HashMap<String, ResourceConfig>,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Per-resource upstream configuration.
///
/// The resource key is the map key under `[resources.<key>]`. A resource
/// with no root URI is treated as unknown at request time.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ResourceConfig {
    /// Root URI of the upstream resource. When present it must be a
    /// non-blank absolute URI.
    pub uri: Option<String>,

    /// Optional credential, injected into the outbound descriptor.
    pub username: Option<String>,

    /// Optional credential; carried to the transport executor as bytes.
    pub password: Option<String>,

    /// Comma-separated `name:valueTemplate` header entries. Templates may
    /// reference request attributes as `{identifier}`.
    pub proxy_headers: Option<String>,
}

/// Timeout configuration for inbound request handling.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_deserializes_with_defaults() {
        let config: ProxyConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.timeouts.request_secs, 30);
        assert!(config.resources.is_empty());
    }

    #[test]
    fn resource_table_deserializes() {
        let raw = r#"
            [resources.acct]
            uri = "http://api.internal/v1"
            username = "svc"
            password = "secret"
            proxy_headers = "X-User:{userId}"
        "#;
        let config: ProxyConfig = toml::from_str(raw).unwrap();
        let acct = &config.resources["acct"];
        assert_eq!(acct.uri.as_deref(), Some("http://api.internal/v1"));
        assert_eq!(acct.username.as_deref(), Some("svc"));
        assert_eq!(acct.password.as_deref(), Some("secret"));
        assert_eq!(acct.proxy_headers.as_deref(), Some("X-User:{userId}"));
    }

    #[test]
    fn resource_fields_are_all_optional() {
        let raw = "[resources.bare]\n";
        let config: ProxyConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.resources["bare"], ResourceConfig::default());
    }
}
