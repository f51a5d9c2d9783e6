//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the listener address parses
//! - Check resource keys are non-empty and present root URIs are
//!   non-blank absolute URIs
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Malformed `proxy_headers` entries are NOT rejected here: they are a
//!   per-request degrade-in-place condition, logged when resolved

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::ProxyConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener bind address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("resource key must not be empty")]
    EmptyResourceKey,

    #[error("resource {resource:?}: root URI is present but blank")]
    BlankRootUri { resource: String },

    #[error("resource {resource:?}: root URI {uri:?} is not an absolute URI")]
    InvalidRootUri { resource: String, uri: String },
}

/// Validate a parsed configuration, collecting every error found.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    for (key, resource) in &config.resources {
        if key.trim().is_empty() {
            errors.push(ValidationError::EmptyResourceKey);
        }
        if let Some(uri) = &resource.uri {
            if uri.trim().is_empty() {
                errors.push(ValidationError::BlankRootUri {
                    resource: key.clone(),
                });
            } else if Url::parse(uri).is_err() {
                errors.push(ValidationError::InvalidRootUri {
                    resource: key.clone(),
                    uri: uri.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::ResourceConfig;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ProxyConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_error() {
        let mut config = ProxyConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.resources.insert(
            "acct".into(),
            ResourceConfig {
                uri: Some("api.internal/v1".into()),
                ..ResourceConfig::default()
            },
        );
        config.resources.insert(
            "blank".into(),
            ResourceConfig {
                uri: Some("  ".into()),
                ..ResourceConfig::default()
            },
        );

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::InvalidBindAddress("not-an-address".into())));
        assert!(errors.contains(&ValidationError::BlankRootUri {
            resource: "blank".into()
        }));
    }

    #[test]
    fn absent_uri_is_not_a_validation_error() {
        // Unknown-resource handling happens at request time, not load time.
        let mut config = ProxyConfig::default();
        config
            .resources
            .insert("pending".into(), ResourceConfig::default());
        assert!(validate_config(&config).is_ok());
    }
}
