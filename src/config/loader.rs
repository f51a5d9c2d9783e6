//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::ProxyConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ProxyConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<ProxyConfig, ConfigError> {
    let config: ProxyConfig = toml::from_str(content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_complete_config() {
        let raw = r#"
            [listener]
            bind_address = "127.0.0.1:8080"

            [resources.acct]
            uri = "http://api.internal/v1"
            proxy_headers = "X-User:{userId}"
        "#;
        let config = parse_config(raw).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:8080");
        assert!(config.resources.contains_key("acct"));
    }

    #[test]
    fn rejects_invalid_toml() {
        assert!(matches!(parse_config("not = [toml"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn rejects_semantically_invalid_config() {
        let raw = r#"
            [resources.acct]
            uri = "   "
        "#;
        assert!(matches!(
            parse_config(raw),
            Err(ConfigError::Validation(errors)) if errors.len() == 1
        ));
    }
}
