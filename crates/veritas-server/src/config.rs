//! Configuration file parsing for the evaluation server.
//!
//! Loads settings from TOML files including bind address, the block
//! explorer base URL, and an optional replacement source catalog.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A field is present but unusable
    #[error("Invalid configuration field {field}: {reason}")]
    InvalidField {
        /// Field name
        field: String,
        /// What is wrong with it
        reason: String,
    },
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (e.g., 3000)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// Explorer URL prefix; the transaction hash is appended verbatim
    #[serde(default = "default_explorer_base_url")]
    pub explorer_base_url: String,

    /// Source catalog entries; empty means use the built-in catalog
    #[serde(default)]
    pub sources: Vec<SourceRule>,
}

/// A keyword-triggered citation
#[derive(Debug, Clone, Deserialize)]
pub struct SourceRule {
    /// Substring matched case-insensitively against the question
    pub keyword: String,

    /// Citation title
    pub title: String,

    /// Citation URL
    pub url: String,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_bind_port() -> u16 {
    3000
}

/// Default explorer: Sepolia Etherscan
pub fn default_explorer_base_url() -> String {
    "https://sepolia.etherscan.io/tx/".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            explorer_base_url: default_explorer_base_url(),
            sources: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values that TOML typing cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.explorer_base_url.starts_with("http") {
            return Err(ConfigError::InvalidField {
                field: "explorer_base_url".to_string(),
                reason: "must be an http(s) URL".to_string(),
            });
        }

        if let Some(rule) = self.sources.iter().find(|r| r.keyword.trim().is_empty()) {
            return Err(ConfigError::InvalidField {
                field: "sources.keyword".to_string(),
                reason: format!("empty keyword for source '{}'", rule.title),
            });
        }

        Ok(())
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.bind_port, 3000);
        assert_eq!(config.explorer_base_url, "https://sepolia.etherscan.io/tx/");
        assert!(config.sources.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bind_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "0.0.0.0"
            bind_port = 9000
            explorer_base_url = "https://etherscan.io/tx/"

            [[sources]]
            keyword = "rome"
            title = "Rome in a day"
            url = "https://example.com/rome"

            [[sources]]
            keyword = "rome"
            title = "Roman history"
            url = "https://example.com/rome-history"
        "#;

        let config: ServerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.bind_port, 9000);
        assert_eq!(config.explorer_base_url, "https://etherscan.io/tx/");
        assert_eq!(config.sources.len(), 2);
        assert_eq!(config.sources[1].title, "Roman history");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config.bind_port, 3000);
        assert_eq!(config.explorer_base_url, default_explorer_base_url());
    }

    #[test]
    fn test_invalid_explorer_url() {
        let config = ServerConfig {
            explorer_base_url: "etherscan".to_string(),
            ..ServerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_blank_source_keyword() {
        let config = ServerConfig {
            sources: vec![SourceRule {
                keyword: " ".to_string(),
                title: "Nothing".to_string(),
                url: "https://example.com".to_string(),
            }],
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
