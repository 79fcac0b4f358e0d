//! Configuration loading and management

use crate::railway::TrainStatus;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading the application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// A train to seed at startup. Trains are read-only afterwards, so the
/// seed list is the only way they enter the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainSeed {
    pub name: String,
    pub status: TrainStatus,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Trains seeded into the railway service at startup
    #[serde(default)]
    pub trains: Vec<TrainSeed>,
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            trains: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_yaml_str(&content)?)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_when_fields_absent() {
        let config = AppConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config.bind, "127.0.0.1:3000");
        assert!(config.trains.is_empty());
    }

    #[test]
    fn test_parses_seed_trains() {
        let yaml = r#"
bind: "0.0.0.0:8080"
trains:
  - name: "Night Express"
    status: "on time"
  - name: "Coastal Local"
    status: "delayed"
"#;
        let config = AppConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.bind, "0.0.0.0:8080");
        assert_eq!(config.trains.len(), 2);
        assert_eq!(config.trains[1].status, TrainStatus::Delayed);
    }
}
