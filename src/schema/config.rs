/// Generator configuration — output length and the trigram toggle.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("output_length must be at least 1")]
    InvalidOutputLength,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Number of tokens generated after the seed token by default.
pub const DEFAULT_OUTPUT_LENGTH: usize = 60;

/// Settings fixed for the lifetime of a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Tokens to generate after the seed; output has `output_length + 1`.
    #[serde(default = "default_output_length")]
    pub output_length: usize,
    /// Whether a three-word context table is learned and consulted first.
    #[serde(default)]
    pub trigrams_enabled: bool,
}

fn default_output_length() -> usize {
    DEFAULT_OUTPUT_LENGTH
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_length: default_output_length(),
            trigrams_enabled: false,
        }
    }
}

impl GeneratorConfig {
    /// Load a configuration from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<GeneratorConfig, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse and validate a configuration from a RON string.
    pub fn parse_ron(input: &str) -> Result<GeneratorConfig, ConfigError> {
        let config: GeneratorConfig = ron::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_length == 0 {
            return Err(ConfigError::InvalidOutputLength);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.output_length, 60);
        assert!(!config.trigrams_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_full() {
        let config = GeneratorConfig::parse_ron("(output_length: 12, trigrams_enabled: true)").unwrap();
        assert_eq!(
            config,
            GeneratorConfig {
                output_length: 12,
                trigrams_enabled: true
            }
        );
    }

    #[test]
    fn parse_missing_fields_use_defaults() {
        let config = GeneratorConfig::parse_ron("(trigrams_enabled: true)").unwrap();
        assert_eq!(config.output_length, DEFAULT_OUTPUT_LENGTH);
        assert!(config.trigrams_enabled);
    }

    #[test]
    fn zero_length_rejected() {
        let result = GeneratorConfig::parse_ron("(output_length: 0)");
        assert!(matches!(result, Err(ConfigError::InvalidOutputLength)));
    }

    #[test]
    fn malformed_ron_rejected() {
        let result = GeneratorConfig::parse_ron("(output_length: \"many\")");
        assert!(matches!(result, Err(ConfigError::Ron(_))));
    }

    #[test]
    fn load_fixture_file() {
        let config =
            GeneratorConfig::load_from_ron(Path::new("tests/fixtures/config.ron")).unwrap();
        assert_eq!(config.output_length, 25);
        assert!(config.trigrams_enabled);
    }

    #[test]
    fn ron_round_trip() {
        let config = GeneratorConfig {
            output_length: 7,
            trigrams_enabled: true,
        };
        let serialized = ron::to_string(&config).unwrap();
        assert_eq!(GeneratorConfig::parse_ron(&serialized).unwrap(), config);
    }
}
