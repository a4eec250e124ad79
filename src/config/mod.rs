#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const API_KEY_ENV: &str = "API_KEY";

/// Everything the advisory client needs, passed in explicitly.
///
/// An empty `api_key` is allowed: requests then fail authentication and the
/// advisory client answers with its fallback text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

impl AdvisoryConfig {
    /// Defaults plus the credential from `API_KEY`, read once.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV).unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl Validate for AdvisoryConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("advisory.base_url", &self.base_url)?;
        validation::validate_non_empty_string("advisory.model", &self.model)?;
        validation::validate_range("advisory.timeout_seconds", self.timeout.as_secs(), 1, 300)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AdvisoryConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.has_credential());
        assert_eq!(config.model, "gemini-3-flash-preview");
    }

    #[test]
    fn test_from_env_reads_credential() {
        std::env::set_var(API_KEY_ENV, "env-key");
        let config = AdvisoryConfig::from_env();
        std::env::remove_var(API_KEY_ENV);

        assert_eq!(config.api_key, "env-key");
        assert!(config.has_credential());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let bad_url = AdvisoryConfig {
            base_url: "not a url".to_string(),
            ..AdvisoryConfig::default()
        };
        assert!(bad_url.validate().is_err());

        let no_model = AdvisoryConfig {
            model: " ".to_string(),
            ..AdvisoryConfig::default()
        };
        assert!(no_model.validate().is_err());

        let zero_timeout = AdvisoryConfig {
            timeout: Duration::from_secs(0),
            ..AdvisoryConfig::default()
        };
        assert!(zero_timeout.validate().is_err());
    }
}
