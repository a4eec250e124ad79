use crate::config::AdvisoryConfig;
use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub advisory: AdvisorySection,
    #[serde(default)]
    pub data: DataSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvisorySection {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSection {
    pub seed_path: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TrackerError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TrackerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TrackerError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Layers the file's `[advisory]` values over `base`.
    pub fn apply_to(&self, base: AdvisoryConfig) -> AdvisoryConfig {
        let section = &self.advisory;
        AdvisoryConfig {
            api_key: section.api_key.clone().unwrap_or(base.api_key),
            model: section.model.clone().unwrap_or(base.model),
            base_url: section.base_url.clone().unwrap_or(base.base_url),
            timeout: section
                .timeout_seconds
                .map(Duration::from_secs)
                .unwrap_or(base.timeout),
        }
    }

    pub fn seed_path(&self) -> Option<&str> {
        self.data.seed_path.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.advisory.base_url {
            validation::validate_url("advisory.base_url", base_url)?;
        }
        if let Some(model) = &self.advisory.model {
            validation::validate_non_empty_string("advisory.model", model)?;
        }
        if let Some(timeout) = self.advisory.timeout_seconds {
            validation::validate_range("advisory.timeout_seconds", timeout, 1, 300)?;
        }
        if let Some(seed_path) = &self.data.seed_path {
            validation::validate_path("data.seed_path", seed_path)?;
        }
        Ok(())
    }
}
