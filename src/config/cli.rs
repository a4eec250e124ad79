use crate::config::toml_config::TomlConfig;
use crate::config::AdvisoryConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "psytrack")]
#[command(about = "Track specialist registrations and draft AI follow-ups")]
pub struct CliConfig {
    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Gemini API key
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model used for generation
    #[arg(long)]
    pub model: Option<String>,

    /// Base URL of the generation service
    #[arg(long)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// JSON seed file with specialists and daily stats (built-in mock data if omitted)
    #[arg(long)]
    pub seed: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Defaults, then the TOML file, then flags and `API_KEY`.
    pub fn advisory_config(&self, file: Option<&TomlConfig>) -> AdvisoryConfig {
        let base = match file {
            Some(file) => file.apply_to(AdvisoryConfig::default()),
            None => AdvisoryConfig::default(),
        };

        AdvisoryConfig {
            api_key: self.api_key.clone().unwrap_or(base.api_key),
            model: self.model.clone().unwrap_or(base.model),
            base_url: self.base_url.clone().unwrap_or(base.base_url),
            timeout: self
                .timeout_seconds
                .map(Duration::from_secs)
                .unwrap_or(base.timeout),
        }
    }

    pub fn seed_path<'a>(&'a self, file: Option<&'a TomlConfig>) -> Option<&'a str> {
        self.seed
            .as_deref()
            .or_else(|| file.and_then(TomlConfig::seed_path))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(config) = &self.config {
            validation::validate_path("config", config)?;
        }
        if let Some(seed) = &self.seed {
            validation::validate_path("seed", seed)?;
        }
        if let Some(base_url) = &self.base_url {
            validation::validate_url("base_url", base_url)?;
        }
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_range("timeout_seconds", timeout, 1, 300)?;
        }
        Ok(())
    }
}
