pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use adapters::SystemClipboard;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::GeminiClient;
pub use config::AdvisoryConfig;
pub use crate::core::{
    advisory::AdvisoryClient, dashboard::Dashboard, seed::SeedData, session::Session,
    store::RecordStore,
};
pub use utils::error::{Result, TrackerError};
