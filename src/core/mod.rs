pub mod advisory;
pub mod dashboard;
pub mod metrics;
pub mod seed;
pub mod session;
pub mod store;

pub use crate::domain::model::{
    DailyStatsPoint, DashboardStats, SpecialistRecord, SpecialistStatus, StatusFilter, Suggestion,
    SuggestionSource,
};
pub use crate::domain::ports::{Clipboard, TextGenerator};
pub use crate::utils::error::Result;
