use crate::utils::error::{Result, TrackerError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpecialistStatus {
    Pending,
    Contacted,
    Verified,
    Rejected,
}

impl SpecialistStatus {
    pub const ALL: [SpecialistStatus; 4] = [
        SpecialistStatus::Pending,
        SpecialistStatus::Contacted,
        SpecialistStatus::Verified,
        SpecialistStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialistStatus::Pending => "PENDING",
            SpecialistStatus::Contacted => "CONTACTED",
            SpecialistStatus::Verified => "VERIFIED",
            SpecialistStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for SpecialistStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SpecialistStatus {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(SpecialistStatus::Pending),
            "CONTACTED" => Ok(SpecialistStatus::Contacted),
            "VERIFIED" => Ok(SpecialistStatus::Verified),
            "REJECTED" => Ok(SpecialistStatus::Rejected),
            other => Err(TrackerError::ValidationError {
                message: format!(
                    "Unknown status '{}'. Valid statuses: PENDING, CONTACTED, VERIFIED, REJECTED",
                    other
                ),
            }),
        }
    }
}

/// Status selector for filtered listings. `All` is the "ALL" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(SpecialistStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: SpecialistStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.pad("ALL"),
            StatusFilter::Only(status) => fmt::Display::fmt(status, f),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("ALL") {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialistRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub specialization: String,
    pub registration_date: NaiveDate,
    pub status: SpecialistStatus,
    pub bio: String,
    pub experience_years: u32,
    #[serde(default)]
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStatsPoint {
    pub date: NaiveDate,
    pub registrations: u32,
    pub follow_ups: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    pub pending: usize,
    pub verified: usize,
}

/// Where an advisory text came from. Fallback text is never a generated draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionSource {
    Generated,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub text: String,
    pub source: SuggestionSource,
}

impl Suggestion {
    pub fn generated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: SuggestionSource::Generated,
        }
    }

    pub fn fallback(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: SuggestionSource::Fallback,
        }
    }

    pub fn is_generated(&self) -> bool {
        self.source == SuggestionSource::Generated
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
