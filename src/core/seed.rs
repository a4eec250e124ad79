use crate::core::{DailyStatsPoint, SpecialistRecord, SpecialistStatus};
use crate::utils::error::{Result, TrackerError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Initial state for a session: the specialist list and the daily activity series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    pub specialists: Vec<SpecialistRecord>,
    #[serde(default)]
    pub daily_stats: Vec<DailyStatsPoint>,
}

impl SeedData {
    pub fn mock() -> Self {
        Self {
            specialists: mock_specialists(),
            daily_stats: mock_daily_stats(),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TrackerError::IoError)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let seed: SeedData = serde_json::from_str(content)?;
        seed.check_unique_ids()?;
        Ok(seed)
    }

    fn check_unique_ids(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for record in &self.specialists {
            if !seen.insert(record.id.as_str()) {
                return Err(TrackerError::ConfigError {
                    message: format!("Duplicate specialist id '{}' in seed data", record.id),
                });
            }
        }
        Ok(())
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn mock_specialists() -> Vec<SpecialistRecord> {
    vec![
        SpecialistRecord {
            id: "1".to_string(),
            name: "Dr. Sarah Al-Farsi".to_string(),
            email: "sarah.f@example.com".to_string(),
            specialization: "Clinical Psychology".to_string(),
            registration_date: date(2024, 5, 15),
            status: SpecialistStatus::Pending,
            bio: "Specialist in Cognitive Behavioral Therapy with 10 years experience in anxiety disorders.".to_string(),
            experience_years: 10,
            notes: vec![
                "Incomplete documents".to_string(),
                "Waiting for verification".to_string(),
            ],
        },
        SpecialistRecord {
            id: "2".to_string(),
            name: "Ahmed Mansour".to_string(),
            email: "ahmed.m@example.com".to_string(),
            specialization: "Child Psychology".to_string(),
            registration_date: date(2024, 5, 18),
            status: SpecialistStatus::Contacted,
            bio: "Dedicated to helping children with developmental disorders and family counseling.".to_string(),
            experience_years: 5,
            notes: vec!["Initial interview done".to_string()],
        },
        SpecialistRecord {
            id: "3".to_string(),
            name: "Dr. Elena Rodriguez".to_string(),
            email: "elena.r@example.com".to_string(),
            specialization: "Neuropsychology".to_string(),
            registration_date: date(2024, 5, 20),
            status: SpecialistStatus::Verified,
            bio: "Research-focused practitioner specializing in brain injury recovery.".to_string(),
            experience_years: 15,
            notes: vec![
                "Highly recommended".to_string(),
                "Ready for project assignment".to_string(),
            ],
        },
    ]
}

pub fn mock_daily_stats() -> Vec<DailyStatsPoint> {
    [
        (15, 4, 2),
        (16, 2, 5),
        (17, 7, 3),
        (18, 5, 8),
        (19, 8, 4),
        (20, 10, 6),
    ]
    .into_iter()
    .map(|(day, registrations, follow_ups)| DailyStatsPoint {
        date: date(2024, 5, day),
        registrations,
        follow_ups,
    })
    .collect()
}
