use crate::core::{DashboardStats, SpecialistRecord, SpecialistStatus, StatusFilter};

pub fn count_with_status(records: &[SpecialistRecord], status: SpecialistStatus) -> usize {
    records.iter().filter(|r| r.status == status).count()
}

/// Headline counters, always recomputed from the snapshot passed in.
pub fn dashboard_stats(records: &[SpecialistRecord]) -> DashboardStats {
    DashboardStats {
        total: records.len(),
        pending: count_with_status(records, SpecialistStatus::Pending),
        verified: count_with_status(records, SpecialistStatus::Verified),
    }
}

pub fn status_breakdown(records: &[SpecialistRecord]) -> [(SpecialistStatus, usize); 4] {
    SpecialistStatus::ALL.map(|status| (status, count_with_status(records, status)))
}

pub fn filter_records(records: &[SpecialistRecord], filter: StatusFilter) -> Vec<&SpecialistRecord> {
    records.iter().filter(|r| filter.matches(r.status)).collect()
}
