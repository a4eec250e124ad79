use crate::core::advisory::{AdvisorySlot, SlotState};
use crate::core::metrics;
use crate::core::{DailyStatsPoint, DashboardStats, SpecialistRecord, StatusFilter};
use std::fmt::Write;

pub const HELP: &str = "\
Commands:
  list [STATUS|ALL]       list specialists (active filter if omitted)
  filter <STATUS|ALL>     change the active filter
  stats                   headline counters
  activity                daily registrations and follow-ups
  view <id>               open a specialist and draft a follow-up
  show                    show the open specialist
  close                   close the open specialist
  status <id> <STATUS>    PENDING, CONTACTED, VERIFIED or REJECTED
  note <text>             add a note to the open specialist
  regen                   draft the follow-up again
  copy                    copy the follow-up draft to the clipboard
  insights                show the daily AI insight
  quit";

pub fn records_table(records: &[&SpecialistRecord], filter: StatusFilter) -> String {
    if records.is_empty() {
        return format!("No specialists found with status {}.", filter);
    }

    let mut out = format!(
        "{:<4} {:<24} {:<24} {:<10} {:<9}\n",
        "ID", "SPECIALIST", "FOCUS AREA", "JOINED", "STATUS"
    );
    for r in records {
        let _ = writeln!(
            out,
            "{:<4} {:<24} {:<24} {:<10} {:<9}",
            r.id, r.name, r.specialization, r.registration_date, r.status
        );
    }
    out.pop();
    out
}

pub fn stats_summary(stats: &DashboardStats, records: &[SpecialistRecord]) -> String {
    let mut out = format!(
        "Total: {}  Pending: {}  Verified: {}",
        stats.total, stats.pending, stats.verified
    );
    let breakdown = metrics::status_breakdown(records)
        .iter()
        .map(|(status, n)| format!("{}={}", status, n))
        .collect::<Vec<_>>()
        .join(" ");
    let _ = write!(out, "\n  by status: {}", breakdown);
    out
}

pub fn activity_table(points: &[DailyStatsPoint]) -> String {
    let mut out = format!("{:<10} {:>13} {:>10}", "DATE", "REGISTRATIONS", "FOLLOW-UPS");
    for p in points {
        let _ = write!(
            out,
            "\n{:<10} {:>13} {:>10}",
            p.date, p.registrations, p.follow_ups
        );
    }
    out
}

pub fn record_detail(record: &SpecialistRecord, follow_up: &AdvisorySlot) -> String {
    let mut out = format!(
        "{} <{}>\n{} | {} years | {}\n\nAbout:\n  {}\n\nInternal notes:",
        record.name,
        record.email,
        record.specialization,
        record.experience_years,
        record.status,
        record.bio
    );

    if record.notes.is_empty() {
        out.push_str("\n  No notes added yet.");
    }
    for note in &record.notes {
        let _ = write!(out, "\n  - {}", note);
    }

    out.push_str("\n\nAI follow-up draft:\n");
    out.push_str(&slot_text(follow_up, "Generating personalized message..."));
    out
}

pub fn insights(slot: &AdvisorySlot) -> String {
    format!("Daily AI insight:\n{}", slot_text(slot, "Analyzing trends..."))
}

/// Slot text as plain text, line breaks preserved.
fn slot_text(slot: &AdvisorySlot, waiting: &str) -> String {
    match slot.state() {
        SlotState::Idle => "(none)".to_string(),
        SlotState::Requesting(_) => waiting.to_string(),
        SlotState::Fulfilled { text, .. } | SlotState::Fallback { text, .. } => text.clone(),
    }
}
