use crate::core::advisory::{AdvisorySlot, RequestTicket, INSIGHTS_SUBJECT};
use crate::core::metrics;
use crate::core::store::RecordStore;
use crate::core::{
    Clipboard, DashboardStats, SpecialistRecord, SpecialistStatus, StatusFilter, Suggestion,
};
use crate::utils::error::{Result, TrackerError};

/// What the caller must send to the advisory client for a follow-up draft.
#[derive(Debug, Clone)]
pub struct FollowUpRequest {
    pub ticket: RequestTicket,
    pub record: SpecialistRecord,
}

/// View state over an injected [`RecordStore`].
///
/// The selection is a copy of the stored record, kept in sync by the intents
/// below. Advisory results are applied only through `apply_follow_up` and
/// `apply_insights`, which drop anything that no longer matches.
#[derive(Debug, Default)]
pub struct Dashboard {
    store: RecordStore,
    filter: StatusFilter,
    selected: Option<SpecialistRecord>,
    follow_up: AdvisorySlot,
    insights: AdvisorySlot,
}

impl Dashboard {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn stats(&self) -> DashboardStats {
        metrics::dashboard_stats(self.store.list_all())
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn change_filter(&mut self, filter: StatusFilter) {
        tracing::debug!("Filter changed to {}", filter);
        self.filter = filter;
    }

    pub fn visible_records(&self) -> Vec<&SpecialistRecord> {
        self.store.list_by_status(self.filter)
    }

    pub fn selected(&self) -> Option<&SpecialistRecord> {
        self.selected.as_ref()
    }

    pub fn follow_up(&self) -> &AdvisorySlot {
        &self.follow_up
    }

    pub fn insights(&self) -> &AdvisorySlot {
        &self.insights
    }

    /// Selects a record and starts a fresh follow-up request for it.
    pub fn view_details(&mut self, id: &str) -> Result<FollowUpRequest> {
        let record = self
            .store
            .get(id)
            .cloned()
            .ok_or_else(|| TrackerError::RecordNotFound { id: id.to_string() })?;

        self.selected = Some(record.clone());
        let ticket = self.follow_up.begin(&record.id);
        tracing::info!("👤 Viewing {} ({})", record.name, record.id);
        Ok(FollowUpRequest { ticket, record })
    }

    pub fn regenerate_follow_up(&mut self) -> Result<FollowUpRequest> {
        let record = self.selected.clone().ok_or(TrackerError::NoSelection)?;
        let ticket = self.follow_up.begin(&record.id);
        Ok(FollowUpRequest { ticket, record })
    }

    pub fn deselect(&mut self) {
        self.selected = None;
        self.follow_up.reset();
    }

    pub fn change_status(&mut self, id: &str, status: SpecialistStatus) -> Result<()> {
        self.store.update_status(id, status)?;
        if let Some(selected) = self.selected.as_mut().filter(|s| s.id == id) {
            selected.status = status;
        }
        tracing::info!("✅ Specialist {} marked {}", id, status);
        Ok(())
    }

    /// Appends a note to the selected record, in the store and in the selection copy.
    pub fn add_note(&mut self, text: &str) -> Result<()> {
        let selected = self.selected.as_mut().ok_or(TrackerError::NoSelection)?;
        self.store.append_note(&selected.id, text)?;
        selected.notes.push(text.trim().to_string());
        Ok(())
    }

    /// Applies a follow-up result if its subject is still the selected record
    /// and no newer request has been issued. Returns whether it was applied.
    pub fn apply_follow_up(&mut self, ticket: &RequestTicket, suggestion: Suggestion) -> bool {
        let still_selected = self
            .selected
            .as_ref()
            .is_some_and(|s| s.id == ticket.subject);

        if !still_selected {
            tracing::debug!(
                "Discarding follow-up for {} (generation {}): selection changed",
                ticket.subject,
                ticket.generation
            );
            return false;
        }

        let applied = self.follow_up.resolve(ticket, suggestion);
        if !applied {
            tracing::debug!(
                "Discarding follow-up for {} (generation {}): superseded",
                ticket.subject,
                ticket.generation
            );
        }
        applied
    }

    pub fn begin_insights(&mut self) -> RequestTicket {
        self.insights.begin(INSIGHTS_SUBJECT)
    }

    pub fn apply_insights(&mut self, ticket: &RequestTicket, suggestion: Suggestion) -> bool {
        self.insights.resolve(ticket, suggestion)
    }

    /// Copies the generated follow-up draft. Fallback text is not copyable.
    pub fn copy_follow_up<C: Clipboard + ?Sized>(&self, clipboard: &mut C) -> Result<()> {
        let text = self
            .follow_up
            .generated_text()
            .ok_or(TrackerError::NothingToCopy)?;
        clipboard.set_text(text)?;
        tracing::info!("📋 Follow-up message copied ({} chars)", text.chars().count());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::advisory::FOLLOW_UP_ERROR_FALLBACK;
    use crate::core::seed;

    #[derive(Default)]
    struct MemoryClipboard {
        contents: Option<String>,
    }

    impl Clipboard for MemoryClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    fn dashboard() -> Dashboard {
        Dashboard::new(RecordStore::new(seed::mock_specialists()))
    }

    #[test]
    fn test_view_details_selects_copy_and_starts_request() {
        let mut dash = dashboard();
        let request = dash.view_details("2").unwrap();

        assert_eq!(request.ticket.subject, "2");
        assert_eq!(request.record.name, "Ahmed Mansour");
        assert_eq!(dash.selected().unwrap().id, "2");
        assert!(dash.follow_up().is_requesting());
    }

    #[test]
    fn test_view_details_unknown_id_keeps_selection() {
        let mut dash = dashboard();
        dash.view_details("1").unwrap();

        assert!(dash.view_details("99").is_err());
        assert_eq!(dash.selected().unwrap().id, "1");
    }

    #[test]
    fn test_stale_follow_up_is_not_applied_to_new_selection() {
        let mut dash = dashboard();
        let for_a = dash.view_details("1").unwrap();
        let for_b = dash.view_details("2").unwrap();

        assert!(!dash.apply_follow_up(&for_a.ticket, Suggestion::generated("for Sarah")));
        assert!(dash.follow_up().is_requesting());
        assert_eq!(dash.follow_up().text(), None);

        assert!(dash.apply_follow_up(&for_b.ticket, Suggestion::generated("for Ahmed")));
        assert_eq!(dash.follow_up().text(), Some("for Ahmed"));
    }

    #[test]
    fn test_returning_to_same_record_still_discards_old_response() {
        let mut dash = dashboard();
        let first = dash.view_details("1").unwrap();
        dash.view_details("2").unwrap();
        let again = dash.view_details("1").unwrap();

        assert!(!dash.apply_follow_up(&first.ticket, Suggestion::generated("old")));
        assert!(dash.apply_follow_up(&again.ticket, Suggestion::generated("new")));
        assert_eq!(dash.follow_up().text(), Some("new"));
    }

    #[test]
    fn test_response_after_deselect_is_dropped() {
        let mut dash = dashboard();
        let request = dash.view_details("3").unwrap();
        dash.deselect();

        assert!(!dash.apply_follow_up(&request.ticket, Suggestion::generated("late")));
        assert!(dash.selected().is_none());
        assert_eq!(dash.follow_up().text(), None);
    }

    #[test]
    fn test_regenerate_discards_current_draft() {
        let mut dash = dashboard();
        let request = dash.view_details("1").unwrap();
        dash.apply_follow_up(&request.ticket, Suggestion::generated("draft one"));

        let again = dash.regenerate_follow_up().unwrap();

        assert_eq!(again.ticket.subject, "1");
        assert_eq!(dash.follow_up().text(), None);
        assert!(!dash.apply_follow_up(&request.ticket, Suggestion::generated("draft one")));
    }

    #[test]
    fn test_regenerate_requires_selection() {
        let mut dash = dashboard();
        assert!(matches!(
            dash.regenerate_follow_up(),
            Err(TrackerError::NoSelection)
        ));
    }

    #[test]
    fn test_change_status_updates_selection_copy() {
        let mut dash = dashboard();
        dash.view_details("1").unwrap();

        dash.change_status("1", SpecialistStatus::Contacted).unwrap();
        assert_eq!(dash.selected().unwrap().status, SpecialistStatus::Contacted);

        dash.change_status("3", SpecialistStatus::Rejected).unwrap();
        assert_eq!(dash.selected().unwrap().id, "1");
        assert_eq!(
            dash.store().get("3").unwrap().status,
            SpecialistStatus::Rejected
        );
    }

    #[test]
    fn test_add_note_updates_store_and_selection() {
        let mut dash = dashboard();
        dash.view_details("2").unwrap();

        dash.add_note("  Called twice ").unwrap();

        let stored = &dash.store().get("2").unwrap().notes;
        let selected = &dash.selected().unwrap().notes;
        assert_eq!(stored, selected);
        assert_eq!(stored.last().unwrap(), "Called twice");
        assert_eq!(stored.len(), 2);
    }

    #[test]
    fn test_add_note_blank_or_unselected() {
        let mut dash = dashboard();
        assert!(matches!(dash.add_note("hi"), Err(TrackerError::NoSelection)));

        dash.view_details("2").unwrap();
        assert!(dash.add_note("   ").is_err());
        assert_eq!(dash.selected().unwrap().notes.len(), 1);
        assert_eq!(dash.store().get("2").unwrap().notes.len(), 1);
    }

    #[test]
    fn test_filter_and_stats() {
        let mut dash = dashboard();
        dash.change_filter(StatusFilter::Only(SpecialistStatus::Pending));
        assert_eq!(dash.visible_records().len(), 1);

        dash.change_status("1", SpecialistStatus::Verified).unwrap();
        assert!(dash.visible_records().is_empty());
        assert_eq!(
            dash.stats(),
            DashboardStats {
                total: 3,
                pending: 0,
                verified: 2
            }
        );
    }

    #[test]
    fn test_copy_only_generated_draft() {
        let mut dash = dashboard();
        let mut clipboard = MemoryClipboard::default();

        assert!(matches!(
            dash.copy_follow_up(&mut clipboard),
            Err(TrackerError::NothingToCopy)
        ));

        let request = dash.view_details("1").unwrap();
        dash.apply_follow_up(&request.ticket, Suggestion::fallback(FOLLOW_UP_ERROR_FALLBACK));
        assert!(dash.copy_follow_up(&mut clipboard).is_err());

        let request = dash.regenerate_follow_up().unwrap();
        dash.apply_follow_up(&request.ticket, Suggestion::generated("Hello Sarah"));
        dash.copy_follow_up(&mut clipboard).unwrap();
        assert_eq!(clipboard.contents.as_deref(), Some("Hello Sarah"));
    }

    #[test]
    fn test_insights_slot() {
        let mut dash = dashboard();
        let ticket = dash.begin_insights();
        assert!(dash.insights().is_requesting());

        assert!(dash.apply_insights(&ticket, Suggestion::generated("Registrations are rising.")));
        assert_eq!(dash.insights().text(), Some("Registrations are rising."));
    }
}
