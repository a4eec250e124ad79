use crate::core::metrics;
use crate::core::{SpecialistRecord, SpecialistStatus, StatusFilter};
use crate::utils::error::{Result, TrackerError};

/// Owns the canonical specialist list. Records are never removed.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<SpecialistRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<SpecialistRecord>) -> Self {
        Self { records }
    }

    pub fn list_all(&self) -> &[SpecialistRecord] {
        &self.records
    }

    pub fn list_by_status(&self, filter: StatusFilter) -> Vec<&SpecialistRecord> {
        metrics::filter_records(&self.records, filter)
    }

    pub fn get(&self, id: &str) -> Option<&SpecialistRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut SpecialistRecord> {
        self.records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| TrackerError::RecordNotFound { id: id.to_string() })
    }

    pub fn update_status(&mut self, id: &str, new_status: SpecialistStatus) -> Result<()> {
        let record = self.get_mut(id)?;
        let previous = record.status;
        record.status = new_status;

        tracing::debug!("Specialist {} status {} -> {}", id, previous, new_status);
        Ok(())
    }

    /// Appends the trimmed note. Blank text is rejected before the lookup.
    pub fn append_note(&mut self, id: &str, text: &str) -> Result<()> {
        let note = text.trim();
        if note.is_empty() {
            return Err(TrackerError::ValidationError {
                message: "Note text cannot be empty".to_string(),
            });
        }

        let record = self.get_mut(id)?;
        record.notes.push(note.to_string());

        tracing::debug!("Specialist {} now has {} notes", id, record.notes.len());
        Ok(())
    }
}
