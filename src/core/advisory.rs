use crate::core::{DailyStatsPoint, SpecialistRecord, Suggestion, TextGenerator};
use crate::utils::error::TrackerError;

pub const FOLLOW_UP_EMPTY_FALLBACK: &str = "Failed to generate suggestion.";
pub const FOLLOW_UP_ERROR_FALLBACK: &str =
    "Error generating AI suggestion. Please check API configuration.";
pub const INSIGHTS_EMPTY_FALLBACK: &str = "No insights available.";
pub const INSIGHTS_ERROR_FALLBACK: &str = "Insights unavailable.";

/// Subject used for the insights slot, which is not tied to a record.
pub const INSIGHTS_SUBJECT: &str = "daily-stats";

pub fn follow_up_prompt(record: &SpecialistRecord) -> String {
    format!(
        "You manage outreach for a psychology platform and are following up with a specialist \
who registered recently.\n\n\
Specialist name: {name}\n\
Specialization: {specialization}\n\
Experience: {years} years\n\
Bio: {bio}\n\
Current status: {status}\n\n\
Write a warm, professional, personalized follow-up message of roughly 100 words that:\n\
1. Acknowledges their specialization and experience.\n\
2. Asks whether they need help completing their profile or have any questions.\n\
3. Stays encouraging and respectful.\n\
4. Is written in both English and Arabic if possible, otherwise in English.\n",
        name = record.name,
        specialization = record.specialization,
        years = record.experience_years,
        bio = record.bio,
        status = record.status,
    )
}

pub fn insights_prompt(stats: &[DailyStatsPoint]) -> String {
    let serialized = serde_json::to_string(stats).unwrap_or_else(|_| "[]".to_string());
    format!(
        "Analyze this daily registration data: {}.\n\
Give a two-sentence summary of the trend and one actionable tip for the team today.",
        serialized
    )
}

/// Wraps a [`TextGenerator`] and turns every failure into fixed fallback text.
///
/// Each call is a single attempt. Nothing here returns an error to the caller.
pub struct AdvisoryClient<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> AdvisoryClient<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub async fn follow_up_draft(&self, record: &SpecialistRecord) -> Suggestion {
        tracing::debug!(
            "Requesting follow-up draft for specialist {} with model {}",
            record.id,
            self.generator.model()
        );
        let prompt = follow_up_prompt(record);
        absorb(
            self.generator.generate(&prompt).await,
            FOLLOW_UP_EMPTY_FALLBACK,
            FOLLOW_UP_ERROR_FALLBACK,
            "follow-up draft",
        )
    }

    pub async fn daily_insights(&self, stats: &[DailyStatsPoint]) -> Suggestion {
        tracing::debug!("Requesting daily insights over {} data points", stats.len());
        let prompt = insights_prompt(stats);
        absorb(
            self.generator.generate(&prompt).await,
            INSIGHTS_EMPTY_FALLBACK,
            INSIGHTS_ERROR_FALLBACK,
            "daily insights",
        )
    }
}

fn absorb(
    result: crate::utils::error::Result<String>,
    empty_fallback: &str,
    error_fallback: &str,
    what: &str,
) -> Suggestion {
    match result {
        Ok(text) if !text.trim().is_empty() => Suggestion::generated(text),
        Ok(_) | Err(TrackerError::EmptyCompletion) => {
            tracing::warn!("⚠️ Empty completion for {}, using fallback", what);
            Suggestion::fallback(empty_fallback)
        }
        Err(e) => {
            tracing::error!("❌ {} request failed: {}", what, e);
            tracing::debug!("💡 {}", e.recovery_suggestion());
            Suggestion::fallback(error_fallback)
        }
    }
}

/// Identity of one in-flight request: what it was issued for and which attempt it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    pub subject: String,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SlotState {
    #[default]
    Idle,
    Requesting(RequestTicket),
    Fulfilled {
        ticket: RequestTicket,
        text: String,
    },
    Fallback {
        ticket: RequestTicket,
        text: String,
    },
}

/// One display slot for advisory text.
///
/// `Idle -> Requesting -> Fulfilled | Fallback`; `begin` drops any previous
/// result immediately, and `resolve` only accepts the ticket it is waiting on.
#[derive(Debug, Clone, Default)]
pub struct AdvisorySlot {
    state: SlotState,
    generation: u64,
}

impl AdvisorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SlotState {
        &self.state
    }

    pub fn begin(&mut self, subject: &str) -> RequestTicket {
        self.generation += 1;
        let ticket = RequestTicket {
            subject: subject.to_string(),
            generation: self.generation,
        };
        self.state = SlotState::Requesting(ticket.clone());
        ticket
    }

    pub fn resolve(&mut self, ticket: &RequestTicket, suggestion: Suggestion) -> bool {
        match &self.state {
            SlotState::Requesting(waiting) if waiting == ticket => {
                self.state = if suggestion.is_generated() {
                    SlotState::Fulfilled {
                        ticket: ticket.clone(),
                        text: suggestion.text,
                    }
                } else {
                    SlotState::Fallback {
                        ticket: ticket.clone(),
                        text: suggestion.text,
                    }
                };
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.state = SlotState::Idle;
    }

    pub fn is_requesting(&self) -> bool {
        matches!(self.state, SlotState::Requesting(_))
    }

    pub fn pending_ticket(&self) -> Option<&RequestTicket> {
        match &self.state {
            SlotState::Requesting(ticket) => Some(ticket),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.state {
            SlotState::Fulfilled { text, .. } | SlotState::Fallback { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Text of a successfully generated result; fallback text is excluded.
    pub fn generated_text(&self) -> Option<&str> {
        match &self.state {
            SlotState::Fulfilled { text, .. } => Some(text),
            _ => None,
        }
    }
}
