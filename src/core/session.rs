use crate::core::advisory::{AdvisoryClient, RequestTicket};
use crate::core::dashboard::{Dashboard, FollowUpRequest};
use crate::core::{DailyStatsPoint, Suggestion, TextGenerator};
use crate::utils::error::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum AdvisoryEvent {
    FollowUp {
        ticket: RequestTicket,
        suggestion: Suggestion,
    },
    Insights {
        ticket: RequestTicket,
        suggestion: Suggestion,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryKind {
    FollowUp,
    Insights,
}

/// Result of handling one advisory response on the session task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOutcome {
    pub kind: AdvisoryKind,
    pub subject: String,
    pub applied: bool,
}

/// Drives a [`Dashboard`] against an [`AdvisoryClient`].
///
/// Requests run on spawned tasks and report back over a channel; only the
/// session touches dashboard state, so results are applied one at a time on
/// the owning task. There is no cancellation: late results are dropped when
/// they arrive.
pub struct Session<G: TextGenerator + 'static> {
    dashboard: Dashboard,
    client: Arc<AdvisoryClient<G>>,
    daily_stats: Arc<Vec<DailyStatsPoint>>,
    events_tx: mpsc::UnboundedSender<AdvisoryEvent>,
    events_rx: mpsc::UnboundedReceiver<AdvisoryEvent>,
    insights_requested: bool,
}

impl<G: TextGenerator + 'static> Session<G> {
    pub fn new(
        dashboard: Dashboard,
        daily_stats: Vec<DailyStatsPoint>,
        client: AdvisoryClient<G>,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            dashboard,
            client: Arc::new(client),
            daily_stats: Arc::new(daily_stats),
            events_tx,
            events_rx,
            insights_requested: false,
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn dashboard_mut(&mut self) -> &mut Dashboard {
        &mut self.dashboard
    }

    pub fn daily_stats(&self) -> &[DailyStatsPoint] {
        &self.daily_stats
    }

    /// Issues the daily insights request. One-shot: later calls return `false`
    /// and do not refetch, even if the data changes.
    pub fn start(&mut self) -> bool {
        if self.insights_requested {
            tracing::debug!("Daily insights already requested for this session");
            return false;
        }
        self.insights_requested = true;

        let ticket = self.dashboard.begin_insights();
        let client = Arc::clone(&self.client);
        let stats = Arc::clone(&self.daily_stats);
        let tx = self.events_tx.clone();

        tracing::info!("📈 Requesting daily insights");
        tokio::spawn(async move {
            let suggestion = client.daily_insights(&stats).await;
            let _ = tx.send(AdvisoryEvent::Insights { ticket, suggestion });
        });
        true
    }

    pub fn view_details(&mut self, id: &str) -> Result<RequestTicket> {
        let request = self.dashboard.view_details(id)?;
        Ok(self.dispatch_follow_up(request))
    }

    pub fn regenerate_follow_up(&mut self) -> Result<RequestTicket> {
        let request = self.dashboard.regenerate_follow_up()?;
        Ok(self.dispatch_follow_up(request))
    }

    fn dispatch_follow_up(&self, request: FollowUpRequest) -> RequestTicket {
        let FollowUpRequest { ticket, record } = request;
        let client = Arc::clone(&self.client);
        let tx = self.events_tx.clone();
        let sent = ticket.clone();

        tokio::spawn(async move {
            let suggestion = client.follow_up_draft(&record).await;
            let _ = tx.send(AdvisoryEvent::FollowUp {
                ticket: sent,
                suggestion,
            });
        });
        ticket
    }

    /// Applies an event to the dashboard, dropping it if it is stale.
    pub fn handle_event(&mut self, event: AdvisoryEvent) -> EventOutcome {
        match event {
            AdvisoryEvent::FollowUp { ticket, suggestion } => {
                let applied = self.dashboard.apply_follow_up(&ticket, suggestion);
                EventOutcome {
                    kind: AdvisoryKind::FollowUp,
                    subject: ticket.subject,
                    applied,
                }
            }
            AdvisoryEvent::Insights { ticket, suggestion } => {
                let applied = self.dashboard.apply_insights(&ticket, suggestion);
                EventOutcome {
                    kind: AdvisoryKind::Insights,
                    subject: ticket.subject,
                    applied,
                }
            }
        }
    }

    /// Waits for the next advisory response and applies it.
    ///
    /// The session holds a sender itself, so this only returns `None` if the
    /// channel is closed, which does not happen while the session is alive.
    pub async fn next_event(&mut self) -> Option<EventOutcome> {
        let event = self.events_rx.recv().await?;
        Some(self.handle_event(event))
    }
}
