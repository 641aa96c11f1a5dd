//! SLA service - resolves targets and computes live figures

use std::sync::Arc;

use helpdesk_domain::{Result, SlaOutlook, Ticket};

use super::ports::ConfigSource;
use super::resolver::resolve_sla_hours;
use super::tracker::{compute_remaining, compute_resolution_hours};

/// Facade combining configuration access with the pure SLA math.
///
/// Callers that already hold a snapshot can use the free functions in
/// [`super::resolver`] and [`super::tracker`] directly; this service is for
/// callers that only hold the configuration port.
pub struct SlaService {
    config: Arc<dyn ConfigSource>,
}

impl SlaService {
    /// Create a new SLA service.
    pub fn new(config: Arc<dyn ConfigSource>) -> Self {
        Self { config }
    }

    /// Resolved SLA target hours for the ticket.
    pub async fn target_hours(&self, ticket: &Ticket) -> Result<u32> {
        let snapshot = self.config.sla_snapshot().await?;
        Ok(resolve_sla_hours(ticket, &snapshot))
    }

    /// Live remaining/overdue figures, or `None` for a closed ticket.
    ///
    /// `now_ms` is supplied by the caller; the service never reads the
    /// wall clock.
    pub async fn outlook(&self, ticket: &Ticket, now_ms: i64) -> Result<Option<SlaOutlook>> {
        let hours = self.target_hours(ticket).await?;
        Ok(compute_remaining(ticket, hours, now_ms))
    }

    /// Historical resolution duration for a closed ticket.
    pub fn resolution_hours(&self, ticket: &Ticket) -> Option<f64> {
        compute_resolution_hours(ticket)
    }
}
