//! Notification adapters
//!
//! The engine treats notification dispatch as fire-and-forget; these
//! adapters cover the two interesting cases: logging the dispatch (the
//! default when no mail transport is wired up) and failing it (to prove
//! in tests that failures never escalate).

use async_trait::async_trait;
use helpdesk_core::NotificationSender;
use helpdesk_domain::{HelpdeskError, Result, Ticket};
use tracing::info;

/// Notification sender that logs each dispatch through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl NotificationSender for LogNotifier {
    async fn send(
        &self,
        ticket: &Ticket,
        event_summary: &str,
        recipients: &[String],
    ) -> Result<()> {
        info!(
            ticket_id = %ticket.id,
            code = %ticket.code,
            event = %event_summary,
            recipients = recipients.len(),
            "Notification dispatched"
        );
        Ok(())
    }
}

/// Notification sender that always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingNotifier;

#[async_trait]
impl NotificationSender for FailingNotifier {
    async fn send(
        &self,
        _ticket: &Ticket,
        _event_summary: &str,
        _recipients: &[String],
    ) -> Result<()> {
        Err(HelpdeskError::Notification("transport unavailable".into()))
    }
}
