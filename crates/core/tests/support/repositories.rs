//! Mock port implementations for testing
//!
//! Provides in-memory mocks for the lifecycle and SLA ports, enabling
//! deterministic tests without infrastructure dependencies.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use helpdesk_core::{ConfigSource, NotificationSender, TicketRepository};
use helpdesk_domain::{
    HelpdeskError, PauseInterval, ReassignmentRecord, Result as DomainResult, SlaConfigSnapshot,
    Ticket, TicketComment, TicketPatch,
};
use parking_lot::Mutex;

/// In-memory mock for `TicketRepository`.
///
/// Stores tickets and counters under a mutex and applies partial updates
/// through `TicketPatch::apply`, the same interpretation every real
/// adapter uses. `fail_updates` simulates a denied write so tests can
/// assert that persistence failures propagate unchanged.
#[derive(Default)]
pub struct MockTicketRepository {
    tickets: Mutex<HashMap<String, Ticket>>,
    counters: Mutex<HashMap<String, i64>>,
    fail_updates: AtomicBool,
}

impl MockTicketRepository {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the mock with a ticket.
    pub fn with_ticket(self, ticket: Ticket) -> Self {
        self.tickets.lock().insert(ticket.id.clone(), ticket);
        self
    }

    /// Make every subsequent write fail with a persistence error.
    pub fn deny_writes(&self) {
        self.fail_updates.store(true, Ordering::SeqCst);
    }

    /// Snapshot of a stored ticket.
    pub fn stored(&self, ticket_id: &str) -> Option<Ticket> {
        self.tickets.lock().get(ticket_id).cloned()
    }

    /// Current value of a counter, 0 when never incremented.
    pub fn counter(&self, counter_path: &str) -> i64 {
        self.counters.lock().get(counter_path).copied().unwrap_or(0)
    }

    fn check_writable(&self) -> DomainResult<()> {
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(HelpdeskError::Persistence("write denied".into()));
        }
        Ok(())
    }

    fn with_ticket_mut<T>(
        &self,
        ticket_id: &str,
        mutate: impl FnOnce(&mut Ticket) -> T,
    ) -> DomainResult<T> {
        let mut tickets = self.tickets.lock();
        let ticket = tickets
            .get_mut(ticket_id)
            .ok_or_else(|| HelpdeskError::NotFound(format!("ticket {ticket_id}")))?;
        Ok(mutate(ticket))
    }
}

#[async_trait]
impl TicketRepository for MockTicketRepository {
    async fn get(&self, ticket_id: &str) -> DomainResult<Option<Ticket>> {
        Ok(self.tickets.lock().get(ticket_id).cloned())
    }

    async fn insert(&self, ticket: &Ticket) -> DomainResult<()> {
        self.check_writable()?;
        self.tickets.lock().insert(ticket.id.clone(), ticket.clone());
        Ok(())
    }

    async fn update(&self, ticket_id: &str, patch: TicketPatch) -> DomainResult<()> {
        self.check_writable()?;
        self.with_ticket_mut(ticket_id, |ticket| patch.apply(ticket))
    }

    async fn append_pause(&self, ticket_id: &str, pause: &PauseInterval) -> DomainResult<String> {
        self.check_writable()?;
        self.with_ticket_mut(ticket_id, |ticket| {
            ticket.pauses.push(pause.clone());
            format!("pause-{}", ticket.pauses.len())
        })
    }

    async fn append_reassignment(
        &self,
        ticket_id: &str,
        record: &ReassignmentRecord,
    ) -> DomainResult<String> {
        self.check_writable()?;
        self.with_ticket_mut(ticket_id, |ticket| {
            ticket.reassignments.push(record.clone());
            format!("reassignment-{}", ticket.reassignments.len())
        })
    }

    async fn append_comment(
        &self,
        ticket_id: &str,
        comment: &TicketComment,
    ) -> DomainResult<String> {
        self.check_writable()?;
        self.with_ticket_mut(ticket_id, |ticket| {
            ticket.comments.push(comment.clone());
            format!("comment-{}", ticket.comments.len())
        })
    }

    async fn atomic_increment(&self, counter_path: &str) -> DomainResult<i64> {
        self.check_writable()?;
        let mut counters = self.counters.lock();
        let value = counters.entry(counter_path.to_string()).or_insert(0);
        *value += 1;
        Ok(*value)
    }
}

/// Notification sender that records every dispatch.
#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<(String, Vec<String>)>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All `(event_summary, recipients)` pairs dispatched so far.
    pub fn events(&self) -> Vec<(String, Vec<String>)> {
        self.events.lock().clone()
    }
}

#[async_trait]
impl NotificationSender for RecordingNotifier {
    async fn send(
        &self,
        _ticket: &Ticket,
        event_summary: &str,
        recipients: &[String],
    ) -> DomainResult<()> {
        self.events.lock().push((event_summary.to_string(), recipients.to_vec()));
        Ok(())
    }
}

/// Notification sender that always fails, for proving dispatch failures
/// never escalate past the triggering mutation.
#[derive(Default)]
pub struct FailingNotifier;

#[async_trait]
impl NotificationSender for FailingNotifier {
    async fn send(
        &self,
        _ticket: &Ticket,
        _event_summary: &str,
        _recipients: &[String],
    ) -> DomainResult<()> {
        Err(HelpdeskError::Notification("smtp unavailable".into()))
    }
}

/// Fixed-snapshot `ConfigSource`.
pub struct StaticConfig {
    snapshot: SlaConfigSnapshot,
}

impl StaticConfig {
    /// Wrap a fixed snapshot.
    pub fn new(snapshot: SlaConfigSnapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl ConfigSource for StaticConfig {
    async fn sla_snapshot(&self) -> DomainResult<SlaConfigSnapshot> {
        Ok(self.snapshot.clone())
    }
}
