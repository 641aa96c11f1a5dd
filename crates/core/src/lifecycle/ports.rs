//! Port interfaces for the ticket lifecycle
//!
//! These traits define the boundaries between the lifecycle state machine
//! and infrastructure implementations. The engine is agnostic to the
//! storage wire format; each operation is an independent read-modify-write
//! against these ports with no client-side locking.

use async_trait::async_trait;
use helpdesk_domain::{
    PauseInterval, ReassignmentRecord, Result, Ticket, TicketComment, TicketPatch,
};

/// Trait for ticket persistence.
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Fetch a ticket by id, or `None` when it does not exist.
    async fn get(&self, ticket_id: &str) -> Result<Option<Ticket>>;

    /// Store a freshly created ticket.
    async fn insert(&self, ticket: &Ticket) -> Result<()>;

    /// Apply a partial update to a stored ticket.
    async fn update(&self, ticket_id: &str, patch: TicketPatch) -> Result<()>;

    /// Append a pause interval; returns the generated record key.
    async fn append_pause(&self, ticket_id: &str, pause: &PauseInterval) -> Result<String>;

    /// Append an immutable reassignment audit entry; returns the generated
    /// record key.
    async fn append_reassignment(
        &self,
        ticket_id: &str,
        record: &ReassignmentRecord,
    ) -> Result<String>;

    /// Append a comment; returns the generated record key.
    async fn append_comment(&self, ticket_id: &str, comment: &TicketComment) -> Result<String>;

    /// Atomically increment the counter at `counter_path` and return the
    /// new value.
    ///
    /// This is the one operation that must be a transactional
    /// compare-and-swap: concurrent ticket creation is expected and
    /// generated codes must not collide.
    async fn atomic_increment(&self, counter_path: &str) -> Result<i64>;
}

/// Trait for dispatching user-facing notifications.
///
/// Dispatch is fire-and-forget from the lifecycle's point of view: a
/// failure is logged and never rolls back or blocks the triggering
/// mutation.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Send a short event summary about `ticket` to `recipients`.
    async fn send(&self, ticket: &Ticket, event_summary: &str, recipients: &[String])
        -> Result<()>;
}

/// Trait supplying "now" to lifecycle operations.
///
/// Keeps every timestamp the engine writes injectable for tests; the SLA
/// math itself always receives `now` as an explicit argument.
pub trait Clock: Send + Sync {
    /// Current time as epoch milliseconds.
    fn now_ms(&self) -> i64;
}

/// Wall-clock [`Clock`] used outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}
