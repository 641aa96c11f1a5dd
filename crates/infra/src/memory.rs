//! In-memory ticket store
//!
//! Implements the `TicketRepository` port against a mutex-guarded map.
//! Serves as the reference adapter and the default store for tests and
//! single-process deployments. Partial updates go through
//! `TicketPatch::apply` so every backend interprets them identically.
//!
//! `atomic_increment` holds the counter lock across read-modify-write,
//! which is the adapter-level equivalent of the transactional increment
//! the ticket-code sequence requires.

use std::collections::HashMap;

use async_trait::async_trait;
use helpdesk_core::TicketRepository;
use helpdesk_domain::{
    HelpdeskError, PauseInterval, ReassignmentRecord, Result, Ticket, TicketComment, TicketPatch,
};
use parking_lot::Mutex;
use uuid::Uuid;

/// Mutex-guarded in-memory implementation of [`TicketRepository`].
#[derive(Default)]
pub struct InMemoryTicketStore {
    tickets: Mutex<HashMap<String, Ticket>>,
    counters: Mutex<HashMap<String, i64>>,
}

impl InMemoryTicketStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an existing ticket record.
    pub fn with_ticket(self, ticket: Ticket) -> Self {
        self.tickets.lock().insert(ticket.id.clone(), ticket);
        self
    }

    /// Number of stored tickets.
    pub fn len(&self) -> usize {
        self.tickets.lock().len()
    }

    /// Whether the store holds no tickets.
    pub fn is_empty(&self) -> bool {
        self.tickets.lock().is_empty()
    }

    fn mutate<T>(
        &self,
        ticket_id: &str,
        mutate: impl FnOnce(&mut Ticket) -> T,
    ) -> Result<T> {
        let mut tickets = self.tickets.lock();
        let ticket = tickets
            .get_mut(ticket_id)
            .ok_or_else(|| HelpdeskError::Persistence(format!("unknown ticket {ticket_id}")))?;
        Ok(mutate(ticket))
    }
}

#[async_trait]
impl TicketRepository for InMemoryTicketStore {
    async fn get(&self, ticket_id: &str) -> Result<Option<Ticket>> {
        Ok(self.tickets.lock().get(ticket_id).cloned())
    }

    async fn insert(&self, ticket: &Ticket) -> Result<()> {
        let mut tickets = self.tickets.lock();
        if tickets.contains_key(&ticket.id) {
            return Err(HelpdeskError::Persistence(format!(
                "ticket {} already exists",
                ticket.id
            )));
        }
        tickets.insert(ticket.id.clone(), ticket.clone());
        Ok(())
    }

    async fn update(&self, ticket_id: &str, patch: TicketPatch) -> Result<()> {
        self.mutate(ticket_id, |ticket| patch.apply(ticket))
    }

    async fn append_pause(&self, ticket_id: &str, pause: &PauseInterval) -> Result<String> {
        self.mutate(ticket_id, |ticket| {
            ticket.pauses.push(pause.clone());
            Uuid::new_v4().to_string()
        })
    }

    async fn append_reassignment(
        &self,
        ticket_id: &str,
        record: &ReassignmentRecord,
    ) -> Result<String> {
        self.mutate(ticket_id, |ticket| {
            ticket.reassignments.push(record.clone());
            Uuid::new_v4().to_string()
        })
    }

    async fn append_comment(&self, ticket_id: &str, comment: &TicketComment) -> Result<String> {
        self.mutate(ticket_id, |ticket| {
            ticket.comments.push(comment.clone());
            Uuid::new_v4().to_string()
        })
    }

    async fn atomic_increment(&self, counter_path: &str) -> Result<i64> {
        let mut counters = self.counters.lock();
        let value = counters.entry(counter_path.to_string()).or_insert(0);
        *value += 1;
        Ok(*value)
    }
}
