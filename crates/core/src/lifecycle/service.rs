//! Ticket lifecycle service - the guarded state machine
//!
//! Every mutation is an independent read-modify-write against the
//! persistence port: load, check permissions, write, then fire the
//! notification. Rejected operations leave the stored record untouched;
//! retries of an already-applied operation are no-ops, not errors.

use std::sync::Arc;

use helpdesk_domain::constants::{COUNTER_PATH_PREFIX, TICKET_CODE_PAD};
use helpdesk_domain::{
    Actor, HelpdeskError, PauseInterval, ReassignmentRecord, ResolutionInfo, ResolutionPatch,
    Result, Ticket, TicketComment, TicketDraft, TicketPatch, TicketState,
};
use tracing::{info, warn};
use uuid::Uuid;

use super::ports::{Clock, NotificationSender, SystemClock, TicketRepository};

/// Ticket lifecycle service.
pub struct LifecycleService {
    tickets: Arc<dyn TicketRepository>,
    notifier: Arc<dyn NotificationSender>,
    clock: Arc<dyn Clock>,
}

impl LifecycleService {
    /// Create a new lifecycle service using the wall clock.
    pub fn new(tickets: Arc<dyn TicketRepository>, notifier: Arc<dyn NotificationSender>) -> Self {
        Self { tickets, notifier, clock: Arc::new(SystemClock) }
    }

    /// Replace the clock. Tests inject a manual clock here so every
    /// timestamp the service writes is deterministic.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Create a ticket from a draft.
    ///
    /// The human-readable code comes from the per-department atomic
    /// counter, the one strongly consistent operation in the engine.
    ///
    /// # Errors
    /// `Validation` listing every blank required field; nothing is written
    /// in that case.
    pub async fn create(&self, draft: TicketDraft) -> Result<Ticket> {
        let missing = draft.missing_fields();
        if !missing.is_empty() {
            return Err(HelpdeskError::Validation { missing_fields: missing });
        }

        let counter_path = format!("{}/{}", COUNTER_PATH_PREFIX, draft.department_id);
        let sequence = self.tickets.atomic_increment(&counter_path).await?;
        let code =
            format!("{}-{:0width$}", draft.department_id.to_uppercase(), sequence, width = TICKET_CODE_PAD);

        let ticket = Ticket {
            id: Uuid::new_v4().to_string(),
            code,
            department_id: draft.department_id,
            type_name: draft.type_name,
            subcategory_name: draft.subcategory_name,
            priority: draft.priority,
            description: draft.description,
            state: TicketState::Abierto,
            created_at: self.clock.now_ms(),
            last_sla_start_at: None,
            resolution: None,
            assignees: normalize_assignees(draft.assignees),
            pauses: Vec::new(),
            reassignments: Vec::new(),
            comments: Vec::new(),
            creator_email: draft.creator_email,
            is_paused: None,
            pause_start: None,
        };
        self.tickets.insert(&ticket).await?;
        info!(ticket_id = %ticket.id, code = %ticket.code, "Ticket created");

        self.notify(&ticket, "Ticket creado", &ticket.notification_recipients()).await;
        Ok(ticket)
    }

    /// Transition a ticket to `new_state`.
    ///
    /// Permitted for an admin, a current assignee, or the original
    /// assignee of an active reassign-mode session. Entering Cerrado
    /// stamps the resolution metadata; leaving it clears them. A call that
    /// leaves the state unchanged is a no-op.
    ///
    /// # Errors
    /// `PermissionDenied` with no mutation when the actor lacks access.
    pub async fn set_state(
        &self,
        ticket_id: &str,
        new_state: TicketState,
        actor: &Actor,
    ) -> Result<Ticket> {
        let mut ticket = self.load(ticket_id).await?;
        if !(actor.admin || ticket.is_assignee(&actor.uid) || actor.assignee_at_load) {
            return Err(HelpdeskError::permission_denied("setState", &actor.uid));
        }
        if ticket.state == new_state {
            return Ok(ticket);
        }

        let now = self.clock.now_ms();
        let resolution = if new_state == TicketState::Cerrado {
            Some(ResolutionPatch::Set(ResolutionInfo {
                by_uid: actor.uid.clone(),
                by_email: actor.email.clone(),
                by_name: actor.display_name.clone(),
                at: now,
            }))
        } else if ticket.state == TicketState::Cerrado {
            Some(ResolutionPatch::Clear)
        } else {
            None
        };

        let patch = TicketPatch { state: Some(new_state), resolution, ..TicketPatch::default() };
        self.tickets.update(ticket_id, patch.clone()).await?;
        patch.apply(&mut ticket);
        info!(ticket_id = %ticket.id, state = %new_state, "Ticket state changed");

        let summary = format!("Cambio de estado a {}", state_label(new_state));
        self.notify(&ticket, &summary, &ticket.notification_recipients()).await;
        Ok(ticket)
    }

    /// Open a pause interval, suspending SLA accrual.
    ///
    /// # Errors
    /// `PermissionDenied` unless the actor is an admin or assignee;
    /// `InvalidInput` while another interval is still open.
    pub async fn pause(
        &self,
        ticket_id: &str,
        reason_id: Option<String>,
        comment: Option<String>,
        actor: &Actor,
    ) -> Result<Ticket> {
        let mut ticket = self.load(ticket_id).await?;
        if !(actor.admin || ticket.is_assignee(&actor.uid)) {
            return Err(HelpdeskError::permission_denied("pause", &actor.uid));
        }
        if ticket.has_open_pause() {
            return Err(HelpdeskError::InvalidInput(
                "a pause interval is already open".into(),
            ));
        }

        let pause = PauseInterval {
            start: self.clock.now_ms(),
            end: None,
            reason_id,
            comment,
            by: actor.uid.clone(),
        };
        self.tickets.append_pause(ticket_id, &pause).await?;
        ticket.pauses.push(pause);
        info!(ticket_id = %ticket.id, "Ticket paused");

        self.notify(&ticket, "Ticket pausado", &ticket.notification_recipients()).await;
        Ok(ticket)
    }

    /// Close the open pause interval, resuming SLA accrual.
    ///
    /// # Errors
    /// `PermissionDenied` unless the actor is an admin or assignee;
    /// `InvalidInput` when no interval is open.
    pub async fn resume(&self, ticket_id: &str, actor: &Actor) -> Result<Ticket> {
        let mut ticket = self.load(ticket_id).await?;
        if !(actor.admin || ticket.is_assignee(&actor.uid)) {
            return Err(HelpdeskError::permission_denied("resume", &actor.uid));
        }
        if !ticket.has_open_pause() {
            return Err(HelpdeskError::InvalidInput("no pause interval is open".into()));
        }

        let now = self.clock.now_ms();
        let mut pauses = ticket.pauses.clone();
        for pause in &mut pauses {
            if pause.is_open() {
                pause.end = Some(now);
                break;
            }
        }

        let patch = TicketPatch { pauses: Some(pauses), ..TicketPatch::default() };
        self.tickets.update(ticket_id, patch.clone()).await?;
        patch.apply(&mut ticket);
        info!(ticket_id = %ticket.id, "Ticket resumed");

        self.notify(&ticket, "Ticket reanudado", &ticket.notification_recipients()).await;
        Ok(ticket)
    }

    /// Change the assignee set and/or subcategory.
    ///
    /// An admin may always invoke this; a non-admin only when they were an
    /// assignee at the time the ticket was loaded into the current editing
    /// session. A subcategory change re-bases the SLA clock by setting
    /// `last_sla_start_at` to now - elapsed time accrued under the old
    /// subcategory is deliberately discarded. Only newly added assignees
    /// are notified.
    ///
    /// # Errors
    /// `PermissionDenied` with no mutation when the actor lacks access.
    pub async fn reassign(
        &self,
        ticket_id: &str,
        new_assignees: Vec<String>,
        new_subcategory: String,
        actor: &Actor,
    ) -> Result<Ticket> {
        let mut ticket = self.load(ticket_id).await?;
        if !(actor.admin || actor.assignee_at_load) {
            return Err(HelpdeskError::permission_denied("reassign", &actor.uid));
        }

        let new_assignees = normalize_assignees(new_assignees);
        let assignees_changed = new_assignees != ticket.assignees;
        let subcategory_changed = new_subcategory != ticket.subcategory_name;
        if !assignees_changed && !subcategory_changed {
            return Ok(ticket);
        }

        let now = self.clock.now_ms();
        let record = ReassignmentRecord {
            at: now,
            by_user: actor.uid.clone(),
            old_assignees: ticket.assignees.clone(),
            new_assignees: new_assignees.clone(),
            old_subcategory: ticket.subcategory_name.clone(),
            new_subcategory: new_subcategory.clone(),
        };
        self.tickets.append_reassignment(ticket_id, &record).await?;

        let patch = TicketPatch {
            assignees: Some(new_assignees),
            subcategory_name: Some(new_subcategory),
            last_sla_start_at: subcategory_changed.then_some(now),
            ..TicketPatch::default()
        };
        self.tickets.update(ticket_id, patch.clone()).await?;

        let added = added_assignees(&record.old_assignees, &record.new_assignees);
        patch.apply(&mut ticket);
        ticket.reassignments.push(record);
        info!(
            ticket_id = %ticket.id,
            subcategory_changed,
            sla_reset = subcategory_changed,
            "Ticket reassigned"
        );

        self.notify(&ticket, "Ticket reasignado", &added).await;
        Ok(ticket)
    }

    /// Append a free-text comment.
    ///
    /// Not part of the state machine proper, but shares the lifecycle
    /// authorization check: admin, ticket creator, or any assignee.
    ///
    /// # Errors
    /// `PermissionDenied` with no mutation when the actor lacks access;
    /// `InvalidInput` for blank text.
    pub async fn add_comment(&self, ticket_id: &str, text: &str, actor: &Actor) -> Result<Ticket> {
        let mut ticket = self.load(ticket_id).await?;
        let is_creator = actor.email.eq_ignore_ascii_case(&ticket.creator_email);
        if !(actor.admin || is_creator || ticket.is_assignee(&actor.uid)) {
            return Err(HelpdeskError::permission_denied("addComment", &actor.uid));
        }
        if text.trim().is_empty() {
            return Err(HelpdeskError::InvalidInput("comment text is empty".into()));
        }

        let comment =
            TicketComment { at: self.clock.now_ms(), by: actor.uid.clone(), text: text.into() };
        self.tickets.append_comment(ticket_id, &comment).await?;
        ticket.comments.push(comment);

        self.notify(&ticket, "Nuevo comentario", &ticket.notification_recipients()).await;
        Ok(ticket)
    }

    async fn load(&self, ticket_id: &str) -> Result<Ticket> {
        self.tickets
            .get(ticket_id)
            .await?
            .ok_or_else(|| HelpdeskError::NotFound(format!("ticket {ticket_id}")))
    }

    /// Fire-and-forget notification dispatch. Failures are logged and the
    /// triggering mutation stays successful.
    async fn notify(&self, ticket: &Ticket, event_summary: &str, recipients: &[String]) {
        if recipients.is_empty() {
            return;
        }
        if let Err(err) = self.notifier.send(ticket, event_summary, recipients).await {
            warn!(ticket_id = %ticket.id, error = %err, "Failed to dispatch notification");
        }
    }
}

/// Trim, drop empties, and deduplicate while preserving order.
fn normalize_assignees(assignees: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(assignees.len());
    for assignee in assignees {
        let trimmed = assignee.trim().to_string();
        if !trimmed.is_empty() && !normalized.contains(&trimmed) {
            normalized.push(trimmed);
        }
    }
    normalized
}

/// Recipients for a reassignment: new assignees minus old, lower-cased.
fn added_assignees(old: &[String], new: &[String]) -> Vec<String> {
    new.iter()
        .filter(|assignee| !old.contains(assignee))
        .map(|assignee| assignee.to_lowercase())
        .collect()
}

fn state_label(state: TicketState) -> &'static str {
    match state {
        TicketState::Abierto => "Abierto",
        TicketState::EnProceso => "En Proceso",
        TicketState::Cerrado => "Cerrado",
    }
}
