//! Ticket record types
//!
//! Canonical shapes for the ticket record and its embedded sub-records
//! (pauses, reassignments, resolution metadata, comments). Field names on
//! the wire are camelCase, matching the stored record format; timestamps
//! are epoch milliseconds.

use serde::{Deserialize, Serialize};

/// Ticket priority. Controls which row of the SLA tables applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Alta,
    #[default]
    Media,
    Baja,
}

crate::impl_status_str_conversions!(Priority {
    Alta => "alta",
    Media => "media",
    Baja => "baja"
});

impl Priority {
    /// Hardcoded fallback SLA target applied when neither the subcategory
    /// nor the department configuration has an entry for this priority.
    pub const fn default_sla_hours(self) -> u32 {
        match self {
            Self::Alta => crate::constants::DEFAULT_SLA_HOURS_ALTA,
            Self::Media => crate::constants::DEFAULT_SLA_HOURS_MEDIA,
            Self::Baja => crate::constants::DEFAULT_SLA_HOURS_BAJA,
        }
    }
}

/// Ticket lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketState {
    #[default]
    Abierto,
    EnProceso,
    Cerrado,
}

crate::impl_status_str_conversions!(TicketState {
    Abierto => "abierto",
    EnProceso => "en_proceso",
    Cerrado => "cerrado"
});

/// A recorded span during which SLA accrual is suspended.
///
/// An interval with `end == None` is open; at most one open interval per
/// ticket is a soft invariant guarded at the service layer, not enforced
/// transactionally by storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PauseInterval {
    pub start: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub by: String,
}

impl PauseInterval {
    /// Whether this interval has not been closed yet.
    pub const fn is_open(&self) -> bool {
        self.end.is_none()
    }
}

/// Append-only audit entry for a reassignment. Immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReassignmentRecord {
    pub at: i64,
    pub by_user: String,
    pub old_assignees: Vec<String>,
    pub new_assignees: Vec<String>,
    pub old_subcategory: String,
    pub new_subcategory: String,
}

/// Resolution metadata stamped when a ticket enters Cerrado and cleared
/// when it is reopened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionInfo {
    pub by_uid: String,
    pub by_email: String,
    pub by_name: String,
    pub at: i64,
}

/// Free-text comment on a ticket. Shares the lifecycle authorization check
/// but is not part of the state machine proper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketComment {
    pub at: i64,
    pub by: String,
    pub text: String,
}

/// Canonical ticket record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    /// Human-readable sequential code, e.g. `SOPORTE-000042`.
    pub code: String,
    pub department_id: String,
    pub type_name: String,
    pub subcategory_name: String,
    #[serde(default)]
    pub priority: Priority,
    pub description: String,
    #[serde(default)]
    pub state: TicketState,
    pub created_at: i64,
    /// SLA reset marker. When present it supersedes `created_at` as the
    /// epoch for all live SLA math.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sla_start_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<ResolutionInfo>,
    /// Ordered, deduplicated user ids.
    #[serde(default)]
    pub assignees: Vec<String>,
    #[serde(default)]
    pub pauses: Vec<PauseInterval>,
    #[serde(default)]
    pub reassignments: Vec<ReassignmentRecord>,
    #[serde(default)]
    pub comments: Vec<TicketComment>,
    pub creator_email: String,
    /// Deprecated flat pause flag from the pre-interval schema. Compat
    /// input only; the engine never writes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_paused: Option<bool>,
    /// Deprecated flat pause start from the pre-interval schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_start: Option<i64>,
}

impl Ticket {
    /// Epoch for live SLA math: the reset marker when present, otherwise
    /// the creation timestamp.
    pub fn sla_epoch(&self) -> i64 {
        self.last_sla_start_at.unwrap_or(self.created_at)
    }

    /// The currently open pause interval, if any.
    pub fn open_pause(&self) -> Option<&PauseInterval> {
        self.pauses.iter().find(|pause| pause.is_open())
    }

    /// Whether a structured pause interval is currently open.
    pub fn has_open_pause(&self) -> bool {
        self.open_pause().is_some()
    }

    /// Whether the given user id is currently assigned to this ticket.
    pub fn is_assignee(&self, uid: &str) -> bool {
        self.assignees.iter().any(|assignee| assignee == uid)
    }

    /// Notification recipients: deduplicated, lower-cased union of the
    /// current assignees and the ticket creator, in encounter order.
    pub fn notification_recipients(&self) -> Vec<String> {
        let mut recipients: Vec<String> = Vec::with_capacity(self.assignees.len() + 1);
        for entry in self.assignees.iter().chain(std::iter::once(&self.creator_email)) {
            let lowered = entry.trim().to_lowercase();
            if !lowered.is_empty() && !recipients.contains(&lowered) {
                recipients.push(lowered);
            }
        }
        recipients
    }
}

/// Input for ticket creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDraft {
    pub department_id: String,
    pub type_name: String,
    pub subcategory_name: String,
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    pub creator_email: String,
    #[serde(default)]
    pub assignees: Vec<String>,
}

impl TicketDraft {
    /// Wire names of required fields that are blank, in declaration order.
    /// Empty when the draft is valid.
    pub fn missing_fields(&self) -> Vec<String> {
        let required = [
            ("departmentId", &self.department_id),
            ("typeName", &self.type_name),
            ("subcategoryName", &self.subcategory_name),
            ("description", &self.description),
        ];
        required
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name.to_string())
            .collect()
    }
}

/// Resolution-metadata change carried in a [`TicketPatch`].
///
/// `Clear` is distinct from "absent" so reopening a ticket can wipe the
/// stamped fields through a partial update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "lowercase")]
pub enum ResolutionPatch {
    Set(ResolutionInfo),
    Clear,
}

/// Partial update for a ticket record. Fields left `None` are untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<TicketState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sla_start_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pauses: Option<Vec<PauseInterval>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<ResolutionPatch>,
}

impl TicketPatch {
    /// Apply this patch to an in-memory ticket. Adapters use this so every
    /// storage backend interprets partial updates identically.
    pub fn apply(&self, ticket: &mut Ticket) {
        if let Some(state) = self.state {
            ticket.state = state;
        }
        if let Some(assignees) = &self.assignees {
            ticket.assignees = assignees.clone();
        }
        if let Some(subcategory) = &self.subcategory_name {
            ticket.subcategory_name = subcategory.clone();
        }
        if let Some(reset) = self.last_sla_start_at {
            ticket.last_sla_start_at = Some(reset);
        }
        if let Some(pauses) = &self.pauses {
            ticket.pauses = pauses.clone();
        }
        match &self.resolution {
            Some(ResolutionPatch::Set(info)) => ticket.resolution = Some(info.clone()),
            Some(ResolutionPatch::Clear) => ticket.resolution = None,
            None => {}
        }
    }
}

/// The authenticated user performing a lifecycle operation.
///
/// Replaces the source system's ambient session: every operation receives
/// the actor explicitly. `assignee_at_load` encodes "reassign mode" - the
/// actor was an assignee when the ticket was loaded into the current
/// editing session, which keeps reassignment valid even after they remove
/// themselves from the assignee set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub uid: String,
    pub email: String,
    pub display_name: String,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub assignee_at_load: bool,
}

impl Actor {
    /// Build a regular (non-admin) actor.
    pub fn agent(
        uid: impl Into<String>,
        email: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            uid: uid.into(),
            email: email.into(),
            display_name: display_name.into(),
            admin: false,
            assignee_at_load: false,
        }
    }

    /// Build an admin actor.
    pub fn admin(
        uid: impl Into<String>,
        email: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self { admin: true, ..Self::agent(uid, email, display_name) }
    }

    /// Mark the actor as having been an assignee when the ticket was
    /// loaded into the current editing session.
    pub fn with_assignee_at_load(mut self) -> Self {
        self.assignee_at_load = true;
        self
    }
}
