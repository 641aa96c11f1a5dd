//! Legacy-record normalization
//!
//! Historical ticket records come in several shapes: assignees stored as
//! raw id strings, email strings, or partial objects; pauses stored either
//! as a structured interval list or as flat `isPaused`/`pauseStart`
//! fields. This module resolves all of them once, at the persistence
//! boundary, into the canonical [`Ticket`] the core operates on. The core
//! never branches on representation.

use helpdesk_domain::{
    PauseInterval, Priority, ReassignmentRecord, ResolutionInfo, Ticket, TicketComment,
    TicketState,
};
use serde::{Deserialize, Serialize};

/// One historical assignee entry.
///
/// Oldest records store a bare id or email string; later ones store a
/// partial user object with some subset of `uid`, `id`, and `email`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAssignee {
    Plain(String),
    Object {
        #[serde(default)]
        uid: Option<String>,
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        email: Option<String>,
    },
}

impl RawAssignee {
    /// Canonical user id for this entry, `None` when the record carries
    /// nothing usable.
    fn canonical_id(&self) -> Option<String> {
        let id = match self {
            Self::Plain(value) => value.trim(),
            Self::Object { uid, id, email } => uid
                .as_deref()
                .or(id.as_deref())
                .or(email.as_deref())
                .unwrap_or("")
                .trim(),
        };
        if id.is_empty() {
            None
        } else {
            Some(id.to_string())
        }
    }
}

/// Stored ticket record before normalization.
///
/// Mirrors the historical wire format: every field shape that ever shipped
/// deserializes into this struct, and [`normalize_ticket`] resolves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTicketRecord {
    pub id: String,
    #[serde(default)]
    pub code: Option<String>,
    pub department_id: String,
    pub type_name: String,
    pub subcategory_name: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub state: TicketState,
    pub created_at: i64,
    #[serde(default)]
    pub last_sla_start_at: Option<i64>,
    #[serde(default)]
    pub resolution: Option<ResolutionInfo>,
    #[serde(default)]
    pub assignees: Vec<RawAssignee>,
    #[serde(default)]
    pub pauses: Vec<PauseInterval>,
    #[serde(default)]
    pub reassignments: Vec<ReassignmentRecord>,
    #[serde(default)]
    pub comments: Vec<TicketComment>,
    #[serde(default)]
    pub creator_email: String,
    #[serde(default)]
    pub is_paused: Option<bool>,
    #[serde(default)]
    pub pause_start: Option<i64>,
}

/// Resolve a raw stored record into the canonical ticket.
///
/// - Assignees collapse to an ordered, deduplicated list of ids.
/// - The structured pause list is authoritative: when it is non-empty the
///   deprecated flat fields are dropped. A record with only the flat form
///   keeps it for the tracker's implicit-open-pause compatibility.
/// - Records predating the code sequence fall back to the id as code.
pub fn normalize_ticket(raw: RawTicketRecord) -> Ticket {
    let mut assignees: Vec<String> = Vec::with_capacity(raw.assignees.len());
    for entry in &raw.assignees {
        if let Some(id) = entry.canonical_id() {
            if !assignees.contains(&id) {
                assignees.push(id);
            }
        }
    }

    let (is_paused, pause_start) =
        if raw.pauses.is_empty() { (raw.is_paused, raw.pause_start) } else { (None, None) };

    Ticket {
        code: raw.code.unwrap_or_else(|| raw.id.clone()),
        id: raw.id,
        department_id: raw.department_id,
        type_name: raw.type_name,
        subcategory_name: raw.subcategory_name,
        priority: raw.priority,
        description: raw.description,
        state: raw.state,
        created_at: raw.created_at,
        last_sla_start_at: raw.last_sla_start_at,
        resolution: raw.resolution,
        assignees,
        pauses: raw.pauses,
        reassignments: raw.reassignments,
        comments: raw.comments,
        creator_email: raw.creator_email,
        is_paused,
        pause_start,
    }
}
