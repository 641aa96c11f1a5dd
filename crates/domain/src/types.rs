//! Domain types and models

pub mod sla;
pub mod ticket;

pub use sla::{BusinessWindow, SlaConfigSnapshot, SlaNode, SlaOutlook};
pub use ticket::{
    Actor, PauseInterval, Priority, ReassignmentRecord, ResolutionInfo, ResolutionPatch, Ticket,
    TicketComment, TicketDraft, TicketPatch, TicketState,
};
