//! Hierarchical SLA target resolution
//!
//! Resolves the target hours for a ticket by walking the configuration
//! hierarchy: subcategory node, then department table, then the hardcoded
//! defaults. First match wins; a missing entry at any tier is a normal
//! fall-through, never an error.

use helpdesk_domain::{SlaConfigSnapshot, Ticket};
use tracing::debug;

/// SLA target hours for a ticket. Never fails.
///
/// Resolution order:
/// 1. Map `type_name` to a type id within the ticket's department; missing
///    mapping skips straight to the department tier.
/// 2. Map `subcategory_name` to a subcategory id within that type.
/// 3. Consult the subcategory node: a priority map answers for listed
///    priorities, a legacy scalar answers for Media only.
/// 4. Department table entry for the ticket's priority.
/// 5. Hardcoded default per priority (Alta 24, Media 72, Baja 168).
pub fn resolve_sla_hours(ticket: &Ticket, config: &SlaConfigSnapshot) -> u32 {
    if let Some(hours) = subcategory_hours(ticket, config) {
        return hours;
    }
    if let Some(hours) = config.department_hours(&ticket.department_id, ticket.priority) {
        return hours;
    }
    debug!(
        ticket_id = %ticket.id,
        department_id = %ticket.department_id,
        priority = %ticket.priority,
        "No configured SLA target, using default"
    );
    ticket.priority.default_sla_hours()
}

fn subcategory_hours(ticket: &Ticket, config: &SlaConfigSnapshot) -> Option<u32> {
    let type_id = config.type_id(&ticket.department_id, &ticket.type_name)?;
    let subcategory_id = config.subcategory_id(type_id, &ticket.subcategory_name)?;
    let node = config.subcategory_node(&ticket.department_id, type_id, subcategory_id)?;
    node.hours_for(ticket.priority)
}
