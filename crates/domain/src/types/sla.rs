//! SLA configuration and reporting types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ticket::Priority;

/// A daily business-hours window, Monday through Friday.
///
/// Minutes and hours are wall-clock local time. The engine carries two
/// fixed windows (live countdown and historical reporting); callers may
/// override per call but the two are never unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessWindow {
    pub start_hour: u32,
    pub start_minute: u32,
    pub end_hour: u32,
    pub end_minute: u32,
}

impl BusinessWindow {
    /// Construct a window from wall-clock boundaries.
    pub const fn new(start_hour: u32, start_minute: u32, end_hour: u32, end_minute: u32) -> Self {
        Self { start_hour, start_minute, end_hour, end_minute }
    }
}

/// SLA target entry for one subcategory.
///
/// The stored configuration has two historical shapes: a bare number of
/// hours (legacy, applies to Media priority only) and a priority-keyed
/// map. Both deserialize into this union so call sites never inspect raw
/// shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlaNode {
    /// Legacy scalar node; only consulted for `Priority::Media`.
    Hours(u32),
    /// Priority-keyed node.
    ByPriority(HashMap<Priority, u32>),
}

impl SlaNode {
    /// Target hours for the given priority, if this node carries one.
    ///
    /// A scalar node answers only for Media; a map node answers only for
    /// priorities it lists. `None` means fall through to the next tier.
    pub fn hours_for(&self, priority: Priority) -> Option<u32> {
        match self {
            Self::Hours(hours) if priority == Priority::Media => Some(*hours),
            Self::Hours(_) => None,
            Self::ByPriority(map) => map.get(&priority).copied(),
        }
    }
}

/// Read-only snapshot of the SLA configuration hierarchy.
///
/// Bundles the department-level table, the subcategory-level table, and
/// the name-to-id lookups the resolver needs to walk them. Adapters build
/// one snapshot per read; the core never mutates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaConfigSnapshot {
    /// departmentId -> priority -> hours
    #[serde(default)]
    pub department_hours: HashMap<String, HashMap<Priority, u32>>,
    /// departmentId -> typeId -> subcategoryId -> node
    #[serde(default)]
    pub subcategory_hours: HashMap<String, HashMap<String, HashMap<String, SlaNode>>>,
    /// departmentId -> typeName -> typeId
    #[serde(default)]
    pub type_ids: HashMap<String, HashMap<String, String>>,
    /// typeId -> subcategoryName -> subcategoryId
    #[serde(default)]
    pub subcategory_ids: HashMap<String, HashMap<String, String>>,
}

impl SlaConfigSnapshot {
    /// Map a type name to its id within a department's type table.
    pub fn type_id(&self, department_id: &str, type_name: &str) -> Option<&str> {
        self.type_ids.get(department_id)?.get(type_name).map(String::as_str)
    }

    /// Map a subcategory name to its id within a type.
    pub fn subcategory_id(&self, type_id: &str, subcategory_name: &str) -> Option<&str> {
        self.subcategory_ids.get(type_id)?.get(subcategory_name).map(String::as_str)
    }

    /// Subcategory-level SLA node, if configured.
    pub fn subcategory_node(
        &self,
        department_id: &str,
        type_id: &str,
        subcategory_id: &str,
    ) -> Option<&SlaNode> {
        self.subcategory_hours.get(department_id)?.get(type_id)?.get(subcategory_id)
    }

    /// Department-level SLA hours for a priority, if configured.
    pub fn department_hours(&self, department_id: &str, priority: Priority) -> Option<u32> {
        self.department_hours.get(department_id)?.get(&priority).copied()
    }
}

/// Live SLA figures for an open ticket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaOutlook {
    /// Business hours elapsed since the SLA epoch, pauses subtracted.
    pub elapsed_hours: f64,
    /// Target minus elapsed; negative once the target is blown.
    pub remaining_hours: f64,
    pub is_expired: bool,
    /// How far past the target the ticket is; 0 while on time.
    pub overdue_hours: f64,
}
