//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! SLA engine.

use crate::types::sla::BusinessWindow;

/// Milliseconds in one hour, the unit conversion used by all SLA math.
pub const MS_PER_HOUR: i64 = 3_600_000;

/// Business-hour window used for the live SLA countdown (08:00-17:00).
pub const LIVE_SLA_WINDOW: BusinessWindow = BusinessWindow::new(8, 0, 17, 0);

/// Business-hour window used for historical resolution-duration reporting
/// (08:00-17:30).
///
/// The source system uses this wider window only when reporting how long a
/// closed ticket took; the two windows are intentionally kept distinct.
pub const RESOLUTION_WINDOW: BusinessWindow = BusinessWindow::new(8, 0, 17, 30);

// Default SLA targets (hours) applied when neither the subcategory nor the
// department table has an entry for the ticket's priority.
pub const DEFAULT_SLA_HOURS_ALTA: u32 = 24;
pub const DEFAULT_SLA_HOURS_MEDIA: u32 = 72;
pub const DEFAULT_SLA_HOURS_BAJA: u32 = 168;

// Ticket code generation
pub const COUNTER_PATH_PREFIX: &str = "counters";
pub const TICKET_CODE_PAD: usize = 6;
