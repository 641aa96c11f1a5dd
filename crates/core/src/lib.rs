//! # Helpdesk Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Business-hours duration arithmetic and SLA target resolution
//! - Live SLA tracking (remaining/overdue) and historical resolution math
//! - The guarded ticket lifecycle state machine
//! - Port/adapter interfaces (traits) for persistence, notification,
//!   configuration, and the clock
//!
//! ## Architecture Principles
//! - Only depends on `helpdesk-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - SLA computations are pure functions of stored timestamps plus an
//!   explicitly supplied "now"

pub mod lifecycle;
pub mod sla;

// Re-export specific items to avoid ambiguity
pub use lifecycle::ports::{Clock, NotificationSender, SystemClock, TicketRepository};
pub use lifecycle::LifecycleService;
pub use sla::business_hours::working_ms;
pub use sla::ports::ConfigSource;
pub use sla::resolver::resolve_sla_hours;
pub use sla::tracker::{compute_remaining, compute_resolution_hours};
pub use sla::SlaService;
