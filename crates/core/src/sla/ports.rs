//! Port interface for SLA configuration access
//!
//! Configuration is consumed as read-only snapshots; the engine never
//! writes it back.

use async_trait::async_trait;
use helpdesk_domain::{Result, SlaConfigSnapshot};

/// Trait for loading the SLA configuration hierarchy.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Current snapshot of the department and subcategory SLA tables plus
    /// the name-to-id lookups.
    async fn sla_snapshot(&self) -> Result<SlaConfigSnapshot>;
}
