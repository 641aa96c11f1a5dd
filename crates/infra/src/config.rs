//! Configuration adapter
//!
//! The core consumes SLA configuration as read-only snapshots through the
//! `ConfigSource` port. This adapter serves a fixed snapshot, which covers
//! tests and deployments where configuration is loaded once at startup.

use async_trait::async_trait;
use helpdesk_core::ConfigSource;
use helpdesk_domain::{Result, SlaConfigSnapshot};

/// `ConfigSource` serving a snapshot fixed at construction time.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigSource {
    snapshot: SlaConfigSnapshot,
}

impl StaticConfigSource {
    /// Wrap a snapshot.
    pub fn new(snapshot: SlaConfigSnapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl ConfigSource for StaticConfigSource {
    async fn sla_snapshot(&self) -> Result<SlaConfigSnapshot> {
        Ok(self.snapshot.clone())
    }
}
