//! Error types used throughout the helpdesk engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for helpdesk operations
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum HelpdeskError {
    /// A create/update request is missing required fields. No partial write
    /// occurs; the full list of blank fields is reported in one pass.
    #[error("Validation failed, missing fields: {missing_fields:?}")]
    Validation { missing_fields: Vec<String> },

    /// The actor lacks the role or assignment required for the requested
    /// mutation. The stored record is left untouched.
    #[error("Permission denied: {actor} may not perform {operation}")]
    PermissionDenied { operation: String, actor: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Propagated unchanged from the persistence collaborator. The engine
    /// neither retries nor swallows these.
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Notification dispatch failure. Always caught at the call site and
    /// logged; never escalated past a lifecycle operation.
    #[error("Notification error: {0}")]
    Notification(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl HelpdeskError {
    /// Build a `PermissionDenied` error for the given operation and actor.
    pub fn permission_denied(operation: impl Into<String>, actor: impl Into<String>) -> Self {
        Self::PermissionDenied { operation: operation.into(), actor: actor.into() }
    }
}

/// Result type alias for helpdesk operations
pub type Result<T> = std::result::Result<T, HelpdeskError>;
