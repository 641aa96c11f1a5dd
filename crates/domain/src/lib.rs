//! # Helpdesk Domain
//!
//! Business domain types and models for the helpdesk SLA engine.
//!
//! This crate contains:
//! - Domain data types (Ticket, PauseInterval, SlaConfigSnapshot, etc.)
//! - Domain error types and Result definitions
//! - Domain constants (business-hour windows, default SLA targets)
//!
//! ## Architecture
//! - No dependencies on other helpdesk crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
