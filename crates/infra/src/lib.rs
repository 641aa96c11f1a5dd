//! # Helpdesk Infra
//!
//! Infrastructure adapters for the helpdesk SLA engine.
//!
//! This crate contains:
//! - In-memory persistence adapter with the atomic ticket-code counter
//! - Tracing-backed notification sender
//! - Static configuration snapshot source
//! - Legacy-record normalization at the persistence boundary
//!
//! The engine core is storage-agnostic; a production deployment swaps
//! these adapters for ones backed by the real datastore without touching
//! `helpdesk-core`.

pub mod compat;
pub mod config;
pub mod memory;
pub mod notify;

pub use compat::{normalize_ticket, RawAssignee, RawTicketRecord};
pub use config::StaticConfigSource;
pub use memory::InMemoryTicketStore;
pub use notify::LogNotifier;
