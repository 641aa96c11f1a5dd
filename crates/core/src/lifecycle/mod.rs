//! Ticket lifecycle: guarded transitions, pause/resume, reassignment

pub mod ports;
pub mod service;

pub use service::LifecycleService;
