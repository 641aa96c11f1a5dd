//! SLA engine: business-hours arithmetic, target resolution, tracking

pub mod business_hours;
pub mod ports;
pub mod resolver;
pub mod service;
pub mod tracker;

pub use service::SlaService;
