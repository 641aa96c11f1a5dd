//! Shared test support for core integration tests

// Not every integration binary uses every helper.
#![allow(dead_code)]

pub mod clock;
pub mod repositories;

pub use clock::ManualClock;
pub use repositories::{FailingNotifier, MockTicketRepository, RecordingNotifier, StaticConfig};
