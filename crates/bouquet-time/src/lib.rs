//! Bouquet Time Engine - day counting and daily scheduling
//!
//! This crate implements the Temporal Engine:
//! - Elapsed whole calendar days since the epoch
//! - Flower assignment by day index
//! - Next-anniversary countdown
//! - Milestone, season and time-of-day classification
//! - Clock abstraction and the drift-correcting midnight schedule

pub mod clock;
pub mod engine;
pub mod schedule;

pub use clock::*;
pub use engine::*;
pub use schedule::*;
