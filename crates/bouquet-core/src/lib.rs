//! Bouquet Core - Fundamental types
//!
//! This crate defines the values the temporal engine is configured with:
//! - Epoch (the fixed start date)
//! - Flower catalog and milestone set
//! - Season and time-of-day classifications
//! - Error types

pub mod config;
pub mod epoch;
pub mod error;
pub mod flower;
pub mod milestone;
pub mod season;

pub use config::*;
pub use epoch::*;
pub use error::*;
pub use flower::*;
pub use milestone::*;
pub use season::*;
