//! Error types for bouquet construction

use thiserror::Error;

/// Core bouquet errors
///
/// Only raised while building configuration. Engine queries are total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BouquetError {
    #[error("Invalid epoch date: {year:04}-{month:02}-{day:02}")]
    InvalidEpoch { year: i32, month: u32, day: u32 },

    #[error("Flower catalog must contain at least one flower")]
    EmptyCatalog,

    #[error("Invalid flower at position {index}: {reason}")]
    InvalidFlower { index: usize, reason: &'static str },
}

/// Result type for bouquet operations
pub type BouquetResult<T> = Result<T, BouquetError>;
