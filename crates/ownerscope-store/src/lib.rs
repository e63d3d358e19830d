//! Ownerscope Report Store
//!
//! Persists finished company records as human-readable JSON reports, one
//! file per processed input, grouped under a directory named by the current
//! calendar date.

#![warn(missing_docs)]

pub mod report;

use thiserror::Error;

pub use report::{derive_filename, save_record, DEFAULT_RESULTS_ROOT};

/// Errors that can occur while persisting a report
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem error while creating directories or writing the report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
