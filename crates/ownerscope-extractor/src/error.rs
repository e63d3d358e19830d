//! Error types for the finder pipeline

use thiserror::Error;

/// Errors surfaced by the finder
///
/// Extraction trouble never appears here; unparseable replies degrade into
/// the returned record instead (see
/// [`Extraction`](crate::Extraction)).
#[derive(Error, Debug)]
pub enum FinderError {
    /// The input URL does not use an accepted scheme prefix.
    /// Raised before any remote call is attempted.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The mandatory first remote call or its envelope handling failed
    #[error("Failed to find company owners: {0}")]
    OperationFailed(String),
}
