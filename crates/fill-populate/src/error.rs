//! Error types for the batch loader.

use fill_generator::GeneratorError;
use thiserror::Error;

/// Boxed error returned by a row sink.
pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while loading batches.
///
/// Only `Connection` and `Config` abort a run. The row and batch variants
/// are recorded and the loader moves on.
#[derive(Error, Debug)]
pub enum PopulateError {
    /// The database session could not be established.
    #[error("Connection error: {0}")]
    Connection(String),

    /// A single row's INSERT failed.
    #[error("Row {index} insert failed: {source}")]
    RowInsert {
        index: u64,
        #[source]
        source: SinkError,
    },

    /// A batch commit failed and the batch was rolled back.
    #[error("Batch {batch} commit failed: {source}")]
    BatchCommit {
        batch: u64,
        #[source]
        source: SinkError,
    },

    /// A row could not be generated.
    #[error("Row {index} generation failed: {source}")]
    Generation {
        index: u64,
        #[source]
        source: GeneratorError,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
