//! Destination of generated rows.

use crate::error::SinkError;
use crate::statement::InsertStatement;
use async_trait::async_trait;

/// A transactional row destination owned by the loader for one run.
///
/// Inserts accumulate in an open transaction until `commit` or `rollback`.
/// A failed `insert` must leave the transaction usable for later rows.
#[async_trait]
pub trait RowSink: Send {
    /// Execute one row's INSERT.
    async fn insert(&mut self, statement: &InsertStatement<'_>) -> Result<(), SinkError>;

    /// Commit everything inserted since the last commit or rollback.
    async fn commit(&mut self) -> Result<(), SinkError>;

    /// Discard everything inserted since the last commit or rollback.
    async fn rollback(&mut self) -> Result<(), SinkError>;

    /// Release the underlying connection.
    async fn close(self) -> Result<(), SinkError>
    where
        Self: Sized;
}
