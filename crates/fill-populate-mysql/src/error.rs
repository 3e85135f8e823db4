//! Error types for the MySQL populator.

use fill_populate::PopulateError;
use thiserror::Error;

/// Errors that can occur during MySQL population.
#[derive(Error, Debug)]
pub enum MySQLPopulatorError {
    /// MySQL connection or query error.
    #[error("MySQL error: {0}")]
    MySQL(#[from] mysql_async::Error),

    /// Batch loader error.
    #[error(transparent)]
    Populate(#[from] PopulateError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
