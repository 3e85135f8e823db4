//! MySQL populator for tablefill.
//!
//! Binds the batch loader from `fill-populate` to a single `mysql_async`
//! session with autocommit disabled.
//!
//! # Example
//!
//! ```ignore
//! use fill_populate_mysql::{DatabaseConfig, MySQLPopulator};
//!
//! let database = DatabaseConfig::new("localhost", "root", "test");
//! let report = MySQLPopulator::new(database, generator)
//!     .with_batch_size(10)
//!     .populate("users_copy", 100)
//!     .await?;
//! let (success, failed) = report.as_counts();
//! ```

pub mod args;
mod config;
mod error;
mod populator;
mod sink;
mod value;

pub use args::{CommonPopulateArgs, MySQLPopulateArgs};
pub use config::DatabaseConfig;
pub use error::MySQLPopulatorError;
pub use populator::MySQLPopulator;
pub use sink::MySQLSink;
pub use value::MySQLValue;
