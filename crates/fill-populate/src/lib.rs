//! Batch loader core for tablefill populators.
//!
//! This crate holds everything between generated records and a concrete
//! database: the batch plan, parameterized INSERT statements, the
//! [`RowSink`] seam a database binding implements, the streaming
//! [`BatchLoader`] and its [`LoadReport`]. It also provides the CLI
//! arguments shared by all populators.
//!
//! # Example
//!
//! ```ignore
//! use fill_populate::{BatchLoader, BatchPlan};
//!
//! let plan = BatchPlan::new(25, 10, 0)?;
//! let mut loader = BatchLoader::new(generator, "users_copy", plan);
//! let report = loader.run(sink).await;
//! println!("{:?}", report.as_counts());
//! ```

pub mod args;
mod error;
mod loader;
mod plan;
mod report;
mod sink;
mod statement;

pub use args::CommonPopulateArgs;
pub use error::{PopulateError, SinkError};
pub use loader::BatchLoader;
pub use plan::{BatchPlan, BatchRange, RunConfig, DEFAULT_BATCH_SIZE};
pub use report::{progress_percent, LoadReport};
pub use sink::RowSink;
pub use statement::{quote_identifier, InsertStatement, InsertTemplate};
