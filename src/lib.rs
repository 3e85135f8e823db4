//! tablefill
//!
//! Fills an existing MySQL table with fake rows described by a YAML run
//! file.
//!
//! - `fill_generator` - per-field fake value generators and records
//! - `fill_populate` - batch planning, parameterized INSERTs and the loader
//! - `fill_populate_mysql` - the MySQL session the loader writes through
//!
//! # CLI Usage
//!
//! ```bash
//! # Insert 100 rows in batches of 10
//! tablefill populate mysql -c users.yaml --total-count 100 --batch-size 10
//!
//! # Validate the run file and preview the first batch without connecting
//! tablefill populate mysql -c users.yaml --dry-run
//! ```

pub mod config;
pub mod populate;

pub use config::LoadConfig;
pub use populate::{dry_run, log_report, run_populate};
