//! Common CLI argument definitions shared by populators.

use crate::plan::RunConfig;
use clap::Args;
use std::path::PathBuf;

/// Common arguments shared by all populators.
///
/// Every option except `--config` overrides the matching value from the
/// run file.
#[derive(Args, Clone, Debug)]
pub struct CommonPopulateArgs {
    /// Path to the YAML run file (fields, run parameters, database)
    #[arg(long, short = 'c')]
    pub config: PathBuf,

    /// Total number of rows to generate
    #[arg(long)]
    pub total_count: Option<u64>,

    /// Rows per committed batch
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Global row index of the first row (offsets unique suffixes)
    #[arg(long)]
    pub start_index: Option<u64>,

    /// Target table name
    #[arg(long)]
    pub table: Option<String>,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fake-data locale (en, fr_fr, zh_cn, zh_tw)
    #[arg(long)]
    pub locale: Option<String>,

    /// Dry-run mode: validate configuration and preview rows without touching the database
    #[arg(long)]
    pub dry_run: bool,
}

impl CommonPopulateArgs {
    /// Apply the run-parameter overrides to `run`.
    pub fn apply_to(&self, run: &mut RunConfig) {
        if let Some(total_count) = self.total_count {
            run.total_count = total_count;
        }
        if let Some(batch_size) = self.batch_size {
            run.batch_size = batch_size;
        }
        if let Some(start_index) = self.start_index {
            run.start_index = start_index;
        }
        if let Some(table) = &self.table {
            run.table_name = table.clone();
        }
    }
}
