//! Outcome of a load run.

use std::time::Duration;

/// Counters from a load run.
///
/// `success + failed` equals the requested total for every run that got
/// past connection setup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Rows requested.
    pub total_count: u64,
    /// Rows inserted and committed.
    pub success: u64,
    /// Rows not persisted, for any reason.
    pub failed: u64,
    /// Batches attempted.
    pub batches: u64,
    /// Batches whose commit failed and were rolled back.
    pub commit_failures: u64,
    /// Rows whose INSERT failed.
    pub row_insert_errors: u64,
    /// Rows whose generation failed.
    pub generation_errors: u64,
    /// Whether the run was abandoned because no connection could be made.
    pub connection_failed: bool,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent inserting and committing.
    pub insert_duration: Duration,
}

impl LoadReport {
    pub fn new(total_count: u64) -> Self {
        Self {
            total_count,
            ..Self::default()
        }
    }

    /// Report for a run that never connected: every row failed.
    pub fn connection_failed(total_count: u64) -> Self {
        Self {
            total_count,
            failed: total_count,
            connection_failed: true,
            ..Self::default()
        }
    }

    /// `(success_count, failed_count)`
    pub fn as_counts(&self) -> (u64, u64) {
        (self.success, self.failed)
    }

    /// Rows attempted so far.
    pub fn processed(&self) -> u64 {
        self.success + self.failed
    }

    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.success as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    pub fn is_success(&self) -> bool {
        !self.connection_failed && self.failed == 0
    }
}

/// Percentage of `done` over `total`, 100 for an empty run.
pub fn progress_percent(done: u64, total: u64) -> f64 {
    if total == 0 {
        100.0
    } else {
        done as f64 / total as f64 * 100.0
    }
}
