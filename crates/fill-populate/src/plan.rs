//! Run configuration and its partition into batches.

use crate::error::PopulateError;
use serde::{Deserialize, Serialize};

/// Default batch size for INSERT transactions.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

/// What to load and where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Target table (must already exist)
    #[serde(rename = "table")]
    pub table_name: String,

    /// Total number of rows to generate
    pub total_count: u64,

    /// Rows per committed batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Global row index of the first row
    #[serde(default)]
    pub start_index: u64,
}

impl RunConfig {
    pub fn plan(&self) -> Result<BatchPlan, PopulateError> {
        BatchPlan::new(self.total_count, self.batch_size, self.start_index)
    }
}

/// One batch of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchRange {
    /// Zero-based batch number
    pub number: u64,
    /// Global row index of the first row in the batch
    pub first_index: u64,
    /// Number of rows in the batch
    pub len: u64,
}

impl BatchRange {
    /// Global row indices of this batch.
    pub fn indices(&self) -> std::ops::Range<u64> {
        self.first_index..self.first_index + self.len
    }
}

/// Partition of `total_count` rows into `ceil(total / batch_size)` batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPlan {
    total_count: u64,
    batch_size: u64,
    start_index: u64,
}

impl BatchPlan {
    pub fn new(total_count: u64, batch_size: usize, start_index: u64) -> Result<Self, PopulateError> {
        if batch_size == 0 {
            return Err(PopulateError::Config(
                "batch_size must be greater than zero".to_string(),
            ));
        }
        if start_index.checked_add(total_count).is_none() {
            return Err(PopulateError::Config(format!(
                "start_index {start_index} + total_count {total_count} overflows the row index"
            )));
        }
        Ok(Self {
            total_count,
            batch_size: batch_size as u64,
            start_index,
        })
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn batch_size(&self) -> u64 {
        self.batch_size
    }

    pub fn start_index(&self) -> u64 {
        self.start_index
    }

    pub fn batch_count(&self) -> u64 {
        self.total_count.div_ceil(self.batch_size)
    }

    /// The batch with the given number, if it is part of the plan.
    pub fn batch(&self, number: u64) -> Option<BatchRange> {
        if number >= self.batch_count() {
            return None;
        }
        let offset = number * self.batch_size;
        Some(BatchRange {
            number,
            first_index: self.start_index + offset,
            len: self.batch_size.min(self.total_count - offset),
        })
    }

    pub fn batches(&self) -> impl Iterator<Item = BatchRange> + '_ {
        (0..self.batch_count()).filter_map(move |n| self.batch(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uneven_partition() {
        let plan = BatchPlan::new(25, 10, 0).unwrap();
        assert_eq!(plan.batch_count(), 3);

        let sizes: Vec<u64> = plan.batches().map(|b| b.len).collect();
        assert_eq!(sizes, vec![10, 10, 5]);

        let indices: Vec<u64> = plan.batches().flat_map(|b| b.indices()).collect();
        assert_eq!(indices, (0..25).collect::<Vec<_>>());
    }

    #[test]
    fn test_even_partition() {
        let plan = BatchPlan::new(30, 10, 0).unwrap();
        let sizes: Vec<u64> = plan.batches().map(|b| b.len).collect();
        assert_eq!(sizes, vec![10, 10, 10]);
    }

    #[test]
    fn test_start_index_offsets_rows() {
        let plan = BatchPlan::new(5, 2, 100).unwrap();
        let firsts: Vec<u64> = plan.batches().map(|b| b.first_index).collect();
        assert_eq!(firsts, vec![100, 102, 104]);
        assert_eq!(plan.batch(2).unwrap().indices(), 104..105);
        assert_eq!(plan.batch(3), None);
    }

    #[test]
    fn test_partition_properties() {
        for total in 0..60u64 {
            for batch_size in 1..12usize {
                let plan = BatchPlan::new(total, batch_size, 7).unwrap();
                let batches: Vec<BatchRange> = plan.batches().collect();

                assert_eq!(batches.len() as u64, total.div_ceil(batch_size as u64));
                assert_eq!(batches.iter().map(|b| b.len).sum::<u64>(), total);
                if let Some((last, rest)) = batches.split_last() {
                    assert!(rest.iter().all(|b| b.len == batch_size as u64));
                    let expected_last = match total % batch_size as u64 {
                        0 => batch_size as u64,
                        r => r,
                    };
                    assert_eq!(last.len, expected_last);
                }
            }
        }
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        assert!(matches!(
            BatchPlan::new(10, 0, 0),
            Err(PopulateError::Config(_))
        ));
    }

    #[test]
    fn test_empty_run() {
        let plan = BatchPlan::new(0, 10, 0).unwrap();
        assert_eq!(plan.batch_count(), 0);
        assert_eq!(plan.batches().count(), 0);
    }
}
