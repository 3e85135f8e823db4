//! Streaming batch loader.
//!
//! The loader walks a [`BatchPlan`] in order. For each batch it generates
//! the rows, inserts them one statement at a time, then commits. Only one
//! batch of records is held in memory at a time.

use crate::error::PopulateError;
use crate::plan::{BatchPlan, BatchRange};
use crate::report::{progress_percent, LoadReport};
use crate::sink::RowSink;
use crate::statement::InsertTemplate;
use fill_generator::{Record, RecordGenerator};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Fraction of the run between two generation progress lines (5%).
const GENERATION_PROGRESS_STEPS: u64 = 20;

/// Generates and persists rows batch by batch.
pub struct BatchLoader {
    generator: RecordGenerator,
    template: InsertTemplate,
    plan: BatchPlan,
}

impl BatchLoader {
    pub fn new(generator: RecordGenerator, table: &str, plan: BatchPlan) -> Self {
        let template = InsertTemplate::new(table, &generator.field_names());
        Self {
            generator,
            template,
            plan,
        }
    }

    pub fn plan(&self) -> &BatchPlan {
        &self.plan
    }

    pub fn template(&self) -> &InsertTemplate {
        &self.template
    }

    /// Generate the records of one batch without persisting them.
    ///
    /// Rows whose generation fails are returned as errors in place.
    pub fn generate_batch(&mut self, batch: BatchRange) -> Vec<Result<Record, PopulateError>> {
        batch
            .indices()
            .map(|index| {
                self.generator
                    .record_at(index)
                    .map_err(|source| PopulateError::Generation { index, source })
            })
            .collect()
    }

    /// Run the whole plan against `sink`, closing it afterwards.
    ///
    /// Row and commit failures are counted, logged and skipped; the run
    /// always covers every batch of the plan.
    pub async fn run<S: RowSink>(&mut self, mut sink: S) -> LoadReport {
        let start_time = Instant::now();
        let plan = self.plan;
        let total = plan.total_count();
        let mut report = LoadReport::new(total);

        info!(
            "Loading {} rows into '{}' ({} batches of up to {} rows, starting at index {})",
            total,
            self.template.table(),
            plan.batch_count(),
            plan.batch_size(),
            plan.start_index()
        );
        debug!("INSERT template: {}", self.template.sql());

        let progress_interval = (total / GENERATION_PROGRESS_STEPS).max(1);
        let mut generated = 0u64;

        for batch in plan.batches() {
            let gen_start = Instant::now();
            let mut rows = Vec::with_capacity(batch.len as usize);
            for result in self.generate_batch(batch) {
                match result {
                    Ok(record) => rows.push(record),
                    Err(err) => {
                        warn!("{}", err);
                        report.failed += 1;
                        report.generation_errors += 1;
                    }
                }
                generated += 1;
                if generated % progress_interval == 0 {
                    info!(
                        "Generation progress: {:.1}% ({}/{})",
                        progress_percent(generated, total),
                        generated,
                        total
                    );
                }
            }
            report.generation_duration += gen_start.elapsed();

            let insert_start = Instant::now();
            self.load_batch(&mut sink, batch, rows, &mut report).await;
            report.insert_duration += insert_start.elapsed();
            report.batches += 1;
        }

        if let Err(e) = sink.close().await {
            warn!("Failed to close connection cleanly: {}", e);
        }

        report.total_duration = start_time.elapsed();
        info!(
            "Load complete: {} succeeded, {} failed in {:?} ({:.2} rows/sec)",
            report.success,
            report.failed,
            report.total_duration,
            report.rows_per_second()
        );

        report
    }

    /// Insert one batch row by row and commit it.
    async fn load_batch<S: RowSink>(
        &self,
        sink: &mut S,
        batch: BatchRange,
        rows: Vec<Record>,
        report: &mut LoadReport,
    ) {
        let batch_count = self.plan.batch_count();
        let mut batch_success = 0u64;

        for record in rows {
            let statement = self.template.bind(record);
            match sink.insert(&statement).await {
                Ok(()) => batch_success += 1,
                Err(source) => {
                    let err = PopulateError::RowInsert {
                        index: statement.index,
                        source,
                    };
                    warn!("{}", err);
                    report.failed += 1;
                    report.row_insert_errors += 1;
                }
            }
        }

        match sink.commit().await {
            Ok(()) => {
                report.success += batch_success;
                info!(
                    "Batch {}/{}: progress {:.1}% ({}/{}) - batch success {}/{}",
                    batch.number + 1,
                    batch_count,
                    progress_percent(report.processed(), report.total_count),
                    report.processed(),
                    report.total_count,
                    batch_success,
                    batch.len
                );
            }
            Err(source) => {
                let err = PopulateError::BatchCommit {
                    batch: batch.number + 1,
                    source,
                };
                error!("{}", err);
                if let Err(e) = sink.rollback().await {
                    warn!("Rollback of batch {} failed: {}", batch.number + 1, e);
                }
                report.failed += batch_success;
                report.commit_failures += 1;
                info!(
                    "Batch {}/{}: progress {:.1}% ({}/{}) - rolled back {} rows",
                    batch.number + 1,
                    batch_count,
                    progress_percent(report.processed(), report.total_count),
                    report.processed(),
                    report.total_count,
                    batch_success
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SinkError;
    use crate::statement::InsertStatement;
    use async_trait::async_trait;
    use fill_generator::{FakeSource, FieldSchema, FieldSpec, FieldValue, GeneratorError, Locale};
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Default)]
    struct MockState {
        pending: Vec<(u64, Vec<FieldValue>)>,
        persisted: Vec<(u64, Vec<FieldValue>)>,
        insert_calls: u64,
        commit_calls: usize,
        rollbacks: usize,
        closed: bool,
    }

    /// In-memory sink that fails chosen row indices and commit calls.
    #[derive(Default)]
    struct MockSink {
        state: Arc<Mutex<MockState>>,
        fail_rows: HashSet<u64>,
        fail_commits: HashSet<usize>,
    }

    impl MockSink {
        fn failing_rows(mut self, rows: &[u64]) -> Self {
            self.fail_rows.extend(rows);
            self
        }

        fn failing_commits(mut self, commits: &[usize]) -> Self {
            self.fail_commits.extend(commits);
            self
        }

        fn state(&self) -> Arc<Mutex<MockState>> {
            Arc::clone(&self.state)
        }
    }

    #[async_trait]
    impl RowSink for MockSink {
        async fn insert(&mut self, statement: &InsertStatement<'_>) -> Result<(), SinkError> {
            let mut state = self.state.lock().unwrap();
            state.insert_calls += 1;
            if self.fail_rows.contains(&statement.index) {
                return Err(format!("Duplicate entry for row {}", statement.index).into());
            }
            state
                .pending
                .push((statement.index, statement.params.clone()));
            Ok(())
        }

        async fn commit(&mut self) -> Result<(), SinkError> {
            let mut state = self.state.lock().unwrap();
            let call = state.commit_calls;
            state.commit_calls += 1;
            if self.fail_commits.contains(&call) {
                return Err("Lock wait timeout exceeded".into());
            }
            let pending = std::mem::take(&mut state.pending);
            state.persisted.extend(pending);
            Ok(())
        }

        async fn rollback(&mut self) -> Result<(), SinkError> {
            let mut state = self.state.lock().unwrap();
            state.pending.clear();
            state.rollbacks += 1;
            Ok(())
        }

        async fn close(self) -> Result<(), SinkError> {
            self.state.lock().unwrap().closed = true;
            Ok(())
        }
    }

    fn users_generator(seed: u64) -> RecordGenerator {
        let schema = FieldSchema::from_yaml(
            r#"
fields:
  - name: name
    unique: true
    generator: { type: name }
  - name: age
    generator: { type: int_range, min: 18, max: 65 }
  - name: department
    generator: { type: one_of, values: [技术部, 销售部, 市场部] }
  - name: create_time
    generator: { type: datetime }
"#,
        )
        .unwrap();
        RecordGenerator::new(schema.into_specs(), FakeSource::with_seed(Locale::ZhCn, seed))
    }

    fn loader(total: u64, batch_size: usize, start_index: u64) -> BatchLoader {
        let plan = BatchPlan::new(total, batch_size, start_index).unwrap();
        BatchLoader::new(users_generator(42), "users_copy", plan)
    }

    #[tokio::test]
    async fn test_all_rows_persisted_in_batches() {
        let sink = MockSink::default();
        let state = sink.state();

        let report = loader(25, 10, 0).run(sink).await;

        assert_eq!(report.as_counts(), (25, 0));
        assert_eq!(report.batches, 3);
        let state = state.lock().unwrap();
        assert_eq!(state.commit_calls, 3);
        let indices: Vec<u64> = state.persisted.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, (0..25).collect::<Vec<_>>());
        assert!(state.closed);
    }

    #[tokio::test]
    async fn test_row_failure_does_not_stop_batch() {
        let sink = MockSink::default().failing_rows(&[3, 12]);
        let state = sink.state();

        let report = loader(25, 10, 0).run(sink).await;

        assert_eq!(report.as_counts(), (23, 2));
        assert_eq!(report.row_insert_errors, 2);
        let state = state.lock().unwrap();
        assert_eq!(state.insert_calls, 25);
        assert!(state.persisted.iter().any(|(i, _)| *i == 4));
        assert!(!state.persisted.iter().any(|(i, _)| *i == 3));
    }

    #[tokio::test]
    async fn test_commit_failure_reclassifies_batch() {
        // Batch 0 has two bad rows, so 8 succeed before its commit fails.
        let sink = MockSink::default()
            .failing_rows(&[1, 5])
            .failing_commits(&[0]);
        let state = sink.state();

        let report = loader(20, 10, 0).run(sink).await;

        assert_eq!(report.as_counts(), (10, 10));
        assert_eq!(report.commit_failures, 1);
        assert_eq!(report.row_insert_errors, 2);
        let state = state.lock().unwrap();
        assert_eq!(state.rollbacks, 1);
        assert!(state.persisted.iter().all(|(i, _)| *i >= 10));
        assert_eq!(state.persisted.len(), 10);
    }

    #[test]
    fn test_counts_always_sum_to_total() {
        for (total, batch_size) in [(0u64, 1usize), (1, 1), (7, 3), (100, 10), (101, 10)] {
            let sink = MockSink::default()
                .failing_rows(&[0, 50, 99])
                .failing_commits(&[1]);
            let report = tokio_test::block_on(loader(total, batch_size, 0).run(sink));

            assert_eq!(report.success + report.failed, total);
            assert_eq!(report.batches, total.div_ceil(batch_size as u64));
        }
    }

    #[tokio::test]
    async fn test_unique_field_distinct_across_batches() {
        let specs = vec![FieldSpec::unique(
            "code",
            |_: &mut FakeSource, _: u64| -> Result<FieldValue, GeneratorError> {
                Ok(FieldValue::from("dup"))
            },
        )];
        let generator = RecordGenerator::new(specs, FakeSource::with_seed(Locale::En, 1));
        let plan = BatchPlan::new(35, 10, 0).unwrap();
        let sink = MockSink::default();
        let state = sink.state();

        BatchLoader::new(generator, "codes", plan).run(sink).await;

        let state = state.lock().unwrap();
        let codes: HashSet<String> = state
            .persisted
            .iter()
            .map(|(_, params)| params[0].to_text())
            .collect();
        assert_eq!(codes.len(), 35);
        assert!(codes.contains("dup_0") && codes.contains("dup_34"));
    }

    #[tokio::test]
    async fn test_start_index_offsets_global_index() {
        let sink = MockSink::default();
        let state = sink.state();

        loader(5, 2, 100).run(sink).await;

        let state = state.lock().unwrap();
        let indices: Vec<u64> = state.persisted.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![100, 101, 102, 103, 104]);
        let name = state.persisted[0].1[0].to_text();
        assert!(name.ends_with("_100"), "{name}");
    }

    #[tokio::test]
    async fn test_generation_failure_counted() {
        let specs = vec![FieldSpec::new(
            "n",
            |_: &mut FakeSource, index: u64| -> Result<FieldValue, GeneratorError> {
                if index == 7 {
                    Err(GeneratorError::InvalidInput("no value for 7".to_string()))
                } else {
                    Ok(FieldValue::Int(index as i64))
                }
            },
        )];
        let generator = RecordGenerator::new(specs, FakeSource::with_seed(Locale::En, 1));
        let plan = BatchPlan::new(10, 4, 0).unwrap();
        let sink = MockSink::default();
        let state = sink.state();

        let report = BatchLoader::new(generator, "numbers", plan).run(sink).await;

        assert_eq!(report.as_counts(), (9, 1));
        assert_eq!(report.generation_errors, 1);
        assert_eq!(state.lock().unwrap().insert_calls, 9);
    }

    #[tokio::test]
    async fn test_empty_run_still_closes_sink() {
        let sink = MockSink::default();
        let state = sink.state();

        let report = loader(0, 10, 0).run(sink).await;

        assert_eq!(report.as_counts(), (0, 0));
        assert_eq!(report.batches, 0);
        assert!(state.lock().unwrap().closed);
    }

    #[test]
    fn test_template_matches_field_order() {
        let loader = loader(1, 1, 0);
        assert_eq!(
            loader.template().sql(),
            "INSERT INTO `users_copy` (`name`, `age`, `department`, `create_time`) VALUES (?, ?, ?, ?)"
        );
    }
}
