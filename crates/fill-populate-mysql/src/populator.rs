//! MySQL populator for tablefill.

use crate::config::DatabaseConfig;
use crate::error::MySQLPopulatorError;
use crate::sink::MySQLSink;
use fill_generator::RecordGenerator;
use fill_populate::{
    BatchLoader, BatchPlan, LoadReport, PopulateError, RunConfig, DEFAULT_BATCH_SIZE,
};
use tracing::{error, info};

/// MySQL populator that generates and inserts test data.
pub struct MySQLPopulator {
    database: DatabaseConfig,
    generator: RecordGenerator,
    batch_size: usize,
    start_index: u64,
}

impl MySQLPopulator {
    /// Create a new MySQL populator.
    ///
    /// No connection is opened until [`MySQLPopulator::populate`].
    pub fn new(database: DatabaseConfig, generator: RecordGenerator) -> Self {
        Self {
            database,
            generator,
            batch_size: DEFAULT_BATCH_SIZE,
            start_index: 0,
        }
    }

    /// Set the batch size (rows per transaction).
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set the global row index of the first row.
    pub fn with_start_index(mut self, index: u64) -> Self {
        self.start_index = index;
        self
    }

    pub fn database(&self) -> &DatabaseConfig {
        &self.database
    }

    /// Populate `table_name` with `count` rows.
    ///
    /// Invalid settings are returned as errors before any connection is
    /// attempted. A connection failure is not an error: it yields a report
    /// with every row counted as failed.
    pub async fn populate(
        self,
        table_name: &str,
        count: u64,
    ) -> Result<LoadReport, MySQLPopulatorError> {
        let plan = BatchPlan::new(count, self.batch_size, self.start_index)?;
        self.database.validate()?;

        info!(
            "Populating table '{}' with {} rows (batch size: {})",
            table_name, count, self.batch_size
        );
        info!("Connecting to {}", self.database.display_url());

        let sink = match MySQLSink::connect(&self.database).await {
            Ok(sink) => sink,
            Err(e) => {
                error!("{}", PopulateError::Connection(e.to_string()));
                return Ok(LoadReport::connection_failed(count));
            }
        };

        let mut loader = BatchLoader::new(self.generator, table_name, plan);
        Ok(loader.run(sink).await)
    }

    /// Populate according to a run configuration.
    pub async fn execute(self, run: &RunConfig) -> Result<LoadReport, MySQLPopulatorError> {
        self.with_batch_size(run.batch_size)
            .with_start_index(run.start_index)
            .populate(&run.table_name, run.total_count)
            .await
    }
}
