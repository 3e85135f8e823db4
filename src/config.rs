//! YAML run file.

use anyhow::Context;
use fill_generator::{FakeSource, FieldDefinition, FieldSchema, Locale, RecordGenerator};
use fill_populate::RunConfig;
use fill_populate_mysql::{DatabaseConfig, MySQLPopulateArgs};
use serde::Deserialize;
use std::path::Path;

/// Everything a populate run needs, as read from the run file.
#[derive(Debug, Clone, Deserialize)]
pub struct LoadConfig {
    /// Random seed; omitted means a fresh seed from entropy
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub locale: Locale,

    #[serde(flatten)]
    pub run: RunConfig,

    pub database: DatabaseConfig,

    /// Field definitions in column order
    pub fields: Vec<FieldDefinition>,
}

impl LoadConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read run file {path:?}"))?;
        Self::from_yaml(&content).with_context(|| format!("Invalid run file {path:?}"))
    }

    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        let config: LoadConfig =
            serde_yaml::from_str(yaml).context("Failed to parse run file YAML")?;
        Ok(config)
    }

    /// Apply command-line overrides.
    pub fn apply_args(&mut self, args: &MySQLPopulateArgs) -> anyhow::Result<()> {
        args.common.apply_to(&mut self.run);
        args.apply_to(&mut self.database);
        if let Some(seed) = args.common.seed {
            self.seed = Some(seed);
        }
        if let Some(locale) = &args.common.locale {
            self.locale = locale.parse::<Locale>().context("Invalid --locale")?;
        }
        Ok(())
    }

    /// Validated field schema.
    pub fn schema(&self) -> anyhow::Result<FieldSchema> {
        FieldSchema::new(self.fields.clone()).context("Invalid field definitions")
    }

    pub fn source(&self) -> FakeSource {
        match self.seed {
            Some(seed) => FakeSource::with_seed(self.locale, seed),
            None => FakeSource::new(self.locale),
        }
    }

    /// Build the record generator described by this file.
    pub fn record_generator(&self) -> anyhow::Result<RecordGenerator> {
        Ok(RecordGenerator::new(
            self.schema()?.into_specs(),
            self.source(),
        ))
    }
}
