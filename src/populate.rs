//! The `populate` command.

use crate::config::LoadConfig;
use anyhow::Context;
use fill_generator::Record;
use fill_populate::{BatchLoader, LoadReport};
use fill_populate_mysql::{MySQLPopulateArgs, MySQLPopulator};
use tracing::{info, warn};

/// Load the run file, apply overrides and either preview or populate.
///
/// Returns `None` for a dry run.
pub async fn run_populate(args: MySQLPopulateArgs) -> anyhow::Result<Option<LoadReport>> {
    let mut config = LoadConfig::from_file(&args.common.config)?;
    config.apply_args(&args)?;

    info!(
        "Populating '{}' with {} rows (batch size: {}, locale: {}, seed: {})",
        config.run.table_name,
        config.run.total_count,
        config.run.batch_size,
        config.locale,
        config
            .seed
            .map_or_else(|| "random".to_string(), |s| s.to_string())
    );

    if args.common.dry_run {
        let rows = dry_run(&config)?;
        info!(
            "Dry-run: configuration valid, previewed {} rows, target {}",
            rows.len(),
            config.database.display_url()
        );
        return Ok(None);
    }

    let report = MySQLPopulator::new(config.database.clone(), config.record_generator()?)
        .execute(&config.run)
        .await
        .with_context(|| format!("Failed to populate table '{}'", config.run.table_name))?;

    Ok(Some(report))
}

/// Validate everything and generate the first batch without connecting.
pub fn dry_run(config: &LoadConfig) -> anyhow::Result<Vec<Record>> {
    config.database.validate()?;
    let plan = config.run.plan()?;
    let mut loader = BatchLoader::new(config.record_generator()?, &config.run.table_name, plan);
    info!("Dry-run: {}", loader.template().sql());

    let Some(first) = plan.batch(0) else {
        return Ok(Vec::new());
    };

    let mut rows = Vec::with_capacity(first.len as usize);
    for result in loader.generate_batch(first) {
        match result {
            Ok(record) => {
                let preview: Vec<String> = record
                    .columns()
                    .zip(record.values())
                    .map(|(column, value)| format!("{column}={value}"))
                    .collect();
                info!("Dry-run row {}: {}", record.index, preview.join(", "));
                rows.push(record);
            }
            Err(e) => warn!("Dry-run: {}", e),
        }
    }
    Ok(rows)
}

/// Log where the failed rows of a finished run went.
pub fn log_report(report: &LoadReport) {
    if report.is_success() {
        return;
    }
    if report.connection_failed {
        warn!("No connection: all {} rows failed", report.total_count);
    } else {
        warn!(
            "{} rows failed: {} row inserts, {} generation, {} rolled back over {} batch commits",
            report.failed,
            report.row_insert_errors,
            report.generation_errors,
            report.failed - report.row_insert_errors - report.generation_errors,
            report.commit_failures
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(total_count: u64, batch_size: usize) -> LoadConfig {
        let mut config = LoadConfig::from_yaml(
            r#"
seed: 1
table: users_copy
total_count: 0
database: { user: root, database: test }
fields:
  - name: name
    unique: true
    generator: { type: name }
  - name: department
    generator: { type: one_of, values: [技术部, 销售部] }
"#,
        )
        .unwrap();
        config.run.total_count = total_count;
        config.run.batch_size = batch_size;
        config
    }

    #[test]
    fn test_dry_run_previews_first_batch() {
        let rows = dry_run(&config(25, 10)).unwrap();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].index, 0);
        assert!(rows[9]
            .get_field("name")
            .and_then(|v| v.as_str())
            .unwrap()
            .ends_with("_9"));
    }

    #[test]
    fn test_dry_run_short_run() {
        assert_eq!(dry_run(&config(3, 10)).unwrap().len(), 3);
        assert!(dry_run(&config(0, 10)).unwrap().is_empty());
    }

    #[test]
    fn test_dry_run_rejects_zero_batch_size() {
        assert!(dry_run(&config(10, 0)).is_err());
    }
}
