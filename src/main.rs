//! Command-line interface for tablefill
//!
//! ```bash
//! # Populate MySQL from a run file, overriding the row count and password
//! TABLEFILL_MYSQL_PASSWORD=test tablefill populate mysql \
//!   -c tests/fixtures/users.yaml \
//!   --total-count 1000 \
//!   --batch-size 100
//! ```
//!
//! Set `RUST_LOG` to change verbosity (default `info`).

use clap::{Parser, Subcommand};
use fill_populate_mysql::MySQLPopulateArgs;
use tablefill::{log_report, run_populate};

#[derive(Parser)]
#[command(name = "tablefill")]
#[command(about = "Fill database tables with generated test data")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate rows and insert them in committed batches
    Populate {
        #[command(subcommand)]
        target: PopulateTarget,
    },
}

/// Database to populate
#[derive(Subcommand)]
enum PopulateTarget {
    /// Populate a MySQL table
    #[command(name = "mysql")]
    MySQL {
        #[command(flatten)]
        args: MySQLPopulateArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Populate { target } => match target {
            PopulateTarget::MySQL { args } => {
                if let Some(report) = run_populate(args).await? {
                    log_report(&report);
                    if !report.is_success() {
                        anyhow::bail!(
                            "{} of {} rows were not inserted",
                            report.failed,
                            report.total_count
                        );
                    }
                }
            }
        },
    }

    Ok(())
}
