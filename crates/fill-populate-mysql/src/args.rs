//! CLI argument definitions for the MySQL populator.

use crate::config::DatabaseConfig;
use clap::Args;

// Re-export CommonPopulateArgs for convenience
pub use fill_populate::CommonPopulateArgs;

/// MySQL-specific populate arguments.
///
/// Each option overrides the `database:` section of the run file.
#[derive(Args, Clone, Debug)]
pub struct MySQLPopulateArgs {
    /// MySQL host
    #[arg(long)]
    pub mysql_host: Option<String>,

    /// MySQL port
    #[arg(long)]
    pub mysql_port: Option<u16>,

    /// MySQL user
    #[arg(long)]
    pub mysql_user: Option<String>,

    /// MySQL password
    #[arg(long, env = "TABLEFILL_MYSQL_PASSWORD", hide_env_values = true)]
    pub mysql_password: Option<String>,

    /// MySQL database name
    #[arg(long)]
    pub mysql_database: Option<String>,

    #[command(flatten)]
    pub common: CommonPopulateArgs,
}

impl MySQLPopulateArgs {
    /// Apply the connection overrides to `database`.
    pub fn apply_to(&self, database: &mut DatabaseConfig) {
        if let Some(host) = &self.mysql_host {
            database.host = host.clone();
        }
        if let Some(port) = self.mysql_port {
            database.port = port;
        }
        if let Some(user) = &self.mysql_user {
            database.user = user.clone();
        }
        if let Some(password) = &self.mysql_password {
            database.password = Some(password.clone());
        }
        if let Some(name) = &self.mysql_database {
            database.database = name.clone();
        }
    }
}
