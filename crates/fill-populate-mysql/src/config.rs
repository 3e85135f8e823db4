//! MySQL connection parameters.

use crate::error::MySQLPopulatorError;
use mysql_async::{Opts, OptsBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    3306
}

fn default_charset() -> String {
    "utf8mb4".to_string()
}

/// Connection parameters for the target database.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    pub user: String,

    #[serde(default)]
    pub password: Option<String>,

    /// Database (schema) name
    pub database: String,

    /// Session character set, applied with `SET NAMES`
    #[serde(default = "default_charset")]
    pub charset: String,

    /// Must stay `false`: each batch is one explicit transaction.
    #[serde(default)]
    pub autocommit: bool,
}

impl DatabaseConfig {
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: default_port(),
            user: user.into(),
            password: None,
            database: database.into(),
            charset: default_charset(),
            autocommit: false,
        }
    }

    pub fn validate(&self) -> Result<(), MySQLPopulatorError> {
        if self.autocommit {
            return Err(MySQLPopulatorError::Config(
                "autocommit must be disabled so batches can be committed or rolled back"
                    .to_string(),
            ));
        }
        if self.charset.is_empty()
            || !self
                .charset
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(MySQLPopulatorError::Config(format!(
                "invalid charset '{}'",
                self.charset
            )));
        }
        if self.host.is_empty() || self.user.is_empty() || self.database.is_empty() {
            return Err(MySQLPopulatorError::Config(
                "host, user and database are required".to_string(),
            ));
        }
        Ok(())
    }

    /// Statements run on every new session.
    pub fn session_init(&self) -> Vec<String> {
        vec![
            format!("SET NAMES {}", self.charset),
            "SET autocommit=0".to_string(),
        ]
    }

    /// Build validated driver options.
    pub fn to_opts(&self) -> Result<Opts, MySQLPopulatorError> {
        self.validate()?;
        let builder = OptsBuilder::default()
            .ip_or_hostname(self.host.clone())
            .tcp_port(self.port)
            .user(Some(self.user.clone()))
            .pass(self.password.clone())
            .db_name(Some(self.database.clone()))
            .init(self.session_init());
        Ok(Opts::from(builder))
    }

    /// Connection URL with the password masked, for logging.
    pub fn display_url(&self) -> String {
        let password = if self.password.is_some() { ":***" } else { "" };
        format!(
            "mysql://{}{}@{}:{}/{}",
            self.user, password, self.host, self.port, self.database
        )
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("database", &self.database)
            .field("charset", &self.charset)
            .field("autocommit", &self.autocommit)
            .finish()
    }
}
