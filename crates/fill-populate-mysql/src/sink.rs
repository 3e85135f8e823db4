//! MySQL row sink.

use crate::config::DatabaseConfig;
use crate::error::MySQLPopulatorError;
use crate::value::to_params;
use async_trait::async_trait;
use fill_populate::{InsertStatement, RowSink, SinkError};
use mysql_async::{prelude::*, Conn, Params};
use tracing::debug;

/// A single exclusively-owned MySQL session with autocommit disabled.
///
/// Every INSERT joins the session's open transaction. A failed statement
/// only undoes itself, so the rest of the batch can still be committed.
pub struct MySQLSink {
    conn: Conn,
}

impl MySQLSink {
    /// Open a session for `config`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, MySQLPopulatorError> {
        let opts = config.to_opts()?;
        let conn = Conn::new(opts).await?;
        debug!("Connected to {}", config.display_url());
        Ok(Self { conn })
    }
}

#[async_trait]
impl RowSink for MySQLSink {
    async fn insert(&mut self, statement: &InsertStatement<'_>) -> Result<(), SinkError> {
        let params = Params::Positional(to_params(&statement.params));
        self.conn.exec_drop(statement.sql, params).await?;
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), SinkError> {
        self.conn.query_drop("COMMIT").await?;
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), SinkError> {
        self.conn.query_drop("ROLLBACK").await?;
        Ok(())
    }

    async fn close(self) -> Result<(), SinkError> {
        self.conn.disconnect().await?;
        Ok(())
    }
}
