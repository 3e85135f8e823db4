//! Parameterized INSERT statements.
//!
//! Values are never interpolated into SQL text; only identifiers are, and
//! those are backtick-quoted with embedded backticks doubled.

use fill_generator::{FieldValue, Record};

/// Quote an identifier for MySQL.
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// SQL text for a single-row INSERT into a fixed column list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertTemplate {
    table: String,
    columns: Vec<String>,
    sql: String,
}

impl InsertTemplate {
    pub fn new<S: AsRef<str>>(table: &str, columns: &[S]) -> Self {
        let quoted: Vec<String> = columns
            .iter()
            .map(|c| quote_identifier(c.as_ref()))
            .collect();
        let placeholders: Vec<&str> = columns.iter().map(|_| "?").collect();
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            quote_identifier(table),
            quoted.join(", "),
            placeholders.join(", ")
        );

        Self {
            table: table.to_string(),
            columns: columns.iter().map(|c| c.as_ref().to_string()).collect(),
            sql,
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Bind a record's values in column order.
    pub fn bind(&self, record: Record) -> InsertStatement<'_> {
        InsertStatement {
            sql: &self.sql,
            index: record.index,
            params: record.into_values(),
        }
    }
}

/// One row's INSERT: shared SQL text plus its positional parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement<'a> {
    pub sql: &'a str,
    /// Global row index of the bound record
    pub index: u64,
    pub params: Vec<FieldValue>,
}
