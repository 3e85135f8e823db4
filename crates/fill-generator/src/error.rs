//! Error types for field generation and field schemas.

use thiserror::Error;

/// Error type for generator operations.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Arguments that no value can satisfy (empty choice set, `min > max`, ...).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Error type for loading and validating field schemas.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// No fields were defined
    #[error("Schema defines no fields")]
    Empty,

    /// Two fields share a name
    #[error("Duplicate field name: {0}")]
    DuplicateField(String),

    /// A field's generator configuration can never produce a value
    #[error("Field '{field}': {reason}")]
    InvalidGenerator { field: String, reason: String },
}
