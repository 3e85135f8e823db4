//! Fake-data field generators for tablefill.
//!
//! This crate turns a list of field specifications into records. Each field
//! is filled by a [`FieldGenerator`]; the YAML-configurable
//! [`GeneratorConfig`] delegates to the `fake` crate's catalogs through a
//! seeded [`FakeSource`], so a fixed seed reproduces the same data.
//!
//! # Architecture
//!
//! ```text
//! FieldSchema (YAML)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ RecordGenerator  │
//! │                  │
//! │  - fields        │
//! │  - FakeSource    │
//! │    (StdRng,      │
//! │     locale)      │
//! └────────┬─────────┘
//!          │  record_at(index)
//!          ▼
//!    Record { index, [(column, FieldValue)] }
//! ```
//!
//! # Example
//!
//! ```rust
//! use fill_generator::{FakeSource, FieldSchema, Locale, RecordGenerator};
//!
//! let schema = FieldSchema::from_yaml(r#"
//! fields:
//!   - name: name
//!     unique: true
//!     generator:
//!       type: name
//!   - name: age
//!     generator:
//!       type: int_range
//!       min: 18
//!       max: 65
//! "#).unwrap();
//!
//! let mut generator = RecordGenerator::new(
//!     schema.into_specs(),
//!     FakeSource::with_seed(Locale::En, 42),
//! );
//! let record = generator.record_at(0).unwrap();
//! println!("Generated record: {:?}", record);
//! ```

pub mod error;
pub mod generator;
pub mod generators;
pub mod schema;
pub mod source;
pub mod value;

// Re-exports for convenience
pub use error::{GeneratorError, SchemaError};
pub use generator::{Record, RecordGenerator};
pub use generators::{FieldGenerator, GeneratorConfig};
pub use schema::{FieldDefinition, FieldSchema, FieldSpec};
pub use source::{FakeSource, Locale};
pub use value::{FieldValue, SQL_DATETIME_FORMAT};
