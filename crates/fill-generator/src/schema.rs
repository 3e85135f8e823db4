//! Field specifications and the YAML field schema they are loaded from.
//!
//! A [`FieldDefinition`] is the serializable form (`name`, `unique`,
//! `generator`). A [`FieldSpec`] is the runtime form, holding any
//! [`FieldGenerator`] behind a trait object.

use crate::error::SchemaError;
use crate::generators::{FieldGenerator, GeneratorConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// A named field bound to a generator and a uniqueness flag.
pub struct FieldSpec {
    name: String,
    generator: Box<dyn FieldGenerator>,
    unique: bool,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, generator: impl FieldGenerator + 'static) -> Self {
        Self {
            name: name.into(),
            generator: Box::new(generator),
            unique: false,
        }
    }

    /// Like [`FieldSpec::new`], but the global row index is appended to
    /// every generated value.
    pub fn unique(name: impl Into<String>, generator: impl FieldGenerator + 'static) -> Self {
        Self {
            unique: true,
            ..Self::new(name, generator)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_unique(&self) -> bool {
        self.unique
    }

    pub fn generator(&self) -> &dyn FieldGenerator {
        self.generator.as_ref()
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("unique", &self.unique)
            .finish_non_exhaustive()
    }
}

/// Field definition as written in YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Column name
    pub name: String,

    /// Append `_{index}` to every value
    #[serde(default)]
    pub unique: bool,

    /// Generator configuration
    pub generator: GeneratorConfig,
}

impl From<FieldDefinition> for FieldSpec {
    fn from(def: FieldDefinition) -> Self {
        if def.unique {
            FieldSpec::unique(def.name, def.generator)
        } else {
            FieldSpec::new(def.name, def.generator)
        }
    }
}

/// Ordered list of field definitions; order is column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSchema {
    pub fields: Vec<FieldDefinition>,
}

impl FieldSchema {
    /// Load and validate a schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a schema from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let schema: FieldSchema = serde_yaml::from_str(yaml)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Wrap already-parsed definitions, validating them.
    pub fn new(fields: Vec<FieldDefinition>) -> Result<Self, SchemaError> {
        let schema = Self { fields };
        schema.validate()?;
        Ok(schema)
    }

    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.fields.is_empty() {
            return Err(SchemaError::Empty);
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
            field
                .generator
                .validate()
                .map_err(|reason| SchemaError::InvalidGenerator {
                    field: field.name.clone(),
                    reason,
                })?;
        }
        Ok(())
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Convert into runtime field specifications, preserving order.
    pub fn into_specs(self) -> Vec<FieldSpec> {
        self.fields.into_iter().map(FieldSpec::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_SCHEMA: &str = r#"
fields:
  - name: name
    unique: true
    generator:
      type: name
  - name: age
    generator:
      type: int_range
      min: 18
      max: 65
  - name: department
    generator:
      type: one_of
      values: [技术部, 销售部]
"#;

    #[test]
    fn test_parse_schema() {
        let schema = FieldSchema::from_yaml(SAMPLE_SCHEMA).unwrap();
        assert_eq!(schema.field_names(), vec!["name", "age", "department"]);
        assert!(schema.fields[0].unique);
        assert!(!schema.fields[1].unique);

        let specs = schema.into_specs();
        assert_eq!(specs.len(), 3);
        assert!(specs[0].is_unique());
        assert_eq!(specs[2].name(), "department");
    }

    #[test]
    fn test_duplicate_field() {
        let yaml = r#"
fields:
  - name: a
    generator: { type: city }
  - name: a
    generator: { type: city }
"#;
        assert!(matches!(
            FieldSchema::from_yaml(yaml),
            Err(SchemaError::DuplicateField(name)) if name == "a"
        ));
    }

    #[test]
    fn test_empty_schema() {
        assert!(matches!(
            FieldSchema::from_yaml("fields: []"),
            Err(SchemaError::Empty)
        ));
    }

    #[test]
    fn test_invalid_generator_names_field() {
        let yaml = r#"
fields:
  - name: department
    generator: { type: one_of, values: [] }
"#;
        match FieldSchema::from_yaml(yaml) {
            Err(SchemaError::InvalidGenerator { field, .. }) => assert_eq!(field, "department"),
            other => panic!("Expected InvalidGenerator, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_generator_type() {
        let yaml = r#"
fields:
  - name: x
    generator: { type: nonsense }
"#;
        assert!(matches!(
            FieldSchema::from_yaml(yaml),
            Err(SchemaError::YamlError(_))
        ));
    }
}
