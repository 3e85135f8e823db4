//! YAML scalar to `FieldValue` conversion for `one_of` and `static` generators.

use crate::value::FieldValue;
use serde_yaml::Value as YamlValue;

/// Convert a YAML scalar to a `FieldValue`.
///
/// Returns `None` for nulls, sequences and mappings, which have no column
/// representation.
pub fn yaml_to_field_value(yaml: &YamlValue) -> Option<FieldValue> {
    match yaml {
        YamlValue::Bool(b) => Some(FieldValue::Bool(*b)),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(FieldValue::Int(i))
            } else if let Some(f) = n.as_f64() {
                Some(FieldValue::Float(f))
            } else {
                Some(FieldValue::Text(n.to_string()))
            }
        }
        YamlValue::String(s) => Some(FieldValue::Text(s.clone())),
        YamlValue::Tagged(tagged) => yaml_to_field_value(&tagged.value),
        YamlValue::Null | YamlValue::Sequence(_) | YamlValue::Mapping(_) => None,
    }
}
