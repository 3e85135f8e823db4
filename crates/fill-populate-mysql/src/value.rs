//! Conversion: FieldValue → mysql_async::Value

use fill_generator::FieldValue;
use mysql_async::Value;

/// MySQL value wrapper for type-safe conversions.
#[derive(Debug, Clone, PartialEq)]
pub struct MySQLValue(pub Value);

impl MySQLValue {
    /// Get the inner mysql_async::Value.
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<FieldValue> for MySQLValue {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Text(s) => MySQLValue(Value::Bytes(s.into_bytes())),
            FieldValue::Int(i) => MySQLValue(Value::Int(i)),
            FieldValue::Float(f) => MySQLValue(Value::Double(f)),
            // MySQL uses TINYINT(1)
            FieldValue::Bool(b) => MySQLValue(Value::Int(i64::from(b))),
            // Temporal values are bound as `YYYY-MM-DD HH:MM:SS` text
            temporal @ (FieldValue::DateTime(_) | FieldValue::Date(_) | FieldValue::Time(_)) => {
                MySQLValue(Value::Bytes(temporal.to_text().into_bytes()))
            }
        }
    }
}

/// Convert a row's parameters for a positional statement.
pub fn to_params(values: &[FieldValue]) -> Vec<Value> {
    values
        .iter()
        .cloned()
        .map(|v| MySQLValue::from(v).into_inner())
        .collect()
}
