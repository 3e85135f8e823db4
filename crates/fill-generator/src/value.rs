//! Generated field values.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// Text layout used when a datetime is bound to an SQL parameter.
pub const SQL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Text layout used when a date is bound to an SQL parameter.
pub const SQL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Text layout used when a time of day is bound to an SQL parameter.
pub const SQL_TIME_FORMAT: &str = "%H:%M:%S";

/// A single generated value with its semantic type.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    Date(NaiveDate),
    Time(NaiveTime),
}

impl FieldValue {
    /// Render the value as text, using the SQL layouts for temporal values.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Return the text content if this is a `Text` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Return the integer content if this is an `Int` value.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Return the float content if this is a `Float` value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Append the global row index, turning the value into unique text.
    pub fn with_unique_suffix(self, index: u64) -> FieldValue {
        FieldValue::Text(format!("{self}_{index}"))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Int(i) => write!(f, "{i}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::DateTime(dt) => write!(f, "{}", dt.format(SQL_DATETIME_FORMAT)),
            FieldValue::Date(d) => write!(f, "{}", d.format(SQL_DATE_FORMAT)),
            FieldValue::Time(t) => write!(f, "{}", t.format(SQL_TIME_FORMAT)),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(dt: NaiveDateTime) -> Self {
        FieldValue::DateTime(dt)
    }
}
