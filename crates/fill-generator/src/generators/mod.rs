//! Field generators.
//!
//! A field is filled by anything implementing [`FieldGenerator`]. The
//! YAML-configurable [`GeneratorConfig`] covers the usual catalog of fake
//! values; closures cover everything else.

pub mod choice;
pub mod numeric;
pub mod pattern;
pub mod timestamp;

use crate::error::GeneratorError;
use crate::source::FakeSource;
use crate::value::FieldValue;
use serde::{Deserialize, Serialize};
use serde_yaml::Value as YamlValue;

/// Produces one value per call for a single field.
pub trait FieldGenerator: Send + Sync {
    /// Produce a value for the row at global `index`.
    fn produce(&self, source: &mut FakeSource, index: u64) -> Result<FieldValue, GeneratorError>;
}

impl<F> FieldGenerator for F
where
    F: Fn(&mut FakeSource, u64) -> Result<FieldValue, GeneratorError> + Send + Sync,
{
    fn produce(&self, source: &mut FakeSource, index: u64) -> Result<FieldValue, GeneratorError> {
        self(source, index)
    }
}

fn default_password_length() -> usize {
    10
}

fn default_sentence_words() -> usize {
    10
}

fn default_paragraph_sentences() -> usize {
    5
}

fn default_decimals() -> u32 {
    2
}

fn default_bank_account_length() -> usize {
    16
}

/// Generator configuration for a field, as written in the YAML run file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorConfig {
    Name,
    FirstName,
    LastName,
    City,
    /// State or province
    State,
    Country,
    Postcode,
    StreetAddress,
    PhoneNumber,
    Email,
    CompanyName,
    Job,
    Username,
    Password {
        #[serde(default = "default_password_length")]
        length: usize,
    },
    Ipv4,
    MacAddress,
    UuidV4,
    Sentence {
        #[serde(default = "default_sentence_words")]
        words: usize,
    },
    Paragraph {
        #[serde(default = "default_paragraph_sentences")]
        sentences: usize,
    },

    /// Pattern string with `{index}`, `{uuid}` and `{rand:N}` placeholders
    Pattern { pattern: String },

    /// `start + index`
    Sequential {
        #[serde(default)]
        start: i64,
    },

    /// Random integers in `[min, max]`
    IntRange { min: i64, max: i64 },

    /// Random floats in `[min, max]` rounded to `decimals` places
    FloatRange {
        min: f64,
        max: f64,
        #[serde(default = "default_decimals")]
        decimals: u32,
    },

    Bool,
    WeightedBool { true_weight: f64 },

    /// Datetimes in `[start, end]`; omitted bounds mean the last 365 days
    #[serde(rename = "datetime")]
    DateTime {
        #[serde(default)]
        start: Option<String>,
        #[serde(default)]
        end: Option<String>,
    },

    /// Dates in `[start, end]`; omitted bounds mean the last 365 days
    Date {
        #[serde(default)]
        start: Option<String>,
        #[serde(default)]
        end: Option<String>,
    },

    Time,
    UnixTimestamp,
    BankAccount {
        #[serde(default = "default_bank_account_length")]
        length: usize,
    },
    CreditCardNumber,
    CurrencyCode,

    /// Random pick from a list of scalars
    OneOf { values: Vec<YamlValue> },

    /// Same scalar for every row
    Static { value: YamlValue },
}

impl GeneratorConfig {
    /// Check that the configuration can produce a value.
    ///
    /// Returns a human-readable reason on failure.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            GeneratorConfig::Password { length } if *length == 0 => {
                Err("password length must be positive".to_string())
            }
            GeneratorConfig::IntRange { min, max } => {
                numeric::check_bounds(*min, *max).map_err(|e| e.to_string())
            }
            GeneratorConfig::FloatRange { min, max, decimals } => {
                numeric::check_float_bounds(*min, *max, *decimals).map_err(|e| e.to_string())
            }
            GeneratorConfig::WeightedBool { true_weight } if !(0.0..=1.0).contains(true_weight) => {
                Err(format!("true_weight {true_weight} outside [0, 1]"))
            }
            GeneratorConfig::DateTime { start, end } => {
                let start = parse_bound(start.as_deref(), timestamp::parse_datetime)
                    .map_err(|e| e.to_string())?;
                let end = parse_bound(end.as_deref(), timestamp::parse_datetime)
                    .map_err(|e| e.to_string())?;
                match (start, end) {
                    (Some(s), Some(e)) if s > e => Err(format!("start {s} is after end {e}")),
                    _ => Ok(()),
                }
            }
            GeneratorConfig::Date { start, end } => {
                let start = parse_bound(start.as_deref(), timestamp::parse_date)
                    .map_err(|e| e.to_string())?;
                let end = parse_bound(end.as_deref(), timestamp::parse_date)
                    .map_err(|e| e.to_string())?;
                match (start, end) {
                    (Some(s), Some(e)) if s > e => Err(format!("start {s} is after end {e}")),
                    _ => Ok(()),
                }
            }
            GeneratorConfig::Pattern { pattern } => {
                pattern::check(pattern).map_err(|e| e.to_string())
            }
            GeneratorConfig::OneOf { values } => {
                if values.is_empty() {
                    return Err("one_of needs at least one value".to_string());
                }
                if values.iter().any(|v| choice::yaml_to_field_value(v).is_none()) {
                    return Err("one_of values must be scalars".to_string());
                }
                Ok(())
            }
            GeneratorConfig::Static { value } => choice::yaml_to_field_value(value)
                .map(|_| ())
                .ok_or_else(|| "static value must be a scalar".to_string()),
            _ => Ok(()),
        }
    }
}

impl FieldGenerator for GeneratorConfig {
    fn produce(&self, source: &mut FakeSource, index: u64) -> Result<FieldValue, GeneratorError> {
        let value: FieldValue = match self {
            GeneratorConfig::Name => source.generate_name().into(),
            GeneratorConfig::FirstName => source.generate_first_name().into(),
            GeneratorConfig::LastName => source.generate_last_name().into(),
            GeneratorConfig::City => source.generate_city().into(),
            GeneratorConfig::State => source.generate_state().into(),
            GeneratorConfig::Country => source.generate_country().into(),
            GeneratorConfig::Postcode => source.generate_postcode().into(),
            GeneratorConfig::StreetAddress => source.generate_street_address().into(),
            GeneratorConfig::PhoneNumber => source.generate_phone_number().into(),
            GeneratorConfig::Email => source.generate_email().into(),
            GeneratorConfig::CompanyName => source.generate_company_name().into(),
            GeneratorConfig::Job => source.generate_job().into(),
            GeneratorConfig::Username => source.generate_username().into(),
            GeneratorConfig::Password { length } => source.generate_password(*length)?.into(),
            GeneratorConfig::Ipv4 => source.generate_ipv4().into(),
            GeneratorConfig::MacAddress => source.generate_mac_address().into(),
            GeneratorConfig::UuidV4 => source.generate_uuid().into(),
            GeneratorConfig::Sentence { words } => source.generate_sentence(*words).into(),
            GeneratorConfig::Paragraph { sentences } => {
                source.generate_paragraph(*sentences).into()
            }
            GeneratorConfig::Pattern { pattern } => source.generate_pattern(pattern, index)?.into(),
            GeneratorConfig::Sequential { start } => {
                FieldValue::Int(start.wrapping_add(index as i64))
            }
            GeneratorConfig::IntRange { min, max } => {
                FieldValue::Int(source.generate_number(*min, *max)?)
            }
            GeneratorConfig::FloatRange { min, max, decimals } => {
                FieldValue::Float(source.generate_float(*min, *max, *decimals)?)
            }
            GeneratorConfig::Bool => FieldValue::Bool(source.generate_boolean()),
            GeneratorConfig::WeightedBool { true_weight } => {
                FieldValue::Bool(source.generate_weighted_boolean(*true_weight)?)
            }
            GeneratorConfig::DateTime { start, end } => {
                let start = parse_bound(start.as_deref(), timestamp::parse_datetime)?;
                let end = parse_bound(end.as_deref(), timestamp::parse_datetime)?;
                FieldValue::DateTime(source.generate_datetime(start, end)?)
            }
            GeneratorConfig::Date { start, end } => {
                let start = parse_bound(start.as_deref(), timestamp::parse_date)?;
                let end = parse_bound(end.as_deref(), timestamp::parse_date)?;
                FieldValue::Date(source.generate_date(start, end)?)
            }
            GeneratorConfig::Time => FieldValue::Time(source.generate_time()),
            GeneratorConfig::UnixTimestamp => FieldValue::Int(source.generate_unix_timestamp()),
            GeneratorConfig::BankAccount { length } => {
                source.generate_bank_account(*length).into()
            }
            GeneratorConfig::CreditCardNumber => source.generate_credit_card_number().into(),
            GeneratorConfig::CurrencyCode => source.generate_currency_code().into(),
            GeneratorConfig::OneOf { values } => {
                let picked = source.generate_enum_value(values)?;
                choice::yaml_to_field_value(&picked).ok_or_else(|| {
                    GeneratorError::InvalidInput(format!("one_of value {picked:?} is not a scalar"))
                })?
            }
            GeneratorConfig::Static { value } => {
                choice::yaml_to_field_value(value).ok_or_else(|| {
                    GeneratorError::InvalidInput(format!("static value {value:?} is not a scalar"))
                })?
            }
        };
        Ok(value)
    }
}

fn parse_bound<T>(
    raw: Option<&str>,
    parse: fn(&str) -> Option<T>,
) -> Result<Option<T>, GeneratorError> {
    match raw {
        None => Ok(None),
        Some(s) => parse(s)
            .map(Some)
            .ok_or_else(|| GeneratorError::InvalidInput(format!("cannot parse date bound '{s}'"))),
    }
}
