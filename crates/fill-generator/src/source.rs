//! Seeded source of fake values.
//!
//! `FakeSource` bundles an explicit pseudorandom generator with a locale and
//! exposes one method per semantic value type. Every method draws from the
//! source's own RNG, so two sources created with the same seed and locale
//! produce identical sequences.

use crate::error::GeneratorError;
use crate::generators::{numeric, pattern, timestamp};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use fake::faker::address::raw::{
    BuildingNumber, CityName, CountryName, PostCode, StateName, StreetName,
};
use fake::faker::company::raw::CompanyName;
use fake::faker::creditcard::raw::CreditCardNumber;
use fake::faker::currency::raw::CurrencyCode;
use fake::faker::internet::raw::{FreeEmail, IPv4, MACAddress, Password, Username};
use fake::faker::job::raw::Title;
use fake::faker::lorem::raw::{Paragraph, Sentence};
use fake::faker::name::raw::{FirstName, LastName, Name};
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::{EN, FR_FR, ZH_CN, ZH_TW};
use fake::Fake;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Locale of the fake-data catalogs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    FrFr,
    ZhCn,
    ZhTw,
}

impl FromStr for Locale {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "en" | "en_us" => Ok(Locale::En),
            "fr_fr" => Ok(Locale::FrFr),
            "zh_cn" => Ok(Locale::ZhCn),
            "zh_tw" => Ok(Locale::ZhTw),
            other => Err(GeneratorError::InvalidInput(format!(
                "unsupported locale '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Locale::En => "en",
            Locale::FrFr => "fr_fr",
            Locale::ZhCn => "zh_cn",
            Locale::ZhTw => "zh_tw",
        };
        f.write_str(name)
    }
}

/// Dispatch a `fake` raw faker over the source's locale.
macro_rules! localized {
    ($self:ident, $faker:ident $(, $arg:expr)*) => {
        match $self.locale {
            Locale::En => $faker(EN $(, $arg)*).fake_with_rng(&mut $self.rng),
            Locale::FrFr => $faker(FR_FR $(, $arg)*).fake_with_rng(&mut $self.rng),
            Locale::ZhCn => $faker(ZH_CN $(, $arg)*).fake_with_rng(&mut $self.rng),
            Locale::ZhTw => $faker(ZH_TW $(, $arg)*).fake_with_rng(&mut $self.rng),
        }
    };
}

/// Seeded pseudorandom source of fake values.
pub struct FakeSource {
    rng: StdRng,
    locale: Locale,
    seed: Option<u64>,
}

impl FakeSource {
    /// Create an unseeded source. Output differs between runs.
    pub fn new(locale: Locale) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            locale,
            seed: None,
        }
    }

    /// Create a source whose output is fully determined by `seed`.
    pub fn with_seed(locale: Locale, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            locale,
            seed: Some(seed),
        }
    }

    /// Re-seed the source; all subsequent output becomes reproducible.
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.seed = Some(seed);
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Direct access to the underlying RNG for custom generators.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    // Names

    pub fn generate_name(&mut self) -> String {
        localized!(self, Name)
    }

    pub fn generate_first_name(&mut self) -> String {
        localized!(self, FirstName)
    }

    pub fn generate_last_name(&mut self) -> String {
        localized!(self, LastName)
    }

    // Address

    pub fn generate_city(&mut self) -> String {
        localized!(self, CityName)
    }

    /// State or province name.
    pub fn generate_state(&mut self) -> String {
        localized!(self, StateName)
    }

    pub fn generate_country(&mut self) -> String {
        localized!(self, CountryName)
    }

    pub fn generate_postcode(&mut self) -> String {
        localized!(self, PostCode)
    }

    /// Building number followed by a street name.
    pub fn generate_street_address(&mut self) -> String {
        let number: String = localized!(self, BuildingNumber);
        let street: String = localized!(self, StreetName);
        format!("{number} {street}")
    }

    // Contact

    pub fn generate_phone_number(&mut self) -> String {
        localized!(self, PhoneNumber)
    }

    pub fn generate_email(&mut self) -> String {
        localized!(self, FreeEmail)
    }

    // Company

    pub fn generate_company_name(&mut self) -> String {
        localized!(self, CompanyName)
    }

    pub fn generate_job(&mut self) -> String {
        localized!(self, Title)
    }

    // Internet

    pub fn generate_username(&mut self) -> String {
        localized!(self, Username)
    }

    /// Password of exactly `length` characters.
    pub fn generate_password(&mut self, length: usize) -> Result<String, GeneratorError> {
        if length == 0 {
            return Err(GeneratorError::InvalidInput(
                "password length must be positive".to_string(),
            ));
        }
        Ok(localized!(self, Password, length..length + 1))
    }

    pub fn generate_ipv4(&mut self) -> String {
        localized!(self, IPv4)
    }

    pub fn generate_mac_address(&mut self) -> String {
        localized!(self, MACAddress)
    }

    /// Random (v4 layout) UUID drawn from the seeded RNG.
    pub fn generate_uuid(&mut self) -> String {
        let bytes: [u8; 16] = self.rng.gen();
        uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .to_string()
    }

    // Text

    /// Sentence of roughly `words` words.
    pub fn generate_sentence(&mut self, words: usize) -> String {
        let words = words.max(1);
        localized!(self, Sentence, words..words + 1)
    }

    /// Paragraph of roughly `sentences` sentences.
    pub fn generate_paragraph(&mut self, sentences: usize) -> String {
        let sentences = sentences.max(1);
        localized!(self, Paragraph, sentences..sentences + 1)
    }

    /// Expand `{index}`, `{uuid}` and `{rand:N}` placeholders.
    pub fn generate_pattern(
        &mut self,
        pattern: &str,
        index: u64,
    ) -> Result<String, GeneratorError> {
        pattern::expand(self, pattern, index)
    }

    // Numbers

    /// Integer in `[min, max]`.
    pub fn generate_number(&mut self, min: i64, max: i64) -> Result<i64, GeneratorError> {
        numeric::check_bounds(min, max)?;
        Ok(self.rng.gen_range(min..=max))
    }

    /// Float in `[min, max]` rounded to `decimals` places.
    pub fn generate_float(
        &mut self,
        min: f64,
        max: f64,
        decimals: u32,
    ) -> Result<f64, GeneratorError> {
        numeric::check_float_bounds(min, max, decimals)?;
        let raw = self.rng.gen_range(min..=max);
        Ok(numeric::round_within(raw, min, max, decimals))
    }

    pub fn generate_boolean(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// Boolean that is `true` with probability `true_weight`.
    pub fn generate_weighted_boolean(&mut self, true_weight: f64) -> Result<bool, GeneratorError> {
        if !(0.0..=1.0).contains(&true_weight) {
            return Err(GeneratorError::InvalidInput(format!(
                "true_weight {true_weight} outside [0, 1]"
            )));
        }
        Ok(self.rng.gen_bool(true_weight))
    }

    // Time

    /// Datetime in `[start, end]`, second precision.
    ///
    /// Missing bounds default to the last 365 days ending now, so the output
    /// is only reproducible when both bounds are given.
    pub fn generate_datetime(
        &mut self,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) -> Result<NaiveDateTime, GeneratorError> {
        let (start, end) = timestamp::resolve_datetime_range(start, end);
        timestamp::datetime_between(&mut self.rng, start, end)
    }

    /// Date in `[start, end]`, defaulting to the last year.
    pub fn generate_date(
        &mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<NaiveDate, GeneratorError> {
        let (start, end) = timestamp::resolve_date_range(start, end);
        timestamp::date_between(&mut self.rng, start, end)
    }

    pub fn generate_time(&mut self) -> NaiveTime {
        timestamp::time_of_day(&mut self.rng)
    }

    /// Seconds since the Unix epoch, up to now.
    pub fn generate_unix_timestamp(&mut self) -> i64 {
        timestamp::unix_timestamp(&mut self.rng)
    }

    // Finance

    /// String of `length` decimal digits.
    pub fn generate_bank_account(&mut self, length: usize) -> String {
        (0..length)
            .map(|_| char::from(b'0' + self.rng.gen_range(0..10u8)))
            .collect()
    }

    pub fn generate_credit_card_number(&mut self) -> String {
        localized!(self, CreditCardNumber)
    }

    pub fn generate_currency_code(&mut self) -> String {
        localized!(self, CurrencyCode)
    }

    // Choice

    /// Pick one member of `choices`.
    pub fn generate_enum_value<T: Clone>(&mut self, choices: &[T]) -> Result<T, GeneratorError> {
        choices
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| GeneratorError::InvalidInput("choice set must not be empty".to_string()))
    }
}

impl fmt::Debug for FakeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FakeSource")
            .field("locale", &self.locale)
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_output() {
        let mut a = FakeSource::with_seed(Locale::ZhCn, 7);
        let mut b = FakeSource::with_seed(Locale::ZhCn, 7);

        for _ in 0..20 {
            assert_eq!(a.generate_name(), b.generate_name());
            assert_eq!(a.generate_city(), b.generate_city());
            assert_eq!(
                a.generate_number(18, 65).unwrap(),
                b.generate_number(18, 65).unwrap()
            );
        }
    }

    #[test]
    fn test_set_seed_resets_sequence() {
        let mut source = FakeSource::new(Locale::En);
        source.set_seed(99);
        let first: Vec<String> = (0..5).map(|_| source.generate_email()).collect();
        source.set_seed(99);
        let second: Vec<String> = (0..5).map(|_| source.generate_email()).collect();

        assert_eq!(first, second);
        assert_eq!(source.seed(), Some(99));
    }

    #[test]
    fn test_generate_number_inclusive_bounds() {
        let mut source = FakeSource::with_seed(Locale::En, 42);
        let mut seen_min = false;
        let mut seen_max = false;

        for _ in 0..1000 {
            let n = source.generate_number(1, 3).unwrap();
            assert!((1..=3).contains(&n));
            seen_min |= n == 1;
            seen_max |= n == 3;
        }
        assert!(seen_min && seen_max);

        assert_eq!(source.generate_number(5, 5).unwrap(), 5);
        assert!(matches!(
            source.generate_number(10, 1),
            Err(GeneratorError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_generate_float_bounds_and_precision() {
        let mut source = FakeSource::with_seed(Locale::En, 42);

        for _ in 0..1000 {
            let v = source.generate_float(3000.0, 50000.0, 2).unwrap();
            assert!((3000.0..=50000.0).contains(&v));
            let scaled = v * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-6, "{v} not rounded");
        }
    }

    #[test]
    fn test_generate_float_rejects_unusable_ranges() {
        let mut source = FakeSource::with_seed(Locale::En, 42);
        assert!(matches!(
            source.generate_float(-1.0e308, 1.0e308, 2),
            Err(GeneratorError::InvalidInput(_))
        ));
        assert!(matches!(
            source.generate_float(0.5, 0.6, 0),
            Err(GeneratorError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_enum_value() {
        let mut source = FakeSource::with_seed(Locale::ZhCn, 42);
        let departments = ["技术部", "销售部", "市场部"];

        for _ in 0..100 {
            let picked = source.generate_enum_value(&departments).unwrap();
            assert!(departments.contains(&picked));
        }

        let empty: [&str; 0] = [];
        assert!(matches!(
            source.generate_enum_value(&empty),
            Err(GeneratorError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_text_generators_not_empty() {
        let mut source = FakeSource::with_seed(Locale::En, 3);

        assert!(!source.generate_first_name().is_empty());
        assert!(!source.generate_last_name().is_empty());
        assert!(!source.generate_street_address().is_empty());
        assert!(!source.generate_phone_number().is_empty());
        assert!(source.generate_email().contains('@'));
        assert!(!source.generate_company_name().is_empty());
        assert_eq!(source.generate_ipv4().split('.').count(), 4);
        assert_eq!(source.generate_uuid().len(), 36);
    }

    #[test]
    fn test_password_length() {
        let mut source = FakeSource::with_seed(Locale::En, 3);
        assert_eq!(source.generate_password(12).unwrap().chars().count(), 12);
        assert!(source.generate_password(0).is_err());
    }

    #[test]
    fn test_bank_account_digits() {
        let mut source = FakeSource::with_seed(Locale::En, 3);
        let account = source.generate_bank_account(16);
        assert_eq!(account.len(), 16);
        assert!(account.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_weighted_boolean() {
        let mut source = FakeSource::with_seed(Locale::En, 3);
        assert!(source.generate_weighted_boolean(1.0).unwrap());
        assert!(!source.generate_weighted_boolean(0.0).unwrap());
        assert!(source.generate_weighted_boolean(1.5).is_err());
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("zh-CN".parse::<Locale>().unwrap(), Locale::ZhCn);
        assert_eq!("en_US".parse::<Locale>().unwrap(), Locale::En);
        assert!("xx".parse::<Locale>().is_err());
        assert_eq!(Locale::FrFr.to_string(), "fr_fr");
    }
}
