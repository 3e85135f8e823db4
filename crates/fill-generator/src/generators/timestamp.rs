//! Timestamp, date and time-of-day generators.

use crate::error::GeneratorError;
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rand::Rng;

/// Default lookback window when a range bound is omitted.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 365;

const SECONDS_PER_DAY: u32 = 86_400;

/// Fill missing bounds with `[now - 365d, now]`.
pub fn resolve_datetime_range(
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> (NaiveDateTime, NaiveDateTime) {
    let end = end.unwrap_or_else(|| Local::now().naive_local());
    let start = start.unwrap_or_else(|| end - Duration::days(DEFAULT_LOOKBACK_DAYS));
    (start, end)
}

/// Fill missing bounds with `[today - 365d, today]`.
pub fn resolve_date_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> (NaiveDate, NaiveDate) {
    let end = end.unwrap_or_else(|| Local::now().date_naive());
    let start = start.unwrap_or_else(|| end - Duration::days(DEFAULT_LOOKBACK_DAYS));
    (start, end)
}

/// Random datetime in `[start, end]` at second precision.
pub fn datetime_between<R: Rng>(
    rng: &mut R,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<NaiveDateTime, GeneratorError> {
    let start_ts = start.and_utc().timestamp();
    let end_ts = end.and_utc().timestamp();
    if start_ts > end_ts {
        return Err(GeneratorError::InvalidInput(format!(
            "datetime range start {start} is after end {end}"
        )));
    }

    let random_ts = rng.gen_range(start_ts..=end_ts);
    Ok(DateTime::from_timestamp(random_ts, 0)
        .map(|dt| dt.naive_utc())
        .unwrap_or(start))
}

/// Random date in `[start, end]`.
pub fn date_between<R: Rng>(
    rng: &mut R,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<NaiveDate, GeneratorError> {
    if start > end {
        return Err(GeneratorError::InvalidInput(format!(
            "date range start {start} is after end {end}"
        )));
    }
    let span = (end - start).num_days();
    let offset = rng.gen_range(0..=span);
    Ok(start + Duration::days(offset))
}

pub fn time_of_day<R: Rng>(rng: &mut R) -> NaiveTime {
    let secs = rng.gen_range(0..SECONDS_PER_DAY);
    NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap_or(NaiveTime::MIN)
}

pub fn unix_timestamp<R: Rng>(rng: &mut R) -> i64 {
    let now = Utc::now().timestamp();
    rng.gen_range(0..=now)
}

/// Parse a datetime bound from config text.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` and a
/// bare `YYYY-MM-DD` (midnight).
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for layout in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, layout) {
            return Some(dt);
        }
    }
    parse_date(s).and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse a `YYYY-MM-DD` date bound.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
