//! Numeric bounds checks and rounding.

use crate::error::GeneratorError;

/// Largest number of decimal places a float generator may round to.
pub const MAX_DECIMALS: u32 = 15;

pub fn check_bounds(min: i64, max: i64) -> Result<(), GeneratorError> {
    if min > max {
        return Err(GeneratorError::InvalidInput(format!(
            "min {min} is greater than max {max}"
        )));
    }
    Ok(())
}

pub fn check_float_bounds(min: f64, max: f64, decimals: u32) -> Result<(), GeneratorError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(GeneratorError::InvalidInput(
            "float bounds must be finite".to_string(),
        ));
    }
    if min > max {
        return Err(GeneratorError::InvalidInput(format!(
            "min {min} is greater than max {max}"
        )));
    }
    if !(max - min).is_finite() {
        return Err(GeneratorError::InvalidInput(format!(
            "range [{min}, {max}] is too wide to sample"
        )));
    }
    if decimals > MAX_DECIMALS {
        return Err(GeneratorError::InvalidInput(format!(
            "decimals {decimals} exceeds {MAX_DECIMALS}"
        )));
    }
    let factor = 10f64.powi(decimals as i32);
    if (min * factor).ceil() > (max * factor).floor() {
        return Err(GeneratorError::InvalidInput(format!(
            "no value with {decimals} decimals lies in [{min}, {max}]"
        )));
    }
    Ok(())
}

/// Round `value` to `decimals` places without leaving `[min, max]`.
///
/// When plain rounding crosses a bound, the nearest grid point inside the
/// bound is used instead. The range must hold at least one grid point, which
/// [`check_float_bounds`] guarantees.
pub fn round_within(value: f64, min: f64, max: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let mut rounded = (value * factor).round() / factor;
    if rounded > max {
        rounded = (max * factor).floor() / factor;
    }
    if rounded < min {
        rounded = (min * factor).ceil() / factor;
    }
    rounded.clamp(min, max)
}
