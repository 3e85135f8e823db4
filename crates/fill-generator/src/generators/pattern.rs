//! Pattern-based string generator.
//!
//! Supports placeholders:
//! - `{index}` - global row index
//! - `{uuid}` - random UUID drawn from the seeded source
//! - `{rand:N}` - random N-digit number, N at most [`MAX_RAND_DIGITS`]

use crate::error::GeneratorError;
use crate::source::FakeSource;
use rand::Rng;

/// Longest random number a `{rand:N}` placeholder may ask for.
pub const MAX_RAND_DIGITS: usize = 64;

/// Digit counts of the numeric `{rand:N}` placeholders in `pattern`, `None`
/// where N is over the cap.
fn rand_placeholders(pattern: &str) -> impl Iterator<Item = Option<usize>> + '_ {
    pattern.split("{rand:").skip(1).filter_map(|rest| {
        let end = rest.find('}')?;
        let digits = &rest[..end];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(digits.parse::<usize>().ok().filter(|n| *n <= MAX_RAND_DIGITS))
    })
}

/// Reject patterns whose `{rand:N}` placeholders ask for too many digits.
pub fn check(pattern: &str) -> Result<(), GeneratorError> {
    if rand_placeholders(pattern).any(|digits| digits.is_none()) {
        return Err(GeneratorError::InvalidInput(format!(
            "{{rand:N}} in pattern '{pattern}' exceeds {MAX_RAND_DIGITS} digits"
        )));
    }
    Ok(())
}

/// Expand all placeholders in `pattern`.
pub fn expand(
    source: &mut FakeSource,
    pattern: &str,
    index: u64,
) -> Result<String, GeneratorError> {
    check(pattern)?;
    let mut result = pattern.replace("{index}", &index.to_string());

    while result.contains("{uuid}") {
        let uuid = source.generate_uuid();
        result = result.replacen("{uuid}", &uuid, 1);
    }

    let mut search_from = 0;
    while let Some(found) = result[search_from..].find("{rand:") {
        let start = search_from + found;
        let Some(len) = result[start..].find('}') else {
            break;
        };
        let end = start + len;
        match result[start + 6..end].parse::<usize>() {
            Ok(digits) if digits > MAX_RAND_DIGITS => {
                return Err(GeneratorError::InvalidInput(format!(
                    "{{rand:{digits}}} exceeds {MAX_RAND_DIGITS} digits"
                )));
            }
            Ok(digits) => {
                let random_num = random_digits(source, digits);
                result = format!("{}{}{}", &result[..start], random_num, &result[end + 1..]);
                search_from = start + random_num.len();
            }
            // Leave malformed placeholders untouched.
            Err(_) => search_from = end + 1,
        }
    }

    Ok(result)
}

/// N-digit number without a leading zero.
fn random_digits(source: &mut FakeSource, digits: usize) -> String {
    if digits == 0 {
        return String::new();
    }
    let rng = source.rng();
    let mut out = String::with_capacity(digits);
    out.push(char::from(b'0' + rng.gen_range(1..10u8)));
    for _ in 1..digits {
        out.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }
    out
}
