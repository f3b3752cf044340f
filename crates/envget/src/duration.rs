//! Duration strings such as `300ms`, `1.5h` or `2h45m`
//!
//! A duration is an optional sign followed by one or more components, each a
//! decimal number with an optional fraction and a unit suffix. Accepted units
//! are `ns`, `us` (or `µs`/`μs`), `ms`, `s`, `m` and `h`. The bare string `0`
//! needs no unit.
//!
//! The result is an unsigned [`Duration`], so a negative non-zero value such
//! as `-1s` is rejected with [`DurationError::Negative`]. `-0s` is zero.

use std::time::Duration;

/// Largest magnitude any intermediate sum may reach, in nanoseconds.
const LIMIT: u64 = 1 << 63;

/// Largest duration that can be represented, in nanoseconds.
const MAX_NANOS: u64 = i64::MAX as u64;

/// Reasons a duration string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    #[error("empty duration")]
    Empty,

    #[error("expected a number")]
    MissingNumber,

    #[error("missing unit")]
    MissingUnit,

    #[error("unknown unit {0:?}")]
    UnknownUnit(String),

    #[error("value out of range")]
    Overflow,

    #[error("negative durations are not representable")]
    Negative,
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "\u{b5}s" | "\u{3bc}s" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(1_000_000_000),
        "m" => Some(60 * 1_000_000_000),
        "h" => Some(60 * 60 * 1_000_000_000),
        _ => None,
    }
}

/// Consume leading ASCII digits as an integer.
///
/// Returns the value, the unconsumed rest and whether any digit was read.
fn leading_int(s: &str) -> Result<(u64, &str, bool), DurationError> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let mut value: u64 = 0;
    for digit in s[..end].bytes() {
        if value > LIMIT / 10 {
            return Err(DurationError::Overflow);
        }
        value = value * 10 + u64::from(digit - b'0');
        if value > LIMIT {
            return Err(DurationError::Overflow);
        }
    }
    Ok((value, &s[end..], end > 0))
}

/// Consume the digits after a decimal point.
///
/// Digits past the representable precision are consumed but ignored.
/// Returns the fraction as an integer, its scale, the rest and whether any
/// digit was read.
fn leading_fraction(s: &str) -> (u64, f64, &str, bool) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let mut value: u64 = 0;
    let mut scale = 1.0_f64;
    let mut saturated = false;
    for digit in s[..end].bytes() {
        if saturated {
            continue;
        }
        if value > MAX_NANOS / 10 {
            saturated = true;
            continue;
        }
        let next = value * 10 + u64::from(digit - b'0');
        if next > LIMIT {
            saturated = true;
            continue;
        }
        value = next;
        scale *= 10.0;
    }
    (value, scale, &s[end..], end > 0)
}

/// Parse a duration string.
///
/// Leading and trailing whitespace is not accepted here; callers trim first.
///
/// ```
/// use std::time::Duration;
/// use envget::duration::parse_duration;
///
/// assert_eq!(parse_duration("1h30m").unwrap(), Duration::from_secs(90 * 60));
/// assert_eq!(parse_duration("300ms").unwrap(), Duration::from_millis(300));
/// assert!(parse_duration("banana").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let mut s = input;
    let mut negative = false;
    if let Some(rest) = s.strip_prefix('-') {
        negative = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }

    if s == "0" {
        return Ok(Duration::ZERO);
    }
    if s.is_empty() {
        return Err(DurationError::Empty);
    }

    let mut total: u64 = 0;
    while !s.is_empty() {
        if !s.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
            return Err(DurationError::MissingNumber);
        }

        let (whole, rest, has_whole) = leading_int(s)?;
        s = rest;

        let mut fraction = 0;
        let mut scale = 1.0;
        let mut has_fraction = false;
        if let Some(rest) = s.strip_prefix('.') {
            let (f, sc, rest, consumed) = leading_fraction(rest);
            fraction = f;
            scale = sc;
            has_fraction = consumed;
            s = rest;
        }
        if !has_whole && !has_fraction {
            return Err(DurationError::MissingNumber);
        }

        let unit_len = s
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(s.len());
        if unit_len == 0 {
            return Err(DurationError::MissingUnit);
        }
        let unit = &s[..unit_len];
        let unit_value =
            unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit(unit.to_string()))?;
        s = &s[unit_len..];

        if whole > LIMIT / unit_value {
            return Err(DurationError::Overflow);
        }
        let mut component = whole * unit_value;
        if fraction > 0 {
            // Float math keeps `0.1ns`-style fractions from truncating early.
            component += (fraction as f64 * (unit_value as f64 / scale)) as u64;
            if component > LIMIT {
                return Err(DurationError::Overflow);
            }
        }
        total = total
            .checked_add(component)
            .ok_or(DurationError::Overflow)?;
        if total > LIMIT {
            return Err(DurationError::Overflow);
        }
    }

    if total > MAX_NANOS {
        return Err(DurationError::Overflow);
    }
    if negative && total != 0 {
        return Err(DurationError::Negative);
    }
    Ok(Duration::from_nanos(total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_duration() {
        assert_eq!(
            parse_duration("2h45m").unwrap(),
            Duration::from_secs(2 * 3600 + 45 * 60)
        );
        assert_eq!(
            parse_duration("1h2m3s4ms5us6ns").unwrap(),
            Duration::new(3723, 4_005_006)
        );
    }

    #[test]
    fn test_fractional_components() {
        assert_eq!(parse_duration("1.5h").unwrap(), Duration::from_secs(5400));
        assert_eq!(parse_duration(".5s").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_duration("1.s").unwrap(), Duration::from_secs(1));
        assert_eq!(parse_duration("0.001ms").unwrap(), Duration::from_nanos(1000));
    }

    #[test]
    fn test_micro_sign_variants() {
        let expected = Duration::from_micros(7);
        assert_eq!(parse_duration("7us").unwrap(), expected);
        assert_eq!(parse_duration("7\u{b5}s").unwrap(), expected);
        assert_eq!(parse_duration("7\u{3bc}s").unwrap(), expected);
    }

    #[test]
    fn test_zero_forms() {
        assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("-0").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("+0").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("-0s").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("0s").unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_rejected_inputs() {
        assert_eq!(parse_duration(""), Err(DurationError::Empty));
        assert_eq!(parse_duration("-"), Err(DurationError::Empty));
        assert_eq!(parse_duration("10"), Err(DurationError::MissingUnit));
        assert_eq!(parse_duration("."), Err(DurationError::MissingNumber));
        assert_eq!(parse_duration(".s"), Err(DurationError::MissingNumber));
        assert_eq!(parse_duration("s"), Err(DurationError::MissingNumber));
        assert_eq!(
            parse_duration("3d"),
            Err(DurationError::UnknownUnit("d".to_string()))
        );
        assert_eq!(
            parse_duration("1h 30m"),
            Err(DurationError::UnknownUnit("h ".to_string()))
        );
        assert_eq!(parse_duration("-5s"), Err(DurationError::Negative));
    }

    #[test]
    fn test_range_limits() {
        assert_eq!(
            parse_duration("9223372036854775807ns").unwrap(),
            Duration::from_nanos(i64::MAX as u64)
        );
        assert_eq!(
            parse_duration("9223372036854775808ns"),
            Err(DurationError::Overflow)
        );
        assert_eq!(parse_duration("3000000h"), Err(DurationError::Overflow));
        assert_eq!(
            parse_duration("99999999999999999999s"),
            Err(DurationError::Overflow)
        );
    }
}
