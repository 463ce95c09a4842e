//! # Entry Coercion
//!
//! Raw text from a form field or prompt never reaches a calculator as-is.
//! Anything that does not parse to a finite number is replaced by a fallback
//! value, so a half-typed entry degrades to a known input instead of an
//! error.

use crate::calculations::simple::{MAX_GEAR_COUNT, MIN_GEAR_COUNT};

/// Parse a numeric entry, substituting `fallback` for empty, unparsable, or
/// non-finite text.
///
/// ```rust
/// use gear_core::entry::number_or;
///
/// assert_eq!(number_or(" 42.5 ", 0.0), 42.5);
/// assert_eq!(number_or("abc", 20.0), 20.0);
/// assert_eq!(number_or("inf", 1.0), 1.0);
/// ```
pub fn number_or(raw: &str, fallback: f64) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => fallback,
    }
}

/// Parse a gear-count entry: coerced, floored, and clamped to
/// `MIN_GEAR_COUNT..=MAX_GEAR_COUNT`.
///
/// ```rust
/// use gear_core::entry::gear_count_or;
///
/// assert_eq!(gear_count_or("4.7", 2), 4);
/// assert_eq!(gear_count_or("1", 2), 2);
/// assert_eq!(gear_count_or("", 3), 3);
/// assert_eq!(gear_count_or("1e15", 2), 26);
/// ```
pub fn gear_count_or(raw: &str, fallback: usize) -> usize {
    let value = number_or(raw, fallback as f64).floor();
    if value < MIN_GEAR_COUNT as f64 {
        MIN_GEAR_COUNT
    } else if value > MAX_GEAR_COUNT as f64 {
        MAX_GEAR_COUNT
    } else {
        value as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_parsing() {
        assert_eq!(number_or("100", 0.0), 100.0);
        assert_eq!(number_or("-12.5", 0.0), -12.5);
        assert_eq!(number_or("1e3", 0.0), 1000.0);
    }

    #[test]
    fn test_number_fallback() {
        assert_eq!(number_or("", 7.0), 7.0);
        assert_eq!(number_or("   ", 7.0), 7.0);
        assert_eq!(number_or("12abc", 7.0), 7.0);
        assert_eq!(number_or("NaN", 7.0), 7.0);
        assert_eq!(number_or("-inf", 7.0), 7.0);
    }

    #[test]
    fn test_gear_count() {
        assert_eq!(gear_count_or("5", 2), 5);
        assert_eq!(gear_count_or("2.99", 2), 2);
        assert_eq!(gear_count_or("-3", 2), 2);
        assert_eq!(gear_count_or("junk", 6), 6);
        assert_eq!(gear_count_or("junk", 0), 2);
    }

    #[test]
    fn test_gear_count_upper_bound() {
        assert_eq!(gear_count_or("26", 2), MAX_GEAR_COUNT);
        assert_eq!(gear_count_or("27", 2), MAX_GEAR_COUNT);
        assert_eq!(gear_count_or("1e15", 2), MAX_GEAR_COUNT);
        assert_eq!(gear_count_or("junk", usize::MAX), MAX_GEAR_COUNT);
    }
}
