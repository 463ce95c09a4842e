//! # Result Formatting
//!
//! Compact number rendering for result displays:
//!
//! - Fixed-point with trailing zeros trimmed: `3.14000` shows as `3.14`
//! - Scientific when the magnitude is at least `scientific_upper` or below
//!   `scientific_lower`: `123456.789` shows as `1.2346e+5`
//! - Exact zero shows as `0`
//! - Undefined or non-finite values show the placeholder (`–`)
//!
//! ## Example
//!
//! ```rust
//! use gear_core::display::format_value;
//! use gear_core::settings::DisplaySettings;
//!
//! let settings = DisplaySettings::default();
//! assert_eq!(format_value(3.14, &settings), "3.14");
//! assert_eq!(format_value(0.0001234, &settings), "1.2340e-4");
//! assert_eq!(format_value(f64::NAN, &settings), "–");
//! ```

use serde::{Deserialize, Serialize};

use crate::settings::DisplaySettings;

/// Most digits shown after the decimal point; an f64 carries no more than this.
pub const MAX_DECIMALS: usize = 17;

/// Display strings for one calculation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedResult {
    pub ratio: String,
    pub output_speed: String,
    pub output_torque: String,
    pub direction: String,
}

/// Format a single value for display.
pub fn format_value(value: f64, settings: &DisplaySettings) -> String {
    if !value.is_finite() {
        return settings.placeholder.clone();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let decimals = settings.decimals.min(MAX_DECIMALS);
    let magnitude = value.abs();
    if magnitude >= settings.scientific_upper || magnitude < settings.scientific_lower {
        scientific(value, decimals)
    } else {
        fixed(value, decimals)
    }
}

/// Format a value that may be undefined.
pub fn format_optional(value: Option<f64>, settings: &DisplaySettings) -> String {
    match value {
        Some(v) => format_value(v, settings),
        None => settings.placeholder.clone(),
    }
}

fn fixed(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

// Rust renders exponents as `e5` / `e-4`; results show an explicit sign.
fn scientific(value: f64, decimals: usize) -> String {
    let text = format!("{:.*e}", decimals, value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) if exp < 0 => format!("{}e-{}", mantissa, -exp),
            Ok(exp) => format!("{}e+{}", mantissa, exp),
            Err(_) => text.clone(),
        },
        None => text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(value: f64) -> String {
        format_value(value, &DisplaySettings::default())
    }

    #[test]
    fn test_fixed_trims_zeros() {
        assert_eq!(fmt(3.14000), "3.14");
        assert_eq!(fmt(25.0), "25");
        assert_eq!(fmt(-500.0), "-500");
        assert_eq!(fmt(1.0 / 3.0), "0.3333");
        assert_eq!(fmt(0.001), "0.001");
        assert_eq!(fmt(99999.0), "99999");
    }

    #[test]
    fn test_scientific_large() {
        assert_eq!(fmt(123456.789), "1.2346e+5");
        assert_eq!(fmt(100000.0), "1.0000e+5");
        assert_eq!(fmt(-2.5e12), "-2.5000e+12");
    }

    #[test]
    fn test_scientific_small() {
        assert_eq!(fmt(0.0001234), "1.2340e-4");
        assert_eq!(fmt(-0.0005), "-5.0000e-4");
    }

    #[test]
    fn test_zero() {
        assert_eq!(fmt(0.0), "0");
        assert_eq!(fmt(-0.0), "0");
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(fmt(f64::INFINITY), "–");
        assert_eq!(fmt(f64::NAN), "–");
        assert_eq!(format_optional(None, &DisplaySettings::default()), "–");
        assert_eq!(format_optional(Some(4.0), &DisplaySettings::default()), "4");
    }

    #[test]
    fn test_custom_settings() {
        let settings = DisplaySettings {
            decimals: 2,
            scientific_upper: 1e3,
            scientific_lower: 1e-2,
            placeholder: "n/a".to_string(),
        };
        assert_eq!(format_value(3.14159, &settings), "3.14");
        assert_eq!(format_value(1500.0, &settings), "1.50e+3");
        assert_eq!(format_value(f64::NAN, &settings), "n/a");
    }

    #[test]
    fn test_oversized_decimals_are_capped() {
        let settings = DisplaySettings {
            decimals: 70_000,
            ..DisplaySettings::default()
        };
        assert_eq!(format_value(1.5, &settings), "1.5");
        assert_eq!(format_value(123456.0, &settings), format!("1.{:0<17}e+5", "23456"));
        assert_eq!(format_value(0.25, &settings), fixed(0.25, MAX_DECIMALS));
    }
}
