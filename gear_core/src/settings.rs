//! # Settings
//!
//! Display and input-coercion preferences, read from a JSON file. Every field
//! has a default, so a settings file only needs the keys it changes:
//!
//! ```json
//! {
//!   "display": { "decimals": 2 },
//!   "fallbacks": { "ring_teeth": 72.0 }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::{GearError, GearResult};

/// Root settings container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number formatting for results
    pub display: DisplaySettings,

    /// Values substituted for unparsable or non-finite entries
    pub fallbacks: InputFallbacks,
}

/// How result values are rendered as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Digits after the decimal point (fixed) or in the mantissa (scientific),
    /// capped at `display::MAX_DECIMALS` when formatting
    pub decimals: usize,

    /// Magnitudes at or above this switch to scientific notation
    pub scientific_upper: f64,

    /// Nonzero magnitudes below this switch to scientific notation
    pub scientific_lower: f64,

    /// Text shown for undefined values
    pub placeholder: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            decimals: 4,
            scientific_upper: 1e5,
            scientific_lower: 1e-3,
            placeholder: "–".to_string(),
        }
    }
}

/// Fallback values used when an entry cannot be read as a finite number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputFallbacks {
    /// Gears in a simple train
    pub gear_count: usize,
    /// Any simple or compound tooth count
    pub teeth: f64,
    /// Planetary sun tooth count
    pub sun_teeth: f64,
    /// Planetary ring tooth count
    pub ring_teeth: f64,
    /// Input speed (rev/min)
    pub input_speed_rpm: f64,
    /// Input torque
    pub input_torque: f64,
}

impl Default for InputFallbacks {
    fn default() -> Self {
        InputFallbacks {
            gear_count: 2,
            teeth: 1.0,
            sun_teeth: 20.0,
            ring_teeth: 60.0,
            input_speed_rpm: 0.0,
            input_torque: 0.0,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string.
    pub fn from_json_str(json: &str) -> GearResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> GearResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| GearError::file_error("read", path.display().to_string(), e.to_string()))?;
        let settings = Settings::from_json_str(&contents)?;
        info!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Load settings, falling back to defaults if the file is missing or bad.
    pub fn load_or_default(path: &Path) -> Self {
        match Settings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(error = %e, "using default settings");
                Settings::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.display.decimals, 4);
        assert_eq!(settings.display.placeholder, "–");
        assert_eq!(settings.fallbacks.sun_teeth, 20.0);
        assert_eq!(settings.fallbacks.ring_teeth, 60.0);
    }

    #[test]
    fn test_partial_json() {
        let settings = Settings::from_json_str(r#"{ "display": { "decimals": 2 } }"#).unwrap();
        assert_eq!(settings.display.decimals, 2);
        assert_eq!(settings.display.scientific_upper, 1e5);
        assert_eq!(settings.fallbacks, InputFallbacks::default());
    }

    #[test]
    fn test_empty_json() {
        assert_eq!(Settings::from_json_str("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_bad_json() {
        let err = Settings::from_json_str("{ display: 2 }").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_oversized_decimals_format() {
        let settings = Settings::from_json_str(r#"{ "display": { "decimals": 70000 } }"#).unwrap();
        assert_eq!(settings.display.decimals, 70000);
        assert_eq!(crate::display::format_value(1.5, &settings.display), "1.5");
    }

    #[test]
    fn test_missing_file() {
        let path = Path::new("definitely/not/here/gearcalc.json");
        let err = Settings::load(path).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
        assert_eq!(Settings::load_or_default(path), Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("gearcalc-settings-{}.json", std::process::id()));
        fs::write(&path, r#"{ "fallbacks": { "ring_teeth": 72.0 } }"#).unwrap();
        let settings = Settings::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(settings.fallbacks.ring_teeth, 72.0);
        assert_eq!(settings.display, DisplaySettings::default());
    }
}
