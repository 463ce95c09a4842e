//! # Gear Train Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `calculate(&input) -> CalculationResult` - Pure calculation function
//!
//! Calculations never return an error. When an input violates a domain
//! guard (non-positive tooth counts, a ring smaller than its sun) the result
//! comes back with every numeric field undefined and a short guard message in
//! place of the direction, so the caller can render it as "cannot compute".
//!
//! ## Available Calculations
//!
//! - [`simple`] - Serial train of N gears
//! - [`compound`] - Two-stage train on a common intermediate shaft
//! - [`planetary`] - Epicyclic set solved with the Willis equation

pub mod compound;
pub mod planetary;
pub mod simple;

use serde::{Deserialize, Serialize};

use crate::display::{format_optional, FormattedResult};
use crate::errors::GearResult;
use crate::settings::DisplaySettings;

// Re-export commonly used types
pub use compound::CompoundInput;
pub use planetary::{ElementSpeeds, PlanetaryElement, PlanetaryInput, PlanetaryMode};
pub use simple::GearListInput;

pub use compound::calculate as compute_compound_gear_train;
pub use planetary::calculate as compute_planetary_gear_train;
pub use simple::calculate as compute_simple_gear_train;

/// Rotation sense of the output relative to the input.
///
/// ## JSON Example
///
/// ```json
/// "reversed"
/// { "undefined": "Check Ns < Nr" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Output turns the same way as the input
    SameAsInput,
    /// Output turns opposite to the input
    Reversed,
    /// Inputs failed a guard; carries the message to show instead
    Undefined(String),
}

impl Direction {
    /// Direction from the number of reversals being odd or even.
    pub fn from_parity(reversed: bool) -> Self {
        if reversed {
            Direction::Reversed
        } else {
            Direction::SameAsInput
        }
    }

    /// Direction from comparing the signs of input and output speeds.
    ///
    /// Signs are three-valued (-1, 0, +1), so a stationary output against a
    /// turning input reads as reversed.
    pub fn from_signs(input: f64, output: f64) -> Self {
        Direction::from_parity(sign(input) != sign(output))
    }

    /// Display label
    pub fn label(&self) -> &str {
        match self {
            Direction::SameAsInput => "Same as input",
            Direction::Reversed => "Reversed",
            Direction::Undefined(reason) => reason.as_str(),
        }
    }
}

fn sign(value: f64) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

/// Outputs common to every gear train calculation.
///
/// `None` marks a value that cannot be computed (guard tripped, division by
/// zero, overflow). Every constructor maps non-finite numbers to `None`.
///
/// ## JSON Example
///
/// ```json
/// {
///   "ratio": 4.0,
///   "output_speed_rpm": 25.0,
///   "output_torque": 40.0,
///   "direction": "same_as_input"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Speed ratio magnitude |n_in / n_out|
    pub ratio: Option<f64>,

    /// Signed output speed (rev/min)
    pub output_speed_rpm: Option<f64>,

    /// Signed output torque, same unit as the input torque
    pub output_torque: Option<f64>,

    /// Output rotation sense, or the guard message
    pub direction: Direction,
}

impl CalculationResult {
    /// Build a result, dropping any non-finite value to undefined.
    pub fn new(ratio: f64, output_speed_rpm: f64, output_torque: f64, direction: Direction) -> Self {
        CalculationResult {
            ratio: finite(ratio),
            output_speed_rpm: finite(output_speed_rpm),
            output_torque: finite(output_torque),
            direction,
        }
    }

    /// Sentinel result for inputs that fail a guard.
    pub fn undefined(reason: impl Into<String>) -> Self {
        CalculationResult {
            ratio: None,
            output_speed_rpm: None,
            output_torque: None,
            direction: Direction::Undefined(reason.into()),
        }
    }

    /// True when every numeric output could be computed
    pub fn is_defined(&self) -> bool {
        self.ratio.is_some() && self.output_speed_rpm.is_some() && self.output_torque.is_some()
    }

    /// Render all four outputs as display strings.
    pub fn formatted(&self, settings: &DisplaySettings) -> FormattedResult {
        FormattedResult {
            ratio: format_optional(self.ratio, settings),
            output_speed: format_optional(self.output_speed_rpm, settings),
            output_torque: format_optional(self.output_torque, settings),
            direction: self.direction.label().to_string(),
        }
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Enum wrapper for all calculation types.
///
/// Lets a driver hold whichever train the user picked and serialize it as a
/// single tagged JSON object.
///
/// ## JSON Example
///
/// ```json
/// {
///   "type": "Planetary",
///   "sun_teeth": 20.0,
///   "ring_teeth": 60.0,
///   "mode": "sun_in_ring_fixed_carrier_out",
///   "input_speed_rpm": 100.0,
///   "input_torque": 10.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Serial gear train
    Simple(GearListInput),
    /// Two-stage compound train
    Compound(CompoundInput),
    /// Planetary set
    Planetary(PlanetaryInput),
}

impl CalculationItem {
    /// Run the matching calculator
    pub fn calculate(&self) -> CalculationResult {
        match self {
            CalculationItem::Simple(input) => simple::calculate(input),
            CalculationItem::Compound(input) => compound::calculate(input),
            CalculationItem::Planetary(input) => planetary::calculate(input),
        }
    }

    /// Check the input against its calculator's guards
    pub fn validate(&self) -> GearResult<()> {
        match self {
            CalculationItem::Simple(input) => input.validate(),
            CalculationItem::Compound(input) => input.validate(),
            CalculationItem::Planetary(input) => input.validate(),
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Simple(_) => "Simple",
            CalculationItem::Compound(_) => "Compound",
            CalculationItem::Planetary(_) => "Planetary",
        }
    }
}
