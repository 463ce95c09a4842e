//! # Planetary Gear Train Calculation
//!
//! Solves a simple planetary set (sun, carrier with planets, internal ring)
//! with the Willis equation. An operating mode picks which element is driven,
//! which is held stationary, and which is taken as output.
//!
//! ## Modes
//!
//! | Mode                              | Input   | Fixed   | Output  |
//! |-----------------------------------|---------|---------|---------|
//! | `sun_in_ring_fixed_carrier_out`   | Sun     | Ring    | Carrier |
//! | `ring_in_sun_fixed_carrier_out`   | Ring    | Sun     | Carrier |
//! | `sun_in_carrier_fixed_ring_out`   | Sun     | Carrier | Ring    |
//! | `carrier_in_ring_fixed_sun_out`   | Carrier | Ring    | Sun     |
//! | `carrier_in_sun_fixed_ring_out`   | Carrier | Sun     | Ring    |
//! | `ring_in_carrier_fixed_sun_out`   | Ring    | Carrier | Sun     |
//!
//! ## Example
//!
//! ```rust
//! use gear_core::calculations::planetary::{calculate, PlanetaryInput, PlanetaryMode};
//! use gear_core::calculations::Direction;
//!
//! let input = PlanetaryInput {
//!     sun_teeth: 20.0,
//!     ring_teeth: 60.0,
//!     mode: PlanetaryMode::SunInRingFixedCarrierOut,
//!     input_speed_rpm: 100.0,
//!     input_torque: 10.0,
//! };
//!
//! let result = calculate(&input);
//! assert_eq!(result.ratio, Some(4.0));
//! assert_eq!(result.output_speed_rpm, Some(25.0));
//! assert_eq!(result.output_torque, Some(40.0));
//! assert_eq!(result.direction, Direction::SameAsInput);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::{CalculationResult, Direction};
use crate::equations::willis;
use crate::errors::{GearError, GearResult};

/// Message shown in place of the direction when the tooth counts cannot
/// form a planetary set.
pub const GUARD_LABEL: &str = "Check Ns < Nr";

/// The three coaxial members of a planetary set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanetaryElement {
    Sun,
    Ring,
    Carrier,
}

impl PlanetaryElement {
    pub fn display_name(self) -> &'static str {
        match self {
            PlanetaryElement::Sun => "Sun",
            PlanetaryElement::Ring => "Ring",
            PlanetaryElement::Carrier => "Carrier",
        }
    }
}

/// Which element is driven, which is held, and which is taken as output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanetaryMode {
    SunInRingFixedCarrierOut,
    RingInSunFixedCarrierOut,
    SunInCarrierFixedRingOut,
    CarrierInRingFixedSunOut,
    CarrierInSunFixedRingOut,
    RingInCarrierFixedSunOut,
}

impl PlanetaryMode {
    /// All modes, in menu order
    pub const ALL: [PlanetaryMode; 6] = [
        PlanetaryMode::SunInRingFixedCarrierOut,
        PlanetaryMode::RingInSunFixedCarrierOut,
        PlanetaryMode::SunInCarrierFixedRingOut,
        PlanetaryMode::CarrierInRingFixedSunOut,
        PlanetaryMode::CarrierInSunFixedRingOut,
        PlanetaryMode::RingInCarrierFixedSunOut,
    ];

    /// (input, fixed, output) assignment for this mode
    pub fn elements(self) -> (PlanetaryElement, PlanetaryElement, PlanetaryElement) {
        use PlanetaryElement::*;
        match self {
            PlanetaryMode::SunInRingFixedCarrierOut => (Sun, Ring, Carrier),
            PlanetaryMode::RingInSunFixedCarrierOut => (Ring, Sun, Carrier),
            PlanetaryMode::SunInCarrierFixedRingOut => (Sun, Carrier, Ring),
            PlanetaryMode::CarrierInRingFixedSunOut => (Carrier, Ring, Sun),
            PlanetaryMode::CarrierInSunFixedRingOut => (Carrier, Sun, Ring),
            PlanetaryMode::RingInCarrierFixedSunOut => (Ring, Carrier, Sun),
        }
    }

    pub fn input_element(self) -> PlanetaryElement {
        self.elements().0
    }

    pub fn fixed_element(self) -> PlanetaryElement {
        self.elements().1
    }

    pub fn output_element(self) -> PlanetaryElement {
        self.elements().2
    }

    /// Identifier used in JSON and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            PlanetaryMode::SunInRingFixedCarrierOut => "sun_in_ring_fixed_carrier_out",
            PlanetaryMode::RingInSunFixedCarrierOut => "ring_in_sun_fixed_carrier_out",
            PlanetaryMode::SunInCarrierFixedRingOut => "sun_in_carrier_fixed_ring_out",
            PlanetaryMode::CarrierInRingFixedSunOut => "carrier_in_ring_fixed_sun_out",
            PlanetaryMode::CarrierInSunFixedRingOut => "carrier_in_sun_fixed_ring_out",
            PlanetaryMode::RingInCarrierFixedSunOut => "ring_in_carrier_fixed_sun_out",
        }
    }

    /// Human-readable description, e.g. "Sun in, Ring fixed, Carrier out"
    pub fn display_name(self) -> String {
        let (input, fixed, output) = self.elements();
        format!(
            "{} in, {} fixed, {} out",
            input.display_name(),
            fixed.display_name(),
            output.display_name()
        )
    }
}

impl fmt::Display for PlanetaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanetaryMode {
    type Err = GearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PlanetaryMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GearError::unknown_mode(wanted))
    }
}

/// Input parameters for a planetary set.
///
/// ## JSON Example
///
/// ```json
/// {
///   "sun_teeth": 20.0,
///   "ring_teeth": 60.0,
///   "mode": "sun_in_ring_fixed_carrier_out",
///   "input_speed_rpm": 100.0,
///   "input_torque": 10.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetaryInput {
    /// Sun gear tooth count (Ns)
    pub sun_teeth: f64,

    /// Ring gear tooth count (Nr), must exceed the sun's
    pub ring_teeth: f64,

    /// Input/fixed/output assignment
    pub mode: PlanetaryMode,

    /// Speed of the input element (rev/min, signed)
    pub input_speed_rpm: f64,

    /// Torque on the input element (signed)
    pub input_torque: f64,
}

impl PlanetaryInput {
    /// Validate input parameters.
    pub fn validate(&self) -> GearResult<()> {
        if self.sun_teeth <= 0.0 {
            return Err(GearError::invalid_input(
                "sun_teeth",
                self.sun_teeth.to_string(),
                "Sun tooth count must be positive",
            ));
        }
        if self.ring_teeth <= 0.0 {
            return Err(GearError::invalid_input(
                "ring_teeth",
                self.ring_teeth.to_string(),
                "Ring tooth count must be positive",
            ));
        }
        if self.ring_teeth <= self.sun_teeth {
            return Err(GearError::invalid_input(
                "ring_teeth",
                self.ring_teeth.to_string(),
                format!("Ring must have more teeth than the sun ({})", self.sun_teeth),
            ));
        }
        Ok(())
    }
}

/// Speeds of all three elements for one operating point (rev/min).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementSpeeds {
    pub sun_rpm: f64,
    pub ring_rpm: f64,
    pub carrier_rpm: f64,
}

impl ElementSpeeds {
    pub fn speed_of(&self, element: PlanetaryElement) -> f64 {
        match element {
            PlanetaryElement::Sun => self.sun_rpm,
            PlanetaryElement::Ring => self.ring_rpm,
            PlanetaryElement::Carrier => self.carrier_rpm,
        }
    }

    fn set(&mut self, element: PlanetaryElement, rpm: f64) {
        match element {
            PlanetaryElement::Sun => self.sun_rpm = rpm,
            PlanetaryElement::Ring => self.ring_rpm = rpm,
            PlanetaryElement::Carrier => self.carrier_rpm = rpm,
        }
    }
}

/// Solve for all three element speeds.
///
/// The input element turns at `input_speed_rpm`, the fixed element is held
/// at zero, and the output element comes from the Willis equation.
pub fn solve(input: &PlanetaryInput) -> GearResult<ElementSpeeds> {
    input.validate()?;

    let (zs, zr) = (input.sun_teeth, input.ring_teeth);
    let (input_element, fixed_element, output_element) = input.mode.elements();

    let mut speeds = ElementSpeeds {
        sun_rpm: 0.0,
        ring_rpm: 0.0,
        carrier_rpm: 0.0,
    };
    speeds.set(input_element, input.input_speed_rpm);
    speeds.set(fixed_element, 0.0);

    let output = match output_element {
        PlanetaryElement::Carrier => willis::carrier_speed(zs, zr, speeds.sun_rpm, speeds.ring_rpm),
        PlanetaryElement::Sun => willis::sun_speed(zs, zr, speeds.ring_rpm, speeds.carrier_rpm),
        PlanetaryElement::Ring => willis::ring_speed(zs, zr, speeds.sun_rpm, speeds.carrier_rpm),
    };
    speeds.set(output_element, output);

    Ok(speeds)
}

/// Calculate a planetary set.
///
/// Output speed is the solved element speed as-is; its sign against the
/// input speed sets the direction. When the ratio cannot be formed (the
/// output is stationary) ratio, speed and torque are all undefined, but the
/// direction is still reported from the signs.
pub fn calculate(input: &PlanetaryInput) -> CalculationResult {
    let speeds = match solve(input) {
        Ok(speeds) => speeds,
        Err(e) => {
            debug!(error = %e, "planetary guard tripped");
            return CalculationResult::undefined(GUARD_LABEL);
        }
    };

    let w_in = speeds.speed_of(input.mode.input_element());
    let w_out = speeds.speed_of(input.mode.output_element());

    let ratio = (w_in / w_out).abs();
    let output_torque = input.input_torque * ratio;

    let direction = Direction::from_signs(w_in, w_out);

    debug!(mode = %input.mode, w_in, w_out, ratio, "planetary set evaluated");

    if !ratio.is_finite() {
        return CalculationResult {
            ratio: None,
            output_speed_rpm: None,
            output_torque: None,
            direction,
        };
    }

    CalculationResult::new(ratio, w_out, output_torque, direction)
}
