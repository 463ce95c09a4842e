//! # Compound Gear Train Calculation
//!
//! Two reduction stages joined by a common intermediate shaft:
//!
//! ```text
//!   input ── Z1 ──mesh── Z2
//!                        ║
//!                        Z3 ──mesh── Z4 ── output
//! ```
//!
//! ## Direction
//!
//! The direction is always reported as "Same as input" and the output speed
//! is never sign-flipped. With two external meshes this agrees with the
//! physics, but it is a fixed property of this calculator rather than
//! something derived from the mesh count.
//!
//! ## Example
//!
//! ```rust
//! use gear_core::calculations::compound::{calculate, CompoundInput};
//!
//! let input = CompoundInput {
//!     z1: 20.0,
//!     z2: 40.0,
//!     z3: 15.0,
//!     z4: 45.0,
//!     input_speed_rpm: 600.0,
//!     input_torque: 2.0,
//! };
//!
//! let result = calculate(&input);
//! assert_eq!(result.ratio, Some(6.0));
//! assert_eq!(result.output_speed_rpm, Some(100.0));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::{CalculationResult, Direction};
use crate::equations::train;
use crate::errors::{GearError, GearResult};

const GUARD_LABEL: &str = "Check all N > 0";

/// Input parameters for a two-stage compound train.
///
/// ## JSON Example
///
/// ```json
/// {
///   "z1": 20.0,
///   "z2": 40.0,
///   "z3": 15.0,
///   "z4": 45.0,
///   "input_speed_rpm": 600.0,
///   "input_torque": 2.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundInput {
    /// Stage 1 driving gear (on the input shaft)
    pub z1: f64,

    /// Stage 1 driven gear (on the intermediate shaft)
    pub z2: f64,

    /// Stage 2 driving gear (on the intermediate shaft)
    pub z3: f64,

    /// Stage 2 driven gear (on the output shaft)
    pub z4: f64,

    /// Input shaft speed (rev/min, signed)
    pub input_speed_rpm: f64,

    /// Input shaft torque (signed)
    pub input_torque: f64,
}

impl CompoundInput {
    /// Tooth counts in order Z1..Z4
    pub fn teeth(&self) -> [f64; 4] {
        [self.z1, self.z2, self.z3, self.z4]
    }

    /// Mutable access to a tooth count by its 1-based stage position.
    pub fn teeth_mut(&mut self, position: usize) -> Option<&mut f64> {
        match position {
            1 => Some(&mut self.z1),
            2 => Some(&mut self.z2),
            3 => Some(&mut self.z3),
            4 => Some(&mut self.z4),
            _ => None,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> GearResult<()> {
        for (i, teeth) in self.teeth().iter().enumerate() {
            if *teeth <= 0.0 {
                return Err(GearError::invalid_input(
                    format!("z{}", i + 1),
                    teeth.to_string(),
                    "Tooth count must be positive",
                ));
            }
        }
        Ok(())
    }
}

/// Calculate a compound gear train.
pub fn calculate(input: &CompoundInput) -> CalculationResult {
    if let Err(e) = input.validate() {
        debug!(error = %e, "compound train guard tripped");
        return CalculationResult::undefined(GUARD_LABEL);
    }

    let ratio = train::compound_ratio(input.z1, input.z2, input.z3, input.z4);
    let output_speed = train::output_speed(input.input_speed_rpm, ratio);
    let output_torque = train::output_torque(input.input_torque, ratio.abs());

    debug!(ratio, "compound train evaluated");

    CalculationResult::new(ratio.abs(), output_speed, output_torque, Direction::SameAsInput)
}
