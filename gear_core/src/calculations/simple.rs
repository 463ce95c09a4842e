//! # Simple Gear Train Calculation
//!
//! N gears in series, each meshing with the next. Intermediate gears act as
//! idlers: they change the rotation sense but not the overall ratio, which
//! depends only on the first and last tooth counts.
//!
//! ## Assumptions
//!
//! - External spur meshes only (each mesh reverses rotation)
//! - Ideal lossless transmission (no efficiency or backlash)
//!
//! ## Example
//!
//! ```rust
//! use gear_core::calculations::simple::{calculate, GearListInput};
//! use gear_core::calculations::Direction;
//!
//! // 18T driving a 54T through one 30T idler
//! let input = GearListInput::new(vec![18.0, 30.0, 54.0], 900.0, 12.0);
//! let result = calculate(&input);
//!
//! assert_eq!(result.ratio, Some(3.0));
//! assert_eq!(result.output_speed_rpm, Some(300.0));
//! assert_eq!(result.output_torque, Some(36.0));
//! assert_eq!(result.direction, Direction::SameAsInput);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::{CalculationResult, Direction};
use crate::equations::train;
use crate::errors::{GearError, GearResult};

/// Fewest gears that still form a mesh
pub const MIN_GEAR_COUNT: usize = 2;

/// Most gears a list can hold, one per letter A..Z
pub const MAX_GEAR_COUNT: usize = 26;

/// Default tooth count for the driving gear of a new list
pub const DEFAULT_FIRST_TEETH: f64 = 18.0;

/// Default tooth count for idlers of a new list
pub const DEFAULT_IDLER_TEETH: f64 = 30.0;

/// Default tooth count for the driven gear of a new list
pub const DEFAULT_LAST_TEETH: f64 = 54.0;

/// Input parameters for a serial gear train.
///
/// ## JSON Example
///
/// ```json
/// {
///   "teeth": [18.0, 30.0, 54.0],
///   "input_speed_rpm": 900.0,
///   "input_torque": 12.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearListInput {
    /// Tooth counts from the driving gear to the driven gear
    pub teeth: Vec<f64>,

    /// Input shaft speed (rev/min, signed)
    pub input_speed_rpm: f64,

    /// Input shaft torque (signed)
    pub input_torque: f64,
}

impl GearListInput {
    pub fn new(teeth: Vec<f64>, input_speed_rpm: f64, input_torque: f64) -> Self {
        GearListInput {
            teeth,
            input_speed_rpm,
            input_torque,
        }
    }

    /// Build a list of `gear_count` gears with default tooth counts.
    ///
    /// Counts are clamped to [`MIN_GEAR_COUNT`]..=[`MAX_GEAR_COUNT`].
    pub fn with_gear_count(gear_count: usize, input_speed_rpm: f64, input_torque: f64) -> Self {
        GearListInput::new(default_teeth(gear_count), input_speed_rpm, input_torque)
    }

    pub fn gear_count(&self) -> usize {
        self.teeth.len()
    }

    pub fn mesh_count(&self) -> usize {
        train::mesh_count(self.gear_count())
    }

    /// Validate input parameters.
    ///
    /// Only the first and last tooth counts are checked; idler values never
    /// enter the arithmetic.
    pub fn validate(&self) -> GearResult<()> {
        if self.teeth.len() < MIN_GEAR_COUNT {
            return Err(GearError::invalid_input(
                "teeth",
                self.teeth.len().to_string(),
                "A gear train needs at least two gears",
            ));
        }
        let first = self.teeth[0];
        let last = self.teeth[self.teeth.len() - 1];
        if first <= 0.0 {
            return Err(GearError::invalid_input(
                "teeth[0]",
                first.to_string(),
                "Driving gear tooth count must be positive",
            ));
        }
        if last <= 0.0 {
            return Err(GearError::invalid_input(
                format!("teeth[{}]", self.teeth.len() - 1),
                last.to_string(),
                "Driven gear tooth count must be positive",
            ));
        }
        Ok(())
    }
}

/// Tooth counts for a freshly built list of `gear_count` gears.
pub fn default_teeth(gear_count: usize) -> Vec<f64> {
    let n = gear_count.clamp(MIN_GEAR_COUNT, MAX_GEAR_COUNT);
    (0..n)
        .map(|i| {
            if i == 0 {
                DEFAULT_FIRST_TEETH
            } else if i == n - 1 {
                DEFAULT_LAST_TEETH
            } else {
                DEFAULT_IDLER_TEETH
            }
        })
        .collect()
}

/// Calculate a serial gear train.
///
/// The direction comes from mesh-count parity alone; output speed carries
/// the same reversal as a sign flip.
pub fn calculate(input: &GearListInput) -> CalculationResult {
    if let Err(e) = input.validate() {
        debug!(error = %e, "simple train guard tripped");
        return CalculationResult::undefined(guard_label(&e));
    }

    let first = input.teeth[0];
    let last = input.teeth[input.teeth.len() - 1];

    let ratio = train::serial_ratio(first, last);
    let reversed = train::is_reversed(input.mesh_count());
    let sense = if reversed { -1.0 } else { 1.0 };

    let output_speed = train::output_speed(input.input_speed_rpm, ratio) * sense;
    let output_torque = train::output_torque(input.input_torque, ratio);

    debug!(gears = input.gear_count(), ratio, reversed, "simple train evaluated");

    CalculationResult::new(ratio.abs(), output_speed, output_torque, Direction::from_parity(reversed))
}

fn guard_label(error: &GearError) -> &'static str {
    match error {
        GearError::InvalidInput { field, .. } if field == "teeth" => "Add at least 2 gears",
        _ => "Check N1 > 0 and Nn > 0",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_train() -> GearListInput {
        GearListInput::new(vec![18.0, 30.0, 54.0], 900.0, 12.0)
    }

    #[test]
    fn test_default_teeth() {
        assert_eq!(default_teeth(2), vec![18.0, 54.0]);
        assert_eq!(default_teeth(4), vec![18.0, 30.0, 30.0, 54.0]);
        // Raised to the minimum
        assert_eq!(default_teeth(0), vec![18.0, 54.0]);
    }

    #[test]
    fn test_default_teeth_capped() {
        let teeth = default_teeth(usize::MAX);
        assert_eq!(teeth.len(), MAX_GEAR_COUNT);
        assert_eq!(teeth[MAX_GEAR_COUNT - 1], DEFAULT_LAST_TEETH);

        let input = GearListInput::with_gear_count(usize::MAX, 100.0, 1.0);
        assert_eq!(input.gear_count(), MAX_GEAR_COUNT);
        // 25 meshes
        assert_eq!(calculate(&input).direction, Direction::Reversed);
    }

    #[test]
    fn test_three_gear_train() {
        let result = calculate(&test_train());
        assert_eq!(result.ratio, Some(3.0));
        assert_eq!(result.output_speed_rpm, Some(300.0));
        assert_eq!(result.output_torque, Some(36.0));
        assert_eq!(result.direction, Direction::SameAsInput);
    }

    #[test]
    fn test_two_gear_train_reverses() {
        let input = GearListInput::new(vec![20.0, 40.0], 1000.0, 5.0);
        let result = calculate(&input);
        assert_eq!(result.ratio, Some(2.0));
        assert_eq!(result.output_speed_rpm, Some(-500.0));
        assert_eq!(result.output_torque, Some(10.0));
        assert_eq!(result.direction, Direction::Reversed);
    }

    #[test]
    fn test_ratio_and_parity_for_all_lengths() {
        for n in 2..=9 {
            for &(first, last) in &[(18.0, 54.0), (40.0, 10.0), (17.0, 17.0), (0.5, 3.25)] {
                let mut teeth = vec![25.0; n];
                teeth[0] = first;
                teeth[n - 1] = last;
                let result = calculate(&GearListInput::new(teeth, 100.0, 1.0));

                assert_eq!(result.ratio, Some(last / first));
                let expected = if (n - 1) % 2 == 1 {
                    Direction::Reversed
                } else {
                    Direction::SameAsInput
                };
                assert_eq!(result.direction, expected, "n = {}", n);
            }
        }
    }

    #[test]
    fn test_idlers_do_not_change_ratio() {
        let a = calculate(&GearListInput::new(vec![18.0, 30.0, 54.0], 900.0, 12.0));
        let b = calculate(&GearListInput::new(vec![18.0, 99.0, 54.0], 900.0, 12.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_idempotent() {
        let input = test_train();
        assert_eq!(calculate(&input), calculate(&input));
    }

    #[test]
    fn test_non_positive_end_gear() {
        let mut input = test_train();
        input.teeth[0] = 0.0;
        let result = calculate(&input);
        assert!(!result.is_defined());
        assert_eq!(result.direction, Direction::Undefined("Check N1 > 0 and Nn > 0".into()));

        let mut input = test_train();
        input.teeth[2] = -4.0;
        assert!(input.validate().is_err());
        assert!(!calculate(&input).is_defined());
    }

    #[test]
    fn test_non_positive_idler_is_ignored() {
        let mut input = test_train();
        input.teeth[1] = 0.0;
        assert!(calculate(&input).is_defined());
    }

    #[test]
    fn test_too_few_gears() {
        let input = GearListInput::new(vec![18.0], 900.0, 12.0);
        let result = calculate(&input);
        assert!(!result.is_defined());
        assert_eq!(result.direction.label(), "Add at least 2 gears");
    }

    #[test]
    fn test_serialization() {
        let input = test_train();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: GearListInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
