//! # Ordinary Gear Train Formulas
//!
//! Ratio, speed, and torque relations for trains whose gear axes are all
//! fixed in the frame (simple serial trains and compound trains).
//!
//! ## Notation
//!
//! - `Z` = Tooth count
//! - `i` = Train ratio (driven teeth / driving teeth)
//! - `n` = Rotational speed (rev/min)
//! - `T` = Torque
//!
//! ## Sign Conventions
//!
//! - Speeds and torques are signed; a positive value shares the input's sense
//! - Every external mesh reverses rotation

// =============================================================================
// RATIO FORMULAS
// =============================================================================

/// Ratio of a single driver/driven pair.
///
/// ```text
///    driver ──mesh── driven
///      Z1              Z2
/// ```
///
/// # Formula
/// i = Z2 / Z1
///
/// # Example
/// ```rust
/// use gear_core::equations::train::pair_ratio;
///
/// assert_eq!(pair_ratio(18.0, 54.0), 3.0);
/// ```
#[inline]
pub fn pair_ratio(driver_teeth: f64, driven_teeth: f64) -> f64 {
    driven_teeth / driver_teeth
}

/// Overall ratio of a serial train.
///
/// Idler gears cancel out, so only the first and last tooth counts matter.
///
/// # Formula
/// i = Z_N / Z_1
#[inline]
pub fn serial_ratio(first_teeth: f64, last_teeth: f64) -> f64 {
    pair_ratio(first_teeth, last_teeth)
}

/// Overall ratio of a two-stage compound train.
///
/// ```text
///    Z1 ──mesh── Z2
///                ║  (common shaft)
///                Z3 ──mesh── Z4
/// ```
///
/// # Formula
/// i = (Z2 / Z1) · (Z4 / Z3)
#[inline]
pub fn compound_ratio(z1: f64, z2: f64, z3: f64, z4: f64) -> f64 {
    pair_ratio(z1, z2) * pair_ratio(z3, z4)
}

// =============================================================================
// DIRECTION
// =============================================================================

/// Number of meshes in a serial train of `gear_count` gears.
#[inline]
pub fn mesh_count(gear_count: usize) -> usize {
    gear_count.saturating_sub(1)
}

/// True when an odd number of meshes leaves the output turning backwards.
#[inline]
pub fn is_reversed(meshes: usize) -> bool {
    meshes % 2 == 1
}

// =============================================================================
// SPEED AND TORQUE
// =============================================================================

/// Output speed for a train ratio.
///
/// # Formula
/// n_out = n_in / i
#[inline]
pub fn output_speed(input_speed_rpm: f64, ratio: f64) -> f64 {
    input_speed_rpm / ratio
}

/// Output torque for a lossless train.
///
/// # Formula
/// T_out = T_in · i
#[inline]
pub fn output_torque(input_torque: f64, ratio: f64) -> f64 {
    input_torque * ratio
}
