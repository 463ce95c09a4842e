//! # gear_core - Gear Train Kinematics Engine
//!
//! `gear_core` computes speed ratio, output speed, output torque, and output
//! direction for three gear train topologies: a simple serial train, a
//! two-stage compound train, and a planetary set solved with the Willis
//! equation in six operating modes.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Never fails**: Invalid geometry yields an explicit undefined result
//! - **JSON-First**: All inputs and results implement Serialize/Deserialize
//! - **Thread-safe**: No shared mutable state; call from anywhere
//!
//! ## Quick Start
//!
//! ```rust
//! use gear_core::{compute_planetary_gear_train, DisplaySettings, PlanetaryInput, PlanetaryMode};
//!
//! let input = PlanetaryInput {
//!     sun_teeth: 20.0,
//!     ring_teeth: 60.0,
//!     mode: PlanetaryMode::SunInRingFixedCarrierOut,
//!     input_speed_rpm: 100.0,
//!     input_torque: 10.0,
//! };
//!
//! let result = compute_planetary_gear_train(&input);
//! let shown = result.formatted(&DisplaySettings::default());
//! assert_eq!(shown.ratio, "4");
//! assert_eq!(shown.output_speed, "25");
//! assert_eq!(shown.direction, "Same as input");
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The three calculators and their shared result type
//! - [`equations`] - Closed-form ratio and Willis relations
//! - [`display`] - Result formatting
//! - [`entry`] - Coercion of raw text entries into numbers
//! - [`session`] - Re-run a calculation on every input change
//! - [`settings`] - Display and fallback preferences
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod display;
pub mod entry;
pub mod equations;
pub mod errors;
pub mod session;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    compute_compound_gear_train, compute_planetary_gear_train, compute_simple_gear_train, CalculationItem,
    CalculationResult, CompoundInput, Direction, GearListInput, PlanetaryInput, PlanetaryMode,
};
pub use errors::{GearError, GearResult};
pub use session::{Edit, Session};
pub use settings::{DisplaySettings, Settings};
