//! # Gear Kinematics Equations
//!
//! All closed-form relations used by the calculators live here, so each
//! formula can be checked in one place independent of guard and dispatch
//! logic.
//!
//! ## Modules
//!
//! - [`train`] - Fixed-axis trains (serial and compound ratios, mesh parity)
//! - [`willis`] - Planetary speed relation and its three solvers
//!
//! ## Conventions
//!
//! - **Ratio**: driven teeth over driving teeth, so i > 1 is a reduction
//! - **Speed**: signed rev/min; the sign carries rotation sense
//! - **Torque**: signed, ideal lossless transmission

pub mod train;
pub mod willis;

pub use train::{
    compound_ratio,
    is_reversed,
    mesh_count,
    output_speed,
    output_torque,
    pair_ratio,
    serial_ratio,
};

pub use willis::{carrier_speed, ring_speed, sun_speed};
