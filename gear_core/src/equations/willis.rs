//! # Willis Equation
//!
//! Speed relation for a simple planetary set (sun, planets on a carrier,
//! internal ring). With the carrier as the reference frame the set behaves
//! like an ordinary train of ratio -Zr/Zs, which gives:
//!
//! ```text
//! Zs·ωs + Zr·ωr = (Zs + Zr)·ωc
//! ```
//!
//! Any two element speeds determine the third. Each solver below rearranges
//! the relation for one unknown.
//!
//! ## Notation
//!
//! - `zs`, `zr` = Sun and ring tooth counts
//! - `ws`, `wr`, `wc` = Sun, ring, and carrier speeds (any consistent unit)

/// Carrier speed from sun and ring speeds.
///
/// # Formula
/// ωc = (Zs·ωs + Zr·ωr) / (Zs + Zr)
///
/// # Example
/// ```rust
/// use gear_core::equations::willis::carrier_speed;
///
/// // Ring held, sun at 100 rpm: carrier turns at 100·20/80 = 25 rpm
/// assert_eq!(carrier_speed(20.0, 60.0, 100.0, 0.0), 25.0);
/// ```
#[inline]
pub fn carrier_speed(zs: f64, zr: f64, ws: f64, wr: f64) -> f64 {
    (zs * ws + zr * wr) / (zs + zr)
}

/// Sun speed from ring and carrier speeds.
///
/// # Formula
/// ωs = (ωr - ωc)·(-Zr/Zs) + ωc
#[inline]
pub fn sun_speed(zs: f64, zr: f64, wr: f64, wc: f64) -> f64 {
    (wr - wc) * (-zr / zs) + wc
}

/// Ring speed from sun and carrier speeds.
///
/// # Formula
/// ωr = -(Zs/Zr)·(ωs - ωc) + ωc
#[inline]
pub fn ring_speed(zs: f64, zr: f64, ws: f64, wc: f64) -> f64 {
    -zs / zr * (ws - wc) + wc
}

/// Left side minus right side of the Willis relation.
///
/// Zero (to rounding) for any consistent set of element speeds.
#[inline]
pub fn residual(zs: f64, zr: f64, ws: f64, wr: f64, wc: f64) -> f64 {
    zs * ws + zr * wr - (zs + zr) * wc
}
