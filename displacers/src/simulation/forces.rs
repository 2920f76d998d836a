//! Gravity and friction along an inclined axis
//!
//! Turns inclination angles into acceleration magnitudes. The magnitude is
//! computed from `|angle|` only; which way it pushes is decided by the
//! integrator from the signed angle.

use super::params::Parameters;
use super::slope::Inclination;

/// Acceleration magnitude along each grid axis, in m/s².
/// Negative values mean friction outweighs the downslope pull.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Accelerations {
    pub x: f64,
    pub y: f64,
}

/// Downslope gravity reduced by Coulomb friction on a slope of `angle` radians:
/// `g * (sin|angle| - mu * cos|angle|)`
pub fn slope_acceleration(angle: f64, gravity: f64, mu: f64) -> f64 {
    let angle = angle.abs();
    gravity * (angle.sin() - mu * angle.cos())
}

/// Apply [`slope_acceleration`] to both axes with the run's gravity and friction
pub fn accelerations(inclination: &Inclination, params: &Parameters) -> Accelerations {
    Accelerations {
        x: slope_acceleration(inclination.x, params.gravity, params.mu),
        y: slope_acceleration(inclination.y, params.gravity, params.mu),
    }
}
