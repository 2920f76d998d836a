//! Semi-implicit per-axis integrator
//!
//! Velocity is updated first from the acceleration, then the position moves
//! by the horizontal projection of the new velocity. The x and y axes never
//! interact here; `advance_axis` is applied to each in turn.

use super::forces::Accelerations;
use super::params::Parameters;
use super::slope::Inclination;
use super::states::{AxisState, State};

/// Direction the slope pulls along an axis: opposite to the sign of the
/// angle, and no pull at all on level ground
pub fn downslope_direction(angle: f64) -> f64 {
    if angle > 0.0 {
        -1.0
    } else if angle < 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Advance one axis by `dt`.
///
/// - `accel >= 0`: the slope wins and velocity moves downslope freely
/// - `accel < 0`: friction wins and only erodes the current speed toward zero
///
/// Position uses `velocity * cos|angle|`, converted back to grid cells with
/// `hscale`. The stored velocity is the total, unprojected one.
pub fn advance_axis(prev: AxisState, accel: f64, angle: f64, dt: f64, hscale: f64) -> AxisState {
    let velocity = if accel >= 0.0 {
        prev.velocity + accel * downslope_direction(angle) * dt
    } else if prev.velocity >= 0.0 {
        (prev.velocity + accel * dt).max(0.0)
    } else {
        (prev.velocity - accel * dt).min(0.0)
    };

    // Steeper slopes move the displacer less across the grid
    let horizontal = velocity * angle.abs().cos();
    let position = prev.position + horizontal * dt / hscale;

    AxisState { position, velocity }
}

/// Advance both axes of `prev` by one step of `params.dt`
pub fn next_state(prev: &State, accel: &Accelerations, inclination: &Inclination, params: &Parameters) -> State {
    let x = advance_axis(prev.x_axis(), accel.x, inclination.x, params.dt, params.hscale);
    let y = advance_axis(prev.y_axis(), accel.y, inclination.y, params.dt, params.hscale);
    State::from_axes(x, y)
}
