//! Core state types for the displacer simulation.
//!
//! Defines the kinematic state of the displacer and its per-axis view:
//! - `State`     – position (grid cells) and velocity (m/s) on both axes
//! - `AxisState` – position/velocity pair along one axis, used by the integrator
//!
//! A trajectory is just the ordered list of states produced by one run.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct State {
    pub position_x: f64, // column coordinate, fractional grid cells
    pub position_y: f64, // row coordinate, fractional grid cells
    pub velocity_x: f64, // total velocity along x in m/s
    pub velocity_y: f64, // total velocity along y in m/s
}

/// Position and velocity along a single grid axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisState {
    pub position: f64,
    pub velocity: f64,
}

/// Ordered states of one run, index 0 is the initial state
pub type Trajectory = Vec<State>;

impl State {
    /// Displacer at rest at `(px, py)`
    pub fn at_rest(px: f64, py: f64) -> Self {
        Self::new(px, py, 0.0, 0.0)
    }

    pub fn new(px: f64, py: f64, vx: f64, vy: f64) -> Self {
        Self {
            position_x: px,
            position_y: py,
            velocity_x: vx,
            velocity_y: vy,
        }
    }

    pub fn x_axis(&self) -> AxisState {
        AxisState {
            position: self.position_x,
            velocity: self.velocity_x,
        }
    }

    pub fn y_axis(&self) -> AxisState {
        AxisState {
            position: self.position_y,
            velocity: self.velocity_y,
        }
    }

    /// Reassemble a state from its two axes
    pub fn from_axes(x: AxisState, y: AxisState) -> Self {
        Self::new(x.position, y.position, x.velocity, y.velocity)
    }
}
