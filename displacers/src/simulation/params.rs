//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - horizontal and vertical scale (grid cells and elevation units to meters),
//! - gravitational acceleration and friction coefficient,
//! - regression radius, step size and iteration count
//!
//! Every stage of the engine reads them; nothing writes them during a run.

use anyhow::{ensure, Result};

/// Earth's standard gravity in m/s²
pub const STANDARD_GRAVITY: f64 = 9.80665;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub hscale: f64, // meters per grid cell
    pub vscale: f64, // meters per elevation unit
    pub gravity: f64, // gravitational acceleration in m/s²
    pub mu: f64, // coefficient of friction
    pub radius: usize, // half side of the regression window in cells
    pub dt: f64, // step size in seconds
    pub iterations: usize, // number of integration steps
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            hscale: 1.0,
            vscale: 1.0,
            gravity: STANDARD_GRAVITY,
            mu: 0.0,
            radius: 1,
            dt: 1.0,
            iterations: 1,
        }
    }
}

impl Parameters {
    /// Reject configurations the engine cannot integrate.
    /// Called once before the loop starts.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.dt.is_finite() && self.dt > 0.0,
            "time step must be positive and finite, got {}",
            self.dt
        );
        ensure!(
            self.hscale.is_finite() && self.hscale > 0.0,
            "horizontal scale must be positive and finite, got {}",
            self.hscale
        );
        ensure!(self.vscale.is_finite(), "vertical scale must be finite, got {}", self.vscale);
        ensure!(self.gravity.is_finite(), "gravity must be finite, got {}", self.gravity);
        ensure!(
            self.mu.is_finite() && self.mu >= 0.0,
            "friction coefficient must be non-negative and finite, got {}",
            self.mu
        );
        Ok(())
    }
}
