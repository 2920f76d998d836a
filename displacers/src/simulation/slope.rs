//! Terrain inclination from a local least-squares fit
//!
//! Elevation `z` (window value * vscale) is regressed independently against
//! `x` (column index * hscale) and `y` (row index * hscale). Each fitted slope
//! becomes an angle through `atan`.

use nalgebra::DMatrixView;

/// Signed inclination of the terrain along each grid axis, in radians.
/// Positive means elevation grows with the coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Inclination {
    pub x: f64,
    pub y: f64,
}

/// Running sums for a simple linear regression of `z` on one coordinate
#[derive(Debug, Default)]
struct CrossSums {
    n: f64,
    sum_a: f64,
    sum_z: f64,
    sum_aa: f64,
    sum_az: f64,
}

impl CrossSums {
    fn push(&mut self, a: f64, z: f64) {
        self.n += 1.0;
        self.sum_a += a;
        self.sum_z += z;
        self.sum_aa += a * a;
        self.sum_az += a * z;
    }

    /// Slope of the fitted line, using `Σab - ΣaΣb/n` for both terms
    fn slope(&self) -> f64 {
        let ss_az = self.sum_az - self.sum_a * self.sum_z / self.n;
        let ss_aa = self.sum_aa - self.sum_a * self.sum_a / self.n;
        ss_az / ss_aa
    }
}

/// Fit both axes of `window` and return their inclination angles.
///
/// An axis spanning a single cell has no spatial variance. Its slope is
/// taken as zero, so a 1x1 window (radius 0) reads as flat ground. A window
/// of constant elevation is exactly flat on both axes.
pub fn window_inclination(window: &DMatrixView<'_, f64>, hscale: f64, vscale: f64) -> Inclination {
    if window.iter().all(|&z| z == window[(0, 0)]) {
        return Inclination::default();
    }

    let mut along_x = CrossSums::default();
    let mut along_y = CrossSums::default();

    // Row-major walk over the window
    for r in 0..window.nrows() {
        let y = r as f64 * hscale;
        for c in 0..window.ncols() {
            let x = c as f64 * hscale;
            let z = window[(r, c)] * vscale;
            along_x.push(x, z);
            along_y.push(y, z);
        }
    }

    Inclination {
        x: axis_angle(&along_x, window.ncols()),
        y: axis_angle(&along_y, window.nrows()),
    }
}

fn axis_angle(sums: &CrossSums, extent: usize) -> f64 {
    if extent < 2 {
        return 0.0;
    }
    sums.slope().atan()
}
