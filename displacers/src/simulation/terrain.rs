//! Terrain heightmap and neighborhood extraction
//!
//! The terrain is an immutable `DMatrix<f64>` of elevations: rows follow the
//! y axis, columns the x axis. Windows are borrowed views into it, clipped at
//! the borders instead of padded.

use anyhow::{ensure, Result};
use nalgebra::{DMatrix, DMatrixView};

#[derive(Debug, Clone, PartialEq)]
pub struct Terrain {
    grid: DMatrix<f64>, // elevations, rows x columns
}

impl Terrain {
    pub fn new(grid: DMatrix<f64>) -> Result<Self> {
        ensure!(
            grid.nrows() > 0 && grid.ncols() > 0,
            "terrain must have at least one cell, got {}x{}",
            grid.nrows(),
            grid.ncols()
        );
        ensure!(grid.iter().all(|z| z.is_finite()), "terrain elevations must be finite");
        Ok(Self { grid })
    }

    /// Build a terrain from row-major rows of equal length
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        for (i, row) in rows.iter().enumerate() {
            ensure!(
                row.len() == width,
                "terrain row {} has {} values, expected {}",
                i,
                row.len(),
                width
            );
        }
        Self::new(DMatrix::from_fn(height, width, |r, c| rows[r][c]))
    }

    /// Build a terrain by evaluating `f(row, column)` on every cell
    pub fn from_fn<F>(height: usize, width: usize, f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        Self::new(DMatrix::from_fn(height, width, f))
    }

    pub fn width(&self) -> usize {
        self.grid.ncols()
    }

    pub fn height(&self) -> usize {
        self.grid.nrows()
    }

    /// Elevation at column `cx`, row `cy`
    pub fn elevation(&self, cx: usize, cy: usize) -> Option<f64> {
        self.grid.get((cy, cx)).copied()
    }

    /// Whether `(px, py)` lies inside `[0, width-1] x [0, height-1]`.
    /// NaN coordinates are never inside.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        let max_x = (self.width() - 1) as f64;
        let max_y = (self.height() - 1) as f64;
        (0.0..=max_x).contains(&px) && (0.0..=max_y).contains(&py)
    }
}

/// Square window of side `2 * radius + 1` centered on column `cx`, row `cy`,
/// clipped to the terrain. The center must be a valid cell.
pub fn neighborhood(terrain: &Terrain, cx: usize, cy: usize, radius: usize) -> DMatrixView<'_, f64> {
    debug_assert!(cx < terrain.width() && cy < terrain.height());

    // Inclusive bounds of the window after clipping
    let top = cy.saturating_sub(radius);
    let bottom = cy.saturating_add(radius).min(terrain.height() - 1);
    let left = cx.saturating_sub(radius);
    let right = cx.saturating_add(radius).min(terrain.width() - 1);

    terrain
        .grid
        .view((top, left), (bottom - top + 1, right - left + 1))
}
