//! Heightmap images to terrain
//!
//! Each pixel's RGB channels are brought to `[0, 255]` and averaged; alpha is
//! dropped. Image rows become terrain rows (the y axis).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use image::DynamicImage;
use log::info;

use crate::simulation::terrain::Terrain;

/// Load a heightmap image from disk
pub fn load_heightmap(path: &Path) -> Result<Terrain> {
    let img = image::open(path).with_context(|| format!("cannot read heightmap {}", path.display()))?;
    let terrain = terrain_from_image(&img)?;
    info!(
        "loaded heightmap {} ({}x{})",
        path.display(),
        terrain.width(),
        terrain.height()
    );
    Ok(terrain)
}

/// Load a heightmap and delete the file once it has been read
pub fn take_heightmap(path: &Path) -> Result<Terrain> {
    let terrain = load_heightmap(path)?;
    fs::remove_file(path).with_context(|| format!("cannot remove {}", path.display()))?;
    info!("removed heightmap {}", path.display());
    Ok(terrain)
}

/// Average the RGB channels of `img` into elevations in `[0, 255]`.
/// 8-bit sources map to their exact channel values.
pub fn terrain_from_image(img: &DynamicImage) -> Result<Terrain> {
    // 16 bits per channel keeps 8 and 16 bit sources lossless; 257 = 65535 / 255
    let rgb = img.to_rgb16();
    let (width, height) = rgb.dimensions();

    Terrain::from_fn(height as usize, width as usize, |r, c| {
        let px = rgb.get_pixel(c as u32, r as u32);
        let sum: f64 = px.0.iter().map(|&ch| f64::from(ch) / 257.0).sum();
        sum / 3.0
    })
    .context("heightmap has no pixels")
}
