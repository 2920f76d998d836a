//! Configuration types for loading displacer scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`TerrainConfig`]    – where the heightmap comes from (image or inline grid)
//! - [`ParametersConfig`] – scales, physical constants and integration settings
//! - [`DisplacerConfig`]  – initial state of each displacer
//! - [`OutputConfig`]     – what to keep from each run and whether to warn
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Every parameter and output field is optional and falls back to the
//! engine defaults:
//!
//! ```yaml
//! terrain:
//!   image: "hill.png"       # relative to the scenario file
//!
//! parameters:
//!   hscale: 1.0             # meters per pixel
//!   vscale: 1.0             # meters per elevation unit
//!   gravity: 9.80665        # m/s²
//!   mu: 0.0                 # coefficient of friction
//!   radius: 1               # regression window half side, in pixels
//!   dt: 1.0                 # seconds
//!   iterations: 200
//!
//! output:
//!   return_all: true        # false -> only the final state
//!   warn: true
//!
//! displacers:
//!   - position: [ 12.0, 40.5 ]
//!     velocity: [ 0.0, 0.0 ]
//!   - position: [ 30.0, 8.0 ]
//! ```
//!
//! Instead of `image`, the terrain may be given inline as `grid`, a list of
//! rows. [`Scenario`](crate::simulation::scenario::Scenario) maps this into
//! the runtime types.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::simulation::params::STANDARD_GRAVITY;

/// Heightmap source, exactly one of the two fields must be set
#[derive(Deserialize, Debug, Clone, Default)]
pub struct TerrainConfig {
    pub image: Option<PathBuf>, // png heightmap, RGB averaged per pixel
    pub grid: Option<Vec<Vec<f64>>>, // inline elevations, row-major
}

/// Numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub hscale: f64,
    pub vscale: f64,
    pub gravity: f64,
    pub mu: f64,
    pub radius: usize,
    pub dt: f64,
    pub iterations: usize,
}

impl Default for ParametersConfig {
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

/// Initial state of a single displacer
#[derive(Deserialize, Debug, Clone)]
pub struct DisplacerConfig {
    pub position: [f64; 2], // (x, y) in pixels
    #[serde(default)]
    pub velocity: [f64; 2], // (x, y) in m/s
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct OutputConfig {
    pub return_all: bool, // keep every state instead of only the last
    pub warn: bool, // warn when a displacer leaves the terrain
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            return_all: true,
            warn: true,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub terrain: TerrainConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub displacers: Vec<DisplacerConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("invalid scenario YAML")
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("cannot open scenario {}", path.display()))?;
        let reader = BufReader::new(file);
        serde_yaml::from_reader(reader).with_context(|| format!("invalid scenario YAML in {}", path.display()))
    }
}
