//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - the terrain (`Terrain`), loaded from an image or an inline grid
//! - numerical parameters (`Parameters`)
//! - the initial state of every displacer (`State`)
//! - run options and the return mode

use std::path::Path;

use anyhow::{bail, Result};

use crate::configuration::config::{DisplacerConfig, ScenarioConfig, TerrainConfig};
use crate::io::heightmap::load_heightmap;
use crate::simulation::engine::{simulate_batch, Output, ReturnMode, Run, RunOptions};
use crate::simulation::params::Parameters;
use crate::simulation::states::State;
use crate::simulation::terrain::Terrain;

#[derive(Debug, Clone)]
pub struct Scenario {
    pub terrain: Terrain,
    pub parameters: Parameters,
    pub displacers: Vec<State>,
    pub options: RunOptions,
    pub mode: ReturnMode,
}

impl Scenario {
    /// Resolve `cfg` into runtime types. Relative image paths are taken
    /// from `base_dir`, usually the directory of the scenario file.
    pub fn build_scenario(cfg: ScenarioConfig, base_dir: &Path) -> Result<Self> {
        let terrain = build_terrain(&cfg.terrain, base_dir)?;

        // Displacers: map `DisplacerConfig` -> runtime `State`
        let displacers = cfg
            .displacers
            .iter()
            .map(|dc: &DisplacerConfig| State::new(dc.position[0], dc.position[1], dc.velocity[0], dc.velocity[1]))
            .collect();

        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            hscale: p_cfg.hscale,
            vscale: p_cfg.vscale,
            gravity: p_cfg.gravity,
            mu: p_cfg.mu,
            radius: p_cfg.radius,
            dt: p_cfg.dt,
            iterations: p_cfg.iterations,
        };
        parameters.validate()?;

        let options = RunOptions { warn: cfg.output.warn };
        let mode = if cfg.output.return_all { ReturnMode::All } else { ReturnMode::Final };

        Ok(Self {
            terrain,
            parameters,
            displacers,
            options,
            mode,
        })
    }

    /// Load and build a scenario from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let cfg = ScenarioConfig::from_yaml_file(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::build_scenario(cfg, base_dir)
    }

    /// Simulate every displacer, in declaration order
    pub fn run(&self) -> Result<Vec<Run>> {
        simulate_batch(&self.terrain, &self.displacers, &self.parameters, &self.options)
    }

    /// Simulate every displacer and keep what the scenario asks for
    pub fn outputs(&self) -> Result<Vec<Output>> {
        Ok(self.run()?.into_iter().map(|run| run.into_output(self.mode)).collect())
    }
}

fn build_terrain(cfg: &TerrainConfig, base_dir: &Path) -> Result<Terrain> {
    match (&cfg.image, &cfg.grid) {
        (Some(image), None) => load_heightmap(&base_dir.join(image)),
        (None, Some(rows)) => Terrain::from_rows(rows),
        (Some(_), Some(_)) => bail!("terrain must set either `image` or `grid`, not both"),
        (None, None) => bail!("terrain must set `image` or `grid`"),
    }
}
