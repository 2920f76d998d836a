pub mod simulation;
pub mod configuration;
pub mod io;
pub mod benchmark;

pub use simulation::states::{State, AxisState, Trajectory};
pub use simulation::params::{Parameters, STANDARD_GRAVITY};
pub use simulation::terrain::{Terrain, neighborhood};
pub use simulation::slope::{Inclination, window_inclination};
pub use simulation::forces::{Accelerations, accelerations, slope_acceleration};
pub use simulation::integrator::{advance_axis, downslope_direction, next_state};
pub use simulation::engine::{simulate, simulate_batch, step, Output, ReturnMode, Run, RunOptions, Termination};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, TerrainConfig, ParametersConfig, DisplacerConfig, OutputConfig};

pub use io::heightmap::{load_heightmap, take_heightmap, terrain_from_image};
pub use io::export::{export_to_file, write_output, ExportFormat};

pub use benchmark::benchmark::{bench_radius, bench_batch};
