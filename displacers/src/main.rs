use displacers::{load_heightmap, take_heightmap, simulate, Scenario, State, Parameters, RunOptions, ReturnMode, STANDARD_GRAVITY};
use displacers::{export_to_file, write_output, ExportFormat};
use displacers::{bench_radius, bench_batch};

use clap::{Args, Parser, Subcommand};
use anyhow::Result;
use log::info;
use serde::Serialize;

use std::io;
use std::path::{Path, PathBuf};

/// Simulate the movement of an object (a displacer) over an irregular terrain surface.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a single displacer over a png heightmap
    Run(RunArgs),
    /// Run every displacer of a YAML scenario
    Scenario {
        #[arg(short, default_value = "scenarios/slope.yaml")]
        file_name: PathBuf,
        /// Output file (.json or .yaml), stdout JSON when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Time the engine for growing radii and batch sizes
    Bench,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// png image with elevation data
    #[arg(long)]
    terrain: PathBuf,
    /// initial x coordinate in pixels of the displacer
    #[arg(long, allow_negative_numbers = true)]
    px: f64,
    /// initial y coordinate in pixels of the displacer
    #[arg(long, allow_negative_numbers = true)]
    py: f64,
    /// initial speed in the x component in m/s
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    vx: f64,
    /// initial speed in the y component in m/s
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    vy: f64,
    /// meters per pixel scale
    #[arg(long, default_value_t = 1.0)]
    hscale: f64,
    /// meters per pixel color scale
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    vscale: f64,
    /// acceleration of gravity in m/s²
    #[arg(long, default_value_t = STANDARD_GRAVITY, allow_negative_numbers = true)]
    gravity: f64,
    /// coefficient of friction
    #[arg(long, default_value_t = 0.0)]
    mu: f64,
    /// radius in pixels around the displacer used to compute the inclination of the terrain
    #[arg(long, default_value_t = 1)]
    radius: usize,
    /// value for Δt in seconds
    #[arg(long, default_value_t = 1.0)]
    dt: f64,
    /// number of iterations
    #[arg(long, default_value_t = 200)]
    iter: usize,
    /// show a warning when the displacer leaves the terrain
    #[arg(long)]
    warn: bool,
    /// output file (.json or .yaml), stdout JSON when omitted
    #[arg(long)]
    output: Option<PathBuf>,
    /// keep only the final state instead of the whole trajectory
    #[arg(long)]
    final_only: bool,
    /// delete the input image once it has been loaded
    #[arg(long)]
    rminput: bool,
}

fn run_single(args: RunArgs) -> Result<()> {
    let terrain = if args.rminput {
        take_heightmap(&args.terrain)?
    } else {
        load_heightmap(&args.terrain)?
    };

    let params = Parameters {
        hscale: args.hscale,
        vscale: args.vscale,
        gravity: args.gravity,
        mu: args.mu,
        radius: args.radius,
        dt: args.dt,
        iterations: args.iter,
    };
    let initial = State::new(args.px, args.py, args.vx, args.vy);
    let options = RunOptions { warn: args.warn };

    let run = simulate(&terrain, initial, &params, &options)?;
    info!("run ended with {:?} after {} states", run.termination, run.states.len());

    let mode = if args.final_only { ReturnMode::Final } else { ReturnMode::All };
    emit(args.output.as_deref(), &run.into_output(mode))
}

fn run_scenario(file_name: &Path, output: Option<&Path>) -> Result<()> {
    let scenario = Scenario::from_yaml_file(file_name)?;
    info!(
        "scenario {}: {} displacers on a {}x{} terrain",
        file_name.display(),
        scenario.displacers.len(),
        scenario.terrain.width(),
        scenario.terrain.height()
    );
    emit(output, &scenario.outputs()?)
}

// write to a file when asked, stdout otherwise
fn emit<T: Serialize + ?Sized>(output: Option<&Path>, value: &T) -> Result<()> {
    match output {
        Some(path) => {
            export_to_file(path, value)?;
            info!("wrote {}", path.display());
            Ok(())
        }
        None => write_output(io::stdout().lock(), value, ExportFormat::Json),
    }
}

fn main() -> Result<()> {
    // boundary warnings visible by default, RUST_LOG overrides
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run(args) => run_single(args),
        Command::Scenario { file_name, output } => run_scenario(&file_name, output.as_deref()),
        Command::Bench => {
            bench_radius()?;
            bench_batch()
        }
    }
}
