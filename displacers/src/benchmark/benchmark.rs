use std::time::Instant;

use anyhow::Result;

use crate::simulation::engine::{simulate, simulate_batch, RunOptions};
use crate::simulation::params::Parameters;
use crate::simulation::states::State;
use crate::simulation::terrain::Terrain;

/// Helper to build a rolling `size` x `size` terrain, deterministic, no rand needed
fn make_terrain(size: usize) -> Result<Terrain> {
    Terrain::from_fn(size, size, |r, c| {
        let (y, x) = (r as f64, c as f64);
        127.5 + 60.0 * (x * 0.05).sin() * (y * 0.03).cos() + 40.0 * ((x + y) * 0.011).sin()
    })
}

/// Helper to spread `n` resting displacers over the middle of the terrain
fn make_displacers(n: usize, size: usize) -> Vec<State> {
    let span = size as f64 * 0.5;
    let offset = size as f64 * 0.25;
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            State::at_rest(
                offset + (i_f * 0.37).sin().abs() * span,
                offset + (i_f * 0.13).cos().abs() * span,
            )
        })
        .collect()
}

fn make_params(radius: usize, iterations: usize) -> Parameters {
    Parameters {
        mu: 0.05,
        radius,
        dt: 0.1,
        iterations,
        ..Parameters::default()
    }
}

/// Time one long run for growing regression radii
pub fn bench_radius() -> Result<()> {
    let size = 512;
    let iterations = 2000;
    let terrain = make_terrain(size)?;
    let initial = State::at_rest(size as f64 / 2.0, size as f64 / 2.0);
    let options = RunOptions { warn: false };

    for radius in [0, 1, 2, 4, 8, 16] {
        let params = make_params(radius, iterations);

        // Warm up
        simulate(&terrain, initial, &params, &options)?;

        let t0 = Instant::now();
        let run = simulate(&terrain, initial, &params, &options)?;
        let elapsed = t0.elapsed().as_secs_f64();
        let per_step_us = elapsed * 1e6 / (run.states.len().max(2) - 1) as f64;

        println!(
            "radius = {:2}, states = {:5}, total = {:8.6} s, per step = {:8.3} us",
            radius,
            run.states.len(),
            elapsed,
            per_step_us
        );
    }

    Ok(())
}

/// Compare sequential runs against `simulate_batch` for growing batch sizes.
/// Paste output directly into a spreadsheet to graph.
pub fn bench_batch() -> Result<()> {
    let size = 512;
    let terrain = make_terrain(size)?;
    let params = make_params(2, 500);
    let options = RunOptions { warn: false };

    println!("N,sequential_ms,batch_ms");

    for n in [1, 10, 100, 1000] {
        let displacers = make_displacers(n, size);

        let t0 = Instant::now();
        for initial in &displacers {
            simulate(&terrain, *initial, &params, &options)?;
        }
        let ms_sequential = t0.elapsed().as_secs_f64() * 1000.0;

        let t1 = Instant::now();
        simulate_batch(&terrain, &displacers, &params, &options)?;
        let ms_batch = t1.elapsed().as_secs_f64() * 1000.0;

        println!("{},{:.6},{:.6}", n, ms_sequential, ms_batch);
    }

    Ok(())
}
