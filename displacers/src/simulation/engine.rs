//! Simulation loop
//!
//! Chains the four stages once per iteration:
//! neighborhood -> inclination -> accelerations -> next state.
//!
//! The loop always keeps the whole trajectory; callers pick what they want
//! from the resulting [`Run`] through [`ReturnMode`].

use anyhow::Result;
use log::{debug, warn};
use rayon::prelude::*;
use serde::Serialize;

use super::forces::accelerations;
use super::integrator::next_state;
use super::params::Parameters;
use super::slope::window_inclination;
use super::states::{State, Trajectory};
use super::terrain::{neighborhood, Terrain};

/// What the caller keeps from a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnMode {
    #[default]
    All, // every state, initial included
    Final, // only the last state
}

/// Why a run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    IterationLimit,
    /// The state at index `iteration` lies outside the terrain
    OutOfBounds { iteration: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub warn: bool, // log a warning when the displacer leaves the terrain
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { warn: true }
    }
}

/// Result of one simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub states: Trajectory,
    pub termination: Termination,
}

/// Projection of a [`Run`] handed to output collaborators
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Trajectory(Trajectory),
    Final(State),
}

impl Run {
    pub fn final_state(&self) -> State {
        // A run always holds at least its initial state
        self.states[self.states.len() - 1]
    }

    pub fn into_output(self, mode: ReturnMode) -> Output {
        match mode {
            ReturnMode::All => Output::Trajectory(self.states),
            ReturnMode::Final => Output::Final(self.final_state()),
        }
    }
}

/// One iteration from `prev`, or `None` when `prev` is not on the terrain
pub fn step(terrain: &Terrain, prev: &State, params: &Parameters) -> Option<State> {
    if !terrain.contains(prev.position_x, prev.position_y) {
        return None;
    }

    // Nearest cell, ties to even
    let cx = prev.position_x.round_ties_even() as usize;
    let cy = prev.position_y.round_ties_even() as usize;

    let window = neighborhood(terrain, cx, cy, params.radius);
    let inclination = window_inclination(&window, params.hscale, params.vscale);
    let accel = accelerations(&inclination, params);

    Some(next_state(prev, &accel, &inclination, params))
}

/// Run the displacer from `initial` for up to `params.iterations` steps.
///
/// Fails only when `params` is invalid. Leaving the terrain ends the run
/// early and is reported through [`Run::termination`].
pub fn simulate(terrain: &Terrain, initial: State, params: &Parameters, options: &RunOptions) -> Result<Run> {
    params.validate()?;

    let mut states = Vec::with_capacity(params.iterations + 1);
    states.push(initial);
    let mut termination = Termination::IterationLimit;

    for i in 0..params.iterations {
        let prev = states[states.len() - 1];

        let Some(next) = step(terrain, &prev, params) else {
            if options.warn {
                warn!(
                    "stopped on iteration {} because the displacer is outside the terrain at ({}, {})",
                    i, prev.position_x, prev.position_y
                );
            }
            termination = Termination::OutOfBounds { iteration: i };
            break;
        };

        states.push(next);
    }

    debug!("run finished after {} states: {:?}", states.len(), termination);

    Ok(Run { states, termination })
}

/// Run several displacers over the same terrain in parallel.
/// Runs are independent, results come back in input order.
pub fn simulate_batch(
    terrain: &Terrain,
    initials: &[State],
    params: &Parameters,
    options: &RunOptions,
) -> Result<Vec<Run>> {
    params.validate()?;

    initials
        .par_iter()
        .map(|initial| simulate(terrain, *initial, params, options))
        .collect()
}
