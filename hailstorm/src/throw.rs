//! `hailstorm throw`: find the rock throw that hits every sampled hailstone.
//!
//! Composes the pure stages in order: sample, degeneracy check, equation
//! building, exact solving, solution selection and the origin sum.

use anyhow::{Context, Result};
use num::BigInt;
use tracing::{debug, info, warn};

use crate::core::equations::{
    BuildError, ThrowSystem, build_system, find_shared_path, sample_hailstones,
};
use crate::core::extract::{SelectionPolicy, assignment_listing, origin_sum, select_solution};
use crate::core::hailstone::Hailstone;
use crate::core::solver::{PolynomialSystemSolver, SolutionTuple};
use crate::io::config::ThrowConfig;

/// Everything the `throw` command reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThrowReport {
    pub system: ThrowSystem,
    /// The tuple chosen by the selection policy.
    pub solution: SolutionTuple,
    /// How many tuples the solver returned.
    pub candidates: usize,
    /// Sum of the ray origin coordinates.
    pub answer: BigInt,
}

impl ThrowReport {
    /// Unknown names paired with their values.
    pub fn listing(&self) -> String {
        assignment_listing(&self.system, &self.solution)
    }
}

/// Solve with the configured Gröbner solver.
pub fn solve_throw(hailstones: &[Hailstone], config: &ThrowConfig) -> Result<ThrowReport> {
    solve_throw_with(hailstones, config, &config.solver())
}

pub fn solve_throw_with<S: PolynomialSystemSolver>(
    hailstones: &[Hailstone],
    config: &ThrowConfig,
    solver: &S,
) -> Result<ThrowReport> {
    let sample = config.sample();
    let chosen = sample_hailstones(hailstones, sample).context("select hailstone sample")?;
    if config.reject_degenerate {
        if let Some((first, second)) = find_shared_path(chosen, sample.offset) {
            return Err(BuildError::SharedPath { first, second })
                .context("check sample for degeneracy");
        }
    }

    let system = build_system(chosen).context("build intersection equations")?;
    debug!(
        equations = system.equations.len(),
        unknowns = system.arity(),
        "system built"
    );

    let solutions = solver
        .solve(&system.equations, &system.symbols)
        .context("solve intersection equations")?;
    if solutions.len() > 1 && config.selection == SelectionPolicy::First {
        warn!(
            candidates = solutions.len(),
            "solver returned several solutions; taking the first"
        );
    }
    let solution = select_solution(&system, &solutions, config.selection)
        .context("select solution")?
        .clone();
    let answer = origin_sum(&system, &solution).context("sum ray origin")?;
    info!(%answer, candidates = solutions.len(), "throw found");

    Ok(ThrowReport {
        candidates: solutions.len(),
        system,
        solution,
        answer,
    })
}
