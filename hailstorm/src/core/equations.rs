//! Intersection equations for the rock throw.
//!
//! For each sampled hailstone `i` and axis `a`:
//!
//! ```text
//! origin_a + time_i * velocity_a - position_a - time_i * drift_a = 0
//! ```
//!
//! Three hailstones give nine equations in nine unknowns (six shared ray
//! unknowns, one time per hailstone), which fixes the ray. Further hailstones
//! only add redundant equations, so the sample stays small.

use num::{BigInt, BigRational, One, Zero};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::hailstone::{AXES, Hailstone};
use crate::core::poly::{Monomial, Polynomial};
use crate::core::symbols::{DuplicateSymbol, Symbol, Symbols};

/// Which consecutive hailstones feed the system.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Sample {
    pub offset: usize,
    pub size: usize,
}

impl Default for Sample {
    fn default() -> Self {
        Self { offset: 0, size: 3 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("need {needed} hailstones starting at index {offset}, input has {available}")]
    NotEnoughHailstones {
        needed: usize,
        offset: usize,
        available: usize,
    },
    #[error("hailstones {first} and {second} travel the same path; the sample cannot fix the ray")]
    SharedPath { first: usize, second: usize },
    #[error(transparent)]
    Symbol(#[from] DuplicateSymbol),
}

/// Polynomial system plus the unknowns it is written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThrowSystem {
    pub symbols: Symbols,
    pub origin: [Symbol; 3],
    pub velocity: [Symbol; 3],
    /// One per sampled hailstone, in sample order.
    pub times: Vec<Symbol>,
    /// Three per sampled hailstone, axis-major within each hailstone.
    pub equations: Vec<Polynomial>,
}

impl ThrowSystem {
    pub fn arity(&self) -> usize {
        self.symbols.len()
    }
}

/// Select `sample` from `hailstones`, resolving the range against the input.
pub fn sample_hailstones(
    hailstones: &[Hailstone],
    sample: Sample,
) -> Result<&[Hailstone], BuildError> {
    hailstones
        .get(sample.offset..sample.offset + sample.size)
        .ok_or(BuildError::NotEnoughHailstones {
            needed: sample.size,
            offset: sample.offset,
            available: hailstones.len(),
        })
}

/// First pair (by input index) of sampled hailstones that travel the same path.
///
/// Such a pair constrains the ray no more than one of them does, leaving the
/// system short of equations. Parallel but distinct paths are fine.
pub fn find_shared_path(sample: &[Hailstone], offset: usize) -> Option<(usize, usize)> {
    for (i, first) in sample.iter().enumerate() {
        for (j, second) in sample.iter().enumerate().skip(i + 1) {
            if same_path(first, second) {
                return Some((offset + i, offset + j));
            }
        }
    }
    None
}

fn same_path(a: &Hailstone, b: &Hailstone) -> bool {
    let offset: [BigInt; 3] = std::array::from_fn(|axis| &b.position[axis] - &a.position[axis]);
    let still_a = a.velocity.iter().all(Zero::is_zero);
    let still_b = b.velocity.iter().all(Zero::is_zero);
    match (still_a, still_b) {
        (true, true) => offset.iter().all(Zero::is_zero),
        (false, false) => {
            is_zero_cross(&a.velocity, &b.velocity) && is_zero_cross(&offset, &a.velocity)
        }
        _ => false,
    }
}

fn is_zero_cross(a: &[BigInt; 3], b: &[BigInt; 3]) -> bool {
    (0..3).all(|axis| {
        let next = (axis + 1) % 3;
        let other = (axis + 2) % 3;
        (&a[next] * &b[other] - &a[other] * &b[next]).is_zero()
    })
}

/// Build the intersection system for `sample` (already selected).
///
/// Unknowns are declared ray first (`x_throw`, `y_throw`, `z_throw`,
/// `x_vel_throw`, `y_vel_throw`, `z_vel_throw`) and then `time_<i>` per
/// hailstone, where `i` counts within the sample.
pub fn build_system(sample: &[Hailstone]) -> Result<ThrowSystem, BuildError> {
    let mut symbols = Symbols::new();
    let mut declare_axes = |suffix: &str| -> Result<[Symbol; 3], DuplicateSymbol> {
        let [x, y, z] = AXES.map(|axis| format!("{axis}_{suffix}"));
        Ok([symbols.declare(x)?, symbols.declare(y)?, symbols.declare(z)?])
    };
    let origin = declare_axes("throw")?;
    let velocity = declare_axes("vel_throw")?;
    let times = (0..sample.len())
        .map(|index| symbols.declare(format!("time_{index}")))
        .collect::<Result<Vec<_>, _>>()?;

    let arity = symbols.len();
    let mut equations = Vec::with_capacity(3 * sample.len());
    for (stone, &time) in sample.iter().zip(&times) {
        for axis in 0..3 {
            let mut equation = Polynomial::zero(arity);
            equation.add_term(Monomial::variable(arity, origin[axis]), BigRational::one());
            let drift = Monomial::variable(arity, velocity[axis]);
            equation.add_term(
                drift.product(&Monomial::variable(arity, time)),
                BigRational::one(),
            );
            equation.add_term(
                Monomial::one(arity),
                -BigRational::from_integer(stone.position[axis].clone()),
            );
            equation.add_term(
                Monomial::variable(arity, time),
                -BigRational::from_integer(stone.velocity[axis].clone()),
            );
            equations.push(equation);
        }
    }

    Ok(ThrowSystem {
        symbols,
        origin,
        velocity,
        times,
        equations,
    })
}
