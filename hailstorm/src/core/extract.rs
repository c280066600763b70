//! Picking a solution and reading the answer off it.

use num::{BigInt, BigRational, Zero};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::equations::ThrowSystem;
use crate::core::solver::SolutionTuple;

/// How to choose among several solution tuples.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Tuple 0, whatever it holds.
    #[default]
    First,
    /// First tuple with all-integer values and non-negative times.
    Physical,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("the system has no rational solution")]
    EmptySolution,
    #[error("none of {candidates} solutions has integer values and non-negative times")]
    NoPhysicalSolution { candidates: usize },
    #[error("origin coordinates sum to {0}, which is not an integer")]
    NonIntegralSum(BigRational),
}

pub fn select_solution<'a>(
    system: &ThrowSystem,
    solutions: &'a [SolutionTuple],
    policy: SelectionPolicy,
) -> Result<&'a SolutionTuple, ExtractError> {
    if solutions.is_empty() {
        return Err(ExtractError::EmptySolution);
    }
    match policy {
        SelectionPolicy::First => Ok(&solutions[0]),
        SelectionPolicy::Physical => solutions
            .iter()
            .find(|tuple| {
                tuple.is_integral() && system.times.iter().all(|&time| tuple.is_non_negative(time))
            })
            .ok_or(ExtractError::NoPhysicalSolution {
                candidates: solutions.len(),
            }),
    }
}

/// Sum of the ray origin coordinates; must be an exact integer.
pub fn origin_sum(system: &ThrowSystem, solution: &SolutionTuple) -> Result<BigInt, ExtractError> {
    let sum = system
        .origin
        .iter()
        .fold(BigRational::zero(), |acc, &axis| acc + solution.value(axis));
    if !sum.is_integer() {
        return Err(ExtractError::NonIntegralSum(sum));
    }
    Ok(sum.to_integer())
}

/// `[("name", value), ...]` pairing every unknown with its value.
pub fn assignment_listing(system: &ThrowSystem, solution: &SolutionTuple) -> String {
    let pairs: Vec<String> = system
        .symbols
        .iter()
        .map(|symbol| {
            format!(
                "(\"{}\", {})",
                system.symbols.name(symbol),
                solution.value(symbol)
            )
        })
        .collect();
    format!("[{}]", pairs.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::equations::build_system;
    use crate::core::hailstone::parse_hailstones;
    use crate::test_support::SAMPLE;

    fn q(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    fn tuple(values: &[(i64, i64)]) -> SolutionTuple {
        SolutionTuple::new(values.iter().map(|&(n, d)| q(n, d)).collect())
    }

    fn system() -> ThrowSystem {
        let stones = parse_hailstones(SAMPLE).expect("parse");
        build_system(&stones[..3]).expect("build")
    }

    const WORKED: [(i64, i64); 9] = [
        (24, 1),
        (13, 1),
        (10, 1),
        (-3, 1),
        (1, 1),
        (2, 1),
        (5, 1),
        (3, 1),
        (4, 1),
    ];

    #[test]
    fn empty_solution_list_is_an_error() {
        let err = select_solution(&system(), &[], SelectionPolicy::First).expect_err("empty");
        assert_eq!(err, ExtractError::EmptySolution);
    }

    #[test]
    fn first_policy_takes_tuple_zero() {
        let mut negative = WORKED;
        negative[6] = (-5, 1);
        let solutions = vec![tuple(&negative), tuple(&WORKED)];
        let system = system();
        let chosen = select_solution(&system, &solutions, SelectionPolicy::First).expect("first");
        assert_eq!(chosen, &solutions[0]);
    }

    #[test]
    fn physical_policy_skips_negative_times_and_fractions() {
        let mut negative = WORKED;
        negative[6] = (-5, 1);
        let mut fractional = WORKED;
        fractional[0] = (49, 2);
        let solutions = vec![tuple(&negative), tuple(&fractional), tuple(&WORKED)];
        let system = system();
        let chosen =
            select_solution(&system, &solutions, SelectionPolicy::Physical).expect("physical");
        assert_eq!(chosen, &solutions[2]);

        let err = select_solution(&system, &solutions[..2], SelectionPolicy::Physical)
            .expect_err("none physical");
        assert_eq!(err, ExtractError::NoPhysicalSolution { candidates: 2 });
    }

    #[test]
    fn origin_sum_requires_integer() {
        let system = system();
        assert_eq!(origin_sum(&system, &tuple(&WORKED)), Ok(BigInt::from(47)));

        let mut fractional = WORKED;
        fractional[0] = (49, 2);
        let err = origin_sum(&system, &tuple(&fractional)).expect_err("fraction");
        assert_eq!(err, ExtractError::NonIntegralSum(q(95, 2)));
    }

    #[test]
    fn listing_pairs_names_with_values() {
        let system = system();
        let mut values = WORKED;
        values[8] = (9, 2);
        let listing = assignment_listing(&system, &tuple(&values));
        assert!(listing.starts_with("[(\"x_throw\", 24), (\"y_throw\", 13)"));
        assert!(listing.ends_with("(\"time_2\", 9/2)]"));
    }
}
