//! Exact rational solutions of polynomial systems.
//!
//! [`GroebnerSolver`] computes a reduced lex Gröbner basis, checks that the
//! solution set is finite, and back-substitutes from the last unknown to the
//! first, keeping only rational roots.

use num::{BigRational, Signed};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::groebner::{BudgetExhausted, groebner_basis};
use crate::core::poly::{Monomial, Polynomial};
use crate::core::symbols::{Symbol, Symbols};
use crate::core::univariate::UniPoly;

/// Work limit used when no configuration overrides it.
pub const DEFAULT_MAX_REDUCTIONS: usize = 10_000;

/// One value per unknown, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionTuple(Vec<BigRational>);

impl SolutionTuple {
    pub fn new(values: Vec<BigRational>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[BigRational] {
        &self.0
    }

    pub fn value(&self, symbol: Symbol) -> &BigRational {
        &self.0[symbol.index()]
    }

    pub fn is_integral(&self) -> bool {
        self.0.iter().all(BigRational::is_integer)
    }

    pub fn is_non_negative(&self, symbol: Symbol) -> bool {
        !self.value(symbol).is_negative()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("equation over {found} unknowns in a system of {expected}")]
    ArityMismatch { expected: usize, found: usize },
    #[error("solver did not finish: {0}")]
    BudgetExhausted(#[from] BudgetExhausted),
    #[error("infinitely many solutions: {unknown} is unconstrained")]
    PositiveDimensional { unknown: String },
}

/// Finds every rational solution of a polynomial system.
pub trait PolynomialSystemSolver {
    /// Tuples are ordered like `unknowns`. An empty list means no solution.
    fn solve(
        &self,
        equations: &[Polynomial],
        unknowns: &Symbols,
    ) -> Result<Vec<SolutionTuple>, SolverError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroebnerSolver {
    pub max_reductions: usize,
}

impl Default for GroebnerSolver {
    fn default() -> Self {
        Self {
            max_reductions: DEFAULT_MAX_REDUCTIONS,
        }
    }
}

impl PolynomialSystemSolver for GroebnerSolver {
    fn solve(
        &self,
        equations: &[Polynomial],
        unknowns: &Symbols,
    ) -> Result<Vec<SolutionTuple>, SolverError> {
        let arity = unknowns.len();
        if let Some(poly) = equations.iter().find(|poly| poly.arity() != arity) {
            return Err(SolverError::ArityMismatch {
                expected: arity,
                found: poly.arity(),
            });
        }

        let basis = groebner_basis(equations, self.max_reductions)?;
        info!(
            reductions = basis.reductions,
            size = basis.polynomials.len(),
            "groebner basis computed"
        );
        for poly in &basis.polynomials {
            debug!(element = %poly.display(unknowns), "basis element");
        }
        if basis.is_unit() {
            return Ok(Vec::new());
        }

        if let Some(free) = unknowns.iter().find(|symbol| {
            !basis
                .polynomials
                .iter()
                .filter_map(Polynomial::leading_monomial)
                .any(|lead| lead.pure_power() == Some(symbol.index()))
        }) {
            return Err(SolverError::PositiveDimensional {
                unknown: unknowns.name(free).to_string(),
            });
        }

        let solutions: Vec<SolutionTuple> = back_substitute(&basis.polynomials, arity)
            .into_iter()
            .map(SolutionTuple::new)
            .collect();
        info!(solutions = solutions.len(), "back-substitution complete");
        Ok(solutions)
    }
}

/// Extend partial solutions one unknown at a time, last unknown first.
///
/// Members of the basis whose leading unknown is at or after `index` generate
/// the elimination ideal for the tail. With the tail fixed, each becomes
/// univariate in `index`; their gcd carries exactly the admissible values.
fn back_substitute(basis: &[Polynomial], arity: usize) -> Vec<Vec<BigRational>> {
    let mut partials: Vec<Vec<BigRational>> = vec![Vec::new()];
    for index in (0..arity).rev() {
        let eliminated: Vec<&Polynomial> = basis
            .iter()
            .filter(|poly| {
                poly.leading_monomial()
                    .and_then(Monomial::leading_index)
                    .is_some_and(|lead| lead >= index)
            })
            .collect();

        let mut extended = Vec::new();
        for tail in &partials {
            let constraint = eliminated
                .iter()
                .filter_map(|poly| {
                    let fixed = tail
                        .iter()
                        .enumerate()
                        .fold((*poly).clone(), |acc, (offset, value)| {
                            acc.substitute(index + 1 + offset, value)
                        });
                    UniPoly::from_polynomial(&fixed, index)
                })
                .fold(UniPoly::new(Vec::new()), |acc, poly| acc.gcd(&poly));
            for root in constraint.rational_roots() {
                let mut values = Vec::with_capacity(tail.len() + 1);
                values.push(root);
                values.extend(tail.iter().cloned());
                extended.push(values);
            }
        }
        partials = extended;
    }
    partials
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::BigInt;

    fn q(n: i64) -> BigRational {
        BigRational::from_integer(BigInt::from(n))
    }

    fn declare(names: &[&str]) -> (Symbols, Vec<Polynomial>) {
        let mut symbols = Symbols::new();
        let vars = names
            .iter()
            .map(|name| {
                let symbol = symbols.declare(*name).expect("declare");
                Polynomial::variable(names.len(), symbol)
            })
            .collect();
        (symbols, vars)
    }

    #[test]
    fn finds_every_rational_point_in_root_order() {
        let (symbols, v) = declare(&["x", "y"]);
        let c = |n| Polynomial::constant(2, q(n));
        // x^2 + y^2 = 5, x = y + 1  ->  (-1, -2), (2, 1)
        let circle = &(&(&v[0] * &v[0]) + &(&v[1] * &v[1])) - &c(5);
        let line = &(&v[0] - &v[1]) - &c(1);
        let solutions = GroebnerSolver::default()
            .solve(&[circle, line], &symbols)
            .expect("solve");
        assert_eq!(
            solutions,
            vec![
                SolutionTuple::new(vec![q(-1), q(-2)]),
                SolutionTuple::new(vec![q(2), q(1)]),
            ]
        );
    }

    #[test]
    fn irrational_points_are_not_reported() {
        let (symbols, v) = declare(&["x", "y"]);
        let c = |n| Polynomial::constant(2, q(n));
        // x^2 = 2, y = x
        let square = &(&v[0] * &v[0]) - &c(2);
        let diagonal = &v[1] - &v[0];
        let solutions = GroebnerSolver::default()
            .solve(&[square, diagonal], &symbols)
            .expect("solve");
        assert!(solutions.is_empty());
    }

    #[test]
    fn inconsistent_system_has_no_solutions() {
        let (symbols, v) = declare(&["x"]);
        let c = |n| Polynomial::constant(1, q(n));
        let solutions = GroebnerSolver::default()
            .solve(&[&v[0] - &c(1), &v[0] - &c(2)], &symbols)
            .expect("solve");
        assert!(solutions.is_empty());
    }

    #[test]
    fn underdetermined_system_is_reported() {
        let (symbols, v) = declare(&["x", "y"]);
        let err = GroebnerSolver::default()
            .solve(&[&v[0] - &v[1]], &symbols)
            .expect_err("free unknown");
        assert_eq!(
            err,
            SolverError::PositiveDimensional {
                unknown: "y".to_string()
            }
        );
    }

    #[test]
    fn rejects_equations_over_other_unknowns() {
        let (symbols, _) = declare(&["x", "y"]);
        let stray = Polynomial::constant(3, q(1));
        let err = GroebnerSolver::default()
            .solve(&[stray], &symbols)
            .expect_err("arity");
        assert_eq!(
            err,
            SolverError::ArityMismatch {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn budget_exhaustion_is_an_error() {
        let (symbols, v) = declare(&["x", "y"]);
        let c = |n| Polynomial::constant(2, q(n));
        let circle = &(&(&v[0] * &v[0]) + &(&v[1] * &v[1])) - &c(5);
        let line = &(&v[0] - &v[1]) - &c(1);
        let solver = GroebnerSolver { max_reductions: 0 };
        let err = solver.solve(&[circle, line], &symbols).expect_err("budget");
        assert!(matches!(err, SolverError::BudgetExhausted(_)));
    }

    #[test]
    fn solution_tuple_predicates() {
        let mut symbols = Symbols::new();
        let t = symbols.declare("t").expect("t");
        let tuple = SolutionTuple::new(vec![q(-3)]);
        assert!(tuple.is_integral());
        assert!(!tuple.is_non_negative(t));
        let half = SolutionTuple::new(vec![BigRational::new(BigInt::from(1), BigInt::from(2))]);
        assert!(!half.is_integral());
        assert!(half.is_non_negative(t));
    }
}
