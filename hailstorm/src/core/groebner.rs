//! Reduced lex Gröbner bases via Buchberger's algorithm.

use num::{BigRational, One};
use thiserror::Error;
use tracing::debug;

use crate::core::poly::{Monomial, Polynomial};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("gave up after {reductions} S-polynomial reductions")]
pub struct BudgetExhausted {
    pub reductions: usize,
}

/// Outcome of a basis computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Basis {
    /// Reduced basis sorted by ascending leading monomial.
    pub polynomials: Vec<Polynomial>,
    pub reductions: usize,
}

impl Basis {
    /// True when the basis is `{1}`: the generators have no common zero.
    pub fn is_unit(&self) -> bool {
        matches!(self.polynomials.as_slice(), [only] if only.is_constant() && !only.is_zero())
    }
}

/// Compute the reduced Gröbner basis of `generators`.
///
/// Pairs are processed smallest lcm first. Pairs with coprime leading
/// monomials (product criterion) and pairs covered by an already treated
/// middle element (chain criterion) are skipped without reduction. At most
/// `max_reductions` S-polynomials are reduced.
pub fn groebner_basis(
    generators: &[Polynomial],
    max_reductions: usize,
) -> Result<Basis, BudgetExhausted> {
    let mut basis: Vec<Polynomial> = generators
        .iter()
        .filter(|poly| !poly.is_zero())
        .map(|poly| poly.clone().into_monic())
        .collect();
    if let Some(unit) = basis.iter().find(|poly| poly.is_constant()) {
        return Ok(Basis {
            polynomials: vec![Polynomial::constant(unit.arity(), BigRational::one())],
            reductions: 0,
        });
    }

    let mut pending: Vec<(usize, usize)> = (0..basis.len())
        .flat_map(|j| (0..j).map(move |i| (i, j)))
        .collect();
    let mut reductions = 0;

    while let Some(position) = next_pair(&basis, &pending) {
        let (i, j) = pending.swap_remove(position);
        let lead_i = leading(&basis[i]);
        let lead_j = leading(&basis[j]);
        if lead_i.is_coprime(lead_j) {
            continue;
        }
        let lcm = lead_i.lcm(lead_j);
        if chain_covers(&basis, &pending, i, j, &lcm) {
            continue;
        }

        if reductions == max_reductions {
            return Err(BudgetExhausted { reductions });
        }
        reductions += 1;

        let remainder = reduce(&s_polynomial(&basis[i], &basis[j], &lcm), &basis);
        if remainder.is_zero() {
            continue;
        }
        if remainder.is_constant() {
            debug!(reductions, "basis collapsed to a constant");
            return Ok(Basis {
                polynomials: vec![Polynomial::constant(remainder.arity(), BigRational::one())],
                reductions,
            });
        }
        let index = basis.len();
        basis.push(remainder.into_monic());
        pending.extend((0..index).map(|k| (k, index)));
    }

    let polynomials = interreduce(basis);
    debug!(reductions, size = polynomials.len(), "reduced basis complete");
    Ok(Basis {
        polynomials,
        reductions,
    })
}

/// Full normal form of `poly` modulo `divisors`, which must be monic.
pub fn reduce(poly: &Polynomial, divisors: &[Polynomial]) -> Polynomial {
    let mut work = poly.clone();
    let mut remainder = Polynomial::zero(poly.arity());
    while let Some((monomial, coefficient)) = work
        .leading_term()
        .map(|(monomial, c)| (monomial.clone(), c.clone()))
    {
        let divisor = divisors.iter().find_map(|divisor| {
            monomial
                .quotient(leading(divisor))
                .map(|shift| (divisor, shift))
        });
        match divisor {
            Some((divisor, shift)) => work.sub_multiple(&coefficient, &shift, divisor),
            None => {
                work.pop_leading();
                remainder.add_term(monomial, coefficient);
            }
        }
    }
    remainder
}

fn leading(poly: &Polynomial) -> &Monomial {
    poly.leading_monomial().expect("basis polynomials are non-zero")
}

fn s_polynomial(f: &Polynomial, g: &Polynomial, lcm: &Monomial) -> Polynomial {
    let shift_f = lcm.quotient(leading(f)).unwrap_or_else(|| lcm.clone());
    let shift_g = lcm.quotient(leading(g)).unwrap_or_else(|| lcm.clone());
    let mut out = f.shifted(&shift_f);
    out.sub_multiple(&BigRational::one(), &shift_g, g);
    out
}

/// Index into `pending` of the pair with the smallest lcm (degree, then lex).
fn next_pair(basis: &[Polynomial], pending: &[(usize, usize)]) -> Option<usize> {
    pending
        .iter()
        .enumerate()
        .min_by_key(|(_, (i, j))| {
            let lcm = leading(&basis[*i]).lcm(leading(&basis[*j]));
            (lcm.degree(), lcm)
        })
        .map(|(position, _)| position)
}

fn chain_covers(
    basis: &[Polynomial],
    pending: &[(usize, usize)],
    i: usize,
    j: usize,
    lcm: &Monomial,
) -> bool {
    let is_pending = |a: usize, b: usize| pending.contains(&(a.min(b), a.max(b)));
    (0..basis.len()).any(|k| {
        k != i
            && k != j
            && leading(&basis[k]).divides(lcm)
            && !is_pending(i, k)
            && !is_pending(j, k)
    })
}

/// Drop redundant elements, then reduce each against the rest.
fn interreduce(basis: Vec<Polynomial>) -> Vec<Polynomial> {
    let minimal: Vec<Polynomial> = basis
        .iter()
        .enumerate()
        .filter(|(index, poly)| {
            let lead = leading(poly);
            !basis.iter().enumerate().any(|(other, candidate)| {
                let candidate_lead = leading(candidate);
                other != *index
                    && candidate_lead.divides(lead)
                    && (candidate_lead != lead || other < *index)
            })
        })
        .map(|(_, poly)| poly.clone())
        .collect();

    let mut reduced: Vec<Polynomial> = (0..minimal.len())
        .map(|index| {
            let others: Vec<Polynomial> = minimal
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != index)
                .map(|(_, poly)| poly.clone())
                .collect();
            reduce(&minimal[index], &others).into_monic()
        })
        .collect();
    reduced.sort_by(|a, b| leading(a).cmp(leading(b)));
    reduced
}
