//! Univariate polynomials over Q and their rational roots.
//!
//! Roots are found exactly: the square-free part is isolated with a Sturm
//! sequence and bisected until each isolating interval is narrower than
//! `1/|a_n|`, where `a_n` is the leading coefficient after clearing
//! denominators. Every rational root `p/q` of an integer polynomial has
//! `q | a_n`, so each interval holds at most two candidates `k/a_n` to test.

use num::{BigInt, BigRational, Integer, One, Signed, Zero};

use crate::core::poly::Polynomial;

/// Coefficients in ascending degree, without trailing zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniPoly(Vec<BigRational>);

impl UniPoly {
    pub fn new(mut coefficients: Vec<BigRational>) -> Self {
        while coefficients.last().is_some_and(Zero::is_zero) {
            coefficients.pop();
        }
        Self(coefficients)
    }

    pub fn from_integers(coefficients: &[i64]) -> Self {
        Self::new(
            coefficients
                .iter()
                .map(|&c| BigRational::from_integer(BigInt::from(c)))
                .collect(),
        )
    }

    /// View `poly` as a polynomial in unknown `index`, if no other unknown appears.
    pub fn from_polynomial(poly: &Polynomial, index: usize) -> Option<Self> {
        let mut coefficients = Vec::new();
        for (monomial, c) in poly.terms() {
            let exponents = monomial.exponents();
            if exponents
                .iter()
                .enumerate()
                .any(|(i, &e)| i != index && e > 0)
            {
                return None;
            }
            let degree = exponents[index] as usize;
            if coefficients.len() <= degree {
                coefficients.resize(degree + 1, BigRational::zero());
            }
            coefficients[degree] += c;
        }
        Some(Self::new(coefficients))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    /// Degree, with `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.0.len().checked_sub(1)
    }

    pub fn coefficients(&self) -> &[BigRational] {
        &self.0
    }

    fn leading(&self) -> Option<&BigRational> {
        self.0.last()
    }

    pub fn evaluate(&self, x: &BigRational) -> BigRational {
        self.0
            .iter()
            .rev()
            .fold(BigRational::zero(), |acc, c| acc * x + c)
    }

    pub fn derivative(&self) -> Self {
        Self::new(
            self.0
                .iter()
                .enumerate()
                .skip(1)
                .map(|(power, c)| c * BigRational::from_integer(BigInt::from(power)))
                .collect(),
        )
    }

    /// Euclidean division. Panics if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        let lead = divisor.leading().expect("division by zero polynomial");
        let divisor_degree = divisor.0.len() - 1;
        let mut remainder = self.0.clone();
        if remainder.len() <= divisor_degree {
            return (Self::new(Vec::new()), self.clone());
        }
        let mut quotient = vec![BigRational::zero(); remainder.len() - divisor_degree];
        for shift in (0..quotient.len()).rev() {
            let factor = &remainder[shift + divisor_degree] / lead;
            if factor.is_zero() {
                continue;
            }
            for (offset, c) in divisor.0.iter().enumerate() {
                remainder[shift + offset] -= &factor * c;
            }
            quotient[shift] = factor;
        }
        remainder.truncate(divisor_degree);
        (Self::new(quotient), Self::new(remainder))
    }

    /// Monic greatest common divisor; `gcd(0, 0) = 0`.
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let (_, remainder) = a.div_rem(&b);
            a = b;
            b = remainder;
        }
        a.into_monic()
    }

    fn into_monic(self) -> Self {
        let Some(inverse) = self.leading().map(BigRational::recip) else {
            return self;
        };
        Self(self.0.iter().map(|c| c * &inverse).collect())
    }

    fn negated(&self) -> Self {
        Self(self.0.iter().map(|c| -c).collect())
    }

    /// Divide out repeated factors.
    pub fn square_free(&self) -> Self {
        if self.degree().is_none_or(|degree| degree == 0) {
            return self.clone();
        }
        let common = self.gcd(&self.derivative());
        self.div_rem(&common).0
    }

    /// Distinct rational roots in ascending order. The zero polynomial has none
    /// reported; callers must treat it as unconstrained.
    pub fn rational_roots(&self) -> Vec<BigRational> {
        let mut poly = self.square_free();
        let mut roots = Vec::new();
        loop {
            match poly.degree() {
                None | Some(0) => break,
                Some(1) => {
                    roots.push(-&poly.0[0] / &poly.0[1]);
                    break;
                }
                Some(_) => {}
            }
            match isolate(&poly) {
                Isolation::Exact(root) => {
                    let linear = Self::new(vec![-root.clone(), BigRational::one()]);
                    poly = poly.div_rem(&linear).0;
                    roots.push(root);
                }
                Isolation::Complete(found) => {
                    roots.extend(found);
                    break;
                }
            }
        }
        roots.sort();
        roots.dedup();
        roots
    }
}

enum Isolation {
    /// A bisection point hit a root; deflate and start over.
    Exact(BigRational),
    Complete(Vec<BigRational>),
}

/// Rational roots of a square-free polynomial of degree >= 2.
fn isolate(poly: &UniPoly) -> Isolation {
    let grid = integral_leading_coefficient(poly);
    let width_limit = BigRational::new(BigInt::one(), grid.clone());
    let chain = sturm_chain(poly);
    let bound = cauchy_bound(poly);

    let mut found = Vec::new();
    let mut pending = vec![(-bound.clone(), bound)];
    while let Some((lo, hi)) = pending.pop() {
        let count = sign_changes(&chain, &lo) - sign_changes(&chain, &hi);
        if count == 0 {
            continue;
        }
        if count == 1 && &hi - &lo < width_limit {
            let grid_rational = BigRational::from_integer(grid.clone());
            let mut k = (&lo * &grid_rational).ceil().to_integer();
            let last = (&hi * &grid_rational).floor().to_integer();
            while k <= last {
                let candidate = BigRational::new(k.clone(), grid.clone());
                if candidate > lo && poly.evaluate(&candidate).is_zero() {
                    found.push(candidate);
                }
                k += BigInt::one();
            }
            continue;
        }
        let mid = (&lo + &hi) / BigRational::from_integer(BigInt::from(2));
        if poly.evaluate(&mid).is_zero() {
            return Isolation::Exact(mid);
        }
        pending.push((mid.clone(), hi));
        pending.push((lo, mid));
    }
    Isolation::Complete(found)
}

/// `|a_n|` of `poly` scaled to integer coefficients.
fn integral_leading_coefficient(poly: &UniPoly) -> BigInt {
    let denominators = poly
        .0
        .iter()
        .fold(BigInt::one(), |acc, c| acc.lcm(c.denom()));
    let lead = poly.leading().cloned().unwrap_or_else(BigRational::one);
    (lead * BigRational::from_integer(denominators))
        .to_integer()
        .abs()
}

/// Strict bound on the magnitude of every root: `1 + max |a_i / a_n|`.
fn cauchy_bound(poly: &UniPoly) -> BigRational {
    let Some(lead) = poly.leading() else {
        return BigRational::one();
    };
    let largest = poly.0[..poly.0.len() - 1]
        .iter()
        .map(|c| (c / lead).abs())
        .max()
        .unwrap_or_else(BigRational::zero);
    largest + BigRational::one()
}

fn sturm_chain(poly: &UniPoly) -> Vec<UniPoly> {
    let mut chain = vec![poly.clone(), poly.derivative()];
    loop {
        let last = &chain[chain.len() - 1];
        let previous = &chain[chain.len() - 2];
        let (_, remainder) = previous.div_rem(last);
        if remainder.is_zero() {
            break;
        }
        chain.push(remainder.negated());
    }
    chain
}

fn sign_changes(chain: &[UniPoly], x: &BigRational) -> usize {
    let signs: Vec<bool> = chain
        .iter()
        .map(|poly| poly.evaluate(x))
        .filter(|value| !value.is_zero())
        .map(|value| value.is_negative())
        .collect();
    signs.windows(2).filter(|pair| pair[0] != pair[1]).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    /// Expand `prod (x - r)` over the given roots.
    fn with_roots(roots: &[BigRational]) -> UniPoly {
        let mut coefficients = vec![BigRational::one()];
        for root in roots {
            let mut next = vec![BigRational::zero(); coefficients.len() + 1];
            for (power, c) in coefficients.iter().enumerate() {
                next[power + 1] += c;
                next[power] -= c * root;
            }
            coefficients = next;
        }
        UniPoly::new(coefficients)
    }

    #[test]
    fn linear_root() {
        let poly = UniPoly::from_integers(&[-12, 3]);
        assert_eq!(poly.rational_roots(), vec![q(4, 1)]);
    }

    #[test]
    fn integer_roots_of_quadratic() {
        let poly = UniPoly::from_integers(&[-4, 0, 1]);
        assert_eq!(poly.rational_roots(), vec![q(-2, 1), q(2, 1)]);
    }

    #[test]
    fn irrational_and_complex_roots_are_dropped() {
        assert!(UniPoly::from_integers(&[-2, 0, 1]).rational_roots().is_empty());
        assert!(UniPoly::from_integers(&[1, 0, 1]).rational_roots().is_empty());
        assert!(UniPoly::from_integers(&[-21, 0, 3, 0]).rational_roots().is_empty());
    }

    #[test]
    fn repeated_roots_are_reported_once() {
        // (x - 1)^2 (x + 3)
        let poly = with_roots(&[q(1, 1), q(1, 1), q(-3, 1)]);
        assert_eq!(poly.rational_roots(), vec![q(-3, 1), q(1, 1)]);
    }

    #[test]
    fn fractional_roots_mixed_with_irrational_factor() {
        let roots = [q(-500953, 607), q(141331, 134), q(2, 5), q(-1, 3)];
        let base = with_roots(&roots);
        // multiply by x^2 - 3
        let poly = UniPoly::new(
            (0..base.coefficients().len() + 2)
                .map(|power| {
                    let shifted = power
                        .checked_sub(2)
                        .and_then(|p| base.coefficients().get(p))
                        .cloned()
                        .unwrap_or_else(BigRational::zero);
                    let scaled = base
                        .coefficients()
                        .get(power)
                        .map(|c| c * q(3, 1))
                        .unwrap_or_else(BigRational::zero);
                    shifted - scaled
                })
                .collect(),
        );
        let mut expected = roots.to_vec();
        expected.sort();
        assert_eq!(poly.rational_roots(), expected);
    }

    #[test]
    fn zero_root_with_trailing_factor() {
        // x^3 + x^2 = x^2 (x + 1)
        let poly = UniPoly::from_integers(&[0, 0, 1, 1]);
        assert_eq!(poly.rational_roots(), vec![q(-1, 1), q(0, 1)]);
    }

    #[test]
    fn gcd_is_monic_common_factor() {
        let a = with_roots(&[q(1, 1), q(2, 1)]);
        let b = with_roots(&[q(2, 1), q(5, 1)]);
        assert_eq!(a.gcd(&b), with_roots(&[q(2, 1)]));
    }

    #[test]
    fn from_polynomial_rejects_other_unknowns() {
        use crate::core::symbols::Symbols;
        let mut symbols = Symbols::new();
        let x = symbols.declare("x").expect("x");
        let y = symbols.declare("y").expect("y");
        let px = Polynomial::variable(2, x);
        let py = Polynomial::variable(2, y);
        let square = &px * &px;
        assert_eq!(
            UniPoly::from_polynomial(&square, 0),
            Some(UniPoly::from_integers(&[0, 0, 1]))
        );
        assert_eq!(UniPoly::from_polynomial(&(&px + &py), 0), None);
    }
}
