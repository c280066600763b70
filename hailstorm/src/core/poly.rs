//! Sparse multivariate polynomials over exact rationals.
//!
//! Terms are keyed by [`Monomial`] exponent vectors whose derived `Ord` is the
//! lexicographic term order with unknown 0 most significant, so the last map
//! entry is always the leading term.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num::{BigRational, One, Signed, Zero};

use crate::core::symbols::{Symbol, Symbols};

/// Exponent vector over a fixed number of unknowns.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Monomial(Vec<u32>);

impl Monomial {
    pub fn one(arity: usize) -> Self {
        Self(vec![0; arity])
    }

    pub fn variable(arity: usize, symbol: Symbol) -> Self {
        let mut exponents = vec![0; arity];
        exponents[symbol.index()] = 1;
        Self(exponents)
    }

    pub fn from_exponents(exponents: Vec<u32>) -> Self {
        Self(exponents)
    }

    pub fn exponents(&self) -> &[u32] {
        &self.0
    }

    pub fn degree(&self) -> u32 {
        self.0.iter().sum()
    }

    pub fn is_one(&self) -> bool {
        self.0.iter().all(|&e| e == 0)
    }

    /// Smallest unknown index with a non-zero exponent.
    pub fn leading_index(&self) -> Option<usize> {
        self.0.iter().position(|&e| e > 0)
    }

    /// `Some(i)` if this is `x_i^d` for some `d >= 1`.
    pub fn pure_power(&self) -> Option<usize> {
        let mut found = None;
        for (index, &e) in self.0.iter().enumerate() {
            if e == 0 {
                continue;
            }
            if found.is_some() {
                return None;
            }
            found = Some(index);
        }
        found
    }

    pub fn product(&self, other: &Self) -> Self {
        Self(self.0.iter().zip(&other.0).map(|(a, b)| a + b).collect())
    }

    /// True if `self` divides `other`.
    pub fn divides(&self, other: &Self) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| a <= b)
    }

    pub fn quotient(&self, divisor: &Self) -> Option<Self> {
        if !divisor.divides(self) {
            return None;
        }
        Some(Self(
            self.0
                .iter()
                .zip(&divisor.0)
                .map(|(a, b)| a - b)
                .collect(),
        ))
    }

    pub fn lcm(&self, other: &Self) -> Self {
        Self(
            self.0
                .iter()
                .zip(&other.0)
                .map(|(a, b)| *a.max(b))
                .collect(),
        )
    }

    pub fn is_coprime(&self, other: &Self) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| *a == 0 || *b == 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    arity: usize,
    terms: BTreeMap<Monomial, BigRational>,
}

impl Polynomial {
    pub fn zero(arity: usize) -> Self {
        Self {
            arity,
            terms: BTreeMap::new(),
        }
    }

    pub fn constant(arity: usize, value: BigRational) -> Self {
        let mut poly = Self::zero(arity);
        poly.add_term(Monomial::one(arity), value);
        poly
    }

    pub fn variable(arity: usize, symbol: Symbol) -> Self {
        let mut poly = Self::zero(arity);
        poly.add_term(Monomial::variable(arity, symbol), BigRational::one());
        poly
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// True for the zero polynomial and for non-zero constants.
    pub fn is_constant(&self) -> bool {
        self.terms.keys().all(Monomial::is_one)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in ascending term order.
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = (&Monomial, &BigRational)> {
        self.terms.iter()
    }

    pub fn leading_term(&self) -> Option<(&Monomial, &BigRational)> {
        self.terms.last_key_value()
    }

    pub fn leading_monomial(&self) -> Option<&Monomial> {
        self.leading_term().map(|(monomial, _)| monomial)
    }

    pub fn pop_leading(&mut self) -> Option<(Monomial, BigRational)> {
        self.terms.pop_last()
    }

    pub fn add_term(&mut self, monomial: Monomial, coefficient: BigRational) {
        debug_assert_eq!(monomial.0.len(), self.arity, "monomial arity mismatch");
        if coefficient.is_zero() {
            return;
        }
        match self.terms.entry(monomial) {
            Entry::Vacant(slot) => {
                slot.insert(coefficient);
            }
            Entry::Occupied(mut slot) => {
                *slot.get_mut() += coefficient;
                if slot.get().is_zero() {
                    slot.remove();
                }
            }
        }
    }

    pub fn scale(&self, factor: &BigRational) -> Self {
        if factor.is_zero() {
            return Self::zero(self.arity);
        }
        Self {
            arity: self.arity,
            terms: self
                .terms
                .iter()
                .map(|(monomial, c)| (monomial.clone(), c * factor))
                .collect(),
        }
    }

    /// Divide by the leading coefficient. The zero polynomial is returned as is.
    pub fn into_monic(self) -> Self {
        let Some(inverse) = self.leading_term().map(|(_, lead)| lead.recip()) else {
            return self;
        };
        if inverse.is_one() {
            return self;
        }
        self.scale(&inverse)
    }

    /// `self -= factor * shift * other`, in place.
    pub fn sub_multiple(&mut self, factor: &BigRational, shift: &Monomial, other: &Self) {
        for (monomial, c) in &other.terms {
            let key = monomial.product(shift);
            let delta = factor * c;
            match self.terms.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(-delta);
                }
                Entry::Occupied(mut slot) => {
                    *slot.get_mut() -= delta;
                    if slot.get().is_zero() {
                        slot.remove();
                    }
                }
            }
        }
    }

    pub fn shifted(&self, shift: &Monomial) -> Self {
        Self {
            arity: self.arity,
            terms: self
                .terms
                .iter()
                .map(|(monomial, c)| (monomial.product(shift), c.clone()))
                .collect(),
        }
    }

    /// Value at a full assignment, indexed by unknown.
    pub fn evaluate(&self, values: &[BigRational]) -> BigRational {
        debug_assert_eq!(values.len(), self.arity, "assignment arity mismatch");
        self.terms
            .iter()
            .map(|(monomial, c)| {
                monomial
                    .0
                    .iter()
                    .zip(values)
                    .filter(|(e, _)| **e > 0)
                    .fold(c.clone(), |acc, (e, v)| acc * num::pow(v.clone(), *e as usize))
            })
            .fold(BigRational::zero(), |acc, term| acc + term)
    }

    /// Replace unknown `index` with a constant.
    pub fn substitute(&self, index: usize, value: &BigRational) -> Self {
        let mut out = Self::zero(self.arity);
        for (monomial, c) in &self.terms {
            let power = monomial.0[index] as usize;
            let mut exponents = monomial.0.clone();
            exponents[index] = 0;
            out.add_term(Monomial(exponents), c * num::pow(value.clone(), power));
        }
        out
    }

    /// Unknown indices that appear with a non-zero exponent, ascending.
    pub fn support(&self) -> Vec<usize> {
        (0..self.arity)
            .filter(|&index| self.terms.keys().any(|m| m.0[index] > 0))
            .collect()
    }

    /// Render with unknown names, leading term first.
    pub fn display<'a>(&'a self, symbols: &'a Symbols) -> DisplayPolynomial<'a> {
        DisplayPolynomial { poly: self, symbols }
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        let mut out = self.clone();
        for (monomial, c) in &rhs.terms {
            out.add_term(monomial.clone(), c.clone());
        }
        out
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        let mut out = self.clone();
        out.sub_multiple(&BigRational::one(), &Monomial::one(self.arity), rhs);
        out
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        let mut out = Polynomial::zero(self.arity);
        for (left, a) in &self.terms {
            for (right, b) in &rhs.terms {
                out.add_term(left.product(right), a * b);
            }
        }
        out
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.scale(&-BigRational::one())
    }
}

pub struct DisplayPolynomial<'a> {
    poly: &'a Polynomial,
    symbols: &'a Symbols,
}

impl fmt::Display for DisplayPolynomial<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.poly.is_zero() {
            return write!(f, "0");
        }
        for (position, (monomial, c)) in self.poly.terms.iter().rev().enumerate() {
            let magnitude = c.abs();
            match (position, c.is_negative()) {
                (0, true) => write!(f, "-")?,
                (0, false) => {}
                (_, true) => write!(f, " - ")?,
                (_, false) => write!(f, " + ")?,
            }
            if monomial.is_one() {
                write!(f, "{magnitude}")?;
                continue;
            }
            if !magnitude.is_one() {
                write!(f, "{magnitude}*")?;
            }
            let factors: Vec<String> = monomial
                .0
                .iter()
                .enumerate()
                .filter(|(_, e)| **e > 0)
                .map(|(index, &e)| {
                    let name = &self.symbols.names()[index];
                    if e == 1 {
                        name.clone()
                    } else {
                        format!("{name}^{e}")
                    }
                })
                .collect();
            write!(f, "{}", factors.join("*"))?;
        }
        Ok(())
    }
}
