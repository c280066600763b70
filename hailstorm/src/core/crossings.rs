//! Future crossings of hailstone paths in the x/y plane.

use num::{BigInt, BigRational, Signed, Zero};
use serde::{Deserialize, Serialize};

use crate::core::hailstone::Hailstone;

/// Inclusive square `[min, max]` on both x and y.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TestArea {
    pub min: i64,
    pub max: i64,
}

impl Default for TestArea {
    fn default() -> Self {
        Self {
            min: 200_000_000_000_000,
            max: 400_000_000_000_000,
        }
    }
}

impl TestArea {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    fn contains(&self, point: &[BigRational; 2]) -> bool {
        let min = BigRational::from_integer(BigInt::from(self.min));
        let max = BigRational::from_integer(BigInt::from(self.max));
        point.iter().all(|c| *c >= min && *c <= max)
    }
}

/// Where two x/y paths meet, with the time at which each particle gets there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crossing {
    pub point: [BigRational; 2],
    pub times: [BigRational; 2],
}

/// Crossing of the x/y paths of `a` and `b`, or `None` when they are parallel.
pub fn path_crossing(a: &Hailstone, b: &Hailstone) -> Option<Crossing> {
    let [avx, avy, _] = &a.velocity;
    let [bvx, bvy, _] = &b.velocity;
    let det = avx * bvy - avy * bvx;
    if det.is_zero() {
        return None;
    }
    let dx = &b.position[0] - &a.position[0];
    let dy = &b.position[1] - &a.position[1];
    let t = BigRational::new(&dx * bvy - &dy * bvx, det.clone());
    let s = BigRational::new(&dx * avy - &dy * avx, det);
    let [x, y, _] = a.position_at(&t);
    Some(Crossing {
        point: [x, y],
        times: [t, s],
    })
}

/// Count unordered pairs whose paths cross inside `area` at non-negative times.
pub fn count_future_crossings(hailstones: &[Hailstone], area: &TestArea) -> usize {
    hailstones
        .iter()
        .enumerate()
        .flat_map(move |(i, a)| hailstones[i + 1..].iter().map(move |b| (a, b)))
        .filter_map(|(a, b)| path_crossing(a, b))
        .filter(|crossing| {
            crossing.times.iter().all(|t| !t.is_negative()) && area.contains(&crossing.point)
        })
        .count()
}
