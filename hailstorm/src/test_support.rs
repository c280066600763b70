//! Test-only hailstone fixtures.

use num::BigInt;

use crate::core::hailstone::Hailstone;

/// The five-hailstone puzzle sample. Its first three hailstones are hit by the
/// ray `24, 13, 10 @ -3, 1, 2` at times 5, 3 and 4.
pub const SAMPLE: &str = "\
19, 13, 30 @ -2, 1, -2
18, 19, 22 @ -1, -1, -2
20, 25, 34 @ -2, -2, -4
12, 31, 28 @ -1, -2, -1
20, 19, 15 @ 1, -5, -3
";

/// Hailstones that a ray from `origin` moving at `velocity` hits at the
/// given `(time, hailstone velocity)` pairs.
pub fn scenario(origin: [i64; 3], velocity: [i64; 3], hits: &[(i64, [i64; 3])]) -> Vec<Hailstone> {
    hits.iter()
        .map(|&(time, drift)| {
            let position = std::array::from_fn(|axis| {
                BigInt::from(origin[axis]) + BigInt::from(time) * BigInt::from(velocity[axis] - drift[axis])
            });
            Hailstone::new(position, drift.map(BigInt::from))
        })
        .collect()
}

/// Render hailstones back into puzzle input lines.
pub fn render(hailstones: &[Hailstone]) -> String {
    hailstones
        .iter()
        .map(|stone| format!("{stone}\n"))
        .collect()
}
