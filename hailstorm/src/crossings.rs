//! `hailstorm crossings`: count future x/y path crossings inside a test area.

use anyhow::{Result, bail};
use tracing::info;

use crate::core::crossings::{TestArea, count_future_crossings};
use crate::core::hailstone::Hailstone;

pub fn count_crossings(hailstones: &[Hailstone], area: &TestArea) -> Result<usize> {
    if area.min > area.max {
        bail!("test area is empty: min {} > max {}", area.min, area.max);
    }
    let count = count_future_crossings(hailstones, area);
    info!(
        hailstones = hailstones.len(),
        min = area.min,
        max = area.max,
        count,
        "crossings counted"
    );
    Ok(count)
}
