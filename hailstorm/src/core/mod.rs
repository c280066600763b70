//! Deterministic, pure logic: parsing, equation building, exact solving.
//!
//! Nothing in here touches the filesystem or the environment.

pub mod crossings;
pub mod equations;
pub mod extract;
pub mod groebner;
pub mod hailstone;
pub mod poly;
pub mod solver;
pub mod symbols;
pub mod univariate;
