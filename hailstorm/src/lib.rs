//! Exact rock-throw solver for a hailstorm of straight-line particles.
//!
//! Given hailstones moving at constant velocity, find the single ray (origin
//! and velocity) that meets three of them, each at its own time, by solving
//! the intersection equations as an exact polynomial system over Q.
//!
//! - **[`core`]**: Pure, deterministic logic (parsing, equations, Gröbner
//!   bases, rational roots, answer extraction). No I/O.
//! - **[`io`]**: Configuration and input files.
//!
//! Orchestration modules ([`throw`], [`crossings`]) compose the two into the
//! CLI commands.

pub mod core;
pub mod crossings;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod throw;
