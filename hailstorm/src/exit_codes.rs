//! Stable exit codes for hailstorm CLI commands.

use crate::core::equations::BuildError;
use crate::core::extract::ExtractError;
use crate::core::solver::SolverError;

/// Command succeeded and printed its answer.
pub const OK: i32 = 0;
/// Unreadable or malformed input or configuration.
pub const INVALID: i32 = 1;
/// Input parsed, but the sample does not yield a usable throw.
pub const UNSOLVED: i32 = 2;

/// Exit code for a failed command, chosen from the typed cause in `err`.
pub fn for_error(err: &anyhow::Error) -> i32 {
    let unsolved = err.chain().any(|cause| {
        cause.is::<SolverError>()
            || cause.is::<ExtractError>()
            || matches!(
                cause.downcast_ref::<BuildError>(),
                Some(BuildError::SharedPath { .. })
            )
    });
    if unsolved { UNSOLVED } else { INVALID }
}
