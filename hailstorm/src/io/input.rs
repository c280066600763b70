//! Reading puzzle input from disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::hailstone::{Hailstone, parse_hailstones};

/// Read and parse every hailstone record in `path`.
pub fn read_hailstones(path: &Path) -> Result<Vec<Hailstone>> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let hailstones =
        parse_hailstones(&contents).with_context(|| format!("parse {}", path.display()))?;
    debug!(path = %path.display(), count = hailstones.len(), "hailstones loaded");
    Ok(hailstones)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hailstone::ParseError;
    use crate::test_support::SAMPLE;

    #[test]
    fn reads_sample_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("Day24.txt");
        fs::write(&path, SAMPLE).expect("write");
        let stones = read_hailstones(&path).expect("read");
        assert_eq!(stones.len(), 5);
        assert_eq!(stones[4].to_string(), "20, 19, 15 @ 1, -5, -3");
    }

    #[test]
    fn missing_file_names_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = read_hailstones(&temp.path().join("absent.txt")).expect_err("missing");
        assert!(err.to_string().contains("absent.txt"));
    }

    #[test]
    fn parse_failure_keeps_typed_cause() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("bad.txt");
        fs::write(&path, "19, 13, 30 @ -2, 1, -2\n18, 19 @ -1, -1, -2\n").expect("write");
        let err = read_hailstones(&path).expect_err("bad line");
        let cause = err.downcast_ref::<ParseError>().expect("parse error");
        assert_eq!(
            cause,
            &ParseError::WrongArity {
                line: 2,
                part: "position",
                found: 2,
            }
        );
    }
}
