//! Hailstone records and the `px, py, pz @ vx, vy, vz` line format.

use std::fmt;
use std::str::FromStr;

use num::{BigInt, BigRational};
use thiserror::Error;

/// Axis labels in record order.
pub const AXES: [&str; 3] = ["x", "y", "z"];

/// A particle moving along `position + t * velocity` for any real `t`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hailstone {
    pub position: [BigInt; 3],
    pub velocity: [BigInt; 3],
}

/// Malformed hailstone input. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: expected `position @ velocity`, found {text:?}")]
    MissingSeparator { line: usize, text: String },
    #[error("line {line}: {part} must have exactly 3 components, found {found}")]
    WrongArity {
        line: usize,
        part: &'static str,
        found: usize,
    },
    #[error("line {line}: invalid integer {token:?} in {part}")]
    InvalidInteger {
        line: usize,
        part: &'static str,
        token: String,
    },
}

impl Hailstone {
    pub fn new(position: [BigInt; 3], velocity: [BigInt; 3]) -> Self {
        Self { position, velocity }
    }

    /// Position at time `t`.
    pub fn position_at(&self, t: &BigRational) -> [BigRational; 3] {
        std::array::from_fn(|axis| {
            BigRational::from_integer(self.position[axis].clone())
                + t * BigRational::from_integer(self.velocity[axis].clone())
        })
    }

    /// Parse one record; `line` is only used for error reporting.
    pub fn parse_line(text: &str, line: usize) -> Result<Self, ParseError> {
        let (position, velocity) = text
            .split_once('@')
            .ok_or_else(|| ParseError::MissingSeparator {
                line,
                text: text.trim().to_string(),
            })?;
        Ok(Self {
            position: parse_triple(position, "position", line)?,
            velocity: parse_triple(velocity, "velocity", line)?,
        })
    }
}

impl FromStr for Hailstone {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse_line(text, 1)
    }
}

impl fmt::Display for Hailstone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [px, py, pz] = &self.position;
        let [vx, vy, vz] = &self.velocity;
        write!(f, "{px}, {py}, {pz} @ {vx}, {vy}, {vz}")
    }
}

/// Parse every non-blank line, preserving input order.
pub fn parse_hailstones(input: &str) -> Result<Vec<Hailstone>, ParseError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(index, text)| Hailstone::parse_line(text, index + 1))
        .collect()
}

fn parse_triple(part: &str, name: &'static str, line: usize) -> Result<[BigInt; 3], ParseError> {
    let tokens: Vec<&str> = part.split(',').map(str::trim).collect();
    let &[x, y, z] = tokens.as_slice() else {
        return Err(ParseError::WrongArity {
            line,
            part: name,
            found: tokens.len(),
        });
    };
    let parse = |token: &str| {
        token
            .parse::<BigInt>()
            .map_err(|_| ParseError::InvalidInteger {
                line,
                part: name,
                token: token.to_string(),
            })
    };
    Ok([parse(x)?, parse(y)?, parse(z)?])
}
