//! Solver configuration stored in `hailstorm.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::crossings::TestArea;
use crate::core::equations::Sample;
use crate::core::extract::SelectionPolicy;
use crate::core::solver::{DEFAULT_MAX_REDUCTIONS, GroebnerSolver};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "hailstorm.toml";

/// Hailstorm configuration (TOML). Missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HailstormConfig {
    /// Puzzle input used when the command line names none.
    pub input: PathBuf,
    pub throw: ThrowConfig,
    pub crossings: TestArea,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ThrowConfig {
    /// Number of consecutive hailstones fed to the solver.
    pub sample_size: usize,
    /// Index of the first sampled hailstone.
    pub sample_offset: usize,
    pub selection: SelectionPolicy,
    /// Fail early when two sampled hailstones travel the same path.
    pub reject_degenerate: bool,
    /// Upper bound on S-polynomial reductions.
    pub max_reductions: usize,
}

impl Default for HailstormConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("Day24.txt"),
            throw: ThrowConfig::default(),
            crossings: TestArea::default(),
        }
    }
}

impl Default for ThrowConfig {
    fn default() -> Self {
        Self {
            sample_size: 3,
            sample_offset: 0,
            selection: SelectionPolicy::First,
            reject_degenerate: true,
            max_reductions: DEFAULT_MAX_REDUCTIONS,
        }
    }
}

impl ThrowConfig {
    pub fn sample(&self) -> Sample {
        Sample {
            offset: self.sample_offset,
            size: self.sample_size,
        }
    }

    pub fn solver(&self) -> GroebnerSolver {
        GroebnerSolver {
            max_reductions: self.max_reductions,
        }
    }
}

impl HailstormConfig {
    pub fn validate(&self) -> Result<()> {
        if self.throw.sample_size < 3 {
            return Err(anyhow!(
                "throw.sample_size must be >= 3, got {}",
                self.throw.sample_size
            ));
        }
        if self.throw.max_reductions == 0 {
            return Err(anyhow!("throw.max_reductions must be > 0"));
        }
        if self.crossings.min > self.crossings.max {
            return Err(anyhow!(
                "crossings.min ({}) must not exceed crossings.max ({})",
                self.crossings.min,
                self.crossings.max
            ));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `HailstormConfig::default()`.
pub fn load_config(path: &Path) -> Result<HailstormConfig> {
    if !path.exists() {
        let cfg = HailstormConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: HailstormConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Render the effective configuration as TOML.
pub fn render_config(cfg: &HailstormConfig) -> Result<String> {
    toml::to_string_pretty(cfg).context("serialize config toml")
}
