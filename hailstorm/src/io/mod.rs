//! Side effects: configuration and puzzle input files.

pub mod config;
pub mod input;
