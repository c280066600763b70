//! Wiring CLI: print the product of the two group sizes after the minimum cut.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wiring::cut::min_cut;
use wiring::diagram::parse_diagram;

#[derive(Parser)]
#[command(
    name = "wiring",
    version,
    about = "Split a wiring diagram by its minimum cut"
)]
struct Cli {
    /// Wiring diagram, one `name: other ...` line per component.
    #[arg(default_value = "Day25.txt")]
    input: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let contents = fs::read_to_string(&cli.input)
        .with_context(|| format!("read {}", cli.input.display()))?;
    let diagram =
        parse_diagram(&contents).with_context(|| format!("parse {}", cli.input.display()))?;
    let cut = min_cut(&diagram).context("cut diagram")?;
    println!("{}", cut.product());
    Ok(())
}
