//! manifest-md: render a merged extension manifest as a Markdown table
//!
//! Reads the JSON manifest produced by the upstream merge step and writes
//! the reference table next to it.
//!
//! Usage:
//!   # Conventional pipeline locations
//!   manifest-md
//!
//!   # Explicit input and output
//!   manifest-md build/manifest.json -o docs/extensions.md

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "manifest-md")]
#[command(about = "Render a merged extension manifest as a Markdown table", long_about = None)]
struct Args {
    /// Merged manifest file produced by the upstream pipeline step
    #[arg(value_name = "FILE", default_value = "build/manifest.json")]
    input: PathBuf,

    /// Destination for the rendered Markdown table
    #[arg(long, short = 'o', default_value = "build/manifest.md")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    manifest_md::generate(&args.input, &args.output)?;

    println!("Generated the Markdown manifest at {}", args.output.display());
    Ok(())
}
