//! Standalone smoke-test page: a static bar chart over hardcoded data,
//! no server involved.

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;

use denver_listings::dashboard::render_demo_page;

#[derive(Parser)]
#[command(name = "demo")]
#[command(about = "Write the static bar-chart demo page", long_about = None)]
struct Cli {
    /// File to write the demo page to
    #[arg(short, long, default_value = "demo.html")]
    output: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    fs::write(&cli.output, render_demo_page())
        .with_context(|| format!("failed to write {}", cli.output))?;

    println!("Wrote {}", cli.output);
    Ok(())
}
