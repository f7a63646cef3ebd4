//! Visualization client: fetches the neighborhood averages once and
//! writes a self-contained dashboard page.

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use denver_listings::dashboard::{fetch_envelope, render_page};

#[derive(Parser)]
#[command(name = "dashboard")]
#[command(about = "Render the Denver neighborhood ratings dashboard", long_about = None)]
struct Cli {
    /// Base URL of the aggregation server
    #[arg(long, default_value = "http://localhost:1111")]
    server: String,

    /// File to write the dashboard page to
    #[arg(short, long, default_value = "dashboard.html")]
    output: String,

    /// Skip the tabular view
    #[arg(long, default_value_t = false)]
    no_table: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();

    let url = format!("{}/locations/average", cli.server.trim_end_matches('/'));
    info!("Fetching {url}");

    let envelope = fetch_envelope(&url).context("failed to fetch location averages")?;
    info!(neighborhoods = envelope.data.len(), "Fetched envelope");

    let page = render_page(envelope, !cli.no_table);
    fs::write(&cli.output, page).with_context(|| format!("failed to write {}", cli.output))?;

    info!("Wrote {}", cli.output);
    Ok(())
}
