//! `gridfetch` CLI - fetch a published document and plot its coordinate table

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gridfetch::{decode_points, extract_rows, render, FetchClient};

#[derive(Parser)]
#[command(name = "gridfetch")]
#[command(about = "Fetch a published document and render its coordinate table as ASCII art")]
#[command(version)]
struct Cli {
    /// URL of the published document to fetch
    #[arg(value_name = "URL", required_unless_present = "file", conflicts_with = "file")]
    url: Option<String>,

    /// Read markup from a local file instead of fetching
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Write the rendered grid to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

const BANNER: &str = "==================================================";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (RUST_LOG overrides; decode skips log at debug)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let markup = match (&cli.url, &cli.file) {
        (_, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (Some(url), None) => {
            url::Url::parse(url).with_context(|| format!("invalid URL: {url}"))?;
            println!("🌐 Fetching: {url}");
            let client = FetchClient::new(Duration::from_secs(cli.timeout))?;
            client.fetch_text(url).await?
        }
        (None, None) => unreachable!("clap requires a URL or --file"),
    };

    let rows = extract_rows(&markup);
    let points = decode_points(&rows);

    let Some(art) = render(&points) else {
        println!("No valid coordinate data found.");
        return Ok(());
    };

    if let Some(path) = cli.output {
        fs::write(&path, &art)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("💾 Saved {} bytes to {}", art.len(), path.display());
        return Ok(());
    }

    println!("\n{BANNER}");
    println!("RENDERED ASCII ART");
    println!("{BANNER}");
    println!("{art}");
    println!("{BANNER}");

    Ok(())
}
