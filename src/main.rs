// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (stderr, filtered by RUST_LOG)
// 2. Parse arguments/environment into a validated Config
// 3. Fetch the release from the GitHub API
// 4. Render the Markdown summary
// 5. Write it to the output file, only once rendering has fully succeeded
// 6. Exit with proper code (0 = success, 1 = any failure)
// =============================================================================

mod cli;
mod config;
mod github;
mod render;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::Config;
use github::ReleaseFetcher;

#[tokio::main]
async fn main() {
    init_tracing();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            error!("{:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let cli = cli::parse_from(std::env::args_os())?;
    let config = Config::from_cli(cli).context("invalid configuration")?;

    let fetcher = ReleaseFetcher::new(&config).context("could not create HTTP client")?;
    let release = fetcher.fetch().await.with_context(|| {
        format!(
            "failed to fetch release {} of {}/{}",
            config.release_id, config.owner, config.repo
        )
    })?;

    let rendered = render::render_release(&release, Utc::now());
    info!(
        release = %release.name,
        downloads = rendered.downloads,
        additional = rendered.additional,
        "release summary rendered"
    );

    let content = rendered.markdown;
    tokio::fs::write(&config.output, &content)
        .await
        .with_context(|| format!("failed to write {}", config.output.display()))?;

    info!(
        path = %config.output.display(),
        bytes = content.len(),
        "release summary written"
    );
    println!("📝 Wrote release summary to {}", config.output.display());

    Ok(())
}
