// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// In a release workflow nobody passes flags: GitHub Actions already exports
// GITHUB_REPOSITORY, GITHUB_TOKEN, GITHUB_EVENT_PATH and GITHUB_API_URL.
// So every argument here is also readable from an environment variable
// (`env = "..."`), and a flag only overrides it for local runs.
//
// The raw values parsed here are validated and turned into a Config in
// src/config.rs. Nothing else in the program reads the environment.
// =============================================================================

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_OUTPUT: &str = "release-body.md";

// The tool is meant to run with no flags at all, configured purely by the
// environment of a GitHub Actions job. Each flag below only exists to
// override its environment variable when running locally.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "release-digest",
    version,
    about = "Writes a Markdown download summary for a GitHub release",
    long_about = "release-digest fetches a GitHub release and its assets, then writes a Markdown \
                  summary (platform table, sizes, relative dates) for the release workflow to publish."
)]
pub struct Cli {
    /// Repository as owner/repo (or a github.com URL)
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: String,

    /// Numeric id of the release to summarize
    ///
    /// When absent, the id is read from `release.id` in the event file
    #[arg(long, env = "RELEASE_ID")]
    pub release_id: Option<u64>,

    /// Path to the workflow event JSON (set by GitHub Actions)
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// Token used to authenticate against the GitHub API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Base URL of the GitHub REST API (differs on GitHub Enterprise)
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Where to write the Markdown summary; overwritten on every run
    #[arg(long, env = "RELEASE_BODY_PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

// Parses arguments without letting clap exit the process on bad input.
//
// --help and --version still print and exit 0 through clap. Every other
// parse failure (unknown flag, missing GITHUB_REPOSITORY/GITHUB_TOKEN) comes
// back as an error, so main.rs logs it and exits like any other failure.
pub fn parse_from<I, T>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(cli),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => Err(e).context("invalid arguments"),
    }
}
