// src/config.rs
// =============================================================================
// Turns the raw CLI/environment values into a validated Config.
//
// All checks happen here, once, at startup:
// - the repository must split into owner and repo
// - the token must not be blank
// - the API URL must be an absolute http(s) URL
// - a release id must come from --release-id/RELEASE_ID or from the
//   workflow event file (`release.id`)
//
// The fetcher receives a Config and never looks at the environment itself.
// =============================================================================

use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

use crate::cli::Cli;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("not a GitHub repository: {0} (expected owner/repo)")]
    InvalidRepository(String),

    #[error("GITHUB_TOKEN is empty")]
    MissingToken,

    #[error("invalid GitHub API URL '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },

    #[error("no release id: set RELEASE_ID or GITHUB_EVENT_PATH to a release event")]
    MissingReleaseId,

    #[error("could not read event file {path}: {source}")]
    EventFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("event file {path} is not valid JSON: {source}")]
    EventJson {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub owner: String,
    pub repo: String,
    pub release_id: u64,
    pub token: String,
    pub api_url: Url,
    pub output: PathBuf,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let (owner, repo) = parse_repository(&cli.repository)?;

        let token = cli.token.trim().to_string();
        if token.is_empty() {
            return Err(ConfigError::MissingToken);
        }

        let api_url = parse_api_url(&cli.api_url)?;

        // An explicit id wins over the event file
        let release_id = match (cli.release_id, cli.event_path.as_deref()) {
            (Some(id), _) => id,
            (None, Some(path)) => release_id_from_event(path)?,
            (None, None) => return Err(ConfigError::MissingReleaseId),
        };

        Ok(Config {
            owner,
            repo,
            release_id,
            token,
            api_url,
            output: cli.output,
        })
    }
}

// Splits a repository reference into (owner, repo)
//
// Supported formats:
//   - owner/repo                     (what GITHUB_REPOSITORY contains)
//   - https://github.com/owner/repo
//   - https://github.com/owner/repo.git
//   - github.com/owner/repo
fn parse_repository(input: &str) -> Result<(String, String), ConfigError> {
    let trimmed = input.trim();

    let path = trimmed
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.");
    let path = path.strip_prefix("github.com/").unwrap_or(path);

    let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
    if parts.len() != 2 {
        return Err(ConfigError::InvalidRepository(trimmed.to_string()));
    }

    let owner = parts[0].to_string();
    let repo = parts[1].trim_end_matches(".git").to_string();

    if repo.is_empty() {
        return Err(ConfigError::InvalidRepository(trimmed.to_string()));
    }

    Ok((owner, repo))
}

fn parse_api_url(input: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(input.trim()).map_err(|e| ConfigError::InvalidApiUrl {
        url: input.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidApiUrl {
            url: input.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(url)
}

// Reads `release.id` from a workflow event payload.
// Non-release events (push, workflow_dispatch without inputs) have no such
// field, which is reported as a missing id rather than a parse error.
fn release_id_from_event(path: &Path) -> Result<u64, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::EventFile {
        path: path.to_path_buf(),
        source,
    })?;

    let event: serde_json::Value =
        serde_json::from_str(&raw).map_err(|source| ConfigError::EventJson {
            path: path.to_path_buf(),
            source,
        })?;

    event["release"]["id"]
        .as_u64()
        .ok_or(ConfigError::MissingReleaseId)
}
