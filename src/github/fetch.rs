// src/github/fetch.rs
// =============================================================================
// This module fetches one release from the GitHub REST API.
//
// Strategy:
// - GET {api_url}/repos/{owner}/{repo}/releases/{release_id}
// - Authenticate with the workflow token (Bearer)
// - Map the HTTP status onto FetchError variants
// - Decode the body into the wire type, then convert to our Release
//
// No retries and no custom timeout: if this fails, the workflow run fails and
// someone re-runs it.
// =============================================================================

use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use tracing::{debug, info};

use super::error::FetchError;
use super::types::{GithubRelease, Release};
use crate::config::Config;

// GitHub rejects API requests that carry no User-Agent
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const GITHUB_JSON: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";

// Longest error body we keep for a log line
const MAX_MESSAGE_LEN: usize = 200;

pub struct ReleaseFetcher {
    client: Client,
    url: String,
    owner: String,
    repo: String,
    release_id: u64,
    token: String,
}

impl ReleaseFetcher {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        let url = format!(
            "{}/repos/{}/{}/releases/{}",
            config.api_url.as_str().trim_end_matches('/'),
            config.owner,
            config.repo,
            config.release_id
        );

        Ok(ReleaseFetcher {
            client,
            url,
            owner: config.owner.clone(),
            repo: config.repo.clone(),
            release_id: config.release_id,
            token: config.token.clone(),
        })
    }

    // Performs the single API read
    //
    // Returns: the Release, or a FetchError describing why it could not be read
    pub async fn fetch(&self) -> Result<Release, FetchError> {
        info!(
            owner = %self.owner,
            repo = %self.repo,
            release_id = self.release_id,
            "fetching release"
        );
        debug!(url = %self.url, "GET");

        let response = self
            .client
            .get(&self.url)
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_JSON)
            .header("X-GitHub-Api-Version", API_VERSION)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The body is only used for the error message, so a failed read
            // just leaves it empty
            let body = response.text().await.unwrap_or_default();
            return Err(self.status_error(status, &body));
        }

        let text = response.text().await?;
        let wire: GithubRelease = serde_json::from_str(&text)?;

        debug!(assets = wire.assets.len(), "release decoded");
        Ok(Release::from(wire))
    }

    fn status_error(&self, status: StatusCode, body: &str) -> FetchError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => FetchError::Auth { status },
            StatusCode::NOT_FOUND => FetchError::NotFound {
                owner: self.owner.clone(),
                repo: self.repo.clone(),
                release_id: self.release_id,
            },
            _ => FetchError::Status {
                status,
                message: error_message(body),
            },
        }
    }
}

// GitHub error bodies look like {"message": "...", "documentation_url": "..."}.
// Prefer the message; fall back to a truncated raw body.
fn error_message(body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["message"].as_str().map(str::to_string));

    match parsed {
        Some(message) => message,
        None => body.trim().chars().take(MAX_MESSAGE_LEN).collect(),
    }
}
