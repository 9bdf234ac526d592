// src/github/error.rs
// =============================================================================
// Everything that can go wrong while fetching a release.
//
// None of these are recovered from. They exist as separate variants so the
// log line tells the person re-running the workflow what to fix: a token, a
// release id, or the network.
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// 401/403: token missing scopes, expired, or rejected
    #[error("GitHub rejected the credentials (HTTP {status}); check GITHUB_TOKEN")]
    Auth { status: StatusCode },

    /// 404: wrong repository or release id, or a token that cannot see it
    #[error("release {release_id} not found in {owner}/{repo}")]
    NotFound {
        owner: String,
        repo: String,
        release_id: u64,
    },

    /// Connection, TLS, or body read failure
    #[error("request to GitHub failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Any other non-success status
    #[error("GitHub returned HTTP {status}: {message}")]
    Status { status: StatusCode, message: String },

    /// Payload is not JSON or is missing fields we need (e.g. `assets`)
    #[error("unexpected release payload: {0}")]
    Format(#[from] serde_json::Error),
}
