// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - Fetching a single release by id (authenticated)
// - Decoding the release and its assets into our own types
// - Typed errors for auth, missing release, network and payload problems
// =============================================================================

mod error;
mod fetch;
mod types;

pub use fetch::ReleaseFetcher;
pub use types::{Asset, Release};
