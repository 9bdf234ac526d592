// src/github/types.rs
// =============================================================================
// Data types for a GitHub release.
//
// There are two layers here:
// - Wire types (GithubRelease, GithubAsset) mirror the JSON that the REST API
//   returns. Fields GitHub may send as null are Option<T>.
// - Domain types (Release, Asset) are what the rest of the program works with.
//   They have no optional fields, so the formatter never has to guess.
//
// Only the fields we actually render are decoded; serde ignores the rest.
// =============================================================================

use chrono::{DateTime, Utc};
use serde::Deserialize;

// A release as GitHub sends it
//
// `assets` has no default: a payload without it fails to decode, which the
// fetcher reports as a format error.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubRelease {
    pub name: Option<String>,
    pub tag_name: Option<String>,
    pub body: Option<String>,
    pub assets: Vec<GithubAsset>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubAsset {
    pub name: String,
    pub size: u64,
    pub created_at: DateTime<Utc>,
    pub browser_download_url: String,
}

/// A published release, ready to be rendered
#[derive(Debug, Clone, PartialEq)]
pub struct Release {
    pub name: String,
    /// Release notes, Markdown, copied into the summary verbatim
    pub body: String,
    pub assets: Vec<Asset>,
}

/// A single downloadable file attached to a release
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub name: String,
    /// Size in bytes
    pub size: u64,
    pub created_at: DateTime<Utc>,
    pub download_url: String,
}

impl From<GithubRelease> for Release {
    fn from(release: GithubRelease) -> Self {
        // Untitled releases show their tag on github.com, so we do the same
        let name = release
            .name
            .filter(|n| !n.is_empty())
            .or(release.tag_name)
            .unwrap_or_default();

        Release {
            name,
            body: release.body.unwrap_or_default(),
            assets: release.assets.into_iter().map(Asset::from).collect(),
        }
    }
}

impl From<GithubAsset> for Asset {
    fn from(asset: GithubAsset) -> Self {
        Asset {
            name: asset.name,
            size: asset.size,
            created_at: asset.created_at,
            download_url: asset.browser_download_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "id": 42,
        "name": "v1.2.0",
        "tag_name": "v1.2.0",
        "body": "Bug fixes",
        "draft": false,
        "assets": [
            {
                "id": 1,
                "name": "app-windows.zip",
                "size": 2097152,
                "content_type": "application/zip",
                "created_at": "2024-05-01T12:00:00Z",
                "browser_download_url": "https://github.com/o/r/releases/download/v1.2.0/app-windows.zip"
            }
        ]
    }"#;

    #[test]
    fn test_decode_release_payload() {
        let wire: GithubRelease = serde_json::from_str(PAYLOAD).unwrap();
        let release = Release::from(wire);

        assert_eq!(release.name, "v1.2.0");
        assert_eq!(release.body, "Bug fixes");
        assert_eq!(release.assets.len(), 1);

        let asset = &release.assets[0];
        assert_eq!(asset.name, "app-windows.zip");
        assert_eq!(asset.size, 2_097_152);
        assert_eq!(asset.created_at.to_rfc3339(), "2024-05-01T12:00:00+00:00");
        assert!(asset.download_url.ends_with("/app-windows.zip"));
    }

    #[test]
    fn test_null_name_falls_back_to_tag() {
        let json = r#"{"name": null, "tag_name": "v2.0.0", "body": null, "assets": []}"#;
        let release = Release::from(serde_json::from_str::<GithubRelease>(json).unwrap());

        assert_eq!(release.name, "v2.0.0");
        assert_eq!(release.body, "");
        assert!(release.assets.is_empty());
    }

    #[test]
    fn test_missing_assets_is_rejected() {
        let json = r#"{"name": "v1", "tag_name": "v1", "body": ""}"#;
        assert!(serde_json::from_str::<GithubRelease>(json).is_err());
    }
}
