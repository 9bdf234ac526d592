// src/render/platform.rs
// =============================================================================
// Asset classification by file name.
//
// Two independent questions, answered with plain case-sensitive substring
// checks on the asset name:
// 1. Is it a debug/symbols file?  -> "Additional Files" list
// 2. Otherwise, which platform?   -> first of windows/macos/linux that matches
//
// Question 1 is asked first, so "app-windows-debug.zip" is an additional
// file and never shows up in the platform table.
//
// Matching is exact and case-sensitive: "darwin" is Other, and so is
// "Windows" with a capital W.
// =============================================================================

use std::fmt;

use crate::github::Asset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    Other,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "macOS",
            Platform::Linux => "Linux",
            Platform::Other => "Other",
        };
        f.write_str(label)
    }
}

// Checked in this order; first hit wins
const PLATFORM_RULES: [(&str, Platform); 3] = [
    ("windows", Platform::Windows),
    ("macos", Platform::MacOs),
    ("linux", Platform::Linux),
];

pub fn platform_for(asset_name: &str) -> Platform {
    PLATFORM_RULES
        .iter()
        .find(|(needle, _)| asset_name.contains(*needle))
        .map(|(_, platform)| *platform)
        .unwrap_or(Platform::Other)
}

pub fn is_additional(asset_name: &str) -> bool {
    asset_name.contains("debug") || asset_name.contains("symbols")
}

// Splits assets into (main, additional), keeping the original order in both
pub fn partition_assets(assets: &[Asset]) -> (Vec<&Asset>, Vec<&Asset>) {
    let (additional, main): (Vec<&Asset>, Vec<&Asset>) =
        assets.iter().partition(|asset| is_additional(&asset.name));
    (main, additional)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn asset(name: &str) -> Asset {
        Asset {
            name: name.to_string(),
            size: 1,
            created_at: Utc::now(),
            download_url: format!("https://example.com/{name}"),
        }
    }

    #[test]
    fn test_platform_labels() {
        assert_eq!(platform_for("app-windows-x64.zip"), Platform::Windows);
        assert_eq!(platform_for("app-macos-arm64.dmg"), Platform::MacOs);
        assert_eq!(platform_for("app-linux.tar.gz"), Platform::Linux);
        assert_eq!(platform_for("app-source.tar.gz"), Platform::Other);
    }

    #[test]
    fn test_first_rule_wins() {
        assert_eq!(platform_for("app-linux-and-windows.zip"), Platform::Windows);
        assert_eq!(platform_for("app-macos-linux.zip"), Platform::MacOs);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(platform_for("App-Windows.zip"), Platform::Other);
        assert_eq!(platform_for("app-macOS.dmg"), Platform::Other);
        assert!(!is_additional("app-DEBUG.zip"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Platform::Windows.to_string(), "Windows");
        assert_eq!(Platform::MacOs.to_string(), "macOS");
        assert_eq!(Platform::Linux.to_string(), "Linux");
        assert_eq!(Platform::Other.to_string(), "Other");
    }

    #[test]
    fn test_debug_symbols_take_precedence() {
        let assets = vec![asset("app-windows-debug-symbols.zip")];
        let (main, additional) = partition_assets(&assets);
        assert!(main.is_empty());
        assert_eq!(additional[0].name, "app-windows-debug-symbols.zip");
    }

    #[test]
    fn test_partition_is_total_disjoint_and_ordered() {
        let assets = vec![
            asset("app-linux.tar.gz"),
            asset("app-linux-debug.tar.gz"),
            asset("app-windows.zip"),
            asset("symbols.zip"),
            asset("app-macos.dmg"),
        ];
        let (main, additional) = partition_assets(&assets);

        let main: Vec<&str> = main.iter().map(|a| a.name.as_str()).collect();
        let additional: Vec<&str> = additional.iter().map(|a| a.name.as_str()).collect();

        assert_eq!(main, vec!["app-linux.tar.gz", "app-windows.zip", "app-macos.dmg"]);
        assert_eq!(additional, vec!["app-linux-debug.tar.gz", "symbols.zip"]);
        assert_eq!(main.len() + additional.len(), assets.len());
    }
}
