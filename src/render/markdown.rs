// src/render/markdown.rs
// =============================================================================
// This module builds the Markdown summary for a release.
//
// Layout:
//
//   # v1.2.0
//
//   <release body, verbatim>
//
//   ## Downloads
//
//   | Platform | Download | Size | Date |
//   |----------|----------|------|------|
//   | Windows | [app-windows.zip](https://...) | 2.0MB | Today |
//
//   ## Additional Files
//
//   - [app-debug-symbols.zip](https://...) (512.0B, Today)
//
// Both sections are always present, even when empty. Names and URLs are not
// escaped; GitHub asset names cannot contain the characters that would break
// a table cell or a link.
// =============================================================================

use chrono::{DateTime, Utc};

use super::date::format_date;
use super::platform::{partition_assets, platform_for};
use super::size::format_size;
use crate::github::{Asset, Release};

const TABLE_HEADER: &str = "| Platform | Download | Size | Date |\n";
const TABLE_DIVIDER: &str = "|----------|----------|------|------|\n";

// The rendered document plus how many assets went into each section
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRelease {
    pub markdown: String,
    pub downloads: usize,
    pub additional: usize,
}

// Renders the full summary
//
// Parameters:
//   release: the fetched release
//   now: the reference time for "Today"/"N days ago" labels
//
// Returns: the Markdown document and the section counts
pub fn render_release(release: &Release, now: DateTime<Utc>) -> RenderedRelease {
    let (main, additional) = partition_assets(&release.assets);
    let downloads = main.len();
    let additional_count = additional.len();

    let mut content = format!("# {}\n\n", release.name);
    content.push_str(&release.body);
    content.push_str("\n\n");

    content.push_str("## Downloads\n\n");
    content.push_str(TABLE_HEADER);
    content.push_str(TABLE_DIVIDER);
    for asset in main {
        content.push_str(&table_row(asset, now));
    }

    content.push_str("\n## Additional Files\n\n");
    for asset in additional {
        content.push_str(&bullet(asset, now));
    }

    RenderedRelease {
        markdown: content,
        downloads,
        additional: additional_count,
    }
}

fn table_row(asset: &Asset, now: DateTime<Utc>) -> String {
    format!(
        "| {} | [{}]({}) | {} | {} |\n",
        platform_for(&asset.name),
        asset.name,
        asset.download_url,
        format_size(asset.size),
        format_date(asset.created_at, now)
    )
}

fn bullet(asset: &Asset, now: DateTime<Utc>) -> String {
    format!(
        "- [{}]({}) ({}, {})\n",
        asset.name,
        asset.download_url,
        format_size(asset.size),
        format_date(asset.created_at, now)
    )
}
