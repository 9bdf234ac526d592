// src/render/mod.rs
// =============================================================================
// This module turns a Release into the Markdown summary.
//
// Submodules:
// - markdown: assembles the document (heading, body, table, list)
// - platform: debug/symbols split and platform labels
// - size: "1.5KB"-style sizes
// - date: "Today" / "3 days ago" / "Oct 5" labels
//
// Everything in here is pure: no I/O, and "now" is passed in by the caller.
// =============================================================================

mod date;
mod markdown;
mod platform;
mod size;

pub use markdown::render_release;

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why pass `now` instead of calling Utc::now() inside?
//    - Tests can pin the clock and compare whole documents
//    - One run uses one "now" for every asset, so labels agree with each other
//
// 2. Why are size/date/platform private?
//    - main.rs only needs the finished document and the section counts,
//      which render_release returns together from a single partition pass
//    - Their tests live next to them in #[cfg(test)] modules
// -----------------------------------------------------------------------------
