//! # League Tracker
//!
//! A competition standings and match statistics engine.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (teams, competitions, matches, rounds)
//! - **standings**: Standings tables, records, form and head-to-head computation
//! - **storage**: Filesystem store operations (JSONL, per competition)
//! - **import**: Competition snapshot ingestion
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod config;
pub mod import;
pub mod models;
pub mod standings;
pub mod storage;

pub use models::*;

/// Build a URL-safe slug from a display name
/// (e.g. "Coastal League 2026" → "coastal-league-2026").
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}
