//! Standings computation engine.
//!
//! Derives competitive state from stored match data:
//! - Win/draw/loss records and points per team
//! - Ranked standings tables with group partitioning
//! - Head-to-head series statistics between two teams
//! - Recent-form strings
//! - Round and match listings
//!
//! Everything here is a pure function over an in-memory snapshot; nothing
//! is cached or mutated between calls.

mod form;
mod head_to_head;
mod queries;
mod record;
mod table;
mod team_stats;

pub use form::*;
pub use head_to_head::*;
pub use queries::*;
pub use record::*;
pub use table::*;
pub use team_stats::*;

/// How many recent matches the display-oriented views return.
pub const RECENT_WINDOW: usize = 5;
