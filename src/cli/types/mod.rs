//! Type-safe wrappers for Fantasy Premier League identifiers.

pub mod ids;

pub use ids::{EntryId, LeagueId, PageNumber};
