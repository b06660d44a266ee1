//! Fantasy Premier League mini-league 1v1 reporter
//!
//! Pulls a classic mini-league's standings from the public FPL API, totals
//! every manager's points for gameweeks 1-3, draws random head-to-head
//! matchups on two scoring criteria and writes everything to one workbook.
//!
//! ## Pipeline
//!
//! - [`fpl::http::FplClient`]: standings page, manager profile, gameweek history
//! - [`fpl::compute::aggregate`]: per-manager point totals
//! - [`roster::build_roster`]: one row per manager, never dropping anyone
//! - [`matchup::generate_matchups`]: shuffled 1v1 pairs with winner/loser
//! - [`export::export_report`]: `Player_Data`, `GW2_GW3_1v1`, `Total_GW1_GW3_1v1`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_mini_league::{commands::league_report::*, LeagueId};
//!
//! # async fn example() -> fpl_mini_league::Result<()> {
//! let summary = handle_league_report(ReportParams::new(LeagueId::new(314159))).await?;
//! println!("{} managers, {} GW2+GW3 pairs", summary.participants, summary.gw2_gw3.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the league ID to skip the interactive prompt:
//! ```bash
//! export FPL_LEAGUE_ID=314159
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod export;
pub mod fpl;
pub mod logging;
pub mod matchup;
pub mod roster;

// Re-export commonly used types
pub use cli::types::{EntryId, LeagueId, PageNumber};
pub use error::{FplError, Result};
pub use fpl::compute::AggregatedMetrics;
pub use matchup::{Matchup, MatchupSet, ScoringField};
pub use roster::RosterRow;

pub const LEAGUE_ID_ENV_VAR: &str = "FPL_LEAGUE_ID";
pub const BASE_URL_ENV_VAR: &str = "FPL_API_BASE_URL";
