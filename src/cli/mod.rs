//! CLI argument definitions and parsing.

pub mod prompt;
pub mod types;

use std::path::PathBuf;

use clap::Parser;
use types::{LeagueId, PageNumber};

/// Pull a mini-league's standings from the Fantasy Premier League API, total
/// each manager's gameweek 1-3 points, and draw random 1v1 matchups.
///
/// With no arguments the league ID is read from `FPL_LEAGUE_ID` or asked for
/// interactively.
#[derive(Debug, Parser)]
#[clap(name = "fpl-mini-league", about = "FPL mini-league 1v1 matchup report")]
pub struct FplArgs {
    /// Classic league ID (or set `FPL_LEAGUE_ID`; prompted for otherwise).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Standings page to fetch.
    #[clap(long, short, default_value_t = PageNumber::default())]
    pub page: PageNumber,

    /// Output workbook (defaults to `fpl_page_<page>_data_with_1v1pairing.xlsx`).
    #[clap(long, short)]
    pub output: Option<PathBuf>,

    /// Seed for the matchup shuffle; omit for fresh randomness on every run.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Log per-manager details.
    #[clap(long, short)]
    pub verbose: bool,
}
