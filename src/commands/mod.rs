//! Command implementations for the FPL mini-league reporter

pub mod league_report;

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::{cli::prompt::prompt_league_id, LeagueId, LEAGUE_ID_ENV_VAR};

/// Resolve league ID from option, then environment variable, then the prompt.
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Option<LeagueId> {
    resolve_league_id_from(league_id, io::stdin().lock(), io::stdout())
}

/// [`resolve_league_id`] with the prompt reading from `input`.
///
/// An unusable answer at the prompt is not fatal: it is logged and `None` is
/// returned, so the report runs with no standings.
pub fn resolve_league_id_from<R: BufRead, W: Write>(
    league_id: Option<LeagueId>,
    input: R,
    output: W,
) -> Option<LeagueId> {
    if let Some(id) = league_id_from_option_or_env(league_id) {
        return Some(id);
    }
    match prompt_league_id(input, output) {
        Ok(id) => Some(id),
        Err(e) => {
            warn!("{e}; continuing without standings");
            None
        }
    }
}

/// The non-interactive half of [`resolve_league_id`].
pub fn league_id_from_option_or_env(league_id: Option<LeagueId>) -> Option<LeagueId> {
    league_id.or_else(|| {
        std::env::var(LEAGUE_ID_ENV_VAR)
            .ok()
            .and_then(|s| s.parse::<LeagueId>().ok())
    })
}
