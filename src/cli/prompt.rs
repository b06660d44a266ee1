//! Line-interactive league ID prompt.

use std::io::{BufRead, Write};

use crate::{cli::types::LeagueId, FplError, Result, LEAGUE_ID_ENV_VAR};

pub const LEAGUE_ID_PROMPT: &str = "League ID: ";

/// Write the prompt to `output` and parse one line from `input` as a league ID.
///
/// End of input yields [`FplError::MissingLeagueId`]; anything that is not a
/// positive integer yields [`FplError::InvalidLeagueId`].
pub fn prompt_league_id<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<LeagueId> {
    output.write_all(LEAGUE_ID_PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(FplError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        });
    }
    line.parse()
}
