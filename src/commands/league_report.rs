//! Mini-league 1v1 report.
//!
//! Fetches one standings page, builds the roster table, draws the GW2+GW3 and
//! GW1-GW3 matchup sets, and saves all three tables to a workbook. Fetch and
//! export failures are logged and replaced by empty/default data so the run
//! always completes.

use std::path::PathBuf;

use rand::{rngs::StdRng, thread_rng, RngCore, SeedableRng};
use tracing::{error, warn};

use crate::{
    export::{default_output_file, export_report},
    fpl::http::FplClient,
    matchup::{generate_matchups, MatchupSet, ScoringField},
    roster::build_roster,
    LeagueId, PageNumber, Result,
};

/// Parameters for the league report command.
#[derive(Debug, Clone)]
pub struct ReportParams {
    /// `None` when no usable ID was entered; the report then has no standings.
    pub league_id: Option<LeagueId>,
    pub page: PageNumber,
    /// Defaults to [`default_output_file`] for the page.
    pub output: Option<PathBuf>,
    /// Fixes the shuffle so pairings are reproducible.
    pub seed: Option<u64>,
}

impl ReportParams {
    pub fn new(league_id: LeagueId) -> Self {
        Self {
            league_id: Some(league_id),
            page: PageNumber::default(),
            output: None,
            seed: None,
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(default_output_file(self.page)))
    }
}

/// What a run produced.
#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub participants: usize,
    pub gw2_gw3: MatchupSet,
    pub total_gw1_gw3: MatchupSet,
    pub output: PathBuf,
    pub exported: bool,
}

/// Run the report against the API behind `client`.
pub async fn run_league_report(client: &FplClient, params: &ReportParams) -> ReportSummary {
    let participants = match params.league_id {
        Some(league_id) => client
            .fetch_standings_page(league_id, params.page)
            .await
            .unwrap_or_else(|e| {
                warn!("Error fetching league data: {e}");
                Vec::new()
            }),
        None => {
            warn!("No league ID; writing a report with no standings");
            Vec::new()
        }
    };
    let participants_count = participants.len();

    let roster = build_roster(client, participants).await;

    let mut rng: Box<dyn RngCore> = match params.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(thread_rng()),
    };
    let [gw2_field, total_field] = ScoringField::ALL;
    let gw2_gw3 = generate_matchups(&roster, gw2_field, gw2_field.label(), &mut *rng);
    let total_gw1_gw3 = generate_matchups(&roster, total_field, total_field.label(), &mut *rng);

    let output = params.output_path();
    let exported = match export_report(&output, &roster, &gw2_gw3, &total_gw1_gw3) {
        Ok(()) => {
            println!(
                "Data from page {} with gameweek points and random matchups saved to {}",
                params.page,
                output.display()
            );
            true
        }
        Err(e) => {
            error!("Failed to save data to Excel: {e}");
            println!("Failed to save data to Excel: {e}");
            false
        }
    };

    ReportSummary {
        participants: participants_count,
        gw2_gw3,
        total_gw1_gw3,
        output,
        exported,
    }
}

/// Handle the league report command against the configured API.
pub async fn handle_league_report(params: ReportParams) -> Result<ReportSummary> {
    let client = FplClient::new()?;
    Ok(run_league_report(&client, &params).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_params_defaults() {
        let params = ReportParams::new(LeagueId::new(314159));
        assert_eq!(params.page, PageNumber::new(1));
        assert_eq!(
            params.output_path(),
            PathBuf::from("fpl_page_1_data_with_1v1pairing.xlsx")
        );
    }

    #[test]
    fn test_report_params_output_follows_page() {
        let params = ReportParams {
            page: PageNumber::new(4),
            ..ReportParams::new(LeagueId::new(1))
        };
        assert_eq!(
            params.output_path(),
            PathBuf::from("fpl_page_4_data_with_1v1pairing.xlsx")
        );
    }

    #[test]
    fn test_report_params_explicit_output() {
        let params = ReportParams {
            output: Some(PathBuf::from("/tmp/league.xlsx")),
            ..ReportParams::new(LeagueId::new(1))
        };
        assert_eq!(params.output_path(), PathBuf::from("/tmp/league.xlsx"));
    }
}
