//! Entry point: parse CLI, resolve the league, and run the report.

use anyhow::Context;
use clap::Parser;
use fpl_mini_league::{
    cli::FplArgs,
    commands::{
        league_report::{handle_league_report, ReportParams},
        resolve_league_id,
    },
    logging::init_logging,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = FplArgs::parse();
    init_logging(args.verbose);

    let league_id = resolve_league_id(args.league_id);

    let summary = handle_league_report(ReportParams {
        league_id,
        page: args.page,
        output: args.output,
        seed: args.seed,
    })
    .await
    .context("could not set up the FPL client")?;

    if args.verbose {
        println!(
            "{} managers, {} GW2+GW3 pairs, {} GW1-GW3 pairs",
            summary.participants,
            summary.gw2_gw3.len(),
            summary.total_gw1_gw3.len()
        );
    }

    Ok(())
}
