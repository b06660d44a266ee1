//! Roster table: standings rows joined with manager names and point totals.

use tracing::{debug, warn};

use crate::{
    fpl::{
        compute::{aggregate, AggregatedMetrics},
        http::EntrySource,
        types::Participant,
    },
    matchup::ScoringField,
};

/// Shown in place of a manager's name when the profile lookup fails.
pub const UNKNOWN_MANAGER: &str = "Unknown Manager";

/// Metric column names, in report order.
pub const METRIC_COLUMNS: [&str; 6] = [
    "Total_Points",
    "GW_1_Points",
    "GW_2_Points",
    "GW_3_Points",
    "GW_2_and_3_Sum",
    "Total_GW1_GW3_Sum",
];

pub const MANAGER_NAME_COLUMN: &str = "manager_name";

#[derive(Debug, Clone, PartialEq)]
pub struct RosterRow {
    pub participant: Participant,
    pub manager_name: String,
    pub metrics: AggregatedMetrics,
}

impl RosterRow {
    /// The row's value for a scoring criterion.
    pub fn value(&self, field: ScoringField) -> i64 {
        match field {
            ScoringField::Gw2And3Sum => self.metrics.gw2_and_3_sum,
            ScoringField::TotalGw1Gw3Sum => self.metrics.total_gw1_gw3_sum,
        }
    }

    /// Metric values in [`METRIC_COLUMNS`] order.
    pub fn metric_values(&self) -> [i64; 6] {
        let m = &self.metrics;
        [
            m.total_points,
            m.gw1,
            m.gw2,
            m.gw3,
            m.gw2_and_3_sum,
            m.total_gw1_gw3_sum,
        ]
    }
}

/// Build one [`RosterRow`] per participant, in standings order.
///
/// Never drops a participant: a failed history lookup gives zero metrics and
/// a failed profile lookup gives [`UNKNOWN_MANAGER`]. A row without an entry
/// ID gets both defaults without any lookup.
pub async fn build_roster<S: EntrySource>(
    source: &S,
    participants: Vec<Participant>,
) -> Vec<RosterRow> {
    let mut roster = Vec::with_capacity(participants.len());

    for participant in participants {
        let Some(entry) = participant.entry() else {
            warn!("Standings row has no usable entry ID; keeping it with default points");
            roster.push(RosterRow {
                participant,
                manager_name: UNKNOWN_MANAGER.to_string(),
                metrics: AggregatedMetrics::default(),
            });
            continue;
        };

        let metrics = match source.gameweek_history(entry).await {
            Ok(history) => aggregate(&history),
            Err(e) => {
                warn!("Error fetching team data for {entry}: {e}");
                AggregatedMetrics::default()
            }
        };

        let manager_name = source.manager_name(entry).await.unwrap_or_else(|e| {
            warn!("Error fetching manager data for {entry}: {e}");
            UNKNOWN_MANAGER.to_string()
        });

        debug!(%entry, %manager_name, ?metrics, "roster row built");
        roster.push(RosterRow {
            participant,
            manager_name,
            metrics,
        });
    }

    roster
}
