use std::collections::BTreeMap;

use crate::fpl::types::GameweekRecord;


/// Per-manager point totals derived from gameweek history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregatedMetrics {
    pub total_points: i64,
    pub gw1: i64,
    pub gw2: i64,
    pub gw3: i64,
    pub gw2_and_3_sum: i64,
    pub total_gw1_gw3_sum: i64,
}

/// Index history by gameweek. A repeated event overwrites the earlier one.
pub fn points_by_gameweek(history: &[GameweekRecord]) -> BTreeMap<u32, i64> {
    history.iter().map(|r| (r.event, r.points)).collect()
}

/// Derive [`AggregatedMetrics`] from a manager's current-season history.
///
/// `total_points` covers every gameweek present, not only 1-3. Missing
/// gameweeks count as 0.
pub fn aggregate(history: &[GameweekRecord]) -> AggregatedMetrics {
    let by_gw = points_by_gameweek(history);
    let gw = |event: u32| by_gw.get(&event).copied().unwrap_or(0);

    let (gw1, gw2, gw3) = (gw(1), gw(2), gw(3));
    AggregatedMetrics {
        total_points: by_gw.values().sum(),
        gw1,
        gw2,
        gw3,
        gw2_and_3_sum: gw2 + gw3,
        total_gw1_gw3_sum: gw1 + gw2 + gw3,
    }
}
