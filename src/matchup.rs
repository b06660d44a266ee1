//! Random 1v1 pairings scored on a single roster column.

use rand::{seq::SliceRandom, Rng};
use std::fmt;

use crate::roster::RosterRow;


/// Roster column a matchup set is decided on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoringField {
    /// Gameweek 2 + gameweek 3.
    Gw2And3Sum,
    /// Gameweeks 1 through 3.
    TotalGw1Gw3Sum,
}

impl ScoringField {
    pub const ALL: [ScoringField; 2] = [ScoringField::Gw2And3Sum, ScoringField::TotalGw1Gw3Sum];

    /// Roster column name.
    pub fn column(&self) -> &'static str {
        match self {
            ScoringField::Gw2And3Sum => "GW_2_and_3_Sum",
            ScoringField::TotalGw1Gw3Sum => "Total_GW1_GW3_Sum",
        }
    }

    /// Prefix for the matchup point and result columns.
    pub fn label(&self) -> &'static str {
        match self {
            ScoringField::Gw2And3Sum => "GW2_GW3",
            ScoringField::TotalGw1Gw3Sum => "Total_GW1_GW3",
        }
    }
}

impl fmt::Display for ScoringField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// One head-to-head result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matchup {
    pub manager1: String,
    pub manager2: String,
    pub points1: i64,
    pub points2: i64,
    pub winner: String,
    pub loser: String,
}

impl Matchup {
    /// The first manager wins only on strictly more points; ties go to the second.
    pub fn decide(first: &RosterRow, second: &RosterRow, field: ScoringField) -> Self {
        let (points1, points2) = (first.value(field), second.value(field));
        let (winner, loser) = if points1 > points2 {
            (&first.manager_name, &second.manager_name)
        } else {
            (&second.manager_name, &first.manager_name)
        };

        Self {
            manager1: first.manager_name.clone(),
            manager2: second.manager_name.clone(),
            points1,
            points2,
            winner: winner.clone(),
            loser: loser.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchupSet {
    pub field: ScoringField,
    pub label: String,
    pub matchups: Vec<Matchup>,
}

impl MatchupSet {
    pub fn len(&self) -> usize {
        self.matchups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchups.is_empty()
    }

    /// Column headers, with the point and result columns prefixed by the label.
    pub fn headers(&self) -> Vec<String> {
        let label = &self.label;
        vec![
            "Manager1".to_string(),
            "Manager2".to_string(),
            format!("{label}_Points1"),
            format!("{label}_Points2"),
            format!("{label}_Winner"),
            format!("{label}_Loser"),
        ]
    }
}

/// Shuffle the roster and pair neighbours (0 with 1, 2 with 3, ...).
///
/// With an odd roster the last manager after shuffling sits this set out.
/// Every call draws a fresh permutation from `rng`.
pub fn generate_matchups<R: Rng + ?Sized>(
    roster: &[RosterRow],
    field: ScoringField,
    label: &str,
    rng: &mut R,
) -> MatchupSet {
    let mut shuffled: Vec<&RosterRow> = roster.iter().collect();
    shuffled.shuffle(rng);

    let matchups = shuffled
        .chunks_exact(2)
        .map(|pair| Matchup::decide(pair[0], pair[1], field))
        .collect();

    MatchupSet {
        field,
        label: label.to_string(),
        matchups,
    }
}
