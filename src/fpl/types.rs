use crate::cli::types::EntryId;
use serde::Deserialize;
use serde_json::{Map, Value};

#[cfg(test)]
mod tests;

/// One row of a classic league's standings.
///
/// Every field the API sends is kept, in arrival order, so the report can
/// pass them through verbatim. `entry` is lifted out as a typed key; a row
/// without a usable one is still kept, it just has nothing to look up.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Participant {
    entry: Option<EntryId>,
    fields: Map<String, Value>,
}

impl Participant {
    /// `None` when `entry` is missing, null or not a non-negative integer.
    pub fn entry(&self) -> Option<EntryId> {
        self.entry
    }

    /// All standings fields, including `entry`, in the order received.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn entry_name(&self) -> Option<&str> {
        self.fields.get("entry_name").and_then(Value::as_str)
    }

    pub fn player_name(&self) -> Option<&str> {
        self.fields.get("player_name").and_then(Value::as_str)
    }

    pub fn rank(&self) -> Option<u64> {
        self.fields.get("rank").and_then(Value::as_u64)
    }
}

impl From<Map<String, Value>> for Participant {
    fn from(fields: Map<String, Value>) -> Self {
        let entry = match fields.get("entry") {
            Some(Value::Number(n)) => n.as_u64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        };
        Self {
            entry: entry.map(EntryId::new),
            fields,
        }
    }
}

/// `standings` object of the league standings response.
#[derive(Debug, Clone, Deserialize)]
pub struct Standings {
    pub results: Vec<Participant>,
}

/// Top-level envelope for `/leagues-classic/{id}/standings/`
#[derive(Debug, Clone, Deserialize)]
pub struct StandingsEnvelope {
    pub standings: Standings,
}

/// The subset of `/entry/{id}/` we need.
#[derive(Debug, Clone, Deserialize)]
pub struct ManagerProfile {
    pub player_first_name: String,
    pub player_last_name: String,
}

impl ManagerProfile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.player_first_name, self.player_last_name)
    }
}

/// Points for one gameweek of the current season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GameweekRecord {
    pub event: u32,
    /// Can be negative once transfer hits are applied.
    pub points: i64,
}

/// `/entry/{id}/history/`; only the current season is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryHistory {
    #[serde(default)]
    pub current: Vec<GameweekRecord>,
}
