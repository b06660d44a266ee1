//! Unit tests for FPL API wire types

use super::*;
use serde_json::json;

#[cfg(test)]
mod participant_tests {
    use super::*;

    fn standings_row() -> Value {
        json!({
            "id": 5001,
            "event_total": 62,
            "player_name": "Ada Lovelace",
            "rank": 1,
            "last_rank": 2,
            "rank_sort": 1,
            "total": 150,
            "entry": 777,
            "entry_name": "Analytical Engines"
        })
    }

    #[test]
    fn test_participant_keeps_every_field_in_order() {
        let participant: Participant = serde_json::from_value(standings_row()).unwrap();

        assert_eq!(participant.entry(), Some(EntryId::new(777)));
        let keys: Vec<&str> = participant.fields().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "id",
                "event_total",
                "player_name",
                "rank",
                "last_rank",
                "rank_sort",
                "total",
                "entry",
                "entry_name"
            ]
        );
    }

    #[test]
    fn test_participant_accessors() {
        let participant: Participant = serde_json::from_value(standings_row()).unwrap();
        assert_eq!(participant.entry_name(), Some("Analytical Engines"));
        assert_eq!(participant.player_name(), Some("Ada Lovelace"));
        assert_eq!(participant.rank(), Some(1));
    }

    #[test]
    fn test_participant_without_usable_entry_is_kept() {
        let participant: Participant = serde_json::from_value(json!({
            "entry_name": "No Entry FC",
            "rank": 3
        }))
        .unwrap();
        assert_eq!(participant.entry(), None);
        assert_eq!(participant.entry_name(), Some("No Entry FC"));

        for entry in [json!(null), json!(-1), json!(7.5), json!("n/a"), json!([777])] {
            let participant: Participant =
                serde_json::from_value(json!({ "entry": entry })).unwrap();
            assert_eq!(participant.entry(), None, "entry {entry}");
            assert_eq!(participant.fields().len(), 1);
        }
    }

    #[test]
    fn test_participant_numeric_string_entry() {
        let participant: Participant = serde_json::from_value(json!({ "entry": "777" })).unwrap();
        assert_eq!(participant.entry(), Some(EntryId::new(777)));
    }

    #[test]
    fn test_standings_with_malformed_row_keeps_every_row() {
        let envelope: StandingsEnvelope = serde_json::from_value(json!({
            "standings": {
                "results": [
                    { "entry": 11, "entry_name": "Eleven" },
                    { "entry": 12, "entry_name": "Twelve" },
                    { "entry": null, "entry_name": "Nobody" }
                ]
            }
        }))
        .unwrap();

        let entries: Vec<Option<EntryId>> = envelope
            .standings
            .results
            .iter()
            .map(Participant::entry)
            .collect();
        assert_eq!(
            entries,
            vec![Some(EntryId::new(11)), Some(EntryId::new(12)), None]
        );
    }

    #[test]
    fn test_standings_envelope() {
        let envelope: StandingsEnvelope = serde_json::from_value(json!({
            "league": { "id": 42, "name": "Office League" },
            "standings": {
                "has_next": false,
                "page": 1,
                "results": [standings_row()]
            }
        }))
        .unwrap();
        assert_eq!(envelope.standings.results.len(), 1);
    }
}

#[cfg(test)]
mod manager_tests {
    use super::*;

    #[test]
    fn test_display_name_joins_with_single_space() {
        let profile: ManagerProfile = serde_json::from_value(json!({
            "id": 777,
            "player_first_name": "Ada",
            "player_last_name": "Lovelace",
            "name": "Analytical Engines"
        }))
        .unwrap();
        assert_eq!(profile.display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_profile_missing_last_name_fails() {
        let result = serde_json::from_value::<ManagerProfile>(json!({
            "player_first_name": "Ada"
        }));
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod history_tests {
    use super::*;

    #[test]
    fn test_history_reads_current_season_only() {
        let history: EntryHistory = serde_json::from_value(json!({
            "current": [
                { "event": 1, "points": 50, "total_points": 50, "rank": 100 },
                { "event": 2, "points": -4, "total_points": 46, "rank": 900 }
            ],
            "past": [
                { "season_name": "2023/24", "total_points": 2100, "rank": 5000 }
            ],
            "chips": []
        }))
        .unwrap();

        assert_eq!(
            history.current,
            vec![
                GameweekRecord {
                    event: 1,
                    points: 50
                },
                GameweekRecord {
                    event: 2,
                    points: -4
                },
            ]
        );
    }

    #[test]
    fn test_history_without_current_is_empty() {
        let history: EntryHistory = serde_json::from_value(json!({ "past": [] })).unwrap();
        assert!(history.current.is_empty());
    }
}
