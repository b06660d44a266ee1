//! Workbook export: the roster table plus one sheet per matchup set.

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use serde_json::Value;
use std::path::Path;

use crate::{
    matchup::MatchupSet,
    roster::{RosterRow, MANAGER_NAME_COLUMN, METRIC_COLUMNS},
    PageNumber, Result,
};

pub const ROSTER_SHEET: &str = "Player_Data";

/// Sheet name for a matchup set, e.g. `GW2_GW3_1v1`.
pub fn matchup_sheet_name(set: &MatchupSet) -> String {
    format!("{}_1v1", set.label)
}

/// Default output file for a standings page.
pub fn default_output_file(page: PageNumber) -> String {
    format!("fpl_page_{page}_data_with_1v1pairing.xlsx")
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Bool(bool),
    Blank,
}

impl From<&Value> for Cell {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Cell::Blank,
            Value::Bool(b) => Cell::Bool(*b),
            Value::Number(n) => n.as_f64().map(Cell::Number).unwrap_or(Cell::Blank),
            Value::String(s) => Cell::Text(s.clone()),
            nested => Cell::Text(nested.to_string()),
        }
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::Number(n as f64)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

/// A named table, headers first.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

/// Standings columns (union, first-seen order), then metrics, then manager name.
pub fn roster_sheet(roster: &[RosterRow]) -> Sheet {
    let mut standings_columns: Vec<&str> = Vec::new();
    for row in roster {
        for key in row.participant.fields().keys() {
            if !standings_columns.contains(&key.as_str()) {
                standings_columns.push(key);
            }
        }
    }

    let headers: Vec<String> = standings_columns
        .iter()
        .copied()
        .chain(METRIC_COLUMNS)
        .chain([MANAGER_NAME_COLUMN])
        .map(str::to_string)
        .collect();

    let rows: Vec<Vec<Cell>> = roster
        .iter()
        .map(|row| {
            let fields = row.participant.fields();
            standings_columns
                .iter()
                .map(|col| fields.get(*col).map(Cell::from).unwrap_or(Cell::Blank))
                .chain(row.metric_values().into_iter().map(Cell::from))
                .chain([Cell::from(row.manager_name.as_str())])
                .collect::<Vec<_>>()
        })
        .collect();

    Sheet {
        name: ROSTER_SHEET.to_string(),
        headers,
        rows,
    }
}

pub fn matchup_sheet(set: &MatchupSet) -> Sheet {
    let rows = set
        .matchups
        .iter()
        .map(|m| {
            vec![
                Cell::from(m.manager1.as_str()),
                Cell::from(m.manager2.as_str()),
                Cell::from(m.points1),
                Cell::from(m.points2),
                Cell::from(m.winner.as_str()),
                Cell::from(m.loser.as_str()),
            ]
        })
        .collect();

    Sheet {
        name: matchup_sheet_name(set),
        headers: set.headers(),
        rows,
    }
}

/// Write the roster and both matchup sets as three sheets of one workbook.
pub fn export_report(
    path: &Path,
    roster: &[RosterRow],
    first: &MatchupSet,
    second: &MatchupSet,
) -> Result<()> {
    write_workbook(
        path,
        &[roster_sheet(roster), matchup_sheet(first), matchup_sheet(second)],
    )
}

pub fn write_workbook(path: &Path, sheets: &[Sheet]) -> Result<()> {
    build_workbook(sheets)?.save(path)?;
    Ok(())
}

/// One worksheet per [`Sheet`], in order, with a bold header row.
pub fn build_workbook(sheets: &[Sheet]) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;
        write_sheet(worksheet, sheet, &header_format)?;
    }

    Ok(workbook)
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &Sheet, header_format: &Format) -> Result<()> {
    for (col, header) in sheet.headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, header, header_format)?;
    }

    for (i, row) in sheet.rows.iter().enumerate() {
        let r = i as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            let c = col as u16;
            match cell {
                Cell::Text(s) => {
                    worksheet.write_string(r, c, s)?;
                }
                Cell::Number(n) => {
                    worksheet.write_number(r, c, *n)?;
                }
                Cell::Bool(b) => {
                    worksheet.write_boolean(r, c, *b)?;
                }
                Cell::Blank => {}
            }
        }
    }
    Ok(())
}
