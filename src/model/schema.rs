use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::field::{Field, FieldValue, normalize_header};
use super::position::Position;
use super::types::{PlayerSeasonRecord, PositionTable};
use crate::error::DashboardError;

/// Bump when any source layout below changes. A reordered upstream file is a
/// breaking change and must come with a layout update here.
pub const LAYOUT_VERSION: u32 = 1;

const QB_LAYOUT: &[Field] = &[
    Field::Year,
    Field::Rank,
    Field::Name,
    Field::Age,
    Field::Experience,
    Field::GamesPlayed,
    Field::Completions,
    Field::Attempts,
    Field::CompletionPercentage,
    Field::PassingYards,
    Field::YardsPerAttempt,
    Field::PassingTouchdowns,
    Field::Interceptions,
    Field::RushingAttempts,
    Field::RushingYards,
    Field::RushingTouchdowns,
    Field::FantasyPointsPerGame,
    Field::TotalFantasyPoints,
    Field::Team,
];

const RB_LAYOUT: &[Field] = &[
    Field::Year,
    Field::Rank,
    Field::Name,
    Field::Age,
    Field::Experience,
    Field::GamesPlayed,
    Field::RushingAttempts,
    Field::RushingYards,
    Field::YardsPerRush,
    Field::RushingTouchdowns,
    Field::Receptions,
    Field::ReceivingYards,
    Field::ReceivingTouchdowns,
    Field::FantasyPointsPerGame,
    Field::TotalFantasyPoints,
    Field::Team,
];

const WR_LAYOUT: &[Field] = &[
    Field::Year,
    Field::Rank,
    Field::Name,
    Field::Age,
    Field::Experience,
    Field::GamesPlayed,
    Field::RushingAttempts,
    Field::RushingYards,
    Field::RushingTouchdowns,
    Field::Receptions,
    Field::ReceivingYards,
    Field::YardsPerReception,
    Field::ReceivingTouchdowns,
    Field::FantasyPointsPerGame,
    Field::TotalFantasyPoints,
    Field::Team,
];

const TE_LAYOUT: &[Field] = &[
    Field::Year,
    Field::Rank,
    Field::Name,
    Field::Age,
    Field::Experience,
    Field::GamesPlayed,
    Field::Receptions,
    Field::ReceivingYards,
    Field::YardsPerReception,
    Field::ReceivingTouchdowns,
    Field::FantasyPointsPerGame,
    Field::TotalFantasyPoints,
    Field::Team,
];

/// Raw column order of a position's source file, which is also the
/// canonical field set of its normalized records.
#[must_use]
pub fn source_layout(position: Position) -> &'static [Field] {
    match position {
        Position::Qb => QB_LAYOUT,
        Position::Rb => RB_LAYOUT,
        Position::Wr => WR_LAYOUT,
        Position::Te => TE_LAYOUT,
    }
}

/// Header plus string cells, before any renaming.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// # Errors
    ///
    /// Will return `Err` if the csv is unreadable. Rows whose width differs
    /// from the header are reported as `SchemaMismatch`.
    pub fn from_reader<R: Read>(
        position: Position,
        reader: R,
        source: &str,
    ) -> Result<Self, DashboardError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|e| csv_error(position, source, e))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(|e| csv_error(position, source, e))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }
}

fn csv_error(position: Position, source: &str, e: csv::Error) -> DashboardError {
    if let csv::ErrorKind::UnequalLengths {
        pos,
        expected_len,
        len,
    } = e.kind()
    {
        let line = pos.as_ref().map_or(0, csv::Position::line);
        return DashboardError::SchemaMismatch {
            position,
            detail: format!("line {line} has {len} columns, header has {expected_len}"),
        };
    }
    DashboardError::Csv {
        path: source.to_string(),
        source: e,
    }
}

/// Fails when a header cell names one of this position's canonical fields
/// but sits in another column, i.e. the upstream file was reordered.
fn check_header(position: Position, headers: &[String]) -> Result<(), DashboardError> {
    let layout = source_layout(position);
    if headers.len() != layout.len() {
        return Err(DashboardError::SchemaMismatch {
            position,
            detail: format!(
                "expected {} columns, found {}",
                layout.len(),
                headers.len()
            ),
        });
    }

    for (idx, raw) in headers.iter().enumerate() {
        let key = normalize_header(raw);
        if let Some(expected_idx) = layout.iter().position(|f| f.header_key() == key) {
            if expected_idx != idx {
                return Err(DashboardError::SchemaMismatch {
                    position,
                    detail: format!(
                        "column {} is '{}' but {} belongs in column {}",
                        idx + 1,
                        raw,
                        layout[expected_idx],
                        expected_idx + 1
                    ),
                });
            }
        }
    }
    Ok(())
}

/// Rename a raw table's columns to the position's canonical fields by
/// position in the row, after checking the layout.
///
/// # Errors
///
/// Will return `SchemaMismatch` if the column count or order is wrong and
/// `InvalidRecord` if a row has no usable Year or Name.
pub fn normalize(position: Position, raw: &RawTable) -> Result<PositionTable, DashboardError> {
    check_header(position, &raw.headers)?;
    let layout = source_layout(position);

    let mut records = Vec::with_capacity(raw.rows.len());
    for (row_idx, row) in raw.rows.iter().enumerate() {
        if row.len() != layout.len() {
            return Err(DashboardError::SchemaMismatch {
                position,
                detail: format!(
                    "row {} has {} columns, expected {}",
                    row_idx + 1,
                    row.len(),
                    layout.len()
                ),
            });
        }

        let mut year = None;
        let mut name = String::new();
        let mut team = String::new();
        let mut fields = Vec::with_capacity(layout.len());

        for (field, cell) in layout.iter().zip(row) {
            match field {
                Field::Year => {
                    year = cell.trim().parse::<i32>().ok();
                    fields.push((*field, FieldValue::parse(cell)));
                }
                Field::Name => {
                    name = cell.trim().to_string();
                    fields.push((*field, FieldValue::Text(name.clone())));
                }
                Field::Team => {
                    team = cell.trim().to_string();
                    fields.push((*field, FieldValue::Text(team.clone())));
                }
                _ => fields.push((*field, FieldValue::parse(cell))),
            }
        }

        let Some(year) = year else {
            return Err(DashboardError::InvalidRecord {
                position,
                row: row_idx + 1,
                detail: format!("Year '{}' is not an integer", row[0].trim()),
            });
        };
        if name.is_empty() {
            return Err(DashboardError::InvalidRecord {
                position,
                row: row_idx + 1,
                detail: "Name is empty".to_string(),
            });
        }

        records.push(PlayerSeasonRecord::new(year, name, team, fields));
    }

    Ok(PositionTable::new(position, records))
}

/// # Errors
///
/// Will return `Err` if the file cannot be opened or fails normalization.
pub fn load_position_table(
    position: Position,
    path: &Path,
) -> Result<PositionTable, DashboardError> {
    let source = path.display().to_string();
    let file = File::open(path).map_err(|e| DashboardError::Io {
        path: source.clone(),
        source: e,
    })?;
    let raw = RawTable::from_reader(position, file, &source)?;
    normalize(position, &raw)
}
