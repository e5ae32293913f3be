use thiserror::Error;

use crate::model::Position;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("csv error in {path}: {source}")]
    Csv { path: String, source: csv::Error },
    #[error("{position} table does not match the expected layout: {detail}")]
    SchemaMismatch { position: Position, detail: String },
    #[error("{position} table row {row}: {detail}")]
    InvalidRecord {
        position: Position,
        row: usize,
        detail: String,
    },
    #[error("unknown statistic '{label}' for {position}")]
    UnknownStat { position: Position, label: String },
    #[error("{position} data is unavailable: {reason}")]
    PositionUnavailable { position: Position, reason: String },
    #[error("unknown position '{0}', expected one of qb, rb, wr, te")]
    UnknownPosition(String),
}

impl DashboardError {
    /// Errors caused by the request itself rather than by the loaded data.
    #[must_use]
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Self::UnknownStat { .. } | Self::UnknownPosition(_))
    }
}
