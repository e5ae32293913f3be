use log::{error, info};
use std::collections::BTreeMap;
use std::path::Path;

use super::position::Position;
use super::schema::load_position_table;
use super::types::PositionTable;
use crate::error::DashboardError;

/// Every position's table, loaded once at startup and read-only afterwards.
/// A position that failed to load keeps its error so the others stay usable.
#[derive(Debug)]
pub struct DashboardContext {
    tables: BTreeMap<Position, Result<PositionTable, DashboardError>>,
}

impl DashboardContext {
    #[must_use]
    pub fn load(data_dir: &Path) -> Self {
        let mut tables = BTreeMap::new();
        for position in Position::ALL {
            let path = data_dir.join(position.source_file_name());
            let result = load_position_table(position, &path);
            match &result {
                Ok(table) => info!(
                    "loaded {} table from {}: {} rows, {} players",
                    position,
                    path.display(),
                    table.len(),
                    table.player_names().len()
                ),
                Err(e) => error!("{position} panel disabled: {e}"),
            }
            tables.insert(position, result);
        }
        Self { tables }
    }

    /// Build a context from tables already in memory. Positions not given are
    /// treated as not loaded.
    #[must_use]
    pub fn from_tables(tables: Vec<PositionTable>) -> Self {
        let mut map: BTreeMap<Position, Result<PositionTable, DashboardError>> = BTreeMap::new();
        for table in tables {
            map.insert(table.position, Ok(table));
        }
        for position in Position::ALL {
            map.entry(position).or_insert_with(|| {
                Err(DashboardError::Io {
                    path: position.source_file_name(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "not loaded"),
                })
            });
        }
        Self { tables: map }
    }

    /// # Errors
    ///
    /// Returns the load error recorded for `position`.
    pub fn table(&self, position: Position) -> Result<&PositionTable, &DashboardError> {
        match self.tables.get(&position) {
            Some(Ok(table)) => Ok(table),
            Some(Err(e)) => Err(e),
            None => unreachable!("every position is inserted at construction"),
        }
    }

    #[must_use]
    pub fn loaded_positions(&self) -> Vec<Position> {
        self.tables
            .iter()
            .filter(|(_, t)| t.is_ok())
            .map(|(p, _)| *p)
            .collect()
    }
}
