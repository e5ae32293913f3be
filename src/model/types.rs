use serde::Serialize;

use super::field::{Field, FieldValue};
use super::position::Position;

/// One player's season line for one position, in canonical field order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSeasonRecord {
    pub year: i32,
    pub name: String,
    pub team: String,
    fields: Vec<(Field, FieldValue)>,
}

impl PlayerSeasonRecord {
    #[must_use]
    pub fn new(year: i32, name: String, team: String, fields: Vec<(Field, FieldValue)>) -> Self {
        Self {
            year,
            name,
            team,
            fields,
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v)
    }

    #[must_use]
    pub fn field_names(&self) -> Vec<Field> {
        self.fields.iter().map(|(f, _)| *f).collect()
    }
}

/// All season lines for one position. Row order is the source file's order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionTable {
    pub position: Position,
    pub records: Vec<PlayerSeasonRecord>,
}

impl PositionTable {
    #[must_use]
    pub fn new(position: Position, records: Vec<PlayerSeasonRecord>) -> Self {
        Self { position, records }
    }

    /// Distinct player names, alphabetical, for the player selector.
    #[must_use]
    pub fn player_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records.iter().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
