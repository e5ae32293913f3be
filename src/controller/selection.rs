use serde::Serialize;
use std::collections::BTreeSet;

use crate::model::{PlayerSeasonRecord, PositionTable};

/// Player names picked in one panel. Replaced wholesale on every interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection {
    names: BTreeSet<String>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(Into::into)
                .map(|n: String| n.trim().to_string())
                .filter(|n| !n.is_empty())
                .collect(),
        }
    }
}

/// Rows whose Name is selected, in table order. An empty selection yields
/// nothing rather than the whole table.
#[must_use]
pub fn filter_records<'a>(
    table: &'a PositionTable,
    selection: &Selection,
) -> Vec<&'a PlayerSeasonRecord> {
    if selection.is_empty() {
        return Vec::new();
    }
    table
        .records
        .iter()
        .filter(|record| selection.contains(&record.name))
        .collect()
}
