use log::debug;
use serde::Serialize;

use crate::controller::selection::{Selection, filter_records};
use crate::error::DashboardError;
use crate::model::{PositionTable, StatCatalog};
use crate::view::chart::{ChartSpec, build_chart_spec};

/// What one panel shows for its current inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PanelOutcome {
    NoSelection { message: String },
    NoRecords { message: String },
    Chart { caption: String, chart: ChartSpec },
}

impl PanelOutcome {
    #[must_use]
    pub fn chart(&self) -> Option<&ChartSpec> {
        match self {
            PanelOutcome::Chart { chart, .. } => Some(chart),
            _ => None,
        }
    }

    #[must_use]
    pub fn state_name(&self) -> &'static str {
        match self {
            PanelOutcome::NoSelection { .. } => "no_selection",
            PanelOutcome::NoRecords { .. } => "no_records",
            PanelOutcome::Chart { .. } => "chart",
        }
    }
}

/// Recompute a panel from scratch: resolve the stat, filter, then chart.
///
/// # Errors
///
/// Will return `UnknownStat` if `stat_label` is not in the position's catalog.
pub fn evaluate_panel(
    table: &PositionTable,
    selection: &Selection,
    stat_label: &str,
) -> Result<PanelOutcome, DashboardError> {
    let position = table.position;
    let field = StatCatalog::for_position(position).field_for(stat_label)?;

    let outcome = if selection.is_empty() {
        PanelOutcome::NoSelection {
            message: format!(
                "Please select at least one {} to display statistics.",
                position.noun_singular()
            ),
        }
    } else {
        let records = filter_records(table, selection);
        if records.is_empty() {
            PanelOutcome::NoRecords {
                message: format!(
                    "No statistics available for the selected {}.",
                    position.noun_plural()
                ),
            }
        } else {
            PanelOutcome::Chart {
                caption: format!(
                    "Comparing {stat_label} for Selected {} Over the Years:",
                    position.display_plural()
                ),
                chart: build_chart_spec(&records, field, stat_label).with_position(position),
            }
        }
    };

    debug!(
        "{position} panel: {} selected, stat '{stat_label}', state {}",
        selection.len(),
        outcome.state_name()
    );
    Ok(outcome)
}
