use std::str::FromStr;

use crate::controller::panel::{PanelOutcome, evaluate_panel};
use crate::controller::selection::Selection;
use crate::error::DashboardError;
use crate::model::{DashboardContext, Position, StatCatalog};

#[derive(Debug, Clone)]
pub struct PanelModel {
    pub position: Position,
    pub selection: Selection,
    pub stat_label: String,
    pub want_json: bool,
    pub outcome: Option<PanelOutcome>,
}

impl PanelModel {
    /// Empty selection, first catalog stat.
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self {
            position,
            selection: Selection::new(),
            stat_label: StatCatalog::for_position(position).default_label().to_string(),
            want_json: false,
            outcome: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    SelectPlayers(Selection),
    SelectStat(String),
    Recomputed(PanelOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Recompute,
}

/// Either input changing invalidates the outcome; nothing is patched in place.
pub fn update(model: &mut PanelModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::SelectPlayers(selection) => {
            model.selection = selection;
            model.outcome = None;
            vec![Effect::Recompute]
        }
        Msg::SelectStat(label) => {
            model.stat_label = label;
            model.outcome = None;
            vec![Effect::Recompute]
        }
        Msg::Recomputed(outcome) => {
            model.outcome = Some(outcome);
            vec![]
        }
    }
}

#[derive(Clone, Copy)]
pub struct Deps<'a> {
    pub context: &'a DashboardContext,
}

/// # Errors
///
/// Will return `Err` if the position's table failed to load or the stat
/// label is unknown.
pub fn run_effect(
    effect: Effect,
    model: &PanelModel,
    deps: Deps<'_>,
) -> Result<Msg, DashboardError> {
    match effect {
        Effect::Recompute => {
            let table = deps.context.table(model.position).map_err(|e| {
                DashboardError::PositionUnavailable {
                    position: model.position,
                    reason: e.to_string(),
                }
            })?;
            let outcome = evaluate_panel(table, &model.selection, &model.stat_label)?;
            Ok(Msg::Recomputed(outcome))
        }
    }
}

/// Parse query pairs into a panel model plus the messages that bring it to
/// the requested state. `player` may repeat; a missing `stat` keeps the
/// catalog default.
///
/// # Errors
///
/// Returns `UnknownPosition` if `pos` is missing or not a known slug.
pub fn decode_request_to_model(
    query: &[(String, String)],
) -> Result<(PanelModel, Vec<Msg>), DashboardError> {
    let pos = query
        .iter()
        .find(|(k, _)| k == "pos")
        .map_or("", |(_, v)| v.as_str());
    let position = Position::from_str(pos)?;
    let mut model = PanelModel::new(position);

    model.want_json = match query.iter().find(|(k, _)| k == "json").map(|(_, v)| v.as_str()) {
        Some("1") => true,
        Some("0") | None => false,
        Some(other) => other.parse().unwrap_or(false),
    };

    let selection: Selection = query
        .iter()
        .filter(|(k, _)| k == "player")
        .map(|(_, v)| v.as_str())
        .collect();

    let mut msgs = vec![Msg::SelectPlayers(selection)];
    if let Some((_, stat)) = query.iter().find(|(k, _)| k == "stat") {
        msgs.push(Msg::SelectStat(stat.clone()));
    }
    Ok((model, msgs))
}
