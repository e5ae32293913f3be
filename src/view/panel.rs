use maud::{Markup, html};

use crate::controller::panel::PanelOutcome;
use crate::controller::selection::Selection;
use crate::model::{Position, PositionTable, StatCatalog};
use crate::view::chart::render_chart;

#[must_use]
pub fn panel_id(position: Position) -> String {
    format!("panel-{}", position.slug())
}

/// One position's controls plus its chart or status line. The fragment
/// replaces itself whenever a control changes.
#[must_use]
pub fn render_panel(
    table: &PositionTable,
    selection: &Selection,
    stat_label: &str,
    outcome: &PanelOutcome,
) -> Markup {
    let position = table.position;
    let id = panel_id(position);
    let player_select_id = format!("{}-players", position.slug());
    let stat_select_id = format!("{}-stat", position.slug());

    html! {
        section class="panel" id=(id) data-position=(position.slug()) {
            h2 { (position.display_plural()) }
            form class="panel-controls" action="./" method="get"
                hx-get="panel" hx-trigger="change[target.tagName=='SELECT']" hx-target=(format!("#{id}")) hx-swap="outerHTML" {
                input type="hidden" name="pos" value=(position.slug());
                div class="control" {
                    label for=(player_select_id) { "Select " (position.display_plural()) " to Compare" }
                    input type="search" class="player-search" placeholder="Search players"
                        data-target=(player_select_id) aria-label="Search players";
                    select id=(player_select_id) name="player" multiple size="8" {
                        @for name in table.player_names() {
                            option value=(name) selected[selection.contains(name)] { (name) }
                        }
                    }
                }
                div class="control" {
                    label for=(stat_select_id) { "Select a Statistic to Display" }
                    select id=(stat_select_id) name="stat" {
                        @for label in StatCatalog::for_position(position).labels() {
                            option value=(label) selected[label == stat_label] { (label) }
                        }
                    }
                }
                noscript { button type="submit" { "Update" } }
            }
            div class="panel-output" data-state=(outcome.state_name()) {
                (render_outcome(outcome))
            }
        }
    }
}

#[must_use]
pub fn render_outcome(outcome: &PanelOutcome) -> Markup {
    match outcome {
        PanelOutcome::NoSelection { message } | PanelOutcome::NoRecords { message } => html! {
            p class="status" { (message) }
        },
        PanelOutcome::Chart { caption, chart } => html! {
            p class="caption" { (caption) }
            (render_chart(chart))
        },
    }
}

/// Shown in place of a panel whose data failed to load at startup.
#[must_use]
pub fn render_unavailable_panel(position: Position, reason: &str) -> Markup {
    html! {
        section class="panel unavailable" id=(panel_id(position)) data-position=(position.slug()) {
            h2 { (position.display_plural()) }
            p class="status error" {
                "Data for " (position.display_plural().to_lowercase()) " could not be loaded: " (reason)
            }
        }
    }
}
