use maud::{Markup, html};

use crate::HTMX_PATH;
use crate::model::Position;

pub const INDEX_TITLE: &str = "Fantasy Football Player Statistics";

#[must_use]
pub fn tab_pane_id(position: Position) -> String {
    format!("tab-{}", position.slug())
}

/// Full page holding every position's panel. Only the active pane is shown;
/// the rest stay in the page so their selections survive a tab switch.
#[must_use]
pub fn render_index_template(active: Position, panels: &[(Position, Markup)]) -> Markup {
    html! {
        (maud::DOCTYPE)
        head{
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { (INDEX_TITLE) }
            script src=(HTMX_PATH) defer {}
            script src="static/panel.js" defer {}
        }
        body {
            h1 { (INDEX_TITLE) }
            nav class="tabs" {
                @for position in Position::ALL {
                    @let class = if position == active { "tab active" } else { "tab" };
                    a class=(class) href=(format!("?pos={}", position.slug())) data-position=(position.slug())
                        aria-controls=(tab_pane_id(position)) {
                        (position.display_plural())
                    }
                }
            }
            main id="panels" {
                @for (position, panel) in panels {
                    div class="tab-pane" id=(tab_pane_id(*position)) data-position=(position.slug())
                        hidden[*position != active] {
                        (panel)
                    }
                }
            }
        }
    }
}
