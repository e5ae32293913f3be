use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use log::warn;
use maud::Markup;
use serde::Serialize;
use serde_json::json;

use super::panel_service::PanelOutcome;
use crate::controller::selection::Selection;
use crate::error::DashboardError;
use crate::model::{DashboardContext, Position};
use crate::mvu::panel::{Deps, Msg, PanelModel, decode_request_to_model};
use crate::mvu::runtime::run_panel;
use crate::view::index::render_index_template;
use crate::view::panel::{render_panel, render_unavailable_panel};

#[derive(Serialize)]
struct PanelResponse<'a> {
    position: Position,
    selection: &'a Selection,
    stat: &'a str,
    #[serde(flatten)]
    outcome: &'a PanelOutcome,
}

fn bad_request(e: &DashboardError) -> HttpResponse {
    warn!("rejected panel request: {e}");
    HttpResponse::BadRequest().json(json!({"error": e.to_string()}))
}

/// Run the update loop for one request and render the resulting panel.
/// A position whose data is unavailable renders as a notice, not an error.
///
/// # Errors
///
/// Will return `Err` only for bad request input (unknown stat).
fn render_model(
    context: &DashboardContext,
    model: &mut PanelModel,
    msgs: Vec<Msg>,
) -> Result<Markup, DashboardError> {
    match run_panel(model, msgs, Deps { context }) {
        Ok(()) => {}
        Err(e) if e.is_bad_request() => return Err(e),
        Err(e) => return Ok(render_unavailable_panel(model.position, &e.to_string())),
    }
    match (context.table(model.position), model.outcome.as_ref()) {
        (Ok(table), Some(outcome)) => Ok(render_panel(
            table,
            &model.selection,
            &model.stat_label,
            outcome,
        )),
        (Err(e), _) => Ok(render_unavailable_panel(model.position, &e.to_string())),
        (Ok(_), None) => Ok(render_unavailable_panel(
            model.position,
            "panel produced no output",
        )),
    }
}

pub async fn panel(
    query: web::Query<Vec<(String, String)>>,
    context: Data<DashboardContext>,
) -> impl Responder {
    let (mut model, msgs) = match decode_request_to_model(&query) {
        Ok(decoded) => decoded,
        Err(e) => return bad_request(&e),
    };

    if model.want_json {
        return match run_panel(&mut model, msgs, Deps { context: context.get_ref() }) {
            Ok(()) => match model.outcome.as_ref() {
                Some(outcome) => HttpResponse::Ok().json(PanelResponse {
                    position: model.position,
                    selection: &model.selection,
                    stat: &model.stat_label,
                    outcome,
                }),
                None => HttpResponse::InternalServerError()
                    .json(json!({"error": "panel produced no output"})),
            },
            Err(e) if e.is_bad_request() => bad_request(&e),
            Err(e) => HttpResponse::ServiceUnavailable().json(json!({"error": e.to_string()})),
        };
    }

    match render_model(context.get_ref(), &mut model, msgs) {
        Ok(markup) => HttpResponse::Ok()
            .content_type("text/html")
            .body(markup.into_string()),
        Err(e) => bad_request(&e),
    }
}

/// Full page with the tab bar and every position's panel. The query's
/// controls apply to the active position; the other panels open on their
/// defaults. Also the target of the panel form when htmx is not available.
pub async fn index(
    query: web::Query<Vec<(String, String)>>,
    context: Data<DashboardContext>,
) -> impl Responder {
    let mut pairs = query.into_inner();
    let requested = pairs
        .iter()
        .find(|(k, _)| k == "pos")
        .map(|(_, v)| v.clone());
    match requested {
        Some(v) if v.parse::<Position>().is_ok() => {}
        Some(v) => {
            warn!("unknown position '{v}' on index, showing quarterbacks");
            pairs.retain(|(k, _)| k != "pos");
            pairs.push(("pos".to_string(), Position::Qb.slug().to_string()));
        }
        None => pairs.push(("pos".to_string(), Position::Qb.slug().to_string())),
    }

    let active = match decode_request_to_model(&pairs) {
        Ok((model, _)) => model.position,
        Err(e) => return bad_request(&e),
    };

    let mut panels = Vec::with_capacity(Position::ALL.len());
    for position in Position::ALL {
        let panel_pairs = if position == active {
            pairs.clone()
        } else {
            vec![("pos".to_string(), position.slug().to_string())]
        };
        let rendered = decode_request_to_model(&panel_pairs)
            .and_then(|(mut model, msgs)| render_model(context.get_ref(), &mut model, msgs));
        match rendered {
            Ok(panel) => panels.push((position, panel)),
            Err(e) => return bad_request(&e),
        }
    }

    let markup = render_index_template(active, &panels);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
