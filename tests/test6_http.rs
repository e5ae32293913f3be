mod common;

use actix_web::web::{self, Data};
use actix_web::{App, HttpResponse, test};
use scraper::{Html, Selector};
use serde_json::Value;

use fantasy_stats::controller::panel::{index, panel};
use fantasy_stats::model::{DashboardContext, Position};

use common::{fixture_context, partial_context};

macro_rules! init_app {
    ($context:expr) => {
        test::init_service(
            App::new()
                .app_data(Data::new($context))
                .route("/", web::get().to(index))
                .route("/panel", web::get().to(panel))
                .route("/health", web::get().to(HttpResponse::Ok)),
        )
        .await
    };
}

async fn get_body(context: DashboardContext, uri: &str) -> (u16, String) {
    let app = init_app!(context);
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status().as_u16();
    let body = test::read_body(resp).await;
    (status, String::from_utf8(body.to_vec()).unwrap())
}

fn select_texts(html: &Html, selector: &str) -> Vec<String> {
    let selector = Selector::parse(selector).unwrap();
    html.select(&selector)
        .map(|e| e.text().collect::<String>().trim().to_string())
        .collect()
}

#[actix_web::test]
async fn test_health() {
    let (status, _) = get_body(fixture_context(), "/health").await;
    assert_eq!(status, 200);
}

#[actix_web::test]
async fn test_index_lists_tabs_and_defaults_to_quarterbacks() {
    let (status, body) = get_body(fixture_context(), "/").await;
    assert_eq!(status, 200);
    let html = Html::parse_document(&body);

    assert_eq!(
        select_texts(&html, "nav.tabs a"),
        vec!["Quarterbacks", "Running Backs", "Wide Receivers", "Tight Ends"]
    );
    assert_eq!(select_texts(&html, "nav.tabs a.active"), vec!["Quarterbacks"]);
    assert_eq!(
        select_texts(&html, "#qb-players option"),
        vec!["Player A", "Player B", "Player C"]
    );
    assert_eq!(
        select_texts(&html, "#panel-qb .panel-output .status"),
        vec!["Please select at least one quarterback to display statistics."]
    );
}

#[actix_web::test]
async fn test_index_renders_every_panel_with_only_active_shown() {
    let (status, body) = get_body(fixture_context(), "/?pos=te").await;
    assert_eq!(status, 200);
    let html = Html::parse_document(&body);

    let panes = Selector::parse("#panels .tab-pane").unwrap();
    let shown: Vec<(&str, bool)> = html
        .select(&panes)
        .map(|p| {
            (
                p.value().attr("data-position").unwrap(),
                p.value().attr("hidden").is_some(),
            )
        })
        .collect();
    assert_eq!(
        shown,
        vec![("qb", true), ("rb", true), ("wr", true), ("te", false)]
    );
    for slug in ["qb", "rb", "wr", "te"] {
        let panel = Selector::parse(&format!("#tab-{slug} > section#panel-{slug}")).unwrap();
        assert_eq!(html.select(&panel).count(), 1, "{slug} panel missing");
    }
}

#[actix_web::test]
async fn test_selection_survives_switching_tabs() {
    let (status, body) = get_body(
        fixture_context(),
        "/?pos=qb&player=Player+A&stat=Passing+Yards",
    )
    .await;
    assert_eq!(status, 200);
    let html = Html::parse_document(&body);

    // Switching tabs only toggles panes, so the running back panel is
    // already in the page next to the quarterback chart.
    assert_eq!(select_texts(&html, "#qb-players option[selected]"), vec!["Player A"]);
    assert_eq!(select_texts(&html, "#qb-stat option[selected]"), vec!["Passing Yards"]);
    assert_eq!(select_texts(&html, "#panel-qb figcaption.chart-title").len(), 1);
    assert_eq!(
        select_texts(&html, "#rb-players option"),
        vec!["Runner One", "Runner Two"]
    );
    assert!(select_texts(&html, "#rb-players option[selected]").is_empty());
    assert_eq!(
        select_texts(&html, "#panel-rb .panel-output .status"),
        vec!["Please select at least one running back to display statistics."]
    );

    let tab = Selector::parse("nav.tabs a[data-position='rb']").unwrap();
    let rb_tab = html.select(&tab).next().unwrap();
    assert_eq!(rb_tab.value().attr("aria-controls"), Some("tab-rb"));

    // Each panel swaps only itself, so the quarterback query stays scoped.
    let form = Selector::parse("#panel-qb form").unwrap();
    let qb_form = html.select(&form).next().unwrap();
    assert_eq!(qb_form.value().attr("hx-target"), Some("#panel-qb"));

    let (status, body) = get_body(fixture_context(), "/panel?pos=rb&player=Runner+Two").await;
    assert_eq!(status, 200);
    let fragment = Html::parse_fragment(&body);
    assert!(select_texts(&fragment, "#qb-players option").is_empty());
    assert_eq!(select_texts(&fragment, "#rb-players option[selected]"), vec!["Runner Two"]);
}

#[actix_web::test]
async fn test_index_form_fallback_renders_chart() {
    let (status, body) = get_body(
        fixture_context(),
        "/?pos=rb&player=Runner+One&stat=Rushing+Yards",
    )
    .await;
    assert_eq!(status, 200);
    let html = Html::parse_document(&body);
    assert_eq!(select_texts(&html, "nav.tabs a.active"), vec!["Running Backs"]);
    assert_eq!(select_texts(&html, "#rb-players option[selected]"), vec!["Runner One"]);
    assert_eq!(select_texts(&html, "#rb-stat option[selected]"), vec!["Rushing Yards"]);
    assert_eq!(
        select_texts(&html, "#panel-rb .panel-output .caption"),
        vec!["Comparing Rushing Yards for Selected Running Backs Over the Years:"]
    );
}

#[actix_web::test]
async fn test_panel_fragment_for_unmatched_player() {
    let (status, body) = get_body(fixture_context(), "/panel?pos=wr&player=Ghost+Player").await;
    assert_eq!(status, 200);
    let html = Html::parse_fragment(&body);
    assert_eq!(
        select_texts(&html, ".panel-output .status"),
        vec!["No statistics available for the selected wide receivers."]
    );
    let state = Selector::parse(".panel-output").unwrap();
    let output = html.select(&state).next().unwrap();
    assert_eq!(output.value().attr("data-state"), Some("no_records"));
}

#[actix_web::test]
async fn test_panel_fragment_draws_chart() {
    let (status, body) = get_body(
        fixture_context(),
        "/panel?pos=qb&player=Player+A&player=Player+C&stat=Total+Fantasy+Points",
    )
    .await;
    assert_eq!(status, 200);
    let html = Html::parse_fragment(&body);
    let series = Selector::parse("svg g.series").unwrap();
    assert_eq!(html.select(&series).count(), 2);
    assert_eq!(
        select_texts(&html, "figcaption.chart-title"),
        vec!["Total Fantasy Points Comparison for Selected Quarterbacks"]
    );
}

#[actix_web::test]
async fn test_panel_json() {
    let (status, body) = get_body(
        fixture_context(),
        "/panel?pos=qb&player=Player+A&stat=Passing+Yards&json=1",
    )
    .await;
    assert_eq!(status, 200);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["position"], "qb");
    assert_eq!(json["state"], "chart");
    assert_eq!(json["stat"], "Passing Yards");
    let points = &json["chart"]["series"][0]["points"];
    assert_eq!(points[0]["x"], 2020);
    assert_eq!(points[0]["y"], 3000.0);
    assert_eq!(points[1]["x"], 2021);
    assert_eq!(points[1]["y"], 3500.0);

    let (_, body) = get_body(fixture_context(), "/panel?pos=rb&json=1").await;
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["state"], "no_selection");
}

#[actix_web::test]
async fn test_bad_requests() {
    let (status, body) = get_body(fixture_context(), "/panel?pos=k").await;
    assert_eq!(status, 400);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert!(json["error"].as_str().unwrap().contains("unknown position"));

    let (status, _) = get_body(fixture_context(), "/panel?pos=te&stat=Passing+Yards").await;
    assert_eq!(status, 400);
}

#[actix_web::test]
async fn test_failed_position_is_isolated() {
    let context = partial_context(&[Position::Qb, Position::Rb, Position::Te]);
    let (status, body) = get_body(context, "/?pos=wr").await;
    assert_eq!(status, 200);
    let html = Html::parse_document(&body);
    let notices = select_texts(&html, "#panel-wr .status.error");
    assert_eq!(notices.len(), 1);
    assert!(notices[0].starts_with("Data for wide receivers could not be loaded"));

    let context = partial_context(&[Position::Qb, Position::Rb, Position::Te]);
    let (status, _) = get_body(context, "/panel?pos=wr&json=1").await;
    assert_eq!(status, 503);

    let context = partial_context(&[Position::Qb, Position::Rb, Position::Te]);
    let (status, body) = get_body(context, "/panel?pos=te&player=End+One").await;
    assert_eq!(status, 200);
    assert!(body.contains("Comparing Rank for Selected Tight Ends Over the Years:"));
}
