use std::time::{Duration, Instant};

use chrono::FixedOffset;
use matchboard::alerts::{AlertTimer, dismiss_alerts};
use matchboard::match_times::{localize, localize_match_times};
use matchboard::password::Strength;
use matchboard::preview::{SelectedFile, data_url, update_file_preview};
use matchboard::spinner::{LoadingSpinner, OVERLAY_CLASS, hide_loading_spinner};
use matchboard::widgets::{
    ChartConfig, ChartData, DatePickerOptions, Dataset, WidgetTargets, initialize_chart,
};
use matchboard::{Page, PageConfig, SortState, ValueType};
use pagedom::{Element, Tag, find_all, find_element};

fn overlay_count(root: &Element) -> usize {
    find_all(root, &|el| el.has_class(OVERLAY_CLASS)).len()
}

fn match_page() -> Element {
    Element::body()
        .child(Element::div().id("flash").class("alert alert-success"))
        .child(Element::div().id("notice").class("alert alert-permanent"))
        .child(
            Element::span("2024-03-10T18:00:00Z")
                .id("kickoff")
                .class("match-time")
                .attr("data-utc", "2024-03-10T18:00:00Z"),
        )
        .child(Element::button("?").id("help").attr("data-bs-toggle", "tooltip"))
        .child(Element::button("i").id("info").attr("data-bs-toggle", "popover"))
        .child(Element::input().id("match-date").class("date-picker"))
        .child(Element::span("").id("password-strength"))
        .child(Element::new("canvas").id("goals-chart"))
        .child(Element::input().id("crest").attr("type", "file"))
        .child(Element::img().id("crest_preview"))
        .child(
            Element::table().id("fixtures").child(
                Element::tbody()
                    .child(Element::tr().child(Element::td("Hawks")))
                    .child(Element::tr().child(Element::td("Bears"))),
            ),
        )
}

// ============================================================================
// Alerts
// ============================================================================

#[test]
fn test_dismiss_alerts_keeps_permanent() {
    let mut root = match_page();
    assert_eq!(dismiss_alerts(&mut root, "alert-permanent"), 1);
    assert!(find_element(&root, "flash").is_none());
    assert!(find_element(&root, "notice").is_some());
    assert_eq!(dismiss_alerts(&mut root, "alert-permanent"), 0);
}

#[test]
fn test_alert_timer_fires_once() {
    let start = Instant::now();
    let mut timer = AlertTimer::default();
    assert!(!timer.fire(start));

    timer.arm(start, Duration::from_secs(5));
    assert!(timer.is_armed());
    assert!(!timer.fire(start + Duration::from_secs(4)));
    assert!(timer.fire(start + Duration::from_secs(5)));
    assert!(!timer.fire(start + Duration::from_secs(6)));
}

// ============================================================================
// Spinner
// ============================================================================

#[test]
fn test_spinner_waits_for_delay() {
    let start = Instant::now();
    let mut root = Element::body();
    let mut spinner = LoadingSpinner::new(Duration::from_millis(300));

    spinner.ajax_start(start);
    assert!(!spinner.poll(&mut root, start + Duration::from_millis(100)));
    assert_eq!(overlay_count(&root), 0);

    assert!(spinner.poll(&mut root, start + Duration::from_millis(300)));
    assert!(spinner.is_shown());
    assert_eq!(overlay_count(&root), 1);
    assert!(!spinner.poll(&mut root, start + Duration::from_millis(400)));

    spinner.ajax_stop(&mut root);
    assert!(!spinner.is_shown());
    assert_eq!(overlay_count(&root), 0);
}

#[test]
fn test_fast_request_never_shows_spinner() {
    let start = Instant::now();
    let mut root = Element::body();
    let mut spinner = LoadingSpinner::new(Duration::from_millis(300));

    spinner.ajax_start(start);
    spinner.ajax_stop(&mut root);
    assert!(!spinner.poll(&mut root, start + Duration::from_secs(1)));
    assert_eq!(overlay_count(&root), 0);
}

#[test]
fn test_spinner_overlay_markup() {
    let start = Instant::now();
    let mut root = Element::div().child(Element::body().id("body"));
    let mut spinner = LoadingSpinner::new(Duration::ZERO);
    spinner.ajax_start(start);
    spinner.poll(&mut root, start);

    let body = find_element(&root, "body").unwrap();
    let overlay = &body.child_elements()[0];
    assert!(overlay.has_class(OVERLAY_CLASS));
    assert_eq!(overlay.text_content(), "Loading...");
    let status = &overlay.child_elements()[0];
    assert_eq!(status.get_attr("role"), Some("status"));
    assert!(status.has_class("spinner-border"));

    assert!(hide_loading_spinner(&mut root));
    assert!(!hide_loading_spinner(&mut root));
}

// ============================================================================
// Match times
// ============================================================================

#[test]
fn test_localize_in_time_zone() {
    let cet = FixedOffset::east_opt(3600).unwrap();
    assert_eq!(
        localize("2024-03-10T18:00:00Z", &cet).as_deref(),
        Some("2024-03-10 19:00:00")
    );
    assert_eq!(
        localize("2024-03-10T18:00Z", &cet).as_deref(),
        Some("2024-03-10 19:00:00")
    );
    assert_eq!(localize("soon", &cet), None);
}

#[test]
fn test_localize_match_times_skips_bad_values() {
    let mut root = Element::body()
        .child(Element::span("x").class("match-time").attr("data-utc", "2024-01-01 12:00"))
        .child(Element::span("tbd").id("bad").class("match-time").attr("data-utc", "tbd"))
        .child(Element::span("none").id("bare").class("match-time"));
    let utc = FixedOffset::east_opt(0).unwrap();

    assert_eq!(localize_match_times(&mut root, &utc), 1);
    assert_eq!(root.child_elements()[0].text_content(), "2024-01-01 12:00:00");
    assert_eq!(find_element(&root, "bad").unwrap().text_content(), "tbd");
    assert_eq!(find_element(&root, "bare").unwrap().text_content(), "none");
}

// ============================================================================
// File preview
// ============================================================================

#[test]
fn test_data_url() {
    assert_eq!(data_url("image/png", b"hi"), "data:image/png;base64,aGk=");
    assert_eq!(data_url("", b""), "data:application/octet-stream;base64,");
}

#[test]
fn test_file_preview_sets_and_restores() {
    let mut root = Element::body()
        .child(Element::input().id("logo").attr("type", "file"))
        .child(Element::img().id("logo_preview").attr("data-default", "/static/team.png"));
    let file = SelectedFile {
        name: "crest.png".to_string(),
        mime: "image/png".to_string(),
        bytes: b"hi".to_vec(),
    };

    assert!(update_file_preview(&mut root, "logo", Some(&file)));
    let src = find_element(&root, "logo_preview").unwrap().get_attr("src");
    assert_eq!(src, Some("data:image/png;base64,aGk="));

    assert!(update_file_preview(&mut root, "logo", None));
    let src = find_element(&root, "logo_preview").unwrap().get_attr("src");
    assert_eq!(src, Some("/static/team.png"));

    assert!(!update_file_preview(&mut root, "avatar", None));
}

// ============================================================================
// Widgets
// ============================================================================

#[test]
fn test_widget_targets() {
    let targets = WidgetTargets::collect(&match_page());
    assert_eq!(targets.tooltips, vec!["help"]);
    assert_eq!(targets.popovers, vec!["info"]);
    assert_eq!(targets.date_pickers, vec!["match-date"]);
}

#[test]
fn test_date_picker_options_json() {
    let json = serde_json::to_string(&DatePickerOptions::default()).unwrap();
    assert_eq!(
        json,
        r#"{"format":"yyyy-mm-dd","autoclose":true,"todayHighlight":true}"#
    );
}

fn goals_chart() -> ChartConfig {
    ChartConfig {
        kind: "bar".to_string(),
        data: ChartData {
            labels: vec!["Hawks".to_string(), "Bears".to_string()],
            datasets: vec![Dataset {
                label: "Goals".to_string(),
                data: vec![12.0, 7.0],
            }],
        },
        ..Default::default()
    }
}

#[test]
fn test_initialize_chart_binds_canvas() {
    let root = match_page();
    let chart = initialize_chart(&root, "goals-chart", goals_chart()).unwrap();
    assert_eq!(chart.canvas_id, "goals-chart");
    assert_eq!(chart.config, goals_chart());
    assert_eq!(
        find_element(&root, "goals-chart").unwrap().tag,
        Tag::Other("canvas".to_string())
    );
}

#[test]
fn test_initialize_chart_without_canvas() {
    let root = match_page();
    assert_eq!(initialize_chart(&root, "assists-chart", goals_chart()), None);
}

#[test]
fn test_chart_config_json() {
    let json = r#"{"type":"line","data":{"labels":["W1"],"datasets":[{"label":"Points","data":[3.0]}]},"options":{"responsive":true}}"#;
    let config: ChartConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.kind, "line");
    assert_eq!(config.data.datasets[0].data, vec![3.0]);
    assert_eq!(config.options["responsive"], serde_json::json!(true));
    assert_eq!(serde_json::to_string(&config).unwrap(), json);

    let bare = serde_json::to_string(&goals_chart()).unwrap();
    assert!(!bare.contains("options"));
}

// ============================================================================
// Page lifecycle
// ============================================================================

#[test]
fn test_page_lifecycle() {
    let start = Instant::now();
    let mut page = Page::new(match_page(), PageConfig::default());
    let utc = FixedOffset::east_opt(0).unwrap();

    let targets = page.ready(start, &utc).clone();
    assert_eq!(targets.tooltips, vec!["help"]);
    assert_eq!(page.widgets(), &targets);
    assert_eq!(page.widgets().date_pickers, vec!["match-date"]);
    assert_eq!(
        find_element(&page.root, "kickoff").unwrap().text_content(),
        "2024-03-10 18:00:00"
    );

    page.tick(start + Duration::from_secs(1));
    assert!(find_element(&page.root, "flash").is_some());
    page.tick(start + Duration::from_secs(5));
    assert!(find_element(&page.root, "flash").is_none());
    assert!(find_element(&page.root, "notice").is_some());
}

#[test]
fn test_page_events() {
    let start = Instant::now();
    let mut page = Page::new(match_page(), PageConfig::default());

    assert_eq!(page.password_input("Sh0rt!"), Strength::Medium);
    assert_eq!(
        find_element(&page.root, "password-strength").unwrap().text_content(),
        "Medium"
    );

    assert_eq!(
        page.sort_table("fixtures", 0, ValueType::String),
        Some(SortState::ascending(0))
    );
    assert_eq!(page.sorter.state("fixtures"), Some(SortState::ascending(0)));

    page.ajax_start(start);
    page.tick(start + Duration::from_millis(350));
    assert!(page.spinner_shown());
    page.ajax_stop();
    assert!(!page.spinner_shown());
    assert_eq!(overlay_count(&page.root), 0);
}

#[test]
fn test_page_file_and_chart_events() {
    let mut page = Page::new(match_page(), PageConfig::default());
    let file = SelectedFile {
        name: "crest.gif".to_string(),
        mime: "image/gif".to_string(),
        bytes: b"GIF".to_vec(),
    };

    assert!(page.file_selected("crest", Some(&file)));
    assert_eq!(
        find_element(&page.root, "crest_preview").unwrap().get_attr("src"),
        Some("data:image/gif;base64,R0lG")
    );
    assert!(page.file_selected("crest", None));
    assert_eq!(find_element(&page.root, "crest_preview").unwrap().get_attr("src"), None);
    assert!(!page.file_selected("logo", None));

    assert!(page.chart("goals-chart", goals_chart()).is_some());
    assert!(page.chart("missing", goals_chart()).is_none());
}
