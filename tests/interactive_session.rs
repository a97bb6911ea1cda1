//! Interactive sessions driven by scripted input.

mod helpers;

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use country_lookup::app::run_interactive;
use country_lookup::{SearchMode, SearchOutcome};
use helpers::{country_json, europe, mock_session};

async fn mount_europe(server: &MockServer) {
    for name in ["France", "Belgium", "Germany"] {
        Mock::given(method("GET"))
            .and(path(format!("/v3.1/name/{name}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([country_json(
                name, "Europe", "Capital", 1_000_000
            )])))
            .mount(server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/v3.1/region/Europe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(europe()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_search_then_open_card() {
    let server = MockServer::start().await;
    mount_europe(&server).await;

    let session = mock_session(&server, SearchMode::Exact);
    let view = Arc::clone(session.view());
    let input: &[u8] = b"France\n:open 1\n:quit\n";
    let mut out = Vec::new();

    let report = run_interactive(session, input, &mut out)
        .await
        .expect("session should finish");

    assert_eq!(report.searches, 2);
    assert_eq!(report.displayed, 2);
    assert_eq!(report.failed, 0);
    assert!(matches!(
        report.last_outcome,
        Some(SearchOutcome::Displayed { ref country, .. }) if country == "Belgium"
    ));
    // cards of Belgium's listing: France, Germany
    assert_eq!(view.lock().await.region_names(), vec!["France", "Germany"]);
}

#[tokio::test]
async fn test_comments_and_sorting() {
    let server = MockServer::start().await;
    let session = mock_session(&server, SearchMode::Exact);
    let input: &[u8] = b":comment Ana | hi there\n:comment | missing name\n:comment Bo | second\n:sort desc\n:quit\n";
    let mut out = Vec::new();

    let report = run_interactive(session, input, &mut out).await.unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(report.searches, 0);
    assert!(text.contains("Both a name and a comment are required"));
    assert!(text.contains("Ana"));
    assert!(text.contains("hi there"));
    assert!(text.contains("Timestamp: "));
    assert!(text.contains("Bo"));
}

#[tokio::test]
async fn test_unknown_command_and_bad_card() {
    let server = MockServer::start().await;
    let session = mock_session(&server, SearchMode::Exact);
    let input: &[u8] = b":frobnicate\n:open 3\n:comments\n";
    let mut out = Vec::new();

    let report = run_interactive(session, input, &mut out).await.unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(report.last_outcome.is_none());
    assert!(text.contains("No country card #3"));
    assert!(text.contains("No comments yet"));
}

#[tokio::test]
async fn test_mode_switch_changes_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3.1/name/Atlantis"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let session = mock_session(&server, SearchMode::Exact);
    let view = Arc::clone(session.view());
    let input: &[u8] = b"Atlantis\n:mode fuzzy\nAtlantis\n";
    let mut out = Vec::new();

    let report = run_interactive(session, input, &mut out).await.unwrap();

    assert_eq!(report.searches, 2);
    assert_eq!(report.failed, 2);
    assert!(String::from_utf8(out).unwrap().contains("Search mode: fuzzy"));
    assert_eq!(
        view.lock().await.error.as_deref(),
        Some("Country not found or service unavailable. Please try again later.")
    );
}
