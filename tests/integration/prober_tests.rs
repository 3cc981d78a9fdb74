//! Prober classification against a mock server

use crate::test_config;
use doclink_audit::config::SkipRule;
use doclink_audit::{LinkStatus, Prober};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_ok_response_passes() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
        .mount(&mock_server)
        .await;

    let prober = Prober::new(&test_config(&mock_server.uri())).expect("prober");
    let result = prober.check(&format!("{}/ok", mock_server.uri())).await;

    assert_eq!(result.status, LinkStatus::Pass);
    assert_eq!(result.status_code, Some(200));
    assert_eq!(result.error_message, None);
    assert_eq!(result.final_url, None);
    assert!(result.response_time >= 0.0);
}

#[tokio::test]
async fn test_not_found_fails() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let prober = Prober::new(&test_config(&mock_server.uri())).expect("prober");
    let result = prober.check(&format!("{}/missing", mock_server.uri())).await;

    assert_eq!(result.status, LinkStatus::Fail);
    assert_eq!(result.status_code, Some(404));
    assert_eq!(result.error_message.as_deref(), Some("HTTP 404"));
}

#[tokio::test]
async fn test_timeout_fails() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let mut config = test_config(&mock_server.uri());
    config.settings.timeout = 1;
    let prober = Prober::new(&config).expect("prober");
    let result = prober.check(&format!("{}/slow", mock_server.uri())).await;

    assert_eq!(result.status, LinkStatus::Fail);
    assert_eq!(result.error_message.as_deref(), Some("Request timeout"));
    assert_eq!(result.status_code, None);
}

#[tokio::test]
async fn test_refused_connection_fails() {
    let prober = Prober::new(&test_config("https://docs.example.com")).expect("prober");
    let result = prober.check("http://127.0.0.1:1/unreachable").await;

    assert_eq!(result.status, LinkStatus::Fail);
    assert_eq!(result.error_message.as_deref(), Some("Connection error"));
}

#[tokio::test]
async fn test_redirect_records_final_url() {
    let mock_server = MockServer::start().await;
    let target = format!("{}/new", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("Location", target.as_str()))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let prober = Prober::new(&test_config(&mock_server.uri())).expect("prober");
    let result = prober.check(&format!("{}/old", mock_server.uri())).await;

    assert_eq!(result.status, LinkStatus::Pass);
    assert_eq!(result.status_code, Some(200));
    assert_eq!(result.final_url.as_deref(), Some(target.as_str()));
}

#[tokio::test]
async fn test_redirect_loop_is_an_error() {
    let mock_server = MockServer::start().await;
    let target = format!("{}/loop", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/loop"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", target.as_str()))
        .mount(&mock_server)
        .await;

    let mut config = test_config(&mock_server.uri());
    config.settings.max_redirects = 2;
    let prober = Prober::new(&config).expect("prober");
    let result = prober.check(&target).await;

    assert_eq!(result.status, LinkStatus::Error);
    assert!(result.error_message.is_some());
}

#[tokio::test]
async fn test_transient_status_is_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let prober = Prober::new(&test_config(&mock_server.uri())).expect("prober");
    let result = prober.check(&format!("{}/flaky", mock_server.uri())).await;

    assert_eq!(result.status, LinkStatus::Pass);
    assert_eq!(result.status_code, Some(200));
}

#[tokio::test]
async fn test_retries_exhausted_reports_last_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/down"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&mock_server)
        .await;

    let mut config = test_config(&mock_server.uri());
    config.retry.max_retries = 2;
    let prober = Prober::new(&config).expect("prober");
    let result = prober.check(&format!("{}/down", mock_server.uri())).await;

    assert_eq!(result.status, LinkStatus::Fail);
    assert_eq!(result.error_message.as_deref(), Some("HTTP 503"));
}

#[tokio::test]
async fn test_non_listed_status_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forbidden"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&mock_server)
        .await;

    let prober = Prober::new(&test_config(&mock_server.uri())).expect("prober");
    let result = prober.check(&format!("{}/forbidden", mock_server.uri())).await;

    assert_eq!(result.error_message.as_deref(), Some("HTTP 403"));
}

#[tokio::test]
async fn test_skipped_url_issues_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut config = test_config(&mock_server.uri());
    config.skip = vec![SkipRule {
        pattern: "/private/".to_string(),
        reason: Some("requires login".to_string()),
    }];
    let prober = Prober::new(&config).expect("prober");
    let result = prober
        .check(&format!("{}/private/dashboard", mock_server.uri()))
        .await;

    assert_eq!(result.status, LinkStatus::Skip);
    assert_eq!(result.error_message.as_deref(), Some("requires login"));
    assert_eq!(result.status_code, None);
}
