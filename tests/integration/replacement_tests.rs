//! Replacement discovery against a mock documentation host

use crate::test_config;
use async_trait::async_trait;
use doclink_audit::analysis::Confidence;
use doclink_audit::replacement::{ReplacementFinder, SearchProvider};
use doclink_audit::{CheckerError, RunContext};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Search provider returning canned text
struct CannedSearch(String);

#[async_trait]
impl SearchProvider for CannedSearch {
    async fn search(&self, _query: &str) -> Result<String, CheckerError> {
        Ok(self.0.clone())
    }
}

const DOCS_PATH: &str = "/en/documentation/openshift_container_platform/4.16/html";

#[tokio::test]
async fn test_related_topic_candidate_is_validated() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    // Off-topic candidate: must never be requested.
    Mock::given(method("GET"))
        .and(path(format!("{}/security/index", DOCS_PATH)))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;
    // On-topic but broken.
    Mock::given(method("GET"))
        .and(path(format!("{}/monitoring/old-page", DOCS_PATH)))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;
    // On-topic via observability and working.
    Mock::given(method("GET"))
        .and(path(format!("{}/observability/new-page", DOCS_PATH)))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let search = CannedSearch(format!(
        "Security overview for OpenShift\n\
         {base}{DOCS_PATH}/security/index\n\
         Old monitoring page for OpenShift\n\
         {base}{DOCS_PATH}/monitoring/old-page\n\
         Observability | OpenShift Container Platform\n\
         {base}{DOCS_PATH}/observability/new-page.\n"
    ));

    let ctx = RunContext::new(test_config(&base), None).expect("context");
    let finder = ReplacementFinder::new(&ctx, &search).expect("finder");

    let broken = format!("{base}{DOCS_PATH}/monitoring/configuring-the-stack");
    let replacement = finder.find(&broken).await.expect("replacement");

    assert_eq!(replacement.original_url, broken);
    assert_eq!(
        replacement.replacement_url,
        format!("{base}{DOCS_PATH}/observability/new-page")
    );
    assert_eq!(replacement.confidence, Confidence::High);
    assert_eq!(replacement.validation_method, "web_search_and_test");
    assert_eq!(
        replacement.description,
        "Observability | OpenShift Container Platform"
    );
}

#[tokio::test]
async fn test_no_candidate_passes() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let search = CannedSearch(format!(
        "Storage guide for OpenShift users\n{base}{DOCS_PATH}/storage/persistent-volumes\n"
    ));

    let ctx = RunContext::new(test_config(&base), None).expect("context");
    let finder = ReplacementFinder::new(&ctx, &search).expect("finder");

    let broken = format!("{base}{DOCS_PATH}/storage/old");
    assert!(finder.find(&broken).await.is_none());
}

#[tokio::test]
async fn test_candidate_limit() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    // Only the sixth candidate is on topic, beyond the default limit of five.
    let mut text = String::new();
    for i in 0..5 {
        text.push_str(&format!("{base}{DOCS_PATH}/security/page-{i}\n"));
    }
    text.push_str(&format!("{base}{DOCS_PATH}/networking/target\n"));
    let search = CannedSearch(text);

    let ctx = RunContext::new(test_config(&base), None).expect("context");
    let finder = ReplacementFinder::new(&ctx, &search).expect("finder");

    let broken = format!("{base}{DOCS_PATH}/networking/old");
    assert!(finder.find(&broken).await.is_none());
}
