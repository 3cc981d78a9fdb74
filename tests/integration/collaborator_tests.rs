//! Search, chat completion and issue tracker clients against mock servers

use doclink_audit::analysis::{ChatCompletionsClient, TextGenerator};
use doclink_audit::config::{GithubConfig, LlmConfig, SearchConfig};
use doclink_audit::github::{GitHubIssues, IssueTracker, ISSUE_LABELS};
use doclink_audit::replacement::{DuckDuckGoSearch, SearchProvider};
use doclink_audit::CheckerError;
use reqwest::Client;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RESULT_PAGE: &str = r#"
<html><body>
<div class="result">
  <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fdocs.redhat.com%2Fen%2Fdocumentation%2Fopenshift_container_platform%2F4.16%2Fhtml%2Fobservability%2Findex">Observability | OpenShift Container Platform</a>
  <a class="result__snippet">Monitoring and logging for clusters.</a>
</div>
</body></html>
"#;

#[tokio::test]
async fn test_duckduckgo_search_renders_hits() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/html/"))
        .and(query_param("q", "openshift monitoring"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RESULT_PAGE))
        .mount(&mock_server)
        .await;

    let config = SearchConfig {
        enabled: true,
        endpoint: format!("{}/html/", mock_server.uri()),
        max_results: 5,
    };
    let search = DuckDuckGoSearch::new(Client::new(), &config);

    let text = search.search("openshift monitoring").await.expect("search text");
    assert_eq!(
        text,
        "Observability | OpenShift Container Platform\n\
         https://docs.redhat.com/en/documentation/openshift_container_platform/4.16/html/observability/index\n\
         Monitoring and logging for clusters."
    );
}

#[tokio::test]
async fn test_duckduckgo_search_error_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let config = SearchConfig {
        enabled: true,
        endpoint: format!("{}/html/", mock_server.uri()),
        max_results: 5,
    };
    let search = DuckDuckGoSearch::new(Client::new(), &config);

    let result = search.search("anything").await;
    assert!(matches!(result, Err(CheckerError::Search(_))));
}

fn llm_config(mock_server: &MockServer) -> LlmConfig {
    LlmConfig {
        api_base: format!("{}/v1", mock_server.uri()),
        model: "test-model".to_string(),
        ..LlmConfig::default()
    }
}

#[tokio::test]
async fn test_chat_completion_returns_content() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_string_contains("\"model\":\"test-model\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Links moved to 4.16."}}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ChatCompletionsClient::new(Client::new(), &llm_config(&mock_server), "test-key");
    let text = client
        .generate("system preamble", "analyze this")
        .await
        .expect("completion");

    assert_eq!(text, "Links moved to 4.16.");
}

#[tokio::test]
async fn test_chat_completion_error_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("overloaded"))
        .mount(&mock_server)
        .await;

    let client = ChatCompletionsClient::new(Client::new(), &llm_config(&mock_server), "test-key");
    let result = client.generate("system", "prompt").await;

    match result {
        Err(CheckerError::TextGeneration(message)) => assert!(message.contains("overloaded")),
        other => panic!("expected text generation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_github_issue_created() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/repos/acme/workshop/issues"))
        .and(header("authorization", "token secret"))
        .and(body_string_contains("link-checker"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "number": 7,
            "html_url": "https://github.com/acme/workshop/issues/7"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tracker =
        GitHubIssues::new(Client::new(), &mock_server.uri(), "acme/workshop", "secret").expect("tracker");
    let url = tracker
        .create_issue("Broken links", "body", &ISSUE_LABELS)
        .await
        .expect("issue url");

    assert_eq!(url, "https://github.com/acme/workshop/issues/7");
}

#[tokio::test]
async fn test_github_issue_rejected() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422).set_body_string("Validation Failed"))
        .mount(&mock_server)
        .await;

    let config = GithubConfig {
        api_base: mock_server.uri(),
        ..GithubConfig::default()
    };
    let tracker =
        GitHubIssues::new(Client::new(), &config.api_base, "acme/workshop", "secret").expect("tracker");
    let result = tracker.create_issue("t", "b", &ISSUE_LABELS).await;

    assert!(matches!(
        result,
        Err(CheckerError::IssueTracker { status: 422, .. })
    ));
}
