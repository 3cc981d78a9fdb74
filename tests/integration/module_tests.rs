//! Module aggregation over real files and a mock server

use crate::test_config;
use doclink_audit::checker::{check_module, Coordinator};
use doclink_audit::config::SkipRule;
use doclink_audit::{LinkStatus, RunContext};
use std::fs;
use std::time::{Duration, Instant};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_pages(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/good"))
        .respond_with(ResponseTemplate::new(200))
        .mount(mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_module_counts() {
    let mock_server = MockServer::start().await;
    mount_pages(&mock_server).await;
    let base = mock_server.uri();

    let dir = TempDir::new().expect("temp dir");
    let file = dir.path().join("module-03-cluster-monitoring.adoc");
    fs::write(
        &file,
        format!(
            "= Monitoring\n\nSee link:{base}/good[the guide] and {base}/gone\n\
             Console: link:{base}/private/console[console]\n"
        ),
    )
    .expect("write module");

    let mut config = test_config(&base);
    config.skip = vec![SkipRule {
        pattern: "/private/".to_string(),
        reason: Some("requires authentication".to_string()),
    }];
    let ctx = RunContext::new(config, None).expect("context");

    let module = check_module(&ctx, &file).await.expect("module result");

    assert_eq!(module.module_name, "Module 03: Cluster Monitoring");
    assert_eq!(module.total_links, 3);
    assert_eq!(module.passed_links, 1);
    assert_eq!(module.failed_links, 1);
    assert_eq!(module.skipped_links, 1);
    assert_eq!(module.errored_links(), 0);
    assert_eq!(
        module.total_links,
        module.passed_links + module.failed_links + module.skipped_links + module.errored_links()
    );

    let failed: Vec<_> = module.failures().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].url, format!("{}/gone", base));
    assert_eq!(failed[0].error_message.as_deref(), Some("HTTP 404"));
}

#[tokio::test]
async fn test_max_links_truncates_in_sorted_order() {
    let mock_server = MockServer::start().await;
    mount_pages(&mock_server).await;
    let base = mock_server.uri();

    let dir = TempDir::new().expect("temp dir");
    let file = dir.path().join("README.adoc");
    fs::write(&file, format!("{base}/good\n{base}/gone\n{base}/zzz\n")).expect("write readme");

    let ctx = RunContext::new(test_config(&base), Some(2)).expect("context");
    let module = check_module(&ctx, &file).await.expect("module result");

    assert_eq!(module.module_name, "README Documentation");
    assert_eq!(module.total_links, 2);
    let urls: Vec<_> = module.links.iter().map(|l| l.url.as_str()).collect();
    assert_eq!(urls, vec![format!("{base}/gone"), format!("{base}/good")]);
}

#[tokio::test]
async fn test_coordinator_skips_missing_files() {
    let mock_server = MockServer::start().await;
    mount_pages(&mock_server).await;
    let base = mock_server.uri();

    let dir = TempDir::new().expect("temp dir");
    let first = dir.path().join("module-01-intro.adoc");
    let second = dir.path().join("module-02-setup.adoc");
    fs::write(&first, format!("link:{base}/good[ok]")).expect("write first");
    fs::write(&second, format!("link:{base}/gone[broken]")).expect("write second");

    let ctx = RunContext::new(test_config(&base), None).expect("context");
    let coordinator = Coordinator::new(ctx);
    let modules = coordinator
        .run(&[first, dir.path().join("module-09-missing.adoc"), second])
        .await;

    assert_eq!(modules.len(), 2);
    assert_eq!(modules[0].module_name, "Module 01: Intro");
    assert_eq!(modules[0].links[0].status, LinkStatus::Pass);
    assert_eq!(modules[1].module_name, "Module 02: Setup");
    assert!(modules[1].has_failures());
}

#[tokio::test]
async fn test_delay_only_between_network_probes() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(3)
        .mount(&mock_server)
        .await;
    let base = mock_server.uri();

    let dir = TempDir::new().expect("temp dir");
    let file = dir.path().join("module-04-pacing.adoc");
    fs::write(
        &file,
        format!("{base}/a {base}/b/private {base}/c {base}/d\n"),
    )
    .expect("write module");

    let mut config = test_config(&base);
    config.settings.delay_between_checks = 0.3;
    config.skip = vec![SkipRule {
        pattern: "/private".to_string(),
        reason: None,
    }];
    let ctx = RunContext::new(config, None).expect("context");

    let start = Instant::now();
    let module = check_module(&ctx, &file).await.expect("module result");
    let elapsed = start.elapsed();

    assert_eq!(module.total_links, 4);
    assert_eq!(module.skipped_links, 1);
    assert_eq!(module.links[1].status, LinkStatus::Skip);

    // Three probes, two pauses; the skipped link adds none.
    assert!(elapsed >= Duration::from_millis(600), "elapsed {:?}", elapsed);
    assert!(elapsed < Duration::from_millis(900), "elapsed {:?}", elapsed);
}
