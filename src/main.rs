//! doclink-audit main entry point
//!
//! This is the command-line interface for the documentation link checker.

use anyhow::Context;
use clap::Parser;
use doclink_audit::analysis::{Analyzer, ChatCompletionsClient, TextGenerator};
use doclink_audit::checker::{discover_files, Coordinator, RunContext};
use doclink_audit::config::{load_config_with_hash, validate_repo_slug, Config};
use doclink_audit::github::{GitHubIssues, IssueTracker, ISSUE_LABELS};
use doclink_audit::output::{configured_sinks, print_summary, write_reports, RunReport, RunSummary};
use doclink_audit::replacement::{DuckDuckGoSearch, SearchProvider};
use doclink_audit::IntelligentAnalysis;
use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Links checked per file in test mode
const TEST_MODE_MAX_LINKS: usize = 3;

/// doclink-audit: documentation link checker
///
/// Checks every hyperlink in the given documentation files, writes a
/// markdown report, and for broken links searches for validated
/// replacements and an analysis of the failures.
#[derive(Parser, Debug)]
#[command(name = "doclink-audit")]
#[command(version = "1.0.0")]
#[command(about = "Documentation link checker with replacement discovery", long_about = None)]
struct Cli {
    /// Files to check (default: all module files plus the readme)
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Path to TOML configuration file
    #[arg(long, value_name = "PATH", default_value = "link-checker.toml")]
    config: PathBuf,

    /// Check only the first 3 links of each file
    #[arg(long)]
    test_mode: bool,

    /// Maximum number of links to check per file
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    max_links: Option<u32>,

    /// Skip replacement search and failure analysis
    #[arg(long)]
    no_analysis: bool,

    /// Open an issue when links are broken
    #[arg(long)]
    create_github_issue: bool,

    /// Repository for the issue, as owner/name
    #[arg(long, value_name = "OWNER/NAME")]
    github_repo: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    /// `--max-links` wins over `--test-mode`
    fn max_links(&self) -> Option<usize> {
        self.max_links
            .map(|n| n as usize)
            .or(self.test_mode.then_some(TEST_MODE_MAX_LINKS))
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();

    let loaded = load_config_with_hash(&cli.config);
    let log_file = match &loaded {
        Ok((config, _)) => config.output.log_file.clone(),
        Err(_) => None,
    };
    setup_logging(cli.verbose, cli.quiet, log_file.as_deref());

    let (config, config_hash) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return ExitCode::from(2);
        }
    };

    match config_hash.as_deref() {
        Some(hash) => tracing::info!(
            "Configuration loaded from {} (hash: {})",
            cli.config.display(),
            hash
        ),
        None => tracing::warn!(
            "Configuration file {} not found, using defaults",
            cli.config.display()
        ),
    }

    match run(&cli, config, config_hash).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Output goes to stderr and, when configured, is mirrored without colours
/// to the log file.
fn setup_logging(verbose: u8, quiet: bool, log_file: Option<&str>) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("doclink_audit=info,warn"),
            1 => EnvFilter::new("doclink_audit=debug,info"),
            2 => EnvFilter::new("doclink_audit=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let file_layer = log_file.and_then(|path| {
        match open_log_file(path) {
            Ok(file) => Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(false),
            ),
            Err(e) => {
                eprintln!("Cannot open log file {}: {}", path, e);
                None
            }
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false),
        )
        .with(file_layer)
        .init();
}

/// Opens the log file, replacing the previous run's log
fn open_log_file(path: &str) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}

/// Runs the whole check and returns the process exit code
async fn run(cli: &Cli, mut config: Config, config_hash: Option<String>) -> anyhow::Result<ExitCode> {
    if let Some(repo) = &cli.github_repo {
        validate_repo_slug(repo)?;
        config.github.repo = Some(repo.clone());
    }

    let files = if cli.files.is_empty() {
        discover_files(&config.input)
    } else {
        cli.files.clone()
    };

    let ctx = RunContext::new(config, cli.max_links()).context("Failed to initialise checker")?;
    let coordinator = Coordinator::new(ctx);
    let modules = coordinator.run(&files).await;
    let ctx = coordinator.context();

    if modules.is_empty() {
        tracing::error!("No files processed");
        return Ok(ExitCode::from(1));
    }

    let summary = RunSummary::from_modules(&modules);

    let analysis = if cli.no_analysis || !ctx.config().analysis.enabled {
        None
    } else {
        analyze(ctx, &modules).await
    };

    let report = RunReport::new(&modules, analysis.as_ref(), config_hash.as_deref());
    write_reports(&configured_sinks(&ctx.config().output), &report)
        .context("Failed to write report")?;

    if !cli.quiet {
        print_summary(&summary);
    }

    if cli.create_github_issue {
        match &analysis {
            Some(analysis) => open_issue(ctx, analysis).await,
            None => tracing::info!("No broken links, no issue created"),
        }
    }

    if summary.has_failures() {
        tracing::error!("Link validation completed with {} failures", summary.failed);
        Ok(ExitCode::from(1))
    } else {
        tracing::info!("All links are working correctly!");
        Ok(ExitCode::SUCCESS)
    }
}

/// Failure analysis with the collaborators enabled for this run
async fn analyze(
    ctx: &RunContext,
    modules: &[doclink_audit::ModuleResult],
) -> Option<IntelligentAnalysis> {
    let settings = &ctx.config().analysis;

    let search = settings
        .search
        .enabled
        .then(|| DuckDuckGoSearch::new(ctx.client().clone(), &settings.search));
    let generator = ChatCompletionsClient::from_env(ctx.client().clone(), &settings.llm);

    let analyzer = Analyzer::new(
        ctx,
        search.as_ref().map(|s| s as &dyn SearchProvider),
        generator.as_ref().map(|g| g as &dyn TextGenerator),
    );

    let analysis = analyzer.analyze(modules).await;
    if let Some(analysis) = &analysis {
        tracing::info!(
            "Analysis complete: {} broken links, {} validated replacements",
            analysis.broken_links.len(),
            analysis.validated_replacements.len()
        );
    }
    analysis
}

/// Opens the broken-links issue; failures are logged only
async fn open_issue(ctx: &RunContext, analysis: &IntelligentAnalysis) {
    let github = &ctx.config().github;

    let Some(repo) = github.repo.as_deref() else {
        tracing::warn!("No GitHub repository configured, cannot create issue");
        return;
    };

    let tracker = match GitHubIssues::from_env(ctx.client().clone(), github, repo) {
        Ok(tracker) => tracker,
        Err(e) => {
            tracing::warn!("Cannot create GitHub issue: {}", e);
            return;
        }
    };

    match tracker
        .create_issue(
            &analysis.github_issue_title,
            &analysis.github_issue_body,
            &ISSUE_LABELS,
        )
        .await
    {
        Ok(url) => tracing::info!("GitHub issue created: {}", url),
        Err(e) => tracing::error!("Failed to create GitHub issue: {}", e),
    }
}
