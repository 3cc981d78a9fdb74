//! Search collaborator
//!
//! The replacement finder only needs "query in, free text out". The default
//! provider scrapes the DuckDuckGo HTML endpoint and renders every hit as a
//! title line, a URL line and a snippet line.

use crate::config::SearchConfig;
use crate::CheckerError;
use async_trait::async_trait;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Anything that can answer a free-text search query
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Returns the result text for the query; empty when nothing was found
    async fn search(&self, query: &str) -> Result<String, CheckerError>;
}

/// One hit from a search result page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// Search through the DuckDuckGo HTML endpoint
#[derive(Debug, Clone)]
pub struct DuckDuckGoSearch {
    client: Client,
    endpoint: String,
    max_results: usize,
}

impl DuckDuckGoSearch {
    pub fn new(client: Client, config: &SearchConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            max_results: config.max_results,
        }
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoSearch {
    async fn search(&self, query: &str) -> Result<String, CheckerError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query), ("kl", "us-en")])
            .send()
            .await
            .map_err(|source| CheckerError::Http {
                url: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CheckerError::Search(format!(
                "search endpoint returned HTTP {}",
                status.as_u16()
            )));
        }

        let body = response.text().await?;
        let hits = parse_result_page(&body, self.max_results);
        tracing::debug!("Search for '{}' returned {} hits", query, hits.len());

        Ok(render_hits(&hits))
    }
}

/// Extracts up to `max_results` organic hits from a DuckDuckGo HTML page
pub fn parse_result_page(html: &str, max_results: usize) -> Vec<SearchHit> {
    let document = Html::parse_document(html);

    let (Ok(result_selector), Ok(link_selector), Ok(snippet_selector)) = (
        Selector::parse("div.result:not(.result--ad)"),
        Selector::parse("a.result__a"),
        Selector::parse(".result__snippet"),
    ) else {
        return Vec::new();
    };

    document
        .select(&result_selector)
        .filter_map(|result| {
            let link = result.select(&link_selector).next()?;
            let url = resolve_result_link(link.value().attr("href")?)?;
            let snippet = result
                .select(&snippet_selector)
                .next()
                .map(collapsed_text)
                .unwrap_or_default();

            Some(SearchHit {
                title: collapsed_text(link),
                url,
                snippet,
            })
        })
        .take(max_results)
        .collect()
}

/// Element text with runs of whitespace collapsed to single spaces
fn collapsed_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Unwraps DuckDuckGo redirect links (`//duckduckgo.com/l/?uddg=<target>`)
fn resolve_result_link(href: &str) -> Option<String> {
    let absolute = if href.starts_with("//") {
        format!("https:{}", href)
    } else {
        href.to_string()
    };

    let parsed = Url::parse(&absolute).ok()?;
    if parsed.path() == "/l/" {
        if let Some((_, target)) = parsed.query_pairs().find(|(key, _)| key == "uddg") {
            return Some(target.into_owned());
        }
    }

    match parsed.scheme() {
        "http" | "https" => Some(absolute),
        _ => None,
    }
}

/// Renders hits as blank-line separated `title` / `url` / `snippet` blocks
pub fn render_hits(hits: &[SearchHit]) -> String {
    hits.iter()
        .map(|hit| format!("{}\n{}\n{}", hit.title, hit.url, hit.snippet))
        .collect::<Vec<_>>()
        .join("\n\n")
}
