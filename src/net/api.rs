//! REST helpers for the article feed.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): returns an error since the feed is only fetched in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as a message string so the feed page can show an
//! empty-state notice instead of crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Article, ArticlePage};

/// Number of articles shown on the feed page.
pub const DEFAULT_FEED_LIMIT: usize = 8;

#[cfg(any(test, feature = "hydrate"))]
fn top_articles_endpoint(api_base: &str, limit: usize) -> String {
    format!("{api_base}/articles/?ordering=-relevance_score&page_size={limit}")
}

#[cfg(any(test, feature = "hydrate"))]
fn articles_failed_message(status: u16) -> String {
    format!("HTTP error! status: {status}")
}

/// Convert one page of backend records into display records.
pub fn articles_from_page(page: ArticlePage, now_ms: f64) -> Vec<Article> {
    page.results
        .into_iter()
        .map(|record| record.into_article(now_ms))
        .collect()
}

/// Fetch the highest-relevance articles from `{api_base}/articles/`.
pub async fn fetch_top_articles(api_base: &str, limit: usize) -> Result<Vec<Article>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = top_articles_endpoint(api_base, limit);
        let resp = gloo_net::http::Request::get(&url)
            .header("Cache-Control", "no-cache")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(articles_failed_message(resp.status()));
        }
        let page = resp.json::<ArticlePage>().await.map_err(|e| e.to_string())?;
        log::debug!("fetched {} of {} articles", page.results.len(), page.count);
        Ok(articles_from_page(page, crate::util::clock::now_ms()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_base, limit);
        Err("not available on server".to_owned())
    }
}
