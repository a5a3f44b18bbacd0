//! Wire DTOs for the article feed and assistant endpoints.
//!
//! DESIGN
//! ======
//! Backend payloads are deserialized leniently (missing fields default) and
//! converted into display-ready records at the edge so components never deal
//! with raw backend naming.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::conversation::ChatTurn;
use crate::state::summary::SummaryCategory;
use crate::util::clock;

/// Backend article primary key.
pub type ArticleId = i64;

/// Excerpts shorter than this prefer the short summary.
const DETAILED_EXCERPT_MIN_CHARS: usize = 100;

/// Display record for one feed entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Article {
    pub id: ArticleId,
    pub headline: String,
    pub source: String,
    /// Recency label such as `"2 hours ago"`; empty when the publish time is unknown.
    pub time_ago: String,
    pub summary: String,
    pub url: String,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub relevance_score: f64,
}

/// Cover image metadata attached to a backend article.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CoverMedia {
    pub url: Option<String>,
}

/// Article record as returned by `GET /api/articles/`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BackendArticle {
    pub id: ArticleId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub source_name: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub summary_short: Option<String>,
    #[serde(default)]
    pub summary_detailed: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub cover_media: Option<CoverMedia>,
    #[serde(default)]
    pub ai_tags: Vec<String>,
    #[serde(default)]
    pub relevance_score: Option<f64>,
}

/// Paginated article listing.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ArticlePage {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub results: Vec<BackendArticle>,
}

impl BackendArticle {
    /// Convert into a display record, labelling recency relative to `now_ms`.
    pub fn into_article(self, now_ms: f64) -> Article {
        let time_ago = self
            .published_at
            .as_deref()
            .and_then(clock::parse_timestamp_ms)
            .map(|published| clock::time_ago_label(now_ms - published))
            .unwrap_or_default();
        let summary = self.excerpt();
        Article {
            id: self.id,
            headline: self.title,
            source: self
                .source_name
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "Unknown Source".to_owned()),
            time_ago,
            summary,
            url: self.url,
            image_url: self.cover_media.and_then(|media| media.url),
            tags: self.ai_tags,
            relevance_score: self.relevance_score.unwrap_or(0.0),
        }
    }

    /// Detailed summary when it is substantial, else the short summary, else
    /// the title.
    fn excerpt(&self) -> String {
        if let Some(detailed) = self
            .summary_detailed
            .as_deref()
            .filter(|d| d.chars().count() > DETAILED_EXCERPT_MIN_CHARS)
        {
            return detailed.to_owned();
        }
        if let Some(short) = self.summary_short.as_deref().filter(|s| !s.is_empty()) {
            return short.to_owned();
        }
        self.title.clone()
    }
}

/// Body of `POST /api/chat/summary/{id}/` responses.
///
/// Which section fields are populated decides the rendered shape; see
/// [`crate::state::summary::SummarySections::from_payload`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SummaryPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub categories: Option<Vec<SummaryCategory>>,
    #[serde(default)]
    pub keypoints: Option<Vec<String>>,
    #[serde(default)]
    pub what: Option<String>,
    #[serde(default)]
    pub why_it_matters: Option<String>,
    #[serde(default)]
    pub takeaway: Option<String>,
}

/// Body of `POST /api/chat/message/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub history: &'a [ChatTurn],
}

/// Successful chat reply.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Application-level failure envelope: `{ "success": false, "error": "..." }`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ServiceFailure {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl ServiceFailure {
    /// Extract the error text when `body` is a failure envelope.
    pub fn from_body(body: &serde_json::Value) -> Option<String> {
        let envelope: Self = serde_json::from_value(body.clone()).ok()?;
        if envelope.success {
            return None;
        }
        Some(envelope.error.unwrap_or_else(|| "request failed".to_owned()))
    }
}
