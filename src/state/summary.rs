//! Structured article summaries and their section shapes.
//!
//! DESIGN
//! ======
//! The backend returns one loosely-typed payload whose populated fields decide
//! how it renders. `SummarySections::from_payload` is the only place that
//! sniffs fields, and it applies a fixed precedence:
//! categories, then key points, then the what/why/takeaway triad, then the
//! fallback. Renderers match on the enum exhaustively.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{ArticleId, SummaryPayload};

/// Placeholder shown when the payload has no recognizable structure.
pub const NO_STRUCTURED_SUMMARY: &str = "No structured summary is available for this article.";

/// A named group of bullet points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCategory {
    pub name: String,
    #[serde(default)]
    pub points: Vec<String>,
}

/// The renderable shape of a summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SummarySections {
    Categories(Vec<SummaryCategory>),
    KeyPoints(Vec<String>),
    Triad { what: String, why_it_matters: String, takeaway: String },
    Fallback,
}

impl SummarySections {
    /// Pick the section shape for a payload using the fixed precedence order.
    pub fn from_payload(payload: &SummaryPayload) -> Self {
        if let Some(categories) = payload.categories.as_ref().filter(|c| !c.is_empty()) {
            return Self::Categories(categories.clone());
        }
        if let Some(points) = payload.keypoints.as_ref().filter(|p| !p.is_empty()) {
            return Self::KeyPoints(points.clone());
        }
        if let Some(what) = &payload.what {
            return Self::Triad {
                what: what.clone(),
                why_it_matters: payload.why_it_matters.clone().unwrap_or_default(),
                takeaway: payload.takeaway.clone().unwrap_or_default(),
            };
        }
        Self::Fallback
    }
}

/// Summary message payload as stored in the conversation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArticleSummary {
    pub article_id: ArticleId,
    pub title: String,
    pub source: Option<String>,
    pub url: Option<String>,
    pub sections: SummarySections,
}

impl ArticleSummary {
    /// Build from a backend payload.
    ///
    /// The requested article id is authoritative; `fallback_title` is the
    /// headline the user clicked, used when the payload omits one.
    pub fn from_payload(article_id: ArticleId, fallback_title: &str, payload: &SummaryPayload) -> Self {
        let title = payload
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(fallback_title)
            .to_owned();
        Self {
            article_id,
            title,
            source: payload.source.clone().filter(|s| !s.trim().is_empty()),
            url: payload.url.clone().filter(|u| !u.trim().is_empty()),
            sections: SummarySections::from_payload(payload),
        }
    }
}
