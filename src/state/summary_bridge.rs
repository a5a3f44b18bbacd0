//! One-slot hand-off of "summarize this article" intents.
//!
//! DESIGN
//! ======
//! The feed raises an intent with `set`; the assistant panel takes it with
//! `consume`, which clears the slot in the same call. A newer intent replaces
//! an unconsumed one. The slot holds at most one request, matching the single
//! panel instance.

#[cfg(test)]
#[path = "summary_bridge_test.rs"]
mod summary_bridge_test;

use crate::net::types::ArticleId;

/// Pending summary intent raised by the article list.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryRequest {
    pub article_id: ArticleId,
    pub title: String,
    /// Epoch milliseconds when the intent was raised.
    pub created_at: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SummaryBridge {
    pending: Option<SummaryRequest>,
}

impl SummaryBridge {
    /// Raise an intent, replacing any unconsumed one.
    pub fn set(&mut self, article_id: ArticleId, title: impl Into<String>, created_at: f64) {
        self.pending = Some(SummaryRequest { article_id, title: title.into(), created_at });
    }

    /// Take the pending intent, leaving the slot empty.
    pub fn consume(&mut self) -> Option<SummaryRequest> {
        self.pending.take()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
