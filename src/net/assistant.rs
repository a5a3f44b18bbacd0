//! Assistant backend contract and its HTTP implementation.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and host tests: calls fail with a transport error since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Application-level failures (`success: false` bodies, non-OK statuses) map
//! to `AssistantError::Service` and carry text meant for the user. Failures to
//! reach the backend or decode its reply map to `AssistantError::Transport`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use super::types::{ArticleId, ChatReply, SummaryPayload};
use crate::state::conversation::ChatTurn;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssistantError {
    /// The backend answered but reported a failure.
    #[error("{0}")]
    Service(String),
    /// The request never produced a usable response.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Async operations the assistant panel needs from the backend.
#[allow(async_fn_in_trait)]
pub trait AssistantClient {
    /// Generate a structured summary for one article.
    async fn request_article_summary(&self, article_id: ArticleId) -> Result<SummaryPayload, AssistantError>;

    /// Answer a chat message given the bounded history window.
    async fn send_chat_message(&self, text: &str, history: &[ChatTurn]) -> Result<ChatReply, AssistantError>;
}

#[cfg(any(test, feature = "hydrate"))]
fn summary_endpoint(api_base: &str, article_id: ArticleId) -> String {
    format!("{api_base}/chat/summary/{article_id}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn chat_endpoint(api_base: &str) -> String {
    format!("{api_base}/chat/message/")
}

#[cfg(any(test, feature = "hydrate"))]
fn http_status_message(status: u16) -> String {
    format!("HTTP error! status: {status}")
}

/// Classify a decoded JSON body: failure envelopes become service errors,
/// anything else is parsed as `T`.
#[cfg(any(test, feature = "hydrate"))]
fn decode_body<T: serde::de::DeserializeOwned>(body: serde_json::Value) -> Result<T, AssistantError> {
    if let Some(error) = super::types::ServiceFailure::from_body(&body) {
        return Err(AssistantError::Service(error));
    }
    serde_json::from_value(body).map_err(|e| AssistantError::Transport(e.to_string()))
}

/// `AssistantClient` over the REST endpoints under `api_base`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAssistantClient {
    api_base: String,
}

impl HttpAssistantClient {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self { api_base: api_base.into() }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    #[cfg(feature = "hydrate")]
    async fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        payload: Option<&serde_json::Value>,
    ) -> Result<T, AssistantError> {
        let builder = gloo_net::http::Request::post(url);
        let request = match payload {
            Some(payload) => builder.json(payload).map_err(|e| AssistantError::Transport(e.to_string()))?,
            None => builder.build().map_err(|e| AssistantError::Transport(e.to_string()))?,
        };
        let resp = request
            .send()
            .await
            .map_err(|e| AssistantError::Transport(e.to_string()))?;
        if !resp.ok() {
            log::warn!("POST {url} returned {}", resp.status());
            return Err(AssistantError::Service(http_status_message(resp.status())));
        }
        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| AssistantError::Transport(e.to_string()))?;
        decode_body(body)
    }
}

impl AssistantClient for HttpAssistantClient {
    async fn request_article_summary(&self, article_id: ArticleId) -> Result<SummaryPayload, AssistantError> {
        #[cfg(feature = "hydrate")]
        {
            self.post_json(&summary_endpoint(&self.api_base, article_id), None).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = article_id;
            Err(AssistantError::Transport("not available on server".to_owned()))
        }
    }

    async fn send_chat_message(&self, text: &str, history: &[ChatTurn]) -> Result<ChatReply, AssistantError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::to_value(super::types::ChatRequest { message: text, history })
                .map_err(|e| AssistantError::Transport(e.to_string()))?;
            self.post_json(&chat_endpoint(&self.api_base), Some(&payload)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (text, history);
            Err(AssistantError::Transport("not available on server".to_owned()))
        }
    }
}
