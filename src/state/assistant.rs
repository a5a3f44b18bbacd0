//! Assistant panel request lifecycle.
//!
//! DESIGN
//! ======
//! `AssistantSession` is the panel's state machine. Every request is split
//! into a synchronous `begin_*` step (validate, append optimistic messages,
//! enter the awaiting phase, hand back what to send) and a `complete_*` step
//! (append the result or error text, return to idle). The component awaits the
//! client between the two, so the session itself never does I/O.
//!
//! Only one request is in flight at a time. `begin_*` refuses to start while
//! the phase is not `Idle`, and `complete_*` ignores results that do not match
//! the phase it is waiting in.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use crate::net::assistant::AssistantError;
use crate::net::types::{ArticleId, ChatReply, SummaryPayload};
use crate::state::conversation::{ChatTurn, ConversationStore, DEFAULT_HISTORY_WINDOW, MessageBody};
use crate::state::panel_layout::PanelLayoutController;
use crate::state::summary::ArticleSummary;
use crate::state::summary_bridge::{SummaryBridge, SummaryRequest};

/// Preset prompts offered under the message list.
pub const QUICK_ACTIONS: [&str; 4] =
    ["Summarize today's news", "What's the latest on AI?", "Explain GPT-5", "AI funding trends"];

const CHAT_TRANSPORT_APOLOGY: &str = "Sorry, something went wrong. Please try again.";
const SUMMARY_TRANSPORT_APOLOGY: &str = "Sorry, something went wrong while summarizing that article. Please try again.";

/// What the panel is currently waiting on.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestPhase {
    #[default]
    Idle,
    AwaitingSummary {
        article_id: ArticleId,
        title: String,
    },
    AwaitingChatReply,
}

/// Chat call to issue after `begin_chat`.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatCall {
    pub text: String,
    pub history: Vec<ChatTurn>,
}

/// Summary call to issue after `begin_summary`.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryCall {
    pub article_id: ArticleId,
    pub title: String,
}

/// Conversation, input draft, and request phase for one mounted panel.
#[derive(Clone, Debug, PartialEq)]
pub struct AssistantSession {
    store: ConversationStore,
    phase: RequestPhase,
    draft: String,
    history_window: usize,
}

impl AssistantSession {
    /// Fresh session seeded with the welcome message.
    pub fn new(now_ms: f64) -> Self {
        Self::with_history_window(now_ms, DEFAULT_HISTORY_WINDOW)
    }

    pub fn with_history_window(now_ms: f64, history_window: usize) -> Self {
        Self {
            store: ConversationStore::with_welcome(now_ms),
            phase: RequestPhase::Idle,
            draft: String::new(),
            history_window,
        }
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    pub fn phase(&self) -> &RequestPhase {
        &self.phase
    }

    /// `true` while any request is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase != RequestPhase::Idle
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Fill the input with a preset prompt. Does not submit.
    pub fn apply_quick_action(&mut self, action: &str) {
        self.draft = action.to_owned();
    }

    /// Whether the send affordance should be enabled.
    pub fn can_send(&self) -> bool {
        !self.is_loading() && !self.draft.trim().is_empty()
    }

    /// Submit the current draft.
    ///
    /// Returns `None` (and changes nothing) for a blank draft or while another
    /// request is in flight. Otherwise appends the user message, clears the
    /// draft, and returns the text plus the history window that now includes
    /// the new message.
    pub fn begin_chat(&mut self, now_ms: f64) -> Option<ChatCall> {
        if !self.can_send() {
            return None;
        }
        let text = self.draft.trim().to_owned();
        self.store.append(MessageBody::UserText(text.clone()), now_ms);
        self.draft.clear();
        self.phase = RequestPhase::AwaitingChatReply;
        let history = self.store.history_window(self.history_window);
        Some(ChatCall { text, history })
    }

    /// Record the outcome of the chat call started by `begin_chat`.
    pub fn complete_chat(&mut self, outcome: Result<ChatReply, AssistantError>, now_ms: f64) {
        if self.phase != RequestPhase::AwaitingChatReply {
            return;
        }
        let text = match outcome {
            Ok(reply) => reply.response,
            Err(AssistantError::Service(error)) => format!("Sorry, I encountered an error: {error}"),
            Err(err @ AssistantError::Transport(_)) => {
                leptos::logging::warn!("chat request failed: {err}");
                CHAT_TRANSPORT_APOLOGY.to_owned()
            }
        };
        self.store.append(MessageBody::AssistantText(text), now_ms);
        self.phase = RequestPhase::Idle;
    }

    /// Start handling a summary intent taken from the bridge.
    ///
    /// Returns `None` while another request is in flight; the intent is
    /// rejected.
    pub fn begin_summary(&mut self, request: SummaryRequest) -> Option<SummaryCall> {
        if self.is_loading() {
            return None;
        }
        self.phase = RequestPhase::AwaitingSummary { article_id: request.article_id, title: request.title.clone() };
        Some(SummaryCall { article_id: request.article_id, title: request.title })
    }

    /// Record the outcome of the summary call started by `begin_summary`.
    pub fn complete_summary(&mut self, outcome: Result<SummaryPayload, AssistantError>, now_ms: f64) {
        let RequestPhase::AwaitingSummary { article_id, title } = &self.phase else {
            return;
        };
        let body = match outcome {
            Ok(payload) => MessageBody::ArticleSummary(ArticleSummary::from_payload(*article_id, title, &payload)),
            Err(AssistantError::Service(error)) => {
                MessageBody::AssistantText(format!("Sorry, I couldn't generate a summary for \"{title}\": {error}"))
            }
            Err(err @ AssistantError::Transport(_)) => {
                leptos::logging::warn!("summary request for article {article_id} failed: {err}");
                MessageBody::AssistantText(SUMMARY_TRANSPORT_APOLOGY.to_owned())
            }
        };
        self.store.append(body, now_ms);
        self.phase = RequestPhase::Idle;
    }
}

/// Take the bridge's pending intent and open the panel.
///
/// The intent is consumed on receipt. While another request is in flight it
/// is dropped, so a repeated click never queues a second summary call.
pub fn deliver_summary_request(
    bridge: &mut SummaryBridge,
    layout: &mut PanelLayoutController,
    session: &mut AssistantSession,
) -> Option<SummaryCall> {
    let request = bridge.consume()?;
    layout.ensure_open();
    session.begin_summary(request)
}
