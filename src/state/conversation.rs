//! Assistant conversation log and chat-context window.
//!
//! DESIGN
//! ======
//! The log is append-only: messages are never edited or removed once pushed,
//! and arrival order is the display order. Corrections are new messages.
//! Summary payloads stay out of the chat context window so structured data
//! never leaks into free-form prompts.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use serde::{Deserialize, Serialize};

use crate::state::summary::ArticleSummary;

/// Number of chat turns sent as context when not configured otherwise.
pub const DEFAULT_HISTORY_WINDOW: usize = 6;

/// Seed message shown when the panel mounts.
pub const WELCOME_TEXT: &str = "Hi! I'm your AI assistant. I can help you summarize news articles or answer \
                                questions about the latest AI developments. What would you like to know?";

/// Store-assigned message identifier. Strictly increasing in arrival order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(pub u64);

/// Discriminant of [`MessageBody`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    UserText,
    AssistantText,
    ArticleSummary,
}

/// Payload of a conversation entry.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageBody {
    UserText(String),
    AssistantText(String),
    ArticleSummary(ArticleSummary),
}

impl MessageBody {
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::UserText(_) => MessageKind::UserText,
            Self::AssistantText(_) => MessageKind::AssistantText,
            Self::ArticleSummary(_) => MessageKind::ArticleSummary,
        }
    }
}

/// A single conversation entry. Fields are read-only after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    id: MessageId,
    timestamp: f64,
    body: MessageBody,
}

impl Message {
    pub fn id(&self) -> MessageId {
        self.id
    }

    /// Creation time in epoch milliseconds; display only.
    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    pub fn body(&self) -> &MessageBody {
        &self.body
    }

    pub fn kind(&self) -> MessageKind {
        self.body.kind()
    }

    pub fn is_from_assistant(&self) -> bool {
        !matches!(self.body, MessageBody::UserText(_))
    }

    /// Plain text for text variants; `None` for structured summaries.
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            MessageBody::UserText(text) | MessageBody::AssistantText(text) => Some(text),
            MessageBody::ArticleSummary(_) => None,
        }
    }
}

/// Speaker label used in the chat context sent to the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry of the history window, in wire shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

/// Ordered, append-only message log.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConversationStore {
    messages: Vec<Message>,
    next_id: u64,
}

impl ConversationStore {
    /// Store seeded with the welcome message.
    pub fn with_welcome(timestamp: f64) -> Self {
        let mut store = Self::default();
        store.append(MessageBody::AssistantText(WELCOME_TEXT.to_owned()), timestamp);
        store
    }

    /// Append a message and return its assigned id.
    pub fn append(&mut self, body: MessageBody, timestamp: f64) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.messages.push(Message { id, timestamp, body });
        id
    }

    /// All messages in arrival order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// The most recent `max_messages` text turns, oldest first.
    ///
    /// Article summaries are skipped entirely; they do not count toward the
    /// window size.
    pub fn history_window(&self, max_messages: usize) -> Vec<ChatTurn> {
        let mut turns: Vec<ChatTurn> = self
            .messages
            .iter()
            .rev()
            .filter_map(|msg| {
                let content = msg.text()?;
                let role = if msg.is_from_assistant() { ChatRole::Assistant } else { ChatRole::User };
                Some(ChatTurn { role, content: content.to_owned() })
            })
            .take(max_messages)
            .collect();
        turns.reverse();
        turns
    }
}
