use std::cell::RefCell;
use std::sync::Arc;

use futures::executor::block_on;

use super::*;
use crate::net::assistant::AssistantClient;
use crate::state::conversation::{ChatRole, MessageKind, WELCOME_TEXT};
use crate::state::summary::{SummaryCategory, SummarySections};
use crate::util::ui_persistence::MemoryStorage;

/// Fake backend that records every call and replays canned outcomes.
struct RecordingClient {
    summary_outcome: Result<SummaryPayload, AssistantError>,
    chat_outcome: Result<ChatReply, AssistantError>,
    summary_calls: RefCell<Vec<ArticleId>>,
    chat_calls: RefCell<Vec<(String, Vec<ChatTurn>)>>,
}

impl RecordingClient {
    fn replying(response: &str) -> Self {
        Self {
            summary_outcome: Ok(SummaryPayload::default()),
            chat_outcome: Ok(ChatReply { response: response.to_owned(), timestamp: None }),
            summary_calls: RefCell::new(Vec::new()),
            chat_calls: RefCell::new(Vec::new()),
        }
    }

    fn summarizing(payload: SummaryPayload) -> Self {
        Self { summary_outcome: Ok(payload), ..Self::replying("") }
    }

    fn failing(err: AssistantError) -> Self {
        Self { summary_outcome: Err(err.clone()), chat_outcome: Err(err), ..Self::replying("") }
    }
}

impl AssistantClient for RecordingClient {
    async fn request_article_summary(&self, article_id: ArticleId) -> Result<SummaryPayload, AssistantError> {
        self.summary_calls.borrow_mut().push(article_id);
        self.summary_outcome.clone()
    }

    async fn send_chat_message(&self, text: &str, history: &[ChatTurn]) -> Result<ChatReply, AssistantError> {
        self.chat_calls.borrow_mut().push((text.to_owned(), history.to_vec()));
        self.chat_outcome.clone()
    }
}

/// Drive one submit the way the panel component does.
fn submit(session: &mut AssistantSession, client: &RecordingClient) {
    if let Some(call) = session.begin_chat(1.0) {
        let outcome = block_on(client.send_chat_message(&call.text, &call.history));
        session.complete_chat(outcome, 2.0);
    }
}

fn layout(open: bool) -> PanelLayoutController {
    let mut layout = PanelLayoutController::load(Arc::new(MemoryStorage::new()), 1600.0, 100.0);
    if !open {
        layout.close();
    }
    layout
}

fn last_text(session: &AssistantSession) -> Option<String> {
    session.store().last().and_then(|m| m.text()).map(str::to_owned)
}

// =============================================================
// Mount
// =============================================================

#[test]
fn new_session_is_idle_with_welcome() {
    let session = AssistantSession::new(0.0);
    assert_eq!(session.phase(), &RequestPhase::Idle);
    assert!(!session.is_loading());
    assert_eq!(session.store().len(), 1);
    assert_eq!(last_text(&session).as_deref(), Some(WELCOME_TEXT));
}

// =============================================================
// Chat flow
// =============================================================

#[test]
fn chat_round_trip_appends_user_then_assistant() {
    let client = RecordingClient::replying("Here's today's AI roundup...");
    let mut session = AssistantSession::new(0.0);
    session.set_draft("What's the latest on AI?");

    let call = session.begin_chat(1.0).unwrap();
    assert!(session.is_loading());
    assert_eq!(session.draft(), "");
    assert_eq!(session.store().len(), 2);
    assert_eq!(last_text(&session).as_deref(), Some("What's the latest on AI?"));
    assert_eq!(call.text, "What's the latest on AI?");
    assert_eq!(
        call.history,
        vec![
            ChatTurn { role: ChatRole::Assistant, content: WELCOME_TEXT.to_owned() },
            ChatTurn { role: ChatRole::User, content: "What's the latest on AI?".to_owned() },
        ]
    );

    let outcome = block_on(client.send_chat_message(&call.text, &call.history));
    session.complete_chat(outcome, 2.0);

    assert!(!session.is_loading());
    let last = session.store().last().unwrap();
    assert_eq!(last.kind(), MessageKind::AssistantText);
    assert_eq!(last.text(), Some("Here's today's AI roundup..."));
    assert_eq!(client.chat_calls.borrow()[0].0, "What's the latest on AI?");
}

#[test]
fn blank_submit_is_a_no_op() {
    let client = RecordingClient::replying("unused");
    let mut session = AssistantSession::new(0.0);
    for draft in ["", "   ", "\n\t"] {
        session.set_draft(draft);
        submit(&mut session, &client);
    }
    assert_eq!(session.store().len(), 1);
    assert!(client.chat_calls.borrow().is_empty());
    assert!(!session.is_loading());
}

#[test]
fn submit_trims_surrounding_whitespace() {
    let client = RecordingClient::replying("ok");
    let mut session = AssistantSession::new(0.0);
    session.set_draft("  hello  ");
    submit(&mut session, &client);
    assert_eq!(client.chat_calls.borrow()[0].0, "hello");
    assert_eq!(session.store().messages()[1].text(), Some("hello"));
}

#[test]
fn second_submit_while_loading_is_rejected() {
    let client = RecordingClient::replying("first reply");
    let mut session = AssistantSession::new(0.0);

    session.set_draft("first");
    let call = session.begin_chat(1.0).unwrap();
    session.set_draft("second");
    assert!(!session.can_send());
    assert!(session.begin_chat(1.5).is_none());
    assert_eq!(session.draft(), "second");

    let outcome = block_on(client.send_chat_message(&call.text, &call.history));
    session.complete_chat(outcome, 2.0);

    assert_eq!(client.chat_calls.borrow().len(), 1);
    assert_eq!(session.store().len(), 3);
}

#[test]
fn summary_pending_blocks_chat_submit() {
    let client = RecordingClient::replying("unused");
    let mut session = AssistantSession::new(0.0);
    session.begin_summary(SummaryRequest { article_id: 1, title: "t".to_owned(), created_at: 0.0 });

    session.set_draft("hello");
    submit(&mut session, &client);
    assert!(client.chat_calls.borrow().is_empty());
    assert_eq!(session.store().len(), 1);
}

#[test]
fn chat_service_failure_shows_error_verbatim() {
    let client = RecordingClient::failing(AssistantError::Service("HTTP error! status: 500".to_owned()));
    let mut session = AssistantSession::new(0.0);
    session.set_draft("hi");
    submit(&mut session, &client);

    assert_eq!(last_text(&session).as_deref(), Some("Sorry, I encountered an error: HTTP error! status: 500"));
    assert!(!session.is_loading());
}

#[test]
fn chat_transport_failure_shows_generic_apology() {
    let client = RecordingClient::failing(AssistantError::Transport("connection refused".to_owned()));
    let mut session = AssistantSession::new(0.0);
    session.set_draft("hi");
    submit(&mut session, &client);

    let text = last_text(&session).unwrap();
    assert_eq!(text, CHAT_TRANSPORT_APOLOGY);
    assert!(!text.contains("connection refused"));
    assert!(!session.is_loading());
}

#[test]
fn stale_chat_completion_is_ignored() {
    let mut session = AssistantSession::new(0.0);
    session.complete_chat(Ok(ChatReply { response: "late".to_owned(), timestamp: None }), 1.0);
    assert_eq!(session.store().len(), 1);
}

#[test]
fn quick_action_fills_draft_without_sending() {
    let mut session = AssistantSession::new(0.0);
    session.apply_quick_action(QUICK_ACTIONS[1]);
    assert_eq!(session.draft(), "What's the latest on AI?");
    assert_eq!(session.store().len(), 1);
    assert!(!session.is_loading());
    assert!(session.can_send());
}

#[test]
fn history_sent_is_bounded_by_window() {
    let client = RecordingClient::replying("ok");
    let mut session = AssistantSession::with_history_window(0.0, 6);
    for i in 0..5 {
        session.set_draft(format!("q{i}"));
        submit(&mut session, &client);
    }
    let calls = client.chat_calls.borrow();
    let (_, last_history) = calls.last().unwrap();
    assert_eq!(last_history.len(), 6);
    assert_eq!(last_history.last().unwrap().content, "q4");
    assert_eq!(last_history.last().unwrap().role, ChatRole::User);
}

// =============================================================
// Summary flow
// =============================================================

#[test]
fn bridge_request_opens_closed_panel_and_appends_summary() {
    let client = RecordingClient::summarizing(SummaryPayload {
        title: Some("Big AI News".to_owned()),
        categories: Some(vec![SummaryCategory { name: "Funding".to_owned(), points: vec!["$2B".to_owned()] }]),
        keypoints: Some(vec!["ignored".to_owned()]),
        ..Default::default()
    });
    let mut bridge = SummaryBridge::default();
    let mut layout = layout(false);
    let mut session = AssistantSession::new(0.0);

    bridge.set(42, "Big AI News", 0.0);
    let call = deliver_summary_request(&mut bridge, &mut layout, &mut session).unwrap();

    assert!(layout.is_open());
    assert!(!bridge.has_pending());
    assert_eq!(session.phase(), &RequestPhase::AwaitingSummary { article_id: 42, title: "Big AI News".to_owned() });

    let outcome = block_on(client.request_article_summary(call.article_id));
    session.complete_summary(outcome, 1.0);

    assert_eq!(*client.summary_calls.borrow(), vec![42]);
    assert!(!session.is_loading());
    let last = session.store().last().unwrap();
    let MessageBody::ArticleSummary(summary) = last.body() else {
        panic!("expected summary message, got {last:?}");
    };
    assert_eq!(summary.article_id, 42);
    assert!(matches!(summary.sections, SummarySections::Categories(_)));
}

#[test]
fn bridge_request_is_consumed_at_most_once() {
    let mut bridge = SummaryBridge::default();
    let mut layout = layout(true);
    let mut session = AssistantSession::new(0.0);
    bridge.set(7, "Once", 0.0);

    let first = deliver_summary_request(&mut bridge, &mut layout, &mut session);
    assert!(first.is_some());
    session.complete_summary(Ok(SummaryPayload::default()), 1.0);

    // Re-running the observer (e.g. on re-render) must not start another call.
    for _ in 0..3 {
        assert!(deliver_summary_request(&mut bridge, &mut layout, &mut session).is_none());
    }
    assert_eq!(session.store().len(), 2);
}

#[test]
fn bridge_request_while_busy_is_consumed_and_dropped() {
    let client = RecordingClient::summarizing(SummaryPayload::default());
    let mut bridge = SummaryBridge::default();
    let mut layout = layout(true);
    let mut session = AssistantSession::new(0.0);

    bridge.set(1, "First", 0.0);
    let first = deliver_summary_request(&mut bridge, &mut layout, &mut session).unwrap();
    layout.close();

    bridge.set(2, "Second", 1.0);
    assert!(deliver_summary_request(&mut bridge, &mut layout, &mut session).is_none());
    assert!(!bridge.has_pending());
    assert!(layout.is_open());
    assert_eq!(session.phase(), &RequestPhase::AwaitingSummary { article_id: 1, title: "First".to_owned() });

    session.complete_summary(block_on(client.request_article_summary(first.article_id)), 2.0);
    assert!(deliver_summary_request(&mut bridge, &mut layout, &mut session).is_none());
    assert_eq!(*client.summary_calls.borrow(), vec![1]);
    assert_eq!(session.store().len(), 2);
}

#[test]
fn bridge_request_during_chat_is_dropped() {
    let mut bridge = SummaryBridge::default();
    let mut layout = layout(true);
    let mut session = AssistantSession::new(0.0);

    session.set_draft("hello");
    let _call = session.begin_chat(1.0).unwrap();
    bridge.set(9, "Later", 1.0);

    assert!(deliver_summary_request(&mut bridge, &mut layout, &mut session).is_none());
    assert!(!bridge.has_pending());
    assert_eq!(session.phase(), &RequestPhase::AwaitingChatReply);

    session.complete_chat(Ok(ChatReply { response: "hi".to_owned(), timestamp: None }), 2.0);
    assert!(deliver_summary_request(&mut bridge, &mut layout, &mut session).is_none());
}

#[test]
fn summary_fallback_shape_is_kept() {
    let mut session = AssistantSession::new(0.0);
    session.begin_summary(SummaryRequest { article_id: 3, title: "Plain".to_owned(), created_at: 0.0 });
    session.complete_summary(Ok(SummaryPayload::default()), 1.0);

    let MessageBody::ArticleSummary(summary) = session.store().last().unwrap().body() else {
        panic!("expected summary message");
    };
    assert_eq!(summary.sections, SummarySections::Fallback);
    assert_eq!(summary.title, "Plain");
}

#[test]
fn summary_service_failure_embeds_error() {
    let client = RecordingClient::failing(AssistantError::Service("Article not found".to_owned()));
    let mut session = AssistantSession::new(0.0);
    let call = session
        .begin_summary(SummaryRequest { article_id: 5, title: "Gone".to_owned(), created_at: 0.0 })
        .unwrap();
    session.complete_summary(block_on(client.request_article_summary(call.article_id)), 1.0);

    assert_eq!(
        last_text(&session).as_deref(),
        Some("Sorry, I couldn't generate a summary for \"Gone\": Article not found")
    );
    assert!(!session.is_loading());
}

#[test]
fn summary_transport_failure_is_worded_differently_from_chat() {
    let mut session = AssistantSession::new(0.0);
    session.begin_summary(SummaryRequest { article_id: 5, title: "t".to_owned(), created_at: 0.0 });
    session.complete_summary(Err(AssistantError::Transport("offline".to_owned())), 1.0);

    let text = last_text(&session).unwrap();
    assert_eq!(text, SUMMARY_TRANSPORT_APOLOGY);
    assert_ne!(text, CHAT_TRANSPORT_APOLOGY);
    assert!(!session.is_loading());
}

#[test]
fn second_summary_while_loading_is_rejected() {
    let mut session = AssistantSession::new(0.0);
    let request = SummaryRequest { article_id: 1, title: "a".to_owned(), created_at: 0.0 };
    assert!(session.begin_summary(request.clone()).is_some());
    assert!(session.begin_summary(request).is_none());
}
