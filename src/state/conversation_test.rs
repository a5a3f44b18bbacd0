use super::*;
use crate::state::summary::SummarySections;

fn summary_body(article_id: i64) -> MessageBody {
    MessageBody::ArticleSummary(ArticleSummary {
        article_id,
        title: "Summary".to_owned(),
        source: None,
        url: None,
        sections: SummarySections::Fallback,
    })
}

fn user(text: &str) -> MessageBody {
    MessageBody::UserText(text.to_owned())
}

fn assistant(text: &str) -> MessageBody {
    MessageBody::AssistantText(text.to_owned())
}

// =============================================================
// Seeding and append order
// =============================================================

#[test]
fn with_welcome_seeds_single_assistant_message() {
    let store = ConversationStore::with_welcome(5.0);
    assert_eq!(store.len(), 1);
    let first = &store.messages()[0];
    assert_eq!(first.kind(), MessageKind::AssistantText);
    assert!(first.is_from_assistant());
    assert_eq!(first.text(), Some(WELCOME_TEXT));
    assert_eq!(first.timestamp(), 5.0);
}

#[test]
fn append_preserves_arrival_order_not_timestamp_order() {
    let mut store = ConversationStore::default();
    store.append(user("first"), 300.0);
    store.append(assistant("second"), 100.0);
    store.append(user("third"), 200.0);

    let texts: Vec<_> = store.messages().iter().filter_map(Message::text).collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
}

#[test]
fn append_assigns_strictly_increasing_ids() {
    let mut store = ConversationStore::default();
    let a = store.append(user("a"), 0.0);
    let b = store.append(user("a"), 0.0);
    let c = store.append(summary_body(1), 0.0);
    assert!(a < b && b < c);
    assert_eq!(store.len(), 3);
}

#[test]
fn append_never_changes_earlier_messages() {
    let mut store = ConversationStore::with_welcome(0.0);
    let snapshot = store.messages()[0].clone();
    for i in 0..20 {
        store.append(user(&format!("msg {i}")), f64::from(i));
        assert_eq!(store.messages()[0], snapshot);
    }
    assert_eq!(store.last().and_then(Message::text), Some("msg 19"));
}

#[test]
fn is_from_assistant_follows_kind() {
    let mut store = ConversationStore::default();
    store.append(user("u"), 0.0);
    store.append(assistant("a"), 0.0);
    store.append(summary_body(3), 0.0);
    let flags: Vec<_> = store.messages().iter().map(Message::is_from_assistant).collect();
    assert_eq!(flags, vec![false, true, true]);
    assert_eq!(store.messages()[2].text(), None);
}

// =============================================================
// history_window
// =============================================================

#[test]
fn history_window_maps_roles() {
    let mut store = ConversationStore::with_welcome(0.0);
    store.append(user("What's the latest on AI?"), 1.0);

    let history = store.history_window(DEFAULT_HISTORY_WINDOW);
    assert_eq!(
        history,
        vec![
            ChatTurn { role: ChatRole::Assistant, content: WELCOME_TEXT.to_owned() },
            ChatTurn { role: ChatRole::User, content: "What's the latest on AI?".to_owned() },
        ]
    );
}

#[test]
fn history_window_excludes_summaries() {
    let mut store = ConversationStore::default();
    store.append(user("summarize please"), 0.0);
    store.append(summary_body(42), 0.0);
    store.append(assistant("done"), 0.0);

    let history = store.history_window(6);
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|turn| turn.content != "Summary"));
}

#[test]
fn history_window_keeps_most_recent_in_order() {
    let mut store = ConversationStore::default();
    for i in 0..10 {
        store.append(user(&format!("u{i}")), 0.0);
        store.append(summary_body(i), 0.0);
    }

    let history = store.history_window(6);
    let contents: Vec<_> = history.iter().map(|turn| turn.content.as_str()).collect();
    assert_eq!(contents, vec!["u4", "u5", "u6", "u7", "u8", "u9"]);
}

#[test]
fn history_window_is_bounded_for_any_size() {
    let mut store = ConversationStore::with_welcome(0.0);
    for i in 0..4 {
        store.append(user(&format!("u{i}")), 0.0);
    }
    assert_eq!(store.history_window(0).len(), 0);
    assert_eq!(store.history_window(3).len(), 3);
    assert_eq!(store.history_window(100).len(), 5);
}
