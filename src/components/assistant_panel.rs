//! Assistant panel: conversation view, quick actions, and prompt input.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the `AssistantSession` for its lifetime and is the only caller of the
//! `AssistantClient`. Summary intents arrive through the shared
//! `SummaryBridge` context; chat turns come from the input row.
//!
//! The dock keeps this component mounted while the panel is collapsed so the
//! bridge observer keeps running and a summary request can reopen the panel.
//!
//! ERROR HANDLING
//! ==============
//! Completions write back with `try_update`. If the panel was torn down while
//! a request was in flight the signal is disposed and the result is dropped.

#[cfg(test)]
#[path = "assistant_panel_test.rs"]
mod assistant_panel_test;

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::components::summary_card::SummaryCard;
use crate::config::ClientConfig;
use crate::net::assistant::{AssistantClient, HttpAssistantClient};
use crate::state::assistant::{AssistantSession, QUICK_ACTIONS, deliver_summary_request};
use crate::state::conversation::{Message, MessageBody};
use crate::state::panel_layout::PanelLayoutController;
use crate::state::summary_bridge::SummaryBridge;
use crate::util::clock::{format_clock, now_ms};

/// Conversation panel wired to the backend assistant endpoints.
#[component]
pub fn AssistantPanel() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let bridge = expect_context::<RwSignal<SummaryBridge>>();
    let layout = expect_context::<RwSignal<PanelLayoutController>>();

    let client = HttpAssistantClient::new(config.api_base.clone());
    let session = RwSignal::new(AssistantSession::with_history_window(now_ms(), config.history_window));
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // The store is append-only, so its length identifies the rendered list.
    // Draft edits touch neither memo.
    let message_count = Memo::new(move |_| session.with(|s| s.store().len()));
    let loading = Memo::new(move |_| session.with(AssistantSession::is_loading));
    let revision = Memo::new(move |_| session.with(scroll_revision));

    Effect::new(move || {
        revision.track();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let summary_client = client.clone();
    Effect::new(move || {
        if !bridge.with(SummaryBridge::has_pending) {
            return;
        }

        let call = bridge
            .try_update(|b| layout.try_update(|l| session.try_update(|s| deliver_summary_request(b, l, s))))
            .flatten()
            .flatten()
            .flatten();
        let Some(call) = call else {
            return;
        };

        let client = summary_client.clone();
        leptos::task::spawn_local(async move {
            let outcome = client.request_article_summary(call.article_id).await;
            let _ = session.try_update(|s| s.complete_summary(outcome, now_ms()));
        });
    });

    let do_send = move || {
        let Some(call) = session.try_update(|s| s.begin_chat(now_ms())).flatten() else {
            return;
        };
        let client = client.clone();
        leptos::task::spawn_local(async move {
            let outcome = client.send_chat_message(&call.text, &call.history).await;
            let _ = session.try_update(|s| s.complete_chat(outcome, now_ms()));
        });
    };

    let on_submit = {
        let do_send = do_send.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            do_send();
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || session.with(AssistantSession::can_send);

    view! {
        <div class="assistant-panel">
            <div class="assistant-panel__header">
                <span class="assistant-panel__title">"AI Assistant"</span>
                <span class="assistant-panel__subtitle">"Summaries & answers"</span>
            </div>

            <div class="assistant-panel__messages" node_ref=messages_ref>
                {move || {
                    message_count.track();
                    session
                        .with_untracked(|s| s.store().messages().to_vec())
                        .into_iter()
                        .map(render_message)
                        .collect::<Vec<_>>()
                }}

                {move || {
                    loading
                        .get()
                        .then(|| {
                            view! {
                                <div class="assistant-panel__loading">
                                    <span class="assistant-panel__dot"></span>
                                    <span class="assistant-panel__dot"></span>
                                    <span class="assistant-panel__dot"></span>
                                    "Thinking..."
                                </div>
                            }
                        })
                }}
            </div>

            <div class="assistant-panel__quick-actions">
                {QUICK_ACTIONS
                    .iter()
                    .map(|action| {
                        view! {
                            <button
                                class="assistant-panel__quick-action"
                                type="button"
                                disabled=move || loading.get()
                                on:click=move |_| session.update(|s| s.apply_quick_action(action))
                            >
                                {*action}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <form class="assistant-panel__input-row" on:submit=on_submit>
                <input
                    class="assistant-panel__input"
                    type="text"
                    placeholder="Ask about AI news..."
                    disabled=move || loading.get()
                    prop:value=move || session.with(|s| s.draft().to_owned())
                    on:input=move |ev| session.update(|s| s.set_draft(event_target_value(&ev)))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary assistant-panel__send" type="submit" disabled=move || !can_send()>
                    "Send"
                </button>
            </form>
        </div>
    }
}

/// Changes exactly when a message is appended or a request starts or ends.
fn scroll_revision(session: &AssistantSession) -> (usize, bool) {
    (session.store().len(), session.is_loading())
}

fn render_message(message: Message) -> impl IntoView {
    let is_assistant = message.is_from_assistant();
    let time = format_clock(message.timestamp());
    let content = match message.body().clone() {
        MessageBody::UserText(text) => view! { <span>{text}</span> }.into_any(),
        MessageBody::AssistantText(text) => {
            let rendered = render_markdown_html(&text);
            view! { <div class="assistant-panel__markdown-body" inner_html=rendered></div> }.into_any()
        }
        MessageBody::ArticleSummary(summary) => view! { <SummaryCard summary=summary /> }.into_any(),
    };

    view! {
        <div
            class="assistant-panel__message"
            class:assistant-panel__message--assistant=is_assistant
            class:assistant-panel__message--user=!is_assistant
        >
            <div class="assistant-panel__content">{content}</div>
            <span class="assistant-panel__time">{time}</span>
        </div>
    }
}

fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // Drop raw HTML from model output before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
