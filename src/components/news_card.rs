//! Feed entry with a "summarize" affordance that hands off to the assistant.

use leptos::prelude::*;

use crate::net::types::Article;
use crate::state::summary_bridge::SummaryBridge;
use crate::util::clock::now_ms;

/// One article in the feed.
#[component]
pub fn NewsCard(article: Article) -> impl IntoView {
    let bridge = expect_context::<RwSignal<SummaryBridge>>();

    let Article { id, headline, source, time_ago, summary, url, image_url, tags, .. } = article;
    let bridge_title = headline.clone();
    let on_summarize = move |_| {
        let title = bridge_title.clone();
        bridge.update(|b| b.set(id, title, now_ms()));
    };

    view! {
        <article class="news-card">
            {image_url.map(|src| view! { <img class="news-card__image" src=src alt="" loading="lazy" /> })}
            <div class="news-card__body">
                <div class="news-card__meta">
                    <span class="news-card__source">{source}</span>
                    {(!time_ago.is_empty()).then(|| view! { <span class="news-card__time">{time_ago}</span> })}
                </div>
                <a class="news-card__headline" href=url target="_blank" rel="noopener noreferrer">
                    {headline}
                </a>
                <p class="news-card__summary">{summary}</p>
                <div class="news-card__footer">
                    <ul class="news-card__tags">
                        {tags.into_iter().map(|tag| view! { <li>{tag}</li> }).collect::<Vec<_>>()}
                    </ul>
                    <button class="btn news-card__summarize" type="button" title="AI Summary" on:click=on_summarize>
                        "AI Summary"
                    </button>
                </div>
            </div>
        </article>
    }
}
