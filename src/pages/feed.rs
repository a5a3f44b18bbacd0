//! News feed page: top articles with the assistant docked alongside.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the highest-relevance articles once on mount. Each card can raise
//! a summary request on the shared bridge; the dock's assistant panel picks
//! it up.

use leptos::prelude::*;

use crate::components::assistant_dock::AssistantDock;
use crate::components::news_card::NewsCard;
use crate::net::types::Article;

/// Load state of the article list.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FeedStatus {
    #[default]
    Loading,
    Ready(Vec<Article>),
    Failed(String),
}

/// Landing page listing curated articles.
#[component]
pub fn FeedPage() -> impl IntoView {
    let feed = RwSignal::new(FeedStatus::Loading);

    #[cfg(feature = "hydrate")]
    {
        let config = expect_context::<crate::config::ClientConfig>();
        leptos::task::spawn_local(async move {
            let status =
                match crate::net::api::fetch_top_articles(&config.api_base, crate::net::api::DEFAULT_FEED_LIMIT).await {
                    Ok(articles) => FeedStatus::Ready(articles),
                    Err(e) => {
                        leptos::logging::warn!("article feed failed: {e}");
                        FeedStatus::Failed(e)
                    }
                };
            let _ = feed.try_set(status);
        });
    }

    view! {
        <AssistantDock>
            <section class="feed">
                <h1 class="feed__title">"Today in AI"</h1>
                {move || match feed.get() {
                    FeedStatus::Loading => view! { <div class="feed__notice">"Loading articles..."</div> }.into_any(),
                    FeedStatus::Failed(_) => view! {
                        <div class="feed__notice feed__notice--error">"Unable to load articles right now."</div>
                    }
                    .into_any(),
                    FeedStatus::Ready(articles) if articles.is_empty() => {
                        view! { <div class="feed__notice">"No articles yet"</div> }.into_any()
                    }
                    FeedStatus::Ready(articles) => view! {
                        <div class="feed__grid">
                            {articles
                                .into_iter()
                                .map(|article| view! { <NewsCard article=article /> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any(),
                }}
            </section>
        </AssistantDock>
    }
}
