//! Root application component and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::config::ClientConfig;
use crate::pages::feed::FeedPage;
use crate::state::panel_layout::PanelLayoutController;
use crate::state::summary_bridge::SummaryBridge;
use crate::util::ui_persistence::BrowserStorage;
use crate::util::viewport::{FALLBACK_VIEWPORT_WIDTH, viewport_width};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the build-time config, the summary bridge, and the dock layout
/// as shared contexts, then renders the feed.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let layout = RwSignal::new(PanelLayoutController::with_defaults(
        Arc::new(BrowserStorage),
        FALLBACK_VIEWPORT_WIDTH,
        config.close_threshold_px,
    ));
    let bridge = RwSignal::new(SummaryBridge::default());

    // Persisted layout is browser-only; apply it after hydration.
    Effect::new(move || layout.update(|l| l.restore(viewport_width())));

    provide_context(config);
    provide_context(layout);
    provide_context(bridge);

    view! {
        <Stylesheet id="leptos" href="/pkg/newsdesk.css"/>
        <Title text="Newsdesk"/>

        <FeedPage/>
    }
}
