//! Resizable, collapsible dock hosting the assistant panel beside the feed.
//!
//! ARCHITECTURE
//! ============
//! The dock renders the page content and the panel side by side in one flex
//! container. Width and open state live in the shared
//! `PanelLayoutController` context so other components (the bridge observer
//! in particular) can open the panel.
//!
//! The panel is hidden with CSS rather than unmounted when collapsed, so its
//! conversation and bridge observer survive a toggle.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

use crate::components::assistant_panel::AssistantPanel;
use crate::state::panel_layout::PanelLayoutController;

/// Page layout with the assistant docked on the right edge.
#[component]
pub fn AssistantDock(children: Children) -> impl IntoView {
    let layout = expect_context::<RwSignal<PanelLayoutController>>();
    let container_ref = NodeRef::<leptos::html::Div>::new();

    let is_open = move || layout.with(PanelLayoutController::is_open);
    let is_dragging = move || layout.with(PanelLayoutController::is_dragging);
    let panel_style = move || {
        let state = layout.with(PanelLayoutController::state);
        if state.is_open {
            format!("width: {:.0}px;", state.width_px)
        } else {
            "display: none;".to_owned()
        }
    };

    let toggle = move |_| layout.update(PanelLayoutController::toggle);

    let on_resize_pointer_down = move |ev: leptos::ev::PointerEvent| {
        if !layout.try_update(PanelLayoutController::begin_drag).unwrap_or(false) {
            return;
        }
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            if let Some(target) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            {
                let _ = target.set_pointer_capture(ev.pointer_id());
            }
        }
    };

    let on_resize_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if !layout.with_untracked(PanelLayoutController::is_dragging) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            if let Some(container) = container_ref.get_untracked() {
                let sample = crate::util::viewport::drag_sample(&ev, &container);
                layout.update(|l| {
                    l.drag_to(sample);
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_resize_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        if layout.with_untracked(PanelLayoutController::is_dragging) {
            layout.update(PanelLayoutController::end_drag);
        }
    };

    view! {
        <div
            class="assistant-dock"
            class:assistant-dock--dragging=is_dragging
            node_ref=container_ref
            on:pointermove=on_resize_pointer_move
            on:pointerup=on_resize_pointer_up
            on:pointercancel=on_resize_pointer_up
        >
            <main class="assistant-dock__content">{children()}</main>

            <aside class="assistant-dock__panel" class:assistant-dock__panel--open=is_open style=panel_style>
                <div class="assistant-dock__resize-handle" on:pointerdown=on_resize_pointer_down></div>
                <AssistantPanel />
            </aside>

            <button
                class="assistant-dock__toggle"
                class:assistant-dock__toggle--open=is_open
                type="button"
                title=move || if is_open() { "Hide assistant" } else { "Show assistant" }
                on:click=toggle
            >
                {move || if is_open() { "Close" } else { "AI Assistant" }}
            </button>
        </div>
    }
}
