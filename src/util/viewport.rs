//! Viewport and element geometry for the resizable dock.
//!
//! Browser builds measure the live window and elements; host builds assume a
//! fixed desktop viewport so layout defaults stay deterministic.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Viewport width assumed when there is no window to measure.
pub const FALLBACK_VIEWPORT_WIDTH: f64 = 1280.0;

/// Current window inner width in CSS pixels.
pub fn viewport_width() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(FALLBACK_VIEWPORT_WIDTH)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK_VIEWPORT_WIDTH
    }
}

/// Resize sample for a pointer event over the dock container.
#[cfg(feature = "hydrate")]
pub fn drag_sample(
    ev: &leptos::ev::PointerEvent,
    container: &web_sys::HtmlDivElement,
) -> crate::state::panel_layout::DragSample {
    let rect = container.get_bounding_client_rect();
    crate::state::panel_layout::DragSample {
        pointer_x: f64::from(ev.client_x()),
        container_right: rect.right(),
        container_width: rect.width(),
        viewport_width: viewport_width(),
    }
}
