//! Assistant side-panel width and open/closed state.
//!
//! DESIGN
//! ======
//! The controller owns the persisted `PanelLayoutState` and writes it through
//! to the key-value store on every change. Dragging the resize handle far
//! enough toward the right edge closes the panel instead of clamping, and the
//! remembered width resets so the next open is not a sliver.

#[cfg(test)]
#[path = "panel_layout_test.rs"]
mod panel_layout_test;

use std::sync::Arc;

use crate::util::ui_persistence::{KeyValueStore, load_json, save_json};

/// Tracked drag width at or below which the panel snaps closed.
pub const DEFAULT_CLOSE_THRESHOLD_PX: f64 = 100.0;
/// Floor for the computed default width.
pub const MIN_DEFAULT_WIDTH_PX: f64 = 300.0;
/// Default width as a share of the viewport.
pub const DEFAULT_WIDTH_FRACTION: f64 = 0.40;
/// Maximum width as a share of the container.
pub const MAX_WIDTH_FRACTION: f64 = 0.6;

pub const WIDTH_STORAGE_KEY: &str = "newsdesk_assistant_width";
pub const OPEN_STORAGE_KEY: &str = "newsdesk_assistant_open";

/// Width used when nothing is persisted, or after close-via-shrink.
pub fn default_width(viewport_width: f64) -> f64 {
    (viewport_width * DEFAULT_WIDTH_FRACTION).floor().max(MIN_DEFAULT_WIDTH_PX)
}

/// Persisted layout values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelLayoutState {
    /// Panel width in CSS pixels; retained while closed.
    pub width_px: f64,
    pub is_open: bool,
}

/// Result of a pointer move during a resize drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragOutcome {
    /// Width now tracks the pointer.
    Resized(f64),
    /// Dragged past the close threshold; panel closed and drag ended.
    Closed,
    /// No drag in progress.
    Ignored,
}

/// Pointer geometry sampled on each drag move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSample {
    pub pointer_x: f64,
    /// Right edge of the layout container in client coordinates.
    pub container_right: f64,
    pub container_width: f64,
    pub viewport_width: f64,
}

#[derive(Clone)]
pub struct PanelLayoutController {
    state: PanelLayoutState,
    dragging: bool,
    close_threshold_px: f64,
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for PanelLayoutController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelLayoutController")
            .field("state", &self.state)
            .field("dragging", &self.dragging)
            .field("close_threshold_px", &self.close_threshold_px)
            .finish_non_exhaustive()
    }
}

impl PanelLayoutController {
    /// Open panel at the default width, without reading `store`.
    ///
    /// The server render and the first client render both start here so
    /// hydration sees identical markup; `restore` applies persisted values
    /// once mounted.
    pub fn with_defaults(store: Arc<dyn KeyValueStore>, viewport_width: f64, close_threshold_px: f64) -> Self {
        Self {
            state: PanelLayoutState { width_px: default_width(viewport_width), is_open: true },
            dragging: false,
            close_threshold_px,
            store,
        }
    }

    /// Defaults followed by `restore`.
    pub fn load(store: Arc<dyn KeyValueStore>, viewport_width: f64, close_threshold_px: f64) -> Self {
        let mut layout = Self::with_defaults(store, viewport_width, close_threshold_px);
        layout.restore(viewport_width);
        layout
    }

    /// Re-read persisted width and open state, falling back to an open panel
    /// at the default width for `viewport_width`.
    pub fn restore(&mut self, viewport_width: f64) {
        let width_px = load_json::<f64>(self.store.as_ref(), WIDTH_STORAGE_KEY)
            .filter(|w| w.is_finite() && *w > 0.0)
            .unwrap_or_else(|| default_width(viewport_width));
        let is_open = load_json::<bool>(self.store.as_ref(), OPEN_STORAGE_KEY).unwrap_or(true);
        self.state = PanelLayoutState { width_px, is_open };
        self.dragging = false;
    }

    pub fn state(&self) -> PanelLayoutState {
        self.state
    }

    pub fn width(&self) -> f64 {
        self.state.width_px
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn toggle(&mut self) {
        self.set_open(!self.state.is_open);
    }

    /// Open the panel if closed. Returns `true` when the state changed.
    pub fn ensure_open(&mut self) -> bool {
        if self.state.is_open {
            return false;
        }
        self.set_open(true);
        true
    }

    pub fn close(&mut self) {
        self.set_open(false);
    }

    /// Start a resize drag. Only an open panel has a handle to grab.
    pub fn begin_drag(&mut self) -> bool {
        self.dragging = self.state.is_open;
        self.dragging
    }

    /// Track the pointer while dragging.
    pub fn drag_to(&mut self, sample: DragSample) -> DragOutcome {
        if !self.dragging {
            return DragOutcome::Ignored;
        }

        let tracked = sample.container_right - sample.pointer_x;
        if tracked <= self.close_threshold_px {
            self.dragging = false;
            self.state = PanelLayoutState { width_px: default_width(sample.viewport_width), is_open: false };
            self.persist_width();
            self.persist_open();
            return DragOutcome::Closed;
        }

        let max_width = sample.container_width * MAX_WIDTH_FRACTION;
        let width = tracked.min(max_width).max(self.close_threshold_px);
        if (width - self.state.width_px).abs() > f64::EPSILON {
            self.state.width_px = width;
            self.persist_width();
        }
        DragOutcome::Resized(width)
    }

    /// Release ends the drag unconditionally.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    fn set_open(&mut self, is_open: bool) {
        if !is_open {
            self.dragging = false;
        }
        if self.state.is_open == is_open {
            return;
        }
        self.state.is_open = is_open;
        self.persist_open();
    }

    fn persist_width(&self) {
        save_json(self.store.as_ref(), WIDTH_STORAGE_KEY, &self.state.width_px);
    }

    fn persist_open(&self) {
        save_json(self.store.as_ref(), OPEN_STORAGE_KEY, &self.state.is_open);
    }
}
