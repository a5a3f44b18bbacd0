//! Client-side state for the feed and the assistant panel.
//!
//! DESIGN
//! ======
//! Everything here is plain data with synchronous transitions. Components
//! wrap these types in `RwSignal`s provided through Leptos context, and all
//! network I/O happens in the component layer between a `begin_*` and the
//! matching `complete_*` call.

pub mod assistant;
pub mod conversation;
pub mod panel_layout;
pub mod summary;
pub mod summary_bridge;
