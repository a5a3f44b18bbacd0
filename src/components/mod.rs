//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the feed and the assistant surfaces while reading and
//! writing shared state from Leptos context providers.

pub mod assistant_dock;
pub mod assistant_panel;
pub mod news_card;
pub mod summary_card;
