//! Networking modules for the news backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` fetches the article feed, `assistant` wraps the summary and chat
//! endpoints behind the `AssistantClient` trait, and `types` defines the
//! shared wire schema.

pub mod api;
pub mod assistant;
pub mod types;
