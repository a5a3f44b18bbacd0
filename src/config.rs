//! Build-time client configuration.
//!
//! A WASM bundle has no process environment at runtime, so overrides are
//! captured with `option_env!` when the crate is compiled and parsed here
//! into a typed config.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::state::conversation::DEFAULT_HISTORY_WINDOW;
use crate::state::panel_layout::DEFAULT_CLOSE_THRESHOLD_PX;

/// API base path used when no backend origin is configured.
pub const DEFAULT_API_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL for REST calls, without a trailing slash (e.g. `/api`).
    pub api_base: String,
    /// Number of chat turns sent as context with each message.
    pub history_window: usize,
    /// Tracked drag width at or below which the panel snaps closed.
    pub close_threshold_px: f64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            history_window: DEFAULT_HISTORY_WINDOW,
            close_threshold_px: DEFAULT_CLOSE_THRESHOLD_PX,
        }
    }
}

impl ClientConfig {
    /// Build config from values captured at compile time.
    ///
    /// Optional:
    /// - `NEWSDESK_API_URL`: backend origin; the API base becomes `{origin}/api`
    /// - `NEWSDESK_HISTORY_WINDOW`: default 6
    /// - `NEWSDESK_PANEL_CLOSE_THRESHOLD_PX`: default 100
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("NEWSDESK_API_URL"),
            option_env!("NEWSDESK_HISTORY_WINDOW"),
            option_env!("NEWSDESK_PANEL_CLOSE_THRESHOLD_PX"),
        )
    }

    /// Parse raw override strings, falling back to defaults for missing or
    /// malformed values.
    pub fn from_values(api_url: Option<&str>, history_window: Option<&str>, close_threshold: Option<&str>) -> Self {
        let defaults = Self::default();
        let api_base = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map_or(defaults.api_base, |url| format!("{}/api", url.trim_end_matches('/')));
        let history_window = history_window
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.history_window);
        let close_threshold_px = close_threshold
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|px| px.is_finite() && *px >= 0.0)
            .unwrap_or(defaults.close_threshold_px);

        Self { api_base, history_window, close_threshold_px }
    }
}
