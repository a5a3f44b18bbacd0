//! Wall-clock helpers for message timestamps and feed recency labels.
//!
//! Browser builds read the clock and local timezone through `js_sys::Date`;
//! host builds fall back to `SystemTime` and UTC so tests stay deterministic.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

const MINUTE_MS: f64 = 60_000.0;
const HOUR_MS: f64 = 60.0 * MINUTE_MS;
const DAY_MS: f64 = 24.0 * HOUR_MS;

/// Current time in milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// Parse an ISO-8601 timestamp into epoch milliseconds.
///
/// Only the browser build can parse; host builds return `None`.
pub fn parse_timestamp_ms(raw: &str) -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        let ms = js_sys::Date::parse(raw);
        (!ms.is_nan()).then_some(ms)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = raw;
        None
    }
}

/// `HH:MM` label for a message timestamp.
pub fn format_clock(timestamp_ms: f64) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp_ms));
        clock_label(date.get_hours(), date.get_minutes())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let (hours, minutes) = utc_hours_minutes(timestamp_ms);
        clock_label(hours, minutes)
    }
}

#[cfg(any(test, not(feature = "hydrate")))]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn utc_hours_minutes(timestamp_ms: f64) -> (u32, u32) {
    let minutes_of_day = (timestamp_ms.rem_euclid(DAY_MS) / MINUTE_MS).floor() as u32;
    (minutes_of_day / 60, minutes_of_day % 60)
}

fn clock_label(hours: u32, minutes: u32) -> String {
    format!("{hours:02}:{minutes:02}")
}

/// Human "N units ago" label for an elapsed duration in milliseconds.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn time_ago_label(elapsed_ms: f64) -> String {
    let elapsed_ms = elapsed_ms.max(0.0);
    let hours = (elapsed_ms / HOUR_MS).floor() as u64;
    let days = hours / 24;

    if hours < 1 {
        let minutes = (elapsed_ms / MINUTE_MS).floor() as u64;
        plural(minutes, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else if days < 7 {
        plural(days, "day")
    } else {
        plural(days / 7, "week")
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
