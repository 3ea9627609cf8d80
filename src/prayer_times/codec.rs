//! Codec for the `"HH:MM"`-prefixed timing strings the calendar API returns.
//!
//! Upstream sends values like `"04:38 (WIB)"`; only the first five characters
//! carry the clock time, the rest is a timezone annotation we discard.

/// Parse an `"HH:MM"`-prefixed string into minutes since midnight.
///
/// Total: any malformed or empty input falls back to `0` minutes instead of
/// erroring, so a bad timing string degrades to midnight rather than taking
/// the whole schedule down.
pub fn parse_time(raw: &str) -> u32 {
    parse_time_checked(raw).unwrap_or(0)
}

/// Like [`parse_time`] but reports failure instead of substituting the zero
/// fallback. Ingestion uses this to count bad inputs for diagnostics.
pub fn parse_time_checked(raw: &str) -> Option<u32> {
    let clean: String = raw.chars().take(5).collect();
    let (hours, minutes) = clean.split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    Some(hours * 60 + minutes)
}

/// Render minutes since midnight as a zero-padded `"HH:MM"` string.
///
/// Takes `f64` because the Dhuha midpoint can land on a half minute; the hour
/// component is floored, the minute component rounded.
pub fn format_time(minutes: f64) -> String {
    let hours = (minutes / 60.0).floor() as u32;
    let mins = (minutes % 60.0).round() as u32;
    format!("{:02}:{:02}", hours, mins)
}

/// Midpoint between sunrise and Dhuhr, the conventional Dhuha time.
///
/// The API never supplies Dhuha; every day gets this derived value during
/// ingestion. If either input failed to parse the result is silently off
/// (it leans toward midnight), which ingestion reports via its fallback
/// counter but does not treat as an error.
pub fn derive_dhuha(sunrise: &str, dhuhr: &str) -> String {
    let midpoint = (parse_time(sunrise) + parse_time(dhuhr)) as f64 / 2.0;
    format_time(midpoint)
}
