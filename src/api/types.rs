//! Wire types for the Aladhan `calendarByCity` endpoint.
//!
//! Only the fields the app actually reads are modelled; serde ignores the
//! rest of the (large) payload. `timings` stays a plain map keyed by the
//! upstream English prayer names so a missing or extra key never fails
//! deserialization.

use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
pub struct CalendarResponse {
    pub code: u16,
    pub status: String,
    #[serde(default)]
    pub data: Vec<CalendarDay>,
}

#[derive(Debug, Deserialize)]
pub struct CalendarDay {
    /// Raw timing strings keyed by English prayer name, e.g.
    /// `"Fajr": "04:38 (WIB)"`.
    #[serde(default)]
    pub timings: BTreeMap<String, String>,
    pub date: ApiDate,
}

#[derive(Debug, Deserialize)]
pub struct ApiDate {
    pub gregorian: Gregorian,
}

#[derive(Debug, Deserialize)]
pub struct Gregorian {
    /// Dash-separated `D-M-YYYY`; day and month are not always zero-padded.
    pub date: String,
    pub weekday: Weekday,
}

#[derive(Debug, Deserialize)]
pub struct Weekday {
    pub en: String,
}
