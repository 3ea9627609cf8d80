use chrono::NaiveDate;
use reqwest::blocking::Client;
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

use crate::api::types::{CalendarDay, CalendarResponse};
use crate::models::{DaySchedule, MonthlySchedule, PrayerKey};
use crate::prayer_times::codec;

const ALADHAN_BASE: &str = "https://api.aladhan.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("calendar endpoint returned HTTP {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("calendar endpoint returned code {code}: {status}")]
    ApiStatus { code: u16, status: String },
    #[error("no days in calendar for {city} {month}/{year}")]
    EmptyMonth { city: String, month: u32, year: i32 },
}

/// Blocking client for the Aladhan monthly calendar.
///
/// Method 20 is KEMENAG, the Indonesian Ministry of Religious Affairs
/// calculation, which is what the configured default uses.
pub struct CalendarClient {
    http: Client,
}

impl CalendarClient {
    pub fn new() -> Result<Self, FetchError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http })
    }

    /// Fetch one month for one city and ingest it into a [`MonthlySchedule`].
    pub fn fetch_month(
        &self,
        city: &str,
        country: &str,
        method: u8,
        month: u32,
        year: i32,
    ) -> Result<MonthlySchedule, FetchError> {
        log::debug!("fetching calendar for {city}, {country} ({month}/{year})");

        let params = [
            ("city", city.to_string()),
            ("country", country.to_string()),
            ("method", method.to_string()),
            ("month", month.to_string()),
            ("year", year.to_string()),
        ];
        let resp = self
            .http
            .get(format!("{}/calendarByCity", ALADHAN_BASE))
            .query(&params)
            .send()?;

        if !resp.status().is_success() {
            return Err(FetchError::HttpStatus(resp.status()));
        }

        let body: CalendarResponse = resp.json()?;
        if body.code != 200 {
            return Err(FetchError::ApiStatus {
                code: body.code,
                status: body.status,
            });
        }
        if body.data.is_empty() {
            return Err(FetchError::EmptyMonth {
                city: city.to_string(),
                month,
                year,
            });
        }

        Ok(ingest(city, month, year, body.data))
    }
}

/// Turn the raw payload into the app's schedule model.
///
/// Per day: timing strings are truncated to their `"HH:MM"` prefix, Dhuha is
/// derived from sunrise and Dhuhr and inserted, and the Gregorian date is
/// parsed into the day's lookup key. Unparseable timings are kept (they
/// degrade to midnight downstream) but counted; a day whose date cannot be
/// read is dropped since nothing could ever match it.
fn ingest(city: &str, month: u32, year: i32, raw_days: Vec<CalendarDay>) -> MonthlySchedule {
    let mut days = Vec::with_capacity(raw_days.len());
    let mut parse_fallbacks = 0u32;

    for day in raw_days {
        let date = match NaiveDate::parse_from_str(&day.date.gregorian.date, "%d-%m-%Y") {
            Ok(d) => d,
            Err(err) => {
                log::warn!(
                    "skipping day with unreadable date {:?}: {err}",
                    day.date.gregorian.date
                );
                continue;
            }
        };

        let dhuha = codec::derive_dhuha(
            day.timings.get("Sunrise").map(String::as_str).unwrap_or(""),
            day.timings.get("Dhuhr").map(String::as_str).unwrap_or(""),
        );

        let mut timings = BTreeMap::new();
        for key in PrayerKey::SOURCE_KEYS {
            let Some(raw) = day.timings.get(key.api_name()) else {
                continue;
            };
            if codec::parse_time_checked(raw).is_none() {
                parse_fallbacks += 1;
            }
            timings.insert(key, raw.chars().take(5).collect());
        }
        timings.insert(PrayerKey::Dhuha, dhuha);

        days.push(DaySchedule {
            date,
            weekday_en: day.date.gregorian.weekday.en,
            timings,
        });
    }

    if parse_fallbacks > 0 {
        log::warn!("{parse_fallbacks} timing strings failed to parse, fell back to 00:00");
    }

    MonthlySchedule {
        city: city.to_string(),
        month,
        year,
        days,
        parse_fallbacks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_day(date: &str, weekday: &str, sunrise: &str, dhuhr: &str) -> String {
        format!(
            r#"{{
                "timings": {{
                    "Fajr": "04:38 (WIB)",
                    "Sunrise": "{sunrise}",
                    "Dhuhr": "{dhuhr}",
                    "Asr": "15:14 (WIB)",
                    "Maghrib": "17:55 (WIB)",
                    "Isha": "19:05 (WIB)",
                    "Midnight": "23:51 (WIB)"
                }},
                "date": {{
                    "gregorian": {{
                        "date": "{date}",
                        "weekday": {{ "en": "{weekday}" }}
                    }}
                }}
            }}"#
        )
    }

    fn parse_days(days: &[String]) -> Vec<CalendarDay> {
        serde_json::from_str(&format!("[{}]", days.join(","))).unwrap()
    }

    #[test]
    fn ingest_derives_dhuha_and_strips_suffixes() {
        let days = parse_days(&[sample_day("1-3-2025", "Saturday", "06:00 (WIB)", "12:00 (WIB)")]);
        let monthly = ingest("Bandung", 3, 2025, days);

        assert_eq!(monthly.days.len(), 1);
        let day = &monthly.days[0];
        // Non-padded upstream date still parses.
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(day.weekday_en, "Saturday");
        assert_eq!(day.timing(PrayerKey::Fajr), Some("04:38"));
        assert_eq!(day.timing(PrayerKey::Dhuha), Some("09:00"));
        assert_eq!(monthly.parse_fallbacks, 0);
    }

    #[test]
    fn ingest_counts_fallbacks_without_failing() {
        let days = parse_days(&[sample_day("02-03-2025", "Sunday", "garbage", "12:00 (WIB)")]);
        let monthly = ingest("Bandung", 3, 2025, days);

        assert_eq!(monthly.parse_fallbacks, 1);
        // The bad string is kept (truncated); it degrades to midnight later.
        assert_eq!(monthly.days[0].timing(PrayerKey::Sunrise), Some("garba"));
        // Dhuha leans toward midnight: (0 + 720) / 2.
        assert_eq!(monthly.days[0].timing(PrayerKey::Dhuha), Some("06:00"));
    }

    #[test]
    fn ingest_drops_days_with_unreadable_dates() {
        let days = parse_days(&[
            sample_day("not-a-date", "Monday", "06:00", "12:00"),
            sample_day("03-03-2025", "Monday", "06:00", "12:00"),
        ]);
        let monthly = ingest("Bandung", 3, 2025, days);
        assert_eq!(monthly.days.len(), 1);
    }

    #[test]
    fn missing_timing_key_is_tolerated() {
        let json = r#"[{
            "timings": { "Fajr": "04:38 (WIB)" },
            "date": { "gregorian": { "date": "04-03-2025", "weekday": { "en": "Tuesday" } } }
        }]"#;
        let days: Vec<CalendarDay> = serde_json::from_str(json).unwrap();
        let monthly = ingest("Bandung", 3, 2025, days);

        let day = &monthly.days[0];
        assert_eq!(day.timing(PrayerKey::Fajr), Some("04:38"));
        assert_eq!(day.timing(PrayerKey::Maghrib), None);
        // Dhuha is still inserted, derived from two zero fallbacks.
        assert_eq!(day.timing(PrayerKey::Dhuha), Some("00:00"));
    }

    #[test]
    fn response_envelope_deserializes() {
        let json = format!(
            r#"{{ "code": 200, "status": "OK", "data": [{}] }}"#,
            sample_day("05-03-2025", "Wednesday", "06:01 (WIB)", "11:59 (WIB)")
        );
        let resp: CalendarResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(resp.code, 200);
        assert_eq!(resp.data.len(), 1);
    }
}
