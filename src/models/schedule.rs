use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;

use super::PrayerKey;

/// One calendar day's prayer times, already cleaned to bare `"HH:MM"`
/// strings and augmented with the derived Dhuha entry.
///
/// A key can be absent when upstream omitted or mangled that field; every
/// consumer tolerates the gap (the table shows `--:--`, the scheduler skips
/// the entry).
#[derive(Debug, Clone)]
pub struct DaySchedule {
    pub date: NaiveDate,
    /// English weekday name as sent by the API, e.g. "Friday".
    pub weekday_en: String,
    pub timings: BTreeMap<PrayerKey, String>,
}

impl DaySchedule {
    pub fn timing(&self, key: PrayerKey) -> Option<&str> {
        self.timings.get(&key).map(String::as_str)
    }
}

/// Full month of schedules for one (city, month, year), in calendar order.
///
/// Immutable once built; a city or month change replaces it wholesale.
#[derive(Debug, Clone)]
pub struct MonthlySchedule {
    pub city: String,
    pub month: u32,
    pub year: i32,
    pub days: Vec<DaySchedule>,
    /// How many timing strings failed to parse during ingestion and fell
    /// back to midnight. Diagnostic only, never an error.
    pub parse_fallbacks: u32,
}

impl MonthlySchedule {
    /// The entry for the given calendar day, if this month contains it.
    pub fn day_for(&self, date: NaiveDate) -> Option<&DaySchedule> {
        self.days.iter().find(|d| d.date == date)
    }
}

/// Time left until the next prayer, floored to whole hours and minutes.
///
/// `Tomorrow` is the terminal marker used once every prayer of the day has
/// passed; the actual time of tomorrow's Fajr is deliberately not computed
/// since next month's data may not be loaded at a month boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remaining {
    Until { hours: i64, minutes: i64 },
    Tomorrow,
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Remaining::Until { hours, minutes } => {
                write!(f, "{:02} jam {:02} menit", hours, minutes)
            }
            Remaining::Tomorrow => write!(f, "Besok"),
        }
    }
}

/// Snapshot of "which prayer is next and how far away".
///
/// Valid only for the instant it was computed; the tick loop replaces it
/// every second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub prayer: PrayerKey,
    pub remaining: Remaining,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_renders_indonesian() {
        let r = Remaining::Until { hours: 3, minutes: 20 };
        assert_eq!(r.to_string(), "03 jam 20 menit");
        assert_eq!(Remaining::Tomorrow.to_string(), "Besok");
    }

    #[test]
    fn day_lookup_by_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let monthly = MonthlySchedule {
            city: "Bandung".into(),
            month: 8,
            year: 2026,
            days: vec![DaySchedule {
                date,
                weekday_en: "Sunday".into(),
                timings: BTreeMap::new(),
            }],
            parse_fallbacks: 0,
        };
        assert!(monthly.day_for(date).is_some());
        assert!(monthly.day_for(date.succ_opt().unwrap()).is_none());
    }
}
