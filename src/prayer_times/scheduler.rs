use chrono::NaiveDateTime;
use std::collections::BTreeMap;

use crate::models::{Countdown, PrayerKey, Remaining};
use crate::prayer_times::codec::parse_time;

/// Determine the next upcoming prayer of the day.
///
/// Pure function of the day's timings and `now`: the tick loop calls it once
/// a second and simply replaces the previous [`Countdown`], so there is no
/// state to drift.
///
/// Walks [`PrayerKey::DAILY_ORDER`] and picks the first entry whose instant
/// (today's date + its `"HH:MM"`, seconds zeroed) is still strictly ahead of
/// `now`. Equality counts as passed: at the exact start of a prayer the
/// countdown already points at the following one. When nothing is left (or
/// the map is empty), the terminal fallback is Fajr with the tomorrow
/// marker.
pub fn next_prayer(timings: &BTreeMap<PrayerKey, String>, now: NaiveDateTime) -> Countdown {
    for key in PrayerKey::DAILY_ORDER {
        let Some(raw) = timings.get(&key) else {
            continue;
        };
        let minutes = parse_time(raw);
        // Out-of-range values (e.g. a garbled "99:99") produce no instant.
        let Some(candidate) = now.date().and_hms_opt(minutes / 60, minutes % 60, 0) else {
            continue;
        };
        if now < candidate {
            let diff = (candidate - now).num_seconds();
            return Countdown {
                prayer: key,
                remaining: Remaining::Until {
                    hours: diff / 3600,
                    minutes: (diff / 60) % 60,
                },
            };
        }
    }

    Countdown {
        prayer: PrayerKey::Fajr,
        remaining: Remaining::Tomorrow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_timings() -> BTreeMap<PrayerKey, String> {
        [
            (PrayerKey::Fajr, "04:30"),
            (PrayerKey::Sunrise, "05:45"),
            (PrayerKey::Dhuha, "08:00"),
            (PrayerKey::Dhuhr, "12:00"),
            (PrayerKey::Asr, "15:20"),
            (PrayerKey::Maghrib, "18:02"),
            (PrayerKey::Isha, "19:10"),
        ]
        .into_iter()
        .map(|(k, v)| (k, v.to_string()))
        .collect()
    }

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 30)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn picks_first_upcoming_prayer() {
        let c = next_prayer(&sample_timings(), at(11, 55, 0));
        assert_eq!(c.prayer, PrayerKey::Dhuhr);
        assert_eq!(c.remaining.to_string(), "00 jam 05 menit");
    }

    #[test]
    fn floors_hours_and_minutes_independently() {
        // Noon is exactly Dhuhr, which counts as passed, so Ashar at 15:20
        // is next: 3 hours 20 minutes out.
        let c = next_prayer(&sample_timings(), at(12, 0, 0));
        assert_eq!(c.prayer.display_name(), "Ashar");
        assert_eq!(c.remaining.to_string(), "03 jam 20 menit");
    }

    #[test]
    fn fractional_seconds_are_discarded() {
        // 15:20 - 11:50:30 = 3h29m30s -> floors to 3 jam 29 menit.
        let mut timings = sample_timings();
        timings.remove(&PrayerKey::Dhuhr);
        let c = next_prayer(&timings, at(11, 50, 30));
        assert_eq!(c.prayer, PrayerKey::Asr);
        assert_eq!(
            c.remaining,
            Remaining::Until { hours: 3, minutes: 29 }
        );
    }

    #[test]
    fn exact_start_counts_as_passed() {
        let c = next_prayer(&sample_timings(), at(18, 2, 0));
        assert_eq!(c.prayer, PrayerKey::Isha);
        // One second earlier Maghrib is still eligible.
        let c = next_prayer(&sample_timings(), at(18, 1, 59));
        assert_eq!(c.prayer, PrayerKey::Maghrib);
    }

    #[test]
    fn after_isha_falls_back_to_tomorrow() {
        for now in [at(19, 10, 0), at(19, 10, 1), at(23, 59, 59)] {
            let c = next_prayer(&sample_timings(), now);
            assert_eq!(c.prayer, PrayerKey::Fajr);
            assert_eq!(c.remaining, Remaining::Tomorrow);
        }
    }

    #[test]
    fn empty_schedule_falls_back_without_panicking() {
        let c = next_prayer(&BTreeMap::new(), at(10, 0, 0));
        assert_eq!(c.prayer, PrayerKey::Fajr);
        assert_eq!(c.remaining, Remaining::Tomorrow);
    }

    #[test]
    fn missing_keys_are_skipped() {
        let mut timings = sample_timings();
        timings.remove(&PrayerKey::Dhuhr);
        timings.remove(&PrayerKey::Asr);
        let c = next_prayer(&timings, at(11, 55, 0));
        assert_eq!(c.prayer, PrayerKey::Maghrib);
    }

    #[test]
    fn unparseable_entry_is_never_selected() {
        // A garbled value falls back to midnight, which is always passed.
        let mut timings = sample_timings();
        timings.insert(PrayerKey::Dhuhr, "siang (WIB)".to_string());
        let c = next_prayer(&timings, at(11, 55, 0));
        assert_eq!(c.prayer, PrayerKey::Asr);
    }
}
