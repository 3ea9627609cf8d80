use chrono::{Datelike, Duration};
use hijri_date::HijriDate;

/// Islamic month names in Indonesian transliteration (index 0 = Muharram).
const HIJRI_MONTH_NAMES: &[&str] = &[
    "Muharram",
    "Safar",
    "Rabiul Awal",
    "Rabiul Akhir",
    "Jumadil Awal",
    "Jumadil Akhir",
    "Rajab",
    "Sya'ban",
    "Ramadhan",
    "Syawal",
    "Dzulqa'dah",
    "Dzulhijjah",
];

fn hijri_month_name(month: usize) -> &'static str {
    HIJRI_MONTH_NAMES.get(month.wrapping_sub(1)).copied().unwrap_or("?")
}

/// Today's Hijri date for the dashboard header, e.g. "7 Rabiul Awal 1448".
///
/// `offset_days` shifts the date for local moon sighting differences
/// (e.g. -1 where the sighting runs a day behind Saudi Arabia).
pub fn today_hijri_string(offset_days: i32) -> String {
    let adjusted = chrono::Local::now().date_naive() + Duration::days(offset_days as i64);

    match HijriDate::from_gr(
        adjusted.year() as usize,
        adjusted.month() as usize,
        adjusted.day() as usize,
    ) {
        Ok(hd) => format!("{} {} {}", hd.day(), hijri_month_name(hd.month()), hd.year()),
        Err(_) => {
            let hd = HijriDate::today();
            format!("{} {} {}", hd.day(), hijri_month_name(hd.month()), hd.year())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_name_lookup_is_total() {
        assert_eq!(hijri_month_name(1), "Muharram");
        assert_eq!(hijri_month_name(12), "Dzulhijjah");
        assert_eq!(hijri_month_name(0), "?");
        assert_eq!(hijri_month_name(13), "?");
    }

    #[test]
    fn header_string_has_three_parts() {
        let s = today_hijri_string(0);
        assert!(s.split_whitespace().count() >= 3);
    }
}
