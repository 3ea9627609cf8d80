use chrono::{Datelike, NaiveDate};

/// English → Indonesian weekday names, as sent by the calendar API.
/// Closed mapping of seven entries; unknown input passes through unchanged.
const INDONESIAN_DAYS: &[(&str, &str)] = &[
    ("Sunday", "Minggu"),
    ("Monday", "Senin"),
    ("Tuesday", "Selasa"),
    ("Wednesday", "Rabu"),
    ("Thursday", "Kamis"),
    ("Friday", "Jumat"),
    ("Saturday", "Sabtu"),
];

const INDONESIAN_MONTHS: &[&str] = &[
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

pub fn indonesian_weekday(english: &str) -> &str {
    INDONESIAN_DAYS
        .iter()
        .find(|(en, _)| *en == english)
        .map(|(_, id)| *id)
        .unwrap_or(english)
}

pub fn indonesian_month(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| INDONESIAN_MONTHS.get(i as usize))
        .copied()
        .unwrap_or("?")
}

/// `dd/mm/yyyy`, the table's date rendering.
pub fn short_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_all_seven_weekdays() {
        let expected = [
            ("Sunday", "Minggu"),
            ("Monday", "Senin"),
            ("Tuesday", "Selasa"),
            ("Wednesday", "Rabu"),
            ("Thursday", "Kamis"),
            ("Friday", "Jumat"),
            ("Saturday", "Sabtu"),
        ];
        for (en, id) in expected {
            assert_eq!(indonesian_weekday(en), id);
        }
    }

    #[test]
    fn unknown_weekday_passes_through() {
        assert_eq!(indonesian_weekday("Someday"), "Someday");
    }

    #[test]
    fn month_names() {
        assert_eq!(indonesian_month(1), "Januari");
        assert_eq!(indonesian_month(8), "Agustus");
        assert_eq!(indonesian_month(13), "?");
        assert_eq!(indonesian_month(0), "?");
    }

    #[test]
    fn short_date_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(short_date(date), "05/03/2026");
    }
}
