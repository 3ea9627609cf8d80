use std::str::FromStr;

/// The seven daily schedule entries, in their fixed daily order.
///
/// Six come from the upstream calendar; `Dhuha` is always derived during
/// ingestion and never fetched. The derived `Ord` follows declaration order,
/// so `BTreeMap<PrayerKey, _>` iterates in daily order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrayerKey {
    Fajr,
    Sunrise,
    Dhuha,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerKey {
    pub const DAILY_ORDER: [PrayerKey; 7] = [
        PrayerKey::Fajr,
        PrayerKey::Sunrise,
        PrayerKey::Dhuha,
        PrayerKey::Dhuhr,
        PrayerKey::Asr,
        PrayerKey::Maghrib,
        PrayerKey::Isha,
    ];

    /// The six keys the upstream calendar actually supplies; Dhuha is not
    /// among them and is always derived.
    pub const SOURCE_KEYS: [PrayerKey; 6] = [
        PrayerKey::Fajr,
        PrayerKey::Sunrise,
        PrayerKey::Dhuhr,
        PrayerKey::Asr,
        PrayerKey::Maghrib,
        PrayerKey::Isha,
    ];

    /// Key name as it appears in the upstream `timings` JSON object.
    pub fn api_name(&self) -> &'static str {
        match self {
            PrayerKey::Fajr => "Fajr",
            PrayerKey::Sunrise => "Sunrise",
            PrayerKey::Dhuha => "Dhuha",
            PrayerKey::Dhuhr => "Dhuhr",
            PrayerKey::Asr => "Asr",
            PrayerKey::Maghrib => "Maghrib",
            PrayerKey::Isha => "Isha",
        }
    }

    /// Indonesian label used everywhere the user sees a prayer name.
    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerKey::Fajr => "Subuh",
            PrayerKey::Sunrise => "Terbit",
            PrayerKey::Dhuha => "Dhuha",
            PrayerKey::Dhuhr => "Dzuhur",
            PrayerKey::Asr => "Ashar",
            PrayerKey::Maghrib => "Maghrib",
            PrayerKey::Isha => "Isya",
        }
    }
}

impl std::fmt::Display for PrayerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PrayerKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fajr" | "subuh" => Ok(PrayerKey::Fajr),
            "sunrise" | "terbit" => Ok(PrayerKey::Sunrise),
            "dhuha" => Ok(PrayerKey::Dhuha),
            "dhuhr" | "dzuhur" | "zuhr" => Ok(PrayerKey::Dhuhr),
            "asr" | "ashar" => Ok(PrayerKey::Asr),
            "maghrib" => Ok(PrayerKey::Maghrib),
            "isha" | "isya" => Ok(PrayerKey::Isha),
            _ => Err(anyhow::anyhow!("Unknown prayer key: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_order_matches_btree_order() {
        let mut sorted = PrayerKey::DAILY_ORDER;
        sorted.sort();
        assert_eq!(sorted, PrayerKey::DAILY_ORDER);
    }

    #[test]
    fn indonesian_labels() {
        assert_eq!(PrayerKey::Fajr.to_string(), "Subuh");
        assert_eq!(PrayerKey::Asr.to_string(), "Ashar");
        assert_eq!(PrayerKey::Isha.to_string(), "Isya");
    }

    #[test]
    fn parses_english_and_indonesian_names() {
        assert_eq!("Dzuhur".parse::<PrayerKey>().unwrap(), PrayerKey::Dhuhr);
        assert_eq!("fajr".parse::<PrayerKey>().unwrap(), PrayerKey::Fajr);
        assert!("tahajjud".parse::<PrayerKey>().is_err());
    }

    #[test]
    fn source_keys_exclude_dhuha() {
        assert!(!PrayerKey::SOURCE_KEYS.contains(&PrayerKey::Dhuha));
        assert_eq!(PrayerKey::SOURCE_KEYS.len(), PrayerKey::DAILY_ORDER.len() - 1);
    }
}
