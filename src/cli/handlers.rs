use anyhow::{Context, Result};
use chrono::{Datelike, Local, Timelike};

use crate::api::CalendarClient;
use crate::config::{AppConfig, CITIES};
use crate::models::{MonthlySchedule, PrayerKey};
use crate::prayer_times::{codec, scheduler};
use crate::utils::format::{indonesian_month, indonesian_weekday, short_date};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GOLD: &str = "\x1b[38;2;241;178;52m";
const TEAL: &str = "\x1b[38;2;60;110;113m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const HIGHLIGHT: &str = "\x1b[30;43m";

fn fetch_current_month(config: &AppConfig) -> Result<MonthlySchedule> {
    let now = Local::now().date_naive();
    let client = CalendarClient::new().context("Building HTTP client")?;
    client
        .fetch_month(
            &config.schedule.city,
            &config.schedule.country,
            config.schedule.method,
            now.month(),
            now.year(),
        )
        .with_context(|| format!("Fetching schedule for {}", config.schedule.city))
}

// ─── Times ───────────────────────────────────────────────────────────────────

pub fn handle_times(config: &AppConfig) -> Result<()> {
    let monthly = fetch_current_month(config)?;
    let now = Local::now().naive_local();
    let now_minutes = now.hour() * 60 + now.minute();

    println!();
    println_colored!(
        GOLD,
        "  Jadwal Sholat — Kota {} ({})",
        monthly.city,
        short_date(now.date())
    );
    println!();

    match monthly.day_for(now.date()) {
        Some(day) => {
            for key in PrayerKey::DAILY_ORDER {
                let time = day.timing(key).unwrap_or("--:--");
                let is_past = codec::parse_time(time) <= now_minutes;
                if is_past {
                    println_colored!(DIM, "  {:<8}  {}", key.display_name(), time);
                } else {
                    println_colored!(BOLD, "  {:<8}  {}", key.display_name(), time);
                }
            }

            let countdown = scheduler::next_prayer(&day.timings, now);
            println!();
            println_colored!(
                TEAL,
                "  Menuju waktu Sholat {}: {}",
                countdown.prayer.display_name(),
                countdown.remaining
            );
        }
        None => {
            println_colored!(DIM, "  Tidak ada data untuk hari ini");
        }
    }
    println!();
    Ok(())
}

// ─── Monthly table ───────────────────────────────────────────────────────────

pub fn handle_monthly(config: &AppConfig) -> Result<()> {
    let monthly = fetch_current_month(config)?;
    let today = Local::now().date_naive();

    println!();
    println_colored!(
        GOLD,
        "  Jadwal Sholat Bulan {} {} — Kota {}",
        indonesian_month(monthly.month),
        monthly.year,
        monthly.city
    );
    println!();

    print!("  {:<18}", "Tanggal");
    for key in PrayerKey::DAILY_ORDER {
        print!("{:<9}", key.display_name());
    }
    println!();

    for day in &monthly.days {
        let date_label = format!(
            "{}, {}",
            indonesian_weekday(&day.weekday_en),
            short_date(day.date)
        );
        let mut row = format!("  {:<18}", date_label);
        for key in PrayerKey::DAILY_ORDER {
            row.push_str(&format!("{:<9}", day.timing(key).unwrap_or("--:--")));
        }
        if day.date == today {
            println_colored!(HIGHLIGHT, "{}", row);
        } else {
            println!("{}", row);
        }
    }
    println!();
    Ok(())
}

// ─── Cities ──────────────────────────────────────────────────────────────────

pub fn handle_cities(config: &AppConfig) {
    println!();
    println_colored!(GOLD, "  Kota yang tersedia:");
    println!();
    for city in CITIES {
        if *city == config.schedule.city {
            println_colored!(BOLD, "  ● {}", city);
        } else {
            println_colored!(DIM, "    {}", city);
        }
    }
    println!();
}
