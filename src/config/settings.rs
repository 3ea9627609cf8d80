use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Cities offered by the TUI picker and the `cities` subcommand. The
/// configured city is free-form; the upstream geocoder decides what it
/// recognizes.
pub const CITIES: &[&str] = &[
    "Bandung",
    "Jakarta",
    "Malang",
    "Surabaya",
    "Yogyakarta",
    "Medan",
    "Semarang",
    "Makassar",
    "Palembang",
];

fn default_city() -> String {
    "Bandung".to_string()
}
fn default_country() -> String {
    "Indonesia".to_string()
}
fn default_method() -> u8 {
    20
}
fn default_tick_ms() -> u64 {
    1000
}
fn default_hijri_offset() -> i32 {
    0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default = "default_city")]
    pub city: String,
    #[serde(default = "default_country")]
    pub country: String,
    /// Aladhan calculation method id. 20 = KEMENAG (Kementerian Agama RI).
    #[serde(default = "default_method")]
    pub method: u8,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            city: default_city(),
            country: default_country(),
            method: default_method(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub schedule: ScheduleConfig,
    /// Countdown refresh cadence in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Days to add/subtract from the Hijri header date for local moon
    /// sighting differences.
    #[serde(default = "default_hijri_offset")]
    pub hijri_offset: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            schedule: ScheduleConfig::default(),
            tick_ms: default_tick_ms(),
            hijri_offset: default_hijri_offset(),
        }
    }
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "jadwal").context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(&path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }
}
