//! Configuration for the default locale, alarm requirements and logging.
//!
//! The configuration lives in `astronomical.toml`, looked up in:
//! 1. the directory passed with `--config <dir>`, if any
//! 2. **XDG_CONFIG_HOME**/astronomical/astronomical.toml otherwise
//!
//! A missing default file is not an error: the built-in defaults (Ivybridge,
//! wake half an hour before sunrise, wind down after sunset) apply. The file
//! is only ever read, never created or rewritten.
//!
//! ## Configuration Structure
//!
//! ```toml
//! log_file = "astronomical.log"   # Append INFO and above to this file
//!
//! [locale]
//! name = "Ivybridge"              # Label shown in output
//! latitude = 50.392189            # Geographic latitude (-90 to +90)
//! longitude = -3.941355           # Geographic longitude (-180 to +180)
//! timezone = "Europe/London"      # IANA name, detected from coordinates if omitted
//!
//! [[alarms]]
//! label = "wake"
//! anchor = "sunrise"              # "sunrise" or "sunset"
//! offset_minutes = -30            # Negative is before the event
//! ```
//!
//! ## Validation and Error Handling
//!
//! Coordinates must be on the globe and given as a pair, timezone names must
//! be known to chrono-tz, labels must be non-empty and offsets must stay
//! within a week of their anchor. Any failure is reported with the offending
//! value and stops the program with a non-zero exit code.

pub mod loading;
pub mod validation;

use anyhow::{Context, Result};
use chrono::Duration;
use chrono_tz::Tz;
use serde::Deserialize;
use std::path::PathBuf;

use crate::constants::*;
use crate::geo::{Anchor, Coordinate, Locale};
use crate::requirements::{AlarmRule, Requirements};

// Re-export public API
pub use loading::{get_config_path, get_custom_config_dir, load, load_from_path, set_config_dir};

/// The `[locale]` table.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct LocaleConfig {
    /// Label used in output
    pub name: Option<String>,
    /// Geographic latitude in degrees (-90 to +90)
    pub latitude: Option<f64>,
    /// Geographic longitude in degrees (-180 to +180)
    pub longitude: Option<f64>,
    /// IANA timezone name; looked up from the coordinates when absent
    pub timezone: Option<String>,
}

/// One `[[alarms]]` entry.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AlarmConfig {
    pub label: String,
    pub anchor: Anchor,
    /// Minutes relative to the anchor, negative for before
    pub offset_minutes: i64,
}

/// Configuration structure for astronomical.
///
/// Every field is optional; anything left out falls back to the defaults in
/// [`crate::constants`] and [`Requirements::default`].
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// File that receives INFO and above in addition to stdout.
    pub log_file: Option<PathBuf>,

    /// The default locale for every service.
    pub locale: Option<LocaleConfig>,

    /// Alarm requirements. Absent means the built-in rules; an empty list
    /// means no alarms.
    pub alarms: Option<Vec<AlarmConfig>>,
}

impl Config {
    /// Load configuration using automatic path detection.
    pub fn load() -> Result<Self> {
        loading::load()
    }

    /// Get the configuration file path.
    pub fn get_config_path() -> Result<PathBuf> {
        loading::get_config_path()
    }

    /// The configured coordinate, or the built-in default.
    pub fn coordinate(&self) -> Result<Coordinate> {
        let locale = self.locale.clone().unwrap_or_default();
        let name = locale
            .name
            .unwrap_or_else(|| DEFAULT_LOCALE_NAME.to_string());
        let (latitude, longitude) = match (locale.latitude, locale.longitude) {
            (Some(lat), Some(lon)) => (lat, lon),
            (None, None) => (DEFAULT_LATITUDE, DEFAULT_LONGITUDE),
            _ => anyhow::bail!("locale needs both latitude and longitude, or neither"),
        };

        Coordinate::new(name, latitude, longitude).context("Invalid locale in configuration")
    }

    /// The configured timezone, if one was given.
    pub fn timezone(&self) -> Result<Option<Tz>> {
        self.locale
            .as_ref()
            .and_then(|locale| locale.timezone.as_deref())
            .map(|name| {
                name.parse::<Tz>()
                    .map_err(|_| anyhow::anyhow!("Unknown timezone '{name}'"))
            })
            .transpose()
    }

    /// Build the locale at the current instant of the time source.
    pub fn locale(&self) -> Result<Locale> {
        let coordinate = self.coordinate()?;
        Ok(match self.timezone()? {
            Some(timezone) => Locale::new(coordinate, timezone),
            None => Locale::detect(coordinate),
        })
    }

    /// The configured alarm rules, in file order.
    pub fn requirements(&self) -> Result<Requirements> {
        let Some(alarms) = &self.alarms else {
            return Ok(Requirements::default());
        };

        alarms
            .iter()
            .map(|alarm| {
                let offset = Duration::try_minutes(alarm.offset_minutes).with_context(|| {
                    format!(
                        "Offset of alarm '{}' is out of range ({} minutes)",
                        alarm.label, alarm.offset_minutes
                    )
                })?;
                Ok(AlarmRule::new(alarm.label.clone(), alarm.anchor, offset))
            })
            .collect::<Result<Vec<_>>>()
            .map(Requirements::new)
    }
}
