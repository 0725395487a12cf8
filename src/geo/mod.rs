//! Geographic locations and the solar events that depend on them.
//!
//! ## Module Structure
//!
//! - [`solar`]: sunrise, sunset and solar elevation from the NOAA general
//!   solar position equations, with explicit polar day/night results
//! - [`timezone`]: IANA timezone lookup for a coordinate
//!
//! A [`Coordinate`] is a validated point on the globe. A [`Locale`] adds the
//! coordinate's timezone and the instant "now" taken from the
//! [`time_source`](crate::time_source), which is everything the services need
//! to answer "when is sunrise today, here".

pub mod solar;
pub mod timezone;

pub use solar::{Anchor, SolarDay, solar_elevation, sun_times, sun_times_around};
pub use timezone::determine_timezone_from_coordinates;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt;

use crate::constants::TIME_FORMAT_SECONDS;
use crate::error::CoordinateError;

#[cfg(test)]
mod tests;

/// A named point on the globe.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    name: String,
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting positions off the globe.
    ///
    /// # Errors
    /// [`CoordinateError`] when latitude is outside ±90° or longitude
    /// outside ±180° (NaN counts as outside).
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, CoordinateError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::InvalidLatitude { value: latitude });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::InvalidLongitude { value: longitude });
        }
        Ok(Self {
            name: name.into(),
            latitude,
            longitude,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.4}°, {:.4}°)",
            self.name, self.latitude, self.longitude
        )
    }
}

/// A coordinate observed from a particular instant.
#[derive(Debug, Clone)]
pub struct Locale {
    pub coordinate: Coordinate,
    pub timezone: Tz,
    pub now: DateTime<Utc>,
}

impl Locale {
    /// Locale at the current instant of the global time source.
    pub fn new(coordinate: Coordinate, timezone: Tz) -> Self {
        Self::at(coordinate, timezone, crate::time_source::now())
    }

    pub fn at(coordinate: Coordinate, timezone: Tz, now: DateTime<Utc>) -> Self {
        Self {
            coordinate,
            timezone,
            now,
        }
    }

    /// Locale whose timezone is looked up from the coordinate.
    pub fn detect(coordinate: Coordinate) -> Self {
        let timezone =
            determine_timezone_from_coordinates(coordinate.latitude(), coordinate.longitude());
        Self::new(coordinate, timezone)
    }

    /// The calendar date at the locale, in its own timezone.
    pub fn today(&self) -> NaiveDate {
        self.now.with_timezone(&self.timezone).date_naive()
    }

    /// Noon of [`Locale::today`] on the locale's wall clock, as a UTC instant.
    pub fn local_noon(&self) -> DateTime<Utc> {
        let noon = self.today().and_time(NaiveTime::MIN) + Duration::hours(12);
        self.timezone
            .from_local_datetime(&noon)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
            .unwrap_or_else(|| noon.and_utc())
    }

    /// Solar events of the locale's own calendar day.
    ///
    /// Anchored on local noon, so zones far from their longitude's mean time
    /// (Kiritimati, Samoa) still get the sunrise that falls on `today()`.
    pub fn solar_day(&self) -> SolarDay {
        sun_times_around(&self.coordinate, self.local_noon())
    }

    /// Convert a UTC instant to the locale's wall clock.
    pub fn local(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.timezone)
    }
}

/// Present local time at the locale, tagged with its name and zone.
///
/// For example `14:05:33 BST (Europe/London) in Ivybridge`.
pub fn current_time_descriptor(locale: &Locale) -> String {
    let local = locale.local(locale.now);
    format!(
        "{} {} ({}) in {}",
        local.format(TIME_FORMAT_SECONDS),
        local.format("%Z"),
        locale.timezone.name(),
        locale.coordinate.name()
    )
}
