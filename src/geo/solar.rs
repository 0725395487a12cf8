//! Sunrise, sunset and solar elevation.
//!
//! Uses the NOAA general solar position equations: the fractional year γ
//! drives Fourier series for the equation of time and the solar declination,
//! and the sunrise hour angle follows from the spherical triangle between the
//! pole, the observer and the sun at a zenith of 90.833°.
//!
//! Accuracy is a minute or two at mid latitudes, which is all an alarm clock
//! needs. Near the poles the hour angle has no solution and the result is
//! [`SolarDay::PolarDay`] or [`SolarDay::PolarNight`] instead of a NaN.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Timelike, Utc};
use serde::Deserialize;
use std::f64::consts::PI;
use std::fmt;

use super::Coordinate;
use crate::constants::{SECONDS_PER_DAY, SUNRISE_ZENITH};
use crate::physics::Kernel;

/// Solar event an alarm is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Sunrise,
    Sunset,
}

impl Anchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::Sunrise => "sunrise",
            Anchor::Sunset => "sunset",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Solar events of one calendar day at one place. Instants are UTC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolarDay {
    /// The sun rises and sets
    Regular {
        sunrise: DateTime<Utc>,
        solar_noon: DateTime<Utc>,
        sunset: DateTime<Utc>,
    },
    /// The sun never sets
    PolarDay { solar_noon: DateTime<Utc> },
    /// The sun never rises
    PolarNight { solar_noon: DateTime<Utc> },
}

impl SolarDay {
    /// Instant of `anchor`, or `None` when the event does not happen.
    pub fn event(&self, anchor: Anchor) -> Option<DateTime<Utc>> {
        match (self, anchor) {
            (SolarDay::Regular { sunrise, .. }, Anchor::Sunrise) => Some(*sunrise),
            (SolarDay::Regular { sunset, .. }, Anchor::Sunset) => Some(*sunset),
            _ => None,
        }
    }

    pub fn sunrise(&self) -> Option<DateTime<Utc>> {
        self.event(Anchor::Sunrise)
    }

    pub fn sunset(&self) -> Option<DateTime<Utc>> {
        self.event(Anchor::Sunset)
    }

    pub fn solar_noon(&self) -> DateTime<Utc> {
        match self {
            SolarDay::Regular { solar_noon, .. }
            | SolarDay::PolarDay { solar_noon }
            | SolarDay::PolarNight { solar_noon } => *solar_noon,
        }
    }

    /// Time the sun spends above the horizon.
    pub fn day_length(&self) -> Duration {
        match self {
            SolarDay::Regular {
                sunrise, sunset, ..
            } => *sunset - *sunrise,
            SolarDay::PolarDay { .. } => Duration::days(1),
            SolarDay::PolarNight { .. } => Duration::zero(),
        }
    }
}

/// Equation of time (minutes) and declination (radians) for an instant.
#[derive(Debug, Clone, Copy)]
struct SolarGeometry {
    equation_of_time: f64,
    declination: f64,
}

fn days_in_year(year: i32) -> f64 {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366.0
    } else {
        365.0
    }
}

impl SolarGeometry {
    /// Evaluate at `hour` (UTC, fractional) of `date`.
    fn at(date: NaiveDate, hour: f64) -> Self {
        let gamma = 2.0 * PI / days_in_year(date.year())
            * (f64::from(date.ordinal()) - 1.0 + (hour - 12.0) / 24.0);

        let equation_of_time = 229.18
            * (0.000075 + 0.001868 * gamma.cos()
                - 0.032077 * gamma.sin()
                - 0.014615 * (2.0 * gamma).cos()
                - 0.040849 * (2.0 * gamma).sin());

        let declination = 0.006918 - 0.399912 * gamma.cos() + 0.070257 * gamma.sin()
            - 0.006758 * (2.0 * gamma).cos()
            + 0.000907 * (2.0 * gamma).sin()
            - 0.002697 * (3.0 * gamma).cos()
            + 0.00148 * (3.0 * gamma).sin();

        Self {
            equation_of_time,
            declination,
        }
    }
}

fn utc_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn hours_after_midnight(instant: DateTime<Utc>) -> f64 {
    f64::from(instant.num_seconds_from_midnight()) / 3600.0
}

fn minutes(value: f64) -> Duration {
    Duration::milliseconds((value * 60_000.0).round() as i64)
}

/// Sunrise and sunset at `coordinate` on `date`.
///
/// The date is the coordinate's mean solar day: events are those around
/// `12:00 - longitude/15h` UTC. A locale whose timezone runs far ahead of or
/// behind its longitude should use [`sun_times_around`] with its own local
/// noon instead, which is what [`Locale::solar_day`](super::Locale::solar_day)
/// does.
pub fn sun_times(coordinate: &Coordinate, date: NaiveDate) -> SolarDay {
    let mean_noon = utc_midnight(date) + minutes(720.0 - 4.0 * coordinate.longitude());
    sun_times_around(coordinate, mean_noon)
}

/// Sunrise and sunset of the solar day whose noon is closest to `reference`.
pub fn sun_times_around(coordinate: &Coordinate, reference: DateTime<Utc>) -> SolarDay {
    let latitude = coordinate.latitude().to_radians();
    let longitude = coordinate.longitude();
    let geometry = SolarGeometry::at(reference.date_naive(), hours_after_midnight(reference));

    // Solar noon on the reference's UTC date may lie on the neighbouring
    // day; shift by whole days to the one nearest the reference.
    let mut solar_noon = utc_midnight(reference.date_naive())
        + minutes(720.0 - 4.0 * longitude - geometry.equation_of_time);
    let day = Duration::seconds(SECONDS_PER_DAY);
    while solar_noon - reference > day / 2 {
        solar_noon -= day;
    }
    while reference - solar_noon > day / 2 {
        solar_noon += day;
    }

    let cos_hour_angle = SUNRISE_ZENITH.to_radians().cos()
        / (latitude.cos() * geometry.declination.cos())
        - latitude.tan() * geometry.declination.tan();

    // No hour angle reaches the sunrise zenith: the sun stays on one side
    if cos_hour_angle > 1.0 {
        return SolarDay::PolarNight { solar_noon };
    }
    if cos_hour_angle < -1.0 {
        return SolarDay::PolarDay { solar_noon };
    }

    // Four minutes of time per degree of hour angle
    let half_day = minutes(4.0 * cos_hour_angle.acos().to_degrees());
    SolarDay::Regular {
        sunrise: solar_noon - half_day,
        solar_noon,
        sunset: solar_noon + half_day,
    }
}

/// Elevation of the sun's centre above the horizon at `instant`, in degrees.
///
/// No refraction correction. The hour angle is the Earth's angular velocity
/// over one solar day times the seconds since local solar noon.
pub fn solar_elevation(coordinate: &Coordinate, instant: DateTime<Utc>, kernel: &Kernel) -> f64 {
    let latitude = coordinate.latitude().to_radians();
    let hour = hours_after_midnight(instant);
    let geometry = SolarGeometry::at(instant.date_naive(), hour);

    // True solar time in minutes
    let true_solar_time =
        hour * 60.0 + geometry.equation_of_time + 4.0 * coordinate.longitude();
    let seconds_from_noon = true_solar_time * 60.0 - (SECONDS_PER_DAY / 2) as f64;
    let hour_angle = kernel.angular_velocity(Duration::seconds(SECONDS_PER_DAY))
        * seconds_from_noon;

    let cos_zenith = latitude.sin() * geometry.declination.sin()
        + latitude.cos() * geometry.declination.cos() * hour_angle.to_radians().cos();

    90.0 - cos_zenith.clamp(-1.0, 1.0).acos().to_degrees()
}
