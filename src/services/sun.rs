//! Sun service: today's solar events plus where the Earth is in its orbit.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use std::fmt;

use super::{Service, format_hours_minutes};
use crate::constants::{PERIHELION_DAY_OF_YEAR, TIME_FORMAT};
use crate::error::DomainError;
use crate::geo::{Locale, SolarDay, solar_elevation};
use crate::physics::{Kernel, OrbitalParameters, duration_as_secs_f64};

/// Solar description of a locale at its current instant.
#[derive(Debug, Clone)]
pub struct SunService {
    locale: Locale,
    solar_day: SolarDay,
    elevation: f64,
    distance: f64,
    gravitational_force: f64,
    orbital_period: Duration,
    orbital_velocity: f64,
    aphelion: f64,
    perihelion: f64,
}

// Most recent perihelion at or before `now`, at midnight UTC.
fn last_perihelion(now: DateTime<Utc>) -> DateTime<Utc> {
    let at = |year: i32| {
        NaiveDate::from_yo_opt(year, PERIHELION_DAY_OF_YEAR)
            .map(|date| date.and_time(NaiveTime::MIN).and_utc())
    };
    match at(now.year()) {
        Some(perihelion) if perihelion <= now => perihelion,
        _ => at(now.year() - 1).unwrap_or(now),
    }
}

impl SunService {
    /// Compute everything for `locale` through `kernel`.
    ///
    /// # Errors
    /// [`DomainError`] if the orbital parameters are unphysical, which for
    /// the built-in Earth/Sun constants does not happen.
    pub fn new(locale: Locale, kernel: &Kernel) -> Result<Self, DomainError> {
        Self::with_orbit(locale, kernel, OrbitalParameters::earth())
    }

    pub fn with_orbit(
        locale: Locale,
        kernel: &Kernel,
        orbit: OrbitalParameters,
    ) -> Result<Self, DomainError> {
        let solar_day = locale.solar_day();
        let elevation = solar_elevation(&locale.coordinate, locale.now, kernel);

        let orbital_period = kernel.law_of_periods(
            orbit.major_mass,
            orbit.minor_mass,
            orbit.semi_major_axis,
        )?;
        let (aphelion, perihelion) =
            kernel.law_of_orbits(orbit.semi_major_axis, orbit.eccentricity);

        let since_perihelion = locale.now - last_perihelion(locale.now);
        let fraction = duration_as_secs_f64(since_perihelion) / duration_as_secs_f64(orbital_period);
        let distance = kernel.orbital_distance(orbit.semi_major_axis, orbit.eccentricity, fraction);
        let gravitational_force =
            kernel.gravitational_force(orbit.major_mass, orbit.minor_mass, distance)?;
        let orbital_velocity = kernel.angular_velocity(orbital_period);

        Ok(Self {
            locale,
            solar_day,
            elevation,
            distance,
            gravitational_force,
            orbital_period,
            orbital_velocity,
            aphelion,
            perihelion,
        })
    }

    pub fn solar_day(&self) -> &SolarDay {
        &self.solar_day
    }

    /// Current elevation of the sun in degrees.
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Current Earth–Sun distance in metres.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn orbital_period(&self) -> Duration {
        self.orbital_period
    }

    fn local_time(&self, instant: DateTime<Utc>) -> String {
        self.locale.local(instant).format(TIME_FORMAT).to_string()
    }
}

impl fmt::Display for SunService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Sun in {} [{}] on {}",
            self.locale.coordinate,
            self.locale.timezone.name(),
            self.locale.today()
        )?;

        match self.solar_day {
            SolarDay::Regular {
                sunrise, sunset, ..
            } => {
                writeln!(f, "  Sunrise:     {}", self.local_time(sunrise))?;
                writeln!(f, "  Solar noon:  {}", self.local_time(self.solar_day.solar_noon()))?;
                writeln!(f, "  Sunset:      {}", self.local_time(sunset))?;
            }
            SolarDay::PolarDay { solar_noon } => {
                writeln!(f, "  Sunrise:     none, the sun stays up")?;
                writeln!(f, "  Solar noon:  {}", self.local_time(solar_noon))?;
                writeln!(f, "  Sunset:      none, the sun stays up")?;
            }
            SolarDay::PolarNight { solar_noon } => {
                writeln!(f, "  Sunrise:     none, the sun stays down")?;
                writeln!(f, "  Solar noon:  {}", self.local_time(solar_noon))?;
                writeln!(f, "  Sunset:      none, the sun stays down")?;
            }
        }

        writeln!(
            f,
            "  Day length:  {}",
            format_hours_minutes(self.solar_day.day_length())
        )?;
        writeln!(f, "  Elevation:   {:.1}°", self.elevation)?;
        writeln!(
            f,
            "  Distance:    {:.4e} m (perihelion {:.4e}, aphelion {:.4e})",
            self.distance, self.perihelion, self.aphelion
        )?;
        writeln!(f, "  Gravity:     {:.4e} N", self.gravitational_force)?;
        write!(
            f,
            "  Year:        {:.2} days at {:.4e} °/s",
            duration_as_secs_f64(self.orbital_period) / 86_400.0,
            self.orbital_velocity
        )
    }
}

impl Service for SunService {
    fn name(&self) -> &'static str {
        "sun"
    }
}
