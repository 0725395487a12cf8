//! Classical mechanics for two-body orbits.
//!
//! Every function here is pure. Diagnostic tracing is layered on top by
//! [`instrumented::Kernel`], which the services use; call these directly when
//! no trace is wanted.
//!
//! Units are SI throughout (metres, kilograms, seconds, newtons), with the
//! exception of [`angular_velocity`], which answers in degrees per second.

pub mod instrumented;

pub use instrumented::{Kernel, traced};

use chrono::Duration;
use std::f64::consts::PI;

use crate::constants::G;
use crate::error::DomainError;

/// Total length of a duration in seconds, keeping sub-second precision.
pub fn duration_as_secs_f64(duration: Duration) -> f64 {
    duration.num_seconds() as f64 + f64::from(duration.subsec_nanos()) * 1e-9
}

/// Build a duration from floating seconds.
///
/// Returns `None` for non-finite values or spans beyond what
/// [`chrono::Duration`] can hold.
pub fn duration_from_secs_f64(seconds: f64) -> Option<Duration> {
    if !seconds.is_finite() || seconds.abs() >= i64::MAX as f64 / 1_000.0 {
        return None;
    }
    let whole = seconds.trunc();
    let mut secs = whole as i64;
    let mut nanos = ((seconds - whole) * 1e9).round() as i64;
    // Duration::new wants the nanosecond part in 0..1e9
    if nanos < 0 {
        secs -= 1;
        nanos += 1_000_000_000;
    }
    if nanos >= 1_000_000_000 {
        secs += 1;
        nanos -= 1_000_000_000;
    }
    Duration::new(secs, nanos as u32)
}

// # Conversions

/// Angular velocity of a body with rotation (or orbit) period `period`.
///
/// Answers in degrees per second. A zero period yields zero rather than
/// dividing by zero.
pub fn angular_velocity(period: Duration) -> f64 {
    let seconds = duration_as_secs_f64(period);
    if seconds == 0.0 {
        0.0
    } else {
        360.0 / seconds
    }
}

/// `a · sin(θ)` where θ is given as a fraction of one full revolution.
pub fn a_sin_theta(amplitude: f64, fraction_of_revolution: f64) -> f64 {
    amplitude * (fraction_of_revolution * 2.0 * PI).sin()
}

// # Laws

/// Newton's law of universal gravitation, `F = G·M·m / r²`.
///
/// # Errors
/// [`DomainError::ZeroSeparation`] when `r` is zero.
pub fn gravitational_force(major_mass: f64, minor_mass: f64, r: f64) -> Result<f64, DomainError> {
    if r == 0.0 {
        return Err(DomainError::ZeroSeparation);
    }
    Ok(G * (major_mass * minor_mass) / r.powi(2))
}

/// Aphelion distance from Kepler's law of orbits, `a(1 + e)`.
pub fn law_of_orbits_aphelion(a: f64, e: f64) -> f64 {
    a * (1.0 + e)
}

/// Perihelion distance from Kepler's law of orbits, `a(1 − e)`.
pub fn law_of_orbits_perihelion(a: f64, e: f64) -> f64 {
    a * (1.0 - e)
}

/// Kepler's law of orbits as `(aphelion, perihelion)`.
pub fn law_of_orbits(a: f64, e: f64) -> (f64, f64) {
    (law_of_orbits_aphelion(a, e), law_of_orbits_perihelion(a, e))
}

fn combined_mass(major_mass: f64, minor_mass: f64) -> Result<f64, DomainError> {
    let total = major_mass + minor_mass;
    if total <= 0.0 {
        return Err(DomainError::NonPositiveMass { total });
    }
    Ok(total)
}

/// Kepler's law of periods, `T = √(4π²a³ / G(M + m))`.
///
/// # Errors
/// [`DomainError::NonPositiveMass`] when `M + m` is not positive,
/// [`DomainError::NegativeSemiMajorAxis`] when `a < 0` and
/// [`DomainError::PeriodOutOfRange`] when `T` does not fit a `Duration`.
pub fn law_of_periods(major_mass: f64, minor_mass: f64, a: f64) -> Result<Duration, DomainError> {
    let total = combined_mass(major_mass, minor_mass)?;
    if a < 0.0 {
        return Err(DomainError::NegativeSemiMajorAxis { a });
    }
    let t_sqrd = ((4.0 * PI.powi(2)) / (G * total)) * a.powi(3);
    let seconds = t_sqrd.sqrt();
    duration_from_secs_f64(seconds).ok_or(DomainError::PeriodOutOfRange { seconds })
}

/// Semi-major axis for a given period, the inverse of [`law_of_periods`].
///
/// # Errors
/// [`DomainError::NonPositiveMass`] when `M + m` is not positive.
pub fn semi_major_axis_from_period(
    major_mass: f64,
    minor_mass: f64,
    period: Duration,
) -> Result<f64, DomainError> {
    let total = combined_mass(major_mass, minor_mass)?;
    let seconds = duration_as_secs_f64(period);
    Ok((G * total * seconds.powi(2) / (4.0 * PI.powi(2))).cbrt())
}

/// First-order distance between the bodies, `a(1 − e·cos M)`.
///
/// `fraction_since_perihelion` is the mean anomaly as a fraction of one
/// orbit. The cosine is a sine a quarter revolution ahead.
pub fn orbital_distance(a: f64, e: f64, fraction_since_perihelion: f64) -> f64 {
    a - a_sin_theta(a * e, fraction_since_perihelion + 0.25)
}

/// Elements of a two-body orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalParameters {
    /// Semi-major axis (m)
    pub semi_major_axis: f64,
    /// Eccentricity, 0 for a circle
    pub eccentricity: f64,
    /// Mass of the major body (kg)
    pub major_mass: f64,
    /// Mass of the minor body (kg)
    pub minor_mass: f64,
}

impl OrbitalParameters {
    /// Earth around the Sun.
    pub fn earth() -> Self {
        use crate::constants::{AU, EARTH_ECCENTRICITY, EARTH_MASS, SOLAR_MASS};
        Self {
            semi_major_axis: AU,
            eccentricity: EARTH_ECCENTRICITY,
            major_mass: SOLAR_MASS,
            minor_mass: EARTH_MASS,
        }
    }

    pub fn aphelion(&self) -> f64 {
        law_of_orbits_aphelion(self.semi_major_axis, self.eccentricity)
    }

    pub fn perihelion(&self) -> f64 {
        law_of_orbits_perihelion(self.semi_major_axis, self.eccentricity)
    }

    pub fn period(&self) -> Result<Duration, DomainError> {
        law_of_periods(self.major_mass, self.minor_mass, self.semi_major_axis)
    }
}
