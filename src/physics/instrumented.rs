//! Traced access to the physics kernel.
//!
//! [`traced`] records one DEBUG line naming the calculation, then runs it.
//! [`Kernel`] pairs a [`LogSink`] with every kernel function so callers get
//! the trace without the kernel itself knowing about logging.

use chrono::Duration;

use crate::error::DomainError;
use crate::logger::{Level, LogSink};

/// Record that `name` was invoked, then evaluate `calculation`.
///
/// The sink sees the record before the calculation runs; the result is
/// passed through untouched.
pub fn traced<T>(sink: &dyn LogSink, name: &str, calculation: impl FnOnce() -> T) -> T {
    sink.record(Level::Debug, &format!("Calculation \"{name}\" invoked."));
    calculation()
}

/// Physics kernel bound to a log sink.
#[derive(Clone, Copy)]
pub struct Kernel<'a> {
    sink: &'a dyn LogSink,
}

impl<'a> Kernel<'a> {
    pub fn new(sink: &'a dyn LogSink) -> Self {
        Self { sink }
    }

    pub fn angular_velocity(&self, period: Duration) -> f64 {
        traced(self.sink, "angular_velocity", || super::angular_velocity(period))
    }

    pub fn a_sin_theta(&self, amplitude: f64, fraction_of_revolution: f64) -> f64 {
        traced(self.sink, "a_sin_theta", || {
            super::a_sin_theta(amplitude, fraction_of_revolution)
        })
    }

    pub fn gravitational_force(
        &self,
        major_mass: f64,
        minor_mass: f64,
        r: f64,
    ) -> Result<f64, DomainError> {
        traced(self.sink, "gravitational_force", || {
            super::gravitational_force(major_mass, minor_mass, r)
        })
    }

    pub fn law_of_orbits_aphelion(&self, a: f64, e: f64) -> f64 {
        traced(self.sink, "law_of_orbits_aphelion", || {
            super::law_of_orbits_aphelion(a, e)
        })
    }

    pub fn law_of_orbits_perihelion(&self, a: f64, e: f64) -> f64 {
        traced(self.sink, "law_of_orbits_perihelion", || {
            super::law_of_orbits_perihelion(a, e)
        })
    }

    /// Traces itself and both of its components.
    pub fn law_of_orbits(&self, a: f64, e: f64) -> (f64, f64) {
        traced(self.sink, "law_of_orbits", || {
            (
                self.law_of_orbits_aphelion(a, e),
                self.law_of_orbits_perihelion(a, e),
            )
        })
    }

    pub fn law_of_periods(
        &self,
        major_mass: f64,
        minor_mass: f64,
        a: f64,
    ) -> Result<Duration, DomainError> {
        traced(self.sink, "law_of_periods", || {
            super::law_of_periods(major_mass, minor_mass, a)
        })
    }

    pub fn orbital_distance(&self, a: f64, e: f64, fraction_since_perihelion: f64) -> f64 {
        traced(self.sink, "orbital_distance", || {
            super::orbital_distance(a, e, fraction_since_perihelion)
        })
    }
}
