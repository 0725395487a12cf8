use chrono::Duration;
use proptest::prelude::*;

use astronomical::constants::G;
use astronomical::error::DomainError;
use astronomical::physics::{
    a_sin_theta, angular_velocity, duration_as_secs_f64, gravitational_force, law_of_orbits,
    law_of_periods, orbital_distance, semi_major_axis_from_period,
};

fn relative_eq(a: f64, b: f64, tolerance: f64) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() <= tolerance * a.abs().max(b.abs())
}

/// Masses from asteroids to stars
fn mass_strategy() -> impl Strategy<Value = f64> {
    1e15f64..1e31
}

/// Distances from low orbit to the outer solar system
fn distance_strategy() -> impl Strategy<Value = f64> {
    1e6f64..1e13
}

proptest! {
    #[test]
    fn test_gravitational_force_symmetric(
        major in mass_strategy(),
        minor in mass_strategy(),
        r in distance_strategy()
    ) {
        let forward = gravitational_force(major, minor, r).unwrap();
        let backward = gravitational_force(minor, major, r).unwrap();
        prop_assert!(relative_eq(forward, backward, 1e-12));
        prop_assert!(forward > 0.0);
    }

    #[test]
    fn test_gravitational_force_inverse_square(
        major in mass_strategy(),
        minor in mass_strategy(),
        r in distance_strategy()
    ) {
        let near = gravitational_force(major, minor, r).unwrap();
        let far = gravitational_force(major, minor, 2.0 * r).unwrap();
        prop_assert!(relative_eq(near, 4.0 * far, 1e-12));
        prop_assert!(relative_eq(near, G * major * minor / (r * r), 1e-12));
    }

    #[test]
    fn test_zero_separation_always_rejected(
        major in mass_strategy(),
        minor in mass_strategy()
    ) {
        prop_assert_eq!(
            gravitational_force(major, minor, 0.0),
            Err(DomainError::ZeroSeparation)
        );
    }

    #[test]
    fn test_law_of_orbits_formula(a in 1.0f64..1e13, e in 0.0f64..1.0) {
        let (aphelion, perihelion) = law_of_orbits(a, e);
        prop_assert!(relative_eq(aphelion, a * (1.0 + e), 1e-12));
        prop_assert!(relative_eq(perihelion, a * (1.0 - e), 1e-12));
        prop_assert!(aphelion >= perihelion);
        // The semi-major axis is the mean of the apsides
        prop_assert!(relative_eq((aphelion + perihelion) / 2.0, a, 1e-12));
    }

    #[test]
    fn test_law_of_periods_round_trip(
        major in 1e20f64..1e31,
        minor in 1e10f64..1e25,
        a in 1e7f64..1e13
    ) {
        let period = law_of_periods(major, minor, a).unwrap();
        let recovered = semi_major_axis_from_period(major, minor, period).unwrap();
        prop_assert!(relative_eq(recovered, a, 1e-6));
    }

    #[test]
    fn test_law_of_periods_grows_with_distance(
        major in 1e20f64..1e31,
        a in 1e7f64..1e12
    ) {
        let inner = law_of_periods(major, 0.0, a).unwrap();
        let outer = law_of_periods(major, 0.0, 4.0 * a).unwrap();
        // T ∝ a^(3/2), so four times the distance is eight times the period
        let ratio = duration_as_secs_f64(outer) / duration_as_secs_f64(inner);
        prop_assert!((ratio - 8.0).abs() < 1e-3);
    }

    #[test]
    fn test_angular_velocity_times_period_is_full_turn(seconds in 1i64..10_000_000_000) {
        let period = Duration::seconds(seconds);
        let velocity = angular_velocity(period);
        prop_assert!(relative_eq(velocity * seconds as f64, 360.0, 1e-12));
    }

    #[test]
    fn test_a_sin_theta_bounded(amplitude in -1e12f64..1e12, fraction in -10.0f64..10.0) {
        let value = a_sin_theta(amplitude, fraction);
        prop_assert!(value.abs() <= amplitude.abs() * (1.0 + 1e-12));
    }

    #[test]
    fn test_orbital_distance_between_apsides(
        a in 1.0f64..1e13,
        e in 0.0f64..0.99,
        fraction in 0.0f64..1.0
    ) {
        let distance = orbital_distance(a, e, fraction);
        let (aphelion, perihelion) = law_of_orbits(a, e);
        let slack = a * 1e-12;
        prop_assert!(distance >= perihelion - slack);
        prop_assert!(distance <= aphelion + slack);
    }
}
