//! Application-wide constants.
//!
//! Physical constants, configuration defaults and exit codes live here so the
//! rest of the crate refers to them by name.

// # Physical constants

/// Universal gravitational constant (m³ kg⁻¹ s⁻²).
pub const G: f64 = 6.67408e-11;

/// Astronomical unit, the semi-major axis of Earth's orbit (m).
pub const AU: f64 = 1.495_978_707e11;

/// Eccentricity of Earth's orbit.
pub const EARTH_ECCENTRICITY: f64 = 0.016_7086;

/// Mass of the Sun (kg).
pub const SOLAR_MASS: f64 = 1.988_47e30;

/// Mass of the Earth (kg).
pub const EARTH_MASS: f64 = 5.972_2e24;

/// Day of year (1-based) of Earth's perihelion, close enough for a
/// first-order distance estimate.
pub const PERIHELION_DAY_OF_YEAR: u32 = 3;

/// Seconds in a mean solar day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Zenith angle of the sun's centre at apparent sunrise/sunset, including
/// refraction and the solar disc radius (degrees).
pub const SUNRISE_ZENITH: f64 = 90.833;

// # Configuration defaults

pub const DEFAULT_LOCALE_NAME: &str = "Ivybridge";
pub const DEFAULT_LATITUDE: f64 = 50.392189;
pub const DEFAULT_LONGITUDE: f64 = -3.941355;

pub const CONFIG_DIR_NAME: &str = "astronomical";
pub const CONFIG_FILE_NAME: &str = "astronomical.toml";

/// Largest alarm offset accepted from configuration (minutes either way).
pub const MAXIMUM_OFFSET_MINUTES: i64 = 7 * 24 * 60;

// # Display

pub const TIME_FORMAT: &str = "%H:%M";
pub const TIME_FORMAT_SECONDS: &str = "%H:%M:%S";

// # Exit codes

pub const EXIT_FAILURE: i32 = 1;
