//! # Astronomical Library
//!
//! Sun, time and alarm services for a locale on Earth, built on a small
//! Newtonian/Keplerian physics kernel.
//!
//! This library exists to enable testing of the internals and provide clean separation
//! between CLI dispatch (main.rs) and application logic.
//!
//! ## Architecture
//!
//! - **Physics**: `physics` kernel functions, plus the traced `Kernel` facade
//! - **Geographic**: `geo` coordinates, locales, sun times and timezone lookup
//! - **Requirements**: `requirements` alarm rules anchored on sunrise or sunset
//! - **Services**: `services` for the sun, time and alarms reports
//! - **Configuration**: `config` module for the TOML locale and alarm settings
//! - **Infrastructure**: argument parsing, logging, the time source and constants

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod config;
pub mod constants;
pub mod error;
pub mod geo;
pub mod physics;
pub mod requirements;
pub mod services;
pub mod time_source;
