//! Typed errors for the computational core.
//!
//! Configuration and CLI failures travel as `anyhow::Error` with context;
//! the types here are for callers that want to match on what went wrong.

use thiserror::Error;

/// Physically invalid input to a closed-form formula.
///
/// Retrying with the same input cannot succeed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("separation distance between bodies is zero")]
    ZeroSeparation,

    #[error("combined mass of the bodies must be positive (got {total} kg)")]
    NonPositiveMass { total: f64 },

    #[error("semi-major axis must not be negative (got {a} m)")]
    NegativeSemiMajorAxis { a: f64 },

    #[error("orbital period of {seconds} s cannot be represented as a duration")]
    PeriodOutOfRange { seconds: f64 },
}

/// Coordinate outside the valid geographic range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude { value: f64 },

    #[error("invalid longitude {value}° (must be between -180° and +180°)")]
    InvalidLongitude { value: f64 },
}
