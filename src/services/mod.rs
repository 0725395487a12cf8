//! Query services behind the CLI flags.
//!
//! Each service is built from a [`Locale`](crate::geo::Locale) (and, for
//! alarms, [`Requirements`](crate::requirements::Requirements)), does all of
//! its computation up front, and renders the result through `Display`.
//! Nothing is kept between invocations.

pub mod alarms;
pub mod sun;
pub mod time;

pub use alarms::{Alarm, AlarmsService, schedule};
pub use sun::SunService;
pub use time::TimeService;

use std::fmt;

/// A service whose answer is rendered as text.
pub trait Service: fmt::Display {
    /// Name used in diagnostics, matching the CLI flag.
    fn name(&self) -> &'static str;
}

/// Format a duration as `10h 27m`.
pub(crate) fn format_hours_minutes(duration: chrono::Duration) -> String {
    let minutes = duration.num_minutes();
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}
