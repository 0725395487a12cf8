//! Timezone lookup for coordinates.

use chrono_tz::Tz;
use once_cell::sync::Lazy;
use tzf_rs::DefaultFinder;

// Building the finder decodes the bundled boundary data, so do it at most once.
static FINDER: Lazy<DefaultFinder> = Lazy::new(DefaultFinder::new);

/// IANA timezone containing the coordinate.
///
/// Open ocean resolves to an `Etc/GMT±N` zone. Names chrono-tz does not
/// know fall back to UTC with a warning.
pub fn determine_timezone_from_coordinates(latitude: f64, longitude: f64) -> Tz {
    let name = FINDER.get_tz_name(longitude, latitude);
    match name.parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            log_warning!("No timezone for ({latitude:.4}, {longitude:.4}), using UTC");
            Tz::UTC
        }
    }
}
