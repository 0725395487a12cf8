//! Configuration validation functionality.
//!
//! Rejects values that would otherwise surface later as confusing numeric
//! errors: coordinates off the globe, unknown timezones and alarm offsets
//! too large to mean anything.

use anyhow::Result;
use chrono_tz::Tz;

use super::Config;
use crate::constants::*;

/// Validate every configured value
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(locale) = &config.locale {
        if let Some(name) = &locale.name
            && name.trim().is_empty()
        {
            anyhow::bail!("locale name must not be empty");
        }

        if let Some(lat) = locale.latitude
            && !(-90.0..=90.0).contains(&lat)
        {
            anyhow::bail!("latitude must be between -90 and 90 degrees (got {})", lat);
        }

        if let Some(lon) = locale.longitude
            && !(-180.0..=180.0).contains(&lon)
        {
            anyhow::bail!(
                "longitude must be between -180 and 180 degrees (got {})",
                lon
            );
        }

        if locale.latitude.is_some() != locale.longitude.is_some() {
            anyhow::bail!("locale needs both latitude and longitude, or neither");
        }

        if let Some(timezone) = &locale.timezone
            && timezone.parse::<Tz>().is_err()
        {
            anyhow::bail!("unknown timezone '{}'", timezone);
        }
    }

    for alarm in config.alarms.iter().flatten() {
        if alarm.label.trim().is_empty() {
            anyhow::bail!("alarm label must not be empty");
        }

        if !(-MAXIMUM_OFFSET_MINUTES..=MAXIMUM_OFFSET_MINUTES).contains(&alarm.offset_minutes) {
            anyhow::bail!(
                "offset_minutes of alarm '{}' ({}) must be between {} and {}",
                alarm.label,
                alarm.offset_minutes,
                -MAXIMUM_OFFSET_MINUTES,
                MAXIMUM_OFFSET_MINUTES
            );
        }
    }

    if let Some(path) = &config.log_file
        && path.as_os_str().is_empty()
    {
        anyhow::bail!("log_file must not be empty");
    }

    Ok(())
}
