//! Alarms service: requirements resolved against today's sun times.

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use std::fmt;

use super::Service;
use crate::constants::TIME_FORMAT;
use crate::geo::{Locale, SolarDay};
use crate::logger::{Level, LogSink};
use crate::requirements::{AlarmRule, Requirements};

/// A resolved alarm.
#[derive(Debug, Clone, PartialEq)]
pub struct Alarm {
    pub label: String,
    pub trigger: DateTime<Tz>,
    pub rule: AlarmRule,
}

/// Resolve every rule against `solar_day`, earliest trigger first.
///
/// Rules whose anchor does not happen (polar day or night) are skipped with
/// a WARNING through `sink`. Alarms with equal triggers keep rule order.
pub fn schedule(
    requirements: &Requirements,
    solar_day: &SolarDay,
    timezone: Tz,
    sink: &dyn LogSink,
) -> Vec<Alarm> {
    let mut alarms: Vec<Alarm> = requirements
        .into_iter()
        .filter_map(|rule| match solar_day.event(rule.anchor) {
            Some(event) => Some(Alarm {
                label: rule.label.clone(),
                trigger: (event + rule.offset).with_timezone(&timezone),
                rule: rule.clone(),
            }),
            None => {
                sink.record(
                    Level::Warning,
                    &format!(
                        "No {} today, skipping alarm '{}'",
                        rule.anchor, rule.label
                    ),
                );
                None
            }
        })
        .collect();

    alarms.sort_by_key(|alarm| alarm.trigger);
    alarms
}

#[derive(Debug, Clone)]
pub struct AlarmsService {
    location: String,
    date: NaiveDate,
    alarms: Vec<Alarm>,
}

impl AlarmsService {
    pub fn new(requirements: &Requirements, locale: &Locale, sink: &dyn LogSink) -> Self {
        let solar_day = locale.solar_day();
        Self {
            location: locale.coordinate.name().to_string(),
            date: locale.today(),
            alarms: schedule(requirements, &solar_day, locale.timezone, sink),
        }
    }

    pub fn alarms(&self) -> &[Alarm] {
        &self.alarms
    }
}

impl fmt::Display for AlarmsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alarms in {} on {}", self.location, self.date)?;
        if self.alarms.is_empty() {
            return write!(f, "\n  No alarms");
        }
        for alarm in &self.alarms {
            write!(
                f,
                "\n  {}  {} ({})",
                alarm.trigger.format(TIME_FORMAT),
                alarm.label,
                alarm.rule.offset_description()
            )?;
        }
        Ok(())
    }
}

impl Service for AlarmsService {
    fn name(&self) -> &'static str {
        "alarms"
    }
}
