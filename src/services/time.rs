//! Time service: the wall clock at a locale.

use std::fmt;

use super::Service;
use crate::geo::{Locale, current_time_descriptor};

#[derive(Debug, Clone)]
pub struct TimeService {
    locale: Locale,
}

impl TimeService {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl fmt::Display for TimeService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&current_time_descriptor(&self.locale))
    }
}

impl Service for TimeService {
    fn name(&self) -> &'static str {
        "time"
    }
}
