//! Alarm rules anchored to solar events.

use chrono::Duration;
use std::fmt;

use crate::geo::Anchor;

/// One alarm: `offset` before (negative) or after (positive) `anchor`.
#[derive(Debug, Clone, PartialEq)]
pub struct AlarmRule {
    pub label: String,
    pub anchor: Anchor,
    pub offset: Duration,
}

impl AlarmRule {
    pub fn new(label: impl Into<String>, anchor: Anchor, offset: Duration) -> Self {
        Self {
            label: label.into(),
            anchor,
            offset,
        }
    }

    /// The rule without its label, e.g. `sunrise -30min`.
    pub fn offset_description(&self) -> String {
        let minutes = self.offset.num_minutes();
        let sign = if minutes < 0 { '-' } else { '+' };
        format!("{} {sign}{}min", self.anchor, minutes.abs())
    }
}

impl fmt::Display for AlarmRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.offset_description())
    }
}

/// Ordered alarm rules. Labels need not be unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Requirements {
    rules: Vec<AlarmRule>,
}

impl Requirements {
    pub fn new(rules: Vec<AlarmRule>) -> Self {
        Self { rules }
    }

    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn push(&mut self, rule: AlarmRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[AlarmRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

impl Default for Requirements {
    /// Wake half an hour before sunrise, wind down two and a half hours
    /// after sunset.
    fn default() -> Self {
        Self::new(vec![
            AlarmRule::new("wake", Anchor::Sunrise, Duration::minutes(-30)),
            AlarmRule::new("wind down", Anchor::Sunset, Duration::minutes(150)),
        ])
    }
}

impl<'a> IntoIterator for &'a Requirements {
    type Item = &'a AlarmRule;
    type IntoIter = std::slice::Iter<'a, AlarmRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
