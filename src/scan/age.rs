use chrono::{DateTime, Utc};

use crate::humanize::Days;

/// Only files modified strictly before `threshold` are eligible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeGate {
    threshold: DateTime<Utc>,
    ignore_days: Days,
}

impl AgeGate {
    /// A window reaching past the earliest representable date clamps the
    /// threshold to that date, so no file is old enough.
    pub fn new(now: DateTime<Utc>, ignore_days: Days) -> Self {
        let threshold = now
            .checked_sub_signed(ignore_days.as_time_delta())
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        Self {
            threshold,
            ignore_days,
        }
    }

    pub fn threshold(&self) -> DateTime<Utc> {
        self.threshold
    }

    pub fn ignore_days(&self) -> Days {
        self.ignore_days
    }

    /// True when `modified` is old enough to reconcile.
    ///
    /// A file modified exactly at the threshold is still too young.
    pub fn is_old_enough(&self, modified: DateTime<Utc>) -> bool {
        modified < self.threshold
    }
}
