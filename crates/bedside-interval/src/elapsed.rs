use std::fmt;

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::IntervalError;
use crate::moment::Moment;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// A non-negative duration split into whole days, hours and minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Elapsed {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub total_seconds: i64,
}

impl Elapsed {
    fn from_seconds(total_seconds: i64) -> Self {
        Self {
            days: total_seconds / SECONDS_PER_DAY,
            hours: (total_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            total_seconds,
        }
    }

    pub fn total_minutes(&self) -> i64 {
        self.total_seconds / SECONDS_PER_MINUTE
    }

    pub fn total_hours(&self) -> f64 {
        self.total_seconds as f64 / SECONDS_PER_HOUR as f64
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} days, {} hours, {} minutes",
            self.days, self.hours, self.minutes
        )
    }
}

/// Elapsed time from `start` to `end`. An end before the start is rejected.
pub fn elapsed_between(start: DateTime, end: DateTime) -> Result<Elapsed, IntervalError> {
    if end < start {
        tracing::debug!(%start, %end, "rejected interval with end before start");
        return Err(IntervalError::EndBeforeStart { start, end });
    }
    let span = end.duration_since(start);
    Ok(Elapsed::from_seconds(span.as_secs()))
}

/// [`elapsed_between`] for two picker moments.
pub fn elapsed_between_moments(start: &Moment, end: &Moment) -> Result<Elapsed, IntervalError> {
    elapsed_between(start.to_datetime()?, end.to_datetime()?)
}
