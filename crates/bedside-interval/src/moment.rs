use jiff::civil::{Date, DateTime, Time};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::IntervalError;

/// A date with an hour and a minute chosen independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Moment {
    pub date: Date,
    pub hour: u8,
    pub minute: u8,
}

impl Moment {
    pub fn new(date: Date, hour: u8, minute: u8) -> Self {
        Self { date, hour, minute }
    }

    pub fn to_datetime(&self) -> Result<DateTime, IntervalError> {
        if self.hour > 23 {
            return Err(IntervalError::InvalidHour(self.hour));
        }
        if self.minute > 59 {
            return Err(IntervalError::InvalidMinute(self.minute));
        }
        // Both values are range-checked above, so they fit in i8.
        let time = Time::constant(self.hour as i8, self.minute as i8, 0, 0);
        Ok(self.date.to_datetime(time))
    }
}

impl From<DateTime> for Moment {
    fn from(dt: DateTime) -> Self {
        Self {
            date: dt.date(),
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
        }
    }
}

/// Parse `YYYY-MM-DD HH:MM` (a `T` separator also works). Seconds, if
/// given, are dropped: moments have minute resolution.
pub fn parse_moment(input: &str) -> Result<Moment, IntervalError> {
    let trimmed = input.trim();
    let normalized = trimmed.replacen(' ', "T", 1);
    let dt: DateTime = normalized.parse().map_err(|source| IntervalError::Parse {
        input: trimmed.to_string(),
        source,
    })?;
    Ok(Moment::from(dt))
}
