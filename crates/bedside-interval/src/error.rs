use jiff::civil::DateTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntervalError {
    #[error("End date/time must be after the start date/time (start {start}, end {end}).")]
    EndBeforeStart { start: DateTime, end: DateTime },

    #[error("hour {0} is outside 0-23")]
    InvalidHour(u8),

    #[error("minute {0} is outside 0-59")]
    InvalidMinute(u8),

    #[error("cannot parse '{input}' as a date and time (expected YYYY-MM-DD HH:MM): {source}")]
    Parse {
        input: String,
        #[source]
        source: jiff::Error,
    },
}
