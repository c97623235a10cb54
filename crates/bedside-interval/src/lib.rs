//! bedside-interval
//!
//! Elapsed time between two bedside timestamps. Each timestamp is a
//! calendar date plus an hour and a minute picked separately; both are
//! civil (zone-less) date-times, so the difference is plain calendar
//! subtraction.

pub mod elapsed;
pub mod error;
pub mod moment;

pub use elapsed::{Elapsed, elapsed_between, elapsed_between_moments};
pub use moment::{Moment, parse_moment};
