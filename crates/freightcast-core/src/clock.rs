//! Wall-clock access for the record store.
//!
//! "Today" is always evaluated at read time, so stores hold a clock instead of
//! a cached date.

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

pub trait Clock: Send + Sync {
    /// Current local date and time
    fn now(&self) -> NaiveDateTime;

    /// Current calendar date
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Clock backed by the system's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        // Records carry second precision
        now.with_nanosecond(0).unwrap_or(now)
    }
}

/// Clock pinned to a fixed instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    pub fn at(date: NaiveDate, hour: u32, min: u32, sec: u32) -> Option<Self> {
        date.and_hms_opt(hour, min, sec).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
