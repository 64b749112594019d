//! Wall-clock source. Everything that depends on "now" takes a `Clock`
//! so tests and the hidden `--now` flag can pin the time.

use chrono::{Local, NaiveDate, NaiveDateTime};

pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Local system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Resolve the clock from an optional `--now` override.
pub fn from_override(now: Option<NaiveDateTime>) -> Box<dyn Clock> {
    match now {
        Some(instant) => Box::new(FixedClock(instant)),
        None => Box::new(SystemClock),
    }
}
