//! System clock

use chrono::{Local, NaiveDateTime};

use crate::domain::ports::Clock;

/// Local wall-clock time
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
