//! Clock Port
//!
//! Source of the wall-clock time a release is labelled with.

use chrono::NaiveDateTime;

pub trait Clock: Send + Sync {
    /// Current local wall-clock time
    fn now(&self) -> NaiveDateTime;
}
