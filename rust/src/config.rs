//! Configuration types for schedule generation.

use chrono::NaiveTime;
#[cfg(feature = "python")]
use pyo3::prelude::*;

use crate::logging::Verbosity;

const fn hour(h: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(h, 0, 0) {
        Some(t) => t,
        None => panic!("hour out of range"),
    }
}

/// Default start of every generated session (2 PM).
pub const DEFAULT_START_TIME: NaiveTime = hour(14);
/// Default end of every generated session (4 PM).
pub const DEFAULT_END_TIME: NaiveTime = hour(16);
/// Hours of study one session covers.
pub const DEFAULT_SESSION_HOURS: f64 = 2.0;

/// Session sizing and placement settings for the scheduler.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug, PartialEq)]
pub struct SchedulingConfig {
    /// Hours of work one session covers; sessions needed = ceil(hours / this)
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub session_hours: f64,
    /// Time of day every session starts
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub start_time: NaiveTime,
    /// Time of day every session ends
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub end_time: NaiveTime,
    /// Logging verbosity for scheduler decisions
    pub verbosity: Verbosity,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            session_hours: DEFAULT_SESSION_HOURS,
            start_time: DEFAULT_START_TIME,
            end_time: DEFAULT_END_TIME,
            verbosity: Verbosity::Silent,
        }
    }
}

impl SchedulingConfig {
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }
}
