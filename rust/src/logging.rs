//! Logging macros for the planner with verbosity level control.
//!
//! Nothing is formatted when the active level is below the macro's level.
//! Levels:
//! - `Silent`: nothing
//! - `Changes`: sessions created, state commands applied
//! - `Checks`: assignments skipped and why
//! - `Debug`: sort keys and day offsets

/// How much the scheduler and state commands report on stderr.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verbosity {
    #[default]
    Silent = 0,
    Changes = 1,
    Checks = 2,
    Debug = 3,
}

impl Verbosity {
    /// Map a numeric level to a verbosity. Anything above 3 is `Debug`.
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Self::Silent,
            1 => Self::Changes,
            2 => Self::Checks,
            _ => Self::Debug,
        }
    }

    pub fn level(self) -> u8 {
        self as u8
    }
}

/// Log at CHANGES level.
///
/// Used for: generated sessions, applied schedules.
#[macro_export]
macro_rules! log_changes {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::Verbosity::Changes {
            eprintln!($($arg)*);
        }
    };
}

/// Log at CHECKS level.
///
/// Used for: completed assignments skipped, zero-session assignments.
#[macro_export]
macro_rules! log_checks {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::Verbosity::Checks {
            eprintln!($($arg)*);
        }
    };
}

/// Log at DEBUG level.
///
/// Used for: sort keys, per-session day offsets.
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::Verbosity::Debug {
            eprintln!($($arg)*);
        }
    };
}
