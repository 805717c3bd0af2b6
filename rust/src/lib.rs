//! Study planner core: assignment records, application state, and the
//! study-session scheduler.
//!
//! The scheduler is a pure function from a snapshot of assignments to a list
//! of session proposals. Everything else here supports the application that
//! holds those records and calls it.

pub mod config;
pub mod ids;
pub mod logging;
pub mod models;
pub mod persist;
pub mod queries;
pub mod scheduler;
pub mod sorting;
pub mod state;
pub mod validation;

#[cfg(feature = "python")]
mod python;

pub use config::SchedulingConfig;
pub use ids::{IdAllocator, SequentialAllocator, UuidAllocator};
pub use logging::Verbosity;
pub use models::{
    Assignment, AssignmentUpdate, Course, CourseUpdate, InvalidPriority, NewAssignment,
    NewCourse, NewStudySession, Priority, StudySession, StudySessionUpdate, User,
};
pub use persist::{from_snapshot, to_snapshot, PersistError, STORAGE_KEY};
pub use queries::{CourseStats, DashboardStats, DayProgress};
pub use scheduler::{
    generate_schedule, plan_sessions, sessions_needed, SessionPlan, StudyScheduler,
};
pub use sorting::{compute_sort_key, sort_pending, SortKey};
pub use state::AppState;
pub use validation::ValidationError;
