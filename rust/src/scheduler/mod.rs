//! Study-session scheduler.
//!
//! Turns a snapshot of assignments into session proposals: incomplete
//! assignments are ordered by priority then due date, each one gets
//! `ceil(hours / session_hours)` sessions, and sessions are staggered
//! one day per sorted position starting from today.

mod core;
mod plan;

pub use core::{generate_schedule, plan_sessions, sessions_needed, StudyScheduler};
pub use plan::SessionPlan;
