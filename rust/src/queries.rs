//! Read-only views over the application state for the dashboard, course
//! list and calendar.

use chrono::{Days, NaiveDate};
use rustc_hash::FxHashSet;

use crate::models::{Assignment, Course, StudySession};
use crate::state::AppState;

/// Days ahead counted as an upcoming deadline.
pub const UPCOMING_WINDOW_DAYS: u64 = 7;

/// Summary numbers shown on the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_courses: usize,
    pub total_assignments: usize,
    pub completed_assignments: usize,
    /// Rounded percentage of completed assignments, 0 with no assignments.
    pub completion_rate: u32,
    /// Incomplete assignments due on or before today + 7 days.
    pub upcoming_deadlines: usize,
    pub today_sessions: usize,
}

/// Per-course assignment summary for the course list.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseStats<'a> {
    pub assignments: Vec<&'a Assignment>,
    /// Incomplete assignments due today or later.
    pub upcoming: usize,
    pub completed: usize,
}

/// Completion of the sessions planned for one day.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DayProgress {
    pub completed: usize,
    pub total: usize,
    /// Rounded percentage, 0 when the day has no sessions.
    pub percent: u32,
}

fn rounded_percent(part: usize, whole: usize) -> u32 {
    if whole > 0 {
        (part as f64 / whole as f64 * 100.0).round() as u32
    } else {
        0
    }
}

impl AppState {
    pub fn sessions_on(&self, date: NaiveDate) -> Vec<&StudySession> {
        self.study_sessions.iter().filter(|s| s.date == date).collect()
    }

    /// Today's sessions ordered by start time.
    pub fn todays_sessions(&self, today: NaiveDate) -> Vec<&StudySession> {
        let mut sessions = self.sessions_on(today);
        sessions.sort_by_key(|s| s.start_time);
        sessions
    }

    /// Every session ordered by date. Sessions on the same date keep their
    /// stored order.
    pub fn sessions_by_date(&self) -> Vec<&StudySession> {
        let mut sessions: Vec<&StudySession> = self.study_sessions.iter().collect();
        sessions.sort_by_key(|s| s.date);
        sessions
    }

    pub fn todays_progress(&self, today: NaiveDate) -> DayProgress {
        let sessions = self.sessions_on(today);
        let completed = sessions.iter().filter(|s| s.completed).count();
        DayProgress {
            completed,
            total: sessions.len(),
            percent: rounded_percent(completed, sessions.len()),
        }
    }

    pub fn course_stats(&self, course_id: &str, today: NaiveDate) -> CourseStats<'_> {
        let assignments: Vec<&Assignment> = self
            .assignments
            .iter()
            .filter(|a| a.course_id == course_id)
            .collect();
        let upcoming = assignments
            .iter()
            .filter(|a| !a.completed && a.due_date >= today)
            .count();
        let completed = assignments.iter().filter(|a| a.completed).count();
        CourseStats {
            assignments,
            upcoming,
            completed,
        }
    }

    /// Dates carrying at least one session, for calendar markers.
    pub fn session_dates(&self) -> FxHashSet<NaiveDate> {
        self.study_sessions.iter().map(|s| s.date).collect()
    }

    /// Incomplete assignments by due date, soonest first, at most `limit`.
    pub fn upcoming_deadlines(&self, limit: usize) -> Vec<&Assignment> {
        let mut pending: Vec<&Assignment> =
            self.assignments.iter().filter(|a| !a.completed).collect();
        pending.sort_by_key(|a| a.due_date);
        pending.truncate(limit);
        pending
    }

    pub fn assignment_for(&self, session: &StudySession) -> Option<&Assignment> {
        self.assignment(&session.assignment_id)
    }

    pub fn course_for(&self, assignment: &Assignment) -> Option<&Course> {
        self.course(&assignment.course_id)
    }

    pub fn dashboard_stats(&self, today: NaiveDate) -> DashboardStats {
        let total_assignments = self.assignments.len();
        let completed_assignments = self.assignments.iter().filter(|a| a.completed).count();
        let horizon = today
            .checked_add_days(Days::new(UPCOMING_WINDOW_DAYS))
            .unwrap_or(NaiveDate::MAX);
        let upcoming_deadlines = self
            .assignments
            .iter()
            .filter(|a| !a.completed && a.due_date <= horizon)
            .count();
        DashboardStats {
            total_courses: self.courses.len(),
            total_assignments,
            completed_assignments,
            completion_rate: rounded_percent(completed_assignments, total_assignments),
            upcoming_deadlines,
            today_sessions: self.sessions_on(today).len(),
        }
    }
}
