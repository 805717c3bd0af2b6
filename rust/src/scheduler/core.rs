//! Core greedy session placement.

use chrono::{Days, NaiveDate};

use crate::config::SchedulingConfig;
use crate::ids::IdAllocator;
use crate::models::{Assignment, StudySession};
use crate::sorting::{compute_sort_key, sort_pending};
use crate::{log_changes, log_checks, log_debug};

use super::plan::SessionPlan;

/// Number of sessions needed to cover `estimated_hours`, rounded up.
///
/// Non-positive, NaN or infinite ratios yield zero sessions. Effort is
/// validated by the caller, so this never signals an error.
pub fn sessions_needed(estimated_hours: f64, session_hours: f64) -> usize {
    let blocks = (estimated_hours / session_hours).ceil();
    if blocks.is_finite() && blocks > 0.0 {
        blocks as usize
    } else {
        0
    }
}

/// Greedy study-session scheduler over one snapshot of assignments.
///
/// Stateless apart from its borrowed inputs; it never mutates the
/// assignments and never stores the sessions it produces.
pub struct StudyScheduler<'a> {
    assignments: &'a [Assignment],
    today: NaiveDate,
    config: &'a SchedulingConfig,
}

impl<'a> StudyScheduler<'a> {
    pub fn new(
        assignments: &'a [Assignment],
        today: NaiveDate,
        config: &'a SchedulingConfig,
    ) -> Self {
        Self {
            assignments,
            today,
            config,
        }
    }

    /// Propose sessions without ids.
    ///
    /// The assignment at sorted position `i` gets sessions on days
    /// `today + i, today + i + 1, ...`, one per needed block. Different
    /// assignments may land on the same date.
    pub fn plan(&self) -> Vec<SessionPlan> {
        let verbosity = self.config.verbosity;

        for skipped in self.assignments.iter().filter(|a| a.completed) {
            log_checks!(verbosity, "  Skipping {}: already completed", skipped.id);
        }

        let pending = sort_pending(self.assignments);
        let mut plans = Vec::new();

        for (position, assignment) in pending.iter().enumerate() {
            let needed = sessions_needed(assignment.estimated_hours, self.config.session_hours);
            log_debug!(
                verbosity,
                "  {} at position {}: key={:?}, hours={}, sessions={}",
                assignment.id,
                position,
                compute_sort_key(assignment),
                assignment.estimated_hours,
                needed
            );
            if needed == 0 {
                log_checks!(
                    verbosity,
                    "  {} gets no sessions (estimated hours {})",
                    assignment.id,
                    assignment.estimated_hours
                );
            }

            for session_index in 0..needed {
                let day_offset = position + session_index;
                plans.push(SessionPlan {
                    assignment_id: assignment.id.clone(),
                    date: offset_date(self.today, day_offset),
                    start_time: self.config.start_time,
                    end_time: self.config.end_time,
                    day_offset,
                });
            }
        }

        plans
    }

    /// Propose sessions and give each a fresh id from `ids`.
    pub fn generate(&self, ids: &mut dyn IdAllocator) -> Vec<StudySession> {
        let sessions: Vec<StudySession> = self
            .plan()
            .into_iter()
            .map(|plan| plan.into_session(ids.next_id()))
            .collect();

        for session in &sessions {
            log_changes!(
                self.config.verbosity,
                "Session {} for {} on {} {}-{}",
                session.id,
                session.assignment_id,
                session.date,
                session.start_time.format("%H:%M"),
                session.end_time.format("%H:%M")
            );
        }
        log_changes!(
            self.config.verbosity,
            "Generated {} study sessions from {} assignments",
            sessions.len(),
            self.assignments.len()
        );

        sessions
    }
}

/// Propose id-less sessions for every incomplete assignment.
pub fn plan_sessions(
    assignments: &[Assignment],
    today: NaiveDate,
    config: &SchedulingConfig,
) -> Vec<SessionPlan> {
    StudyScheduler::new(assignments, today, config).plan()
}

/// Generate study sessions for every incomplete assignment.
///
/// Each call is a full regeneration: nothing is merged with previously
/// generated sessions, and every session gets a new id.
pub fn generate_schedule(
    assignments: &[Assignment],
    today: NaiveDate,
    config: &SchedulingConfig,
    ids: &mut dyn IdAllocator,
) -> Vec<StudySession> {
    StudyScheduler::new(assignments, today, config).generate(ids)
}

/// `today + days`, saturating at the last representable date.
fn offset_date(today: NaiveDate, days: usize) -> NaiveDate {
    today
        .checked_add_days(Days::new(days as u64))
        .unwrap_or(NaiveDate::MAX)
}
