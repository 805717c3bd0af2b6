//! Explicit application state with command-style mutations.
//!
//! Every command takes the state by value and returns the next state, so a
//! caller holds exactly one `AppState` and replaces it after each command.
//! Commands on unknown ids leave the state unchanged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::SchedulingConfig;
use crate::ids::IdAllocator;
use crate::log_changes;
use crate::models::{
    Assignment, AssignmentUpdate, Course, CourseUpdate, NewAssignment, NewCourse,
    NewStudySession, StudySession, StudySessionUpdate, User,
};
use crate::scheduler::generate_schedule;
use crate::validation::{
    validate_assignment, validate_course, validate_new_assignment, validate_new_course,
    ValidationError,
};

/// Everything the planner holds for one signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub user: Option<User>,
    pub courses: Vec<Course>,
    pub assignments: Vec<Assignment>,
    pub study_sessions: Vec<StudySession>,
    pub is_authenticated: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn assignment(&self, id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == id)
    }

    pub fn study_session(&self, id: &str) -> Option<&StudySession> {
        self.study_sessions.iter().find(|s| s.id == id)
    }

    // Session

    pub fn login(mut self, user: User) -> Self {
        self.user = Some(user);
        self.is_authenticated = true;
        self
    }

    /// Sign out and drop every record.
    pub fn logout(self) -> Self {
        Self::default()
    }

    // Courses

    pub fn add_course(
        mut self,
        course: NewCourse,
        ids: &mut dyn IdAllocator,
    ) -> Result<Self, ValidationError> {
        validate_new_course(&course)?;
        self.courses.push(course.into_course(ids.next_id()));
        Ok(self)
    }

    /// Merge `update` into the course. The merged record must validate.
    pub fn update_course(
        mut self,
        id: &str,
        update: CourseUpdate,
    ) -> Result<Self, ValidationError> {
        if let Some(course) = self.courses.iter_mut().find(|c| c.id == id) {
            let mut edited = course.clone();
            update.apply_to(&mut edited);
            validate_course(&edited)?;
            *course = edited;
        }
        Ok(self)
    }

    /// Remove the course and its assignments.
    ///
    /// Sessions of the removed assignments are kept; they render without an
    /// assignment until the caller clears them.
    pub fn delete_course(mut self, id: &str) -> Self {
        self.courses.retain(|c| c.id != id);
        self.assignments.retain(|a| a.course_id != id);
        self
    }

    // Assignments

    pub fn add_assignment(
        mut self,
        assignment: NewAssignment,
        ids: &mut dyn IdAllocator,
    ) -> Result<Self, ValidationError> {
        validate_new_assignment(&assignment)?;
        self.assignments.push(assignment.into_assignment(ids.next_id()));
        Ok(self)
    }

    pub fn update_assignment(
        mut self,
        id: &str,
        update: AssignmentUpdate,
    ) -> Result<Self, ValidationError> {
        if let Some(assignment) = self.assignments.iter_mut().find(|a| a.id == id) {
            let mut edited = assignment.clone();
            update.apply_to(&mut edited);
            validate_assignment(&edited)?;
            *assignment = edited;
        }
        Ok(self)
    }

    /// Remove the assignment and every session studying it.
    pub fn delete_assignment(mut self, id: &str) -> Self {
        self.assignments.retain(|a| a.id != id);
        self.study_sessions.retain(|s| s.assignment_id != id);
        self
    }

    // Study sessions

    pub fn add_study_session(
        mut self,
        session: NewStudySession,
        ids: &mut dyn IdAllocator,
    ) -> Self {
        self.study_sessions.push(session.into_session(ids.next_id()));
        self
    }

    pub fn update_study_session(mut self, id: &str, update: StudySessionUpdate) -> Self {
        if let Some(session) = self.study_sessions.iter_mut().find(|s| s.id == id) {
            update.apply_to(session);
        }
        self
    }

    /// Flip a session between done and not done.
    pub fn toggle_study_session(mut self, id: &str) -> Self {
        if let Some(session) = self.study_sessions.iter_mut().find(|s| s.id == id) {
            session.completed = !session.completed;
        }
        self
    }

    // Scheduling

    /// Propose sessions for the current assignments. The state is untouched.
    pub fn generate_schedule(
        &self,
        today: NaiveDate,
        config: &SchedulingConfig,
        ids: &mut dyn IdAllocator,
    ) -> Vec<StudySession> {
        generate_schedule(&self.assignments, today, config, ids)
    }

    /// Generate a schedule and append it to the stored sessions.
    ///
    /// Existing sessions are neither replaced nor merged, so each call adds
    /// another full set.
    pub fn apply_generated_schedule(
        mut self,
        today: NaiveDate,
        config: &SchedulingConfig,
        ids: &mut dyn IdAllocator,
    ) -> Self {
        let generated = self.generate_schedule(today, config, ids);
        log_changes!(
            config.verbosity,
            "Appending {} sessions to {} stored",
            generated.len(),
            self.study_sessions.len()
        );
        self.study_sessions.extend(generated);
        self
    }
}
