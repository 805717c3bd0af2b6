//! Field rules for courses and assignments.
//!
//! The scheduler trusts its input; these checks run when records enter the
//! application state.

use thiserror::Error;

use crate::models::{Assignment, Course, NewAssignment, NewCourse};

pub const MIN_CREDITS: u32 = 1;
pub const MAX_CREDITS: u32 = 10;
pub const MIN_ESTIMATED_HOURS: f64 = 0.5;
pub const MAX_ESTIMATED_HOURS: f64 = 100.0;

/// Errors for records that fail form validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Course name is required")]
    MissingCourseName,
    #[error("Please select a color")]
    MissingColor,
    #[error("Credits must be between 1 and 10, got {0}")]
    CreditsOutOfRange(u32),
    #[error("Assignment title is required")]
    MissingTitle,
    #[error("Estimated hours must be between 0.5 and 100, got {0}")]
    EstimatedHoursOutOfRange(f64),
}

fn check_course(name: &str, color: &str, credits: u32) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingCourseName);
    }
    if color.trim().is_empty() {
        return Err(ValidationError::MissingColor);
    }
    if !(MIN_CREDITS..=MAX_CREDITS).contains(&credits) {
        return Err(ValidationError::CreditsOutOfRange(credits));
    }
    Ok(())
}

fn check_assignment(title: &str, estimated_hours: f64) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::MissingTitle);
    }
    // NaN fails the range check
    if !(MIN_ESTIMATED_HOURS..=MAX_ESTIMATED_HOURS).contains(&estimated_hours) {
        return Err(ValidationError::EstimatedHoursOutOfRange(estimated_hours));
    }
    Ok(())
}

pub fn validate_new_course(course: &NewCourse) -> Result<(), ValidationError> {
    check_course(&course.name, &course.color, course.credits)
}

pub fn validate_course(course: &Course) -> Result<(), ValidationError> {
    check_course(&course.name, &course.color, course.credits)
}

pub fn validate_new_assignment(assignment: &NewAssignment) -> Result<(), ValidationError> {
    check_assignment(&assignment.title, assignment.estimated_hours)
}

pub fn validate_assignment(assignment: &Assignment) -> Result<(), ValidationError> {
    check_assignment(&assignment.title, assignment.estimated_hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use chrono::NaiveDate;

    fn course(name: &str, color: &str, credits: u32) -> NewCourse {
        NewCourse {
            name: name.to_string(),
            color: color.to_string(),
            credits,
            professor: None,
        }
    }

    fn assignment(title: &str, hours: f64) -> NewAssignment {
        NewAssignment {
            course_id: "c1".to_string(),
            title: title.to_string(),
            description: None,
            due_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            priority: Priority::Medium,
            estimated_hours: hours,
        }
    }

    #[test]
    fn test_valid_course() {
        assert_eq!(validate_new_course(&course("Physics", "#ef4444", 3)), Ok(()));
        assert_eq!(validate_new_course(&course("Physics", "#ef4444", 1)), Ok(()));
        assert_eq!(validate_new_course(&course("Physics", "#ef4444", 10)), Ok(()));
    }

    #[test]
    fn test_course_errors() {
        assert_eq!(
            validate_new_course(&course("  ", "#ef4444", 3)),
            Err(ValidationError::MissingCourseName)
        );
        assert_eq!(
            validate_new_course(&course("Physics", "", 3)),
            Err(ValidationError::MissingColor)
        );
        assert_eq!(
            validate_new_course(&course("Physics", "#ef4444", 0)),
            Err(ValidationError::CreditsOutOfRange(0))
        );
        assert_eq!(
            validate_new_course(&course("Physics", "#ef4444", 11)),
            Err(ValidationError::CreditsOutOfRange(11))
        );
    }

    #[test]
    fn test_assignment_hours_bounds() {
        assert_eq!(validate_new_assignment(&assignment("Essay", 0.5)), Ok(()));
        assert_eq!(validate_new_assignment(&assignment("Essay", 100.0)), Ok(()));
        assert_eq!(
            validate_new_assignment(&assignment("Essay", 0.25)),
            Err(ValidationError::EstimatedHoursOutOfRange(0.25))
        );
        assert_eq!(
            validate_new_assignment(&assignment("Essay", 100.5)),
            Err(ValidationError::EstimatedHoursOutOfRange(100.5))
        );
        assert!(matches!(
            validate_new_assignment(&assignment("Essay", f64::NAN)),
            Err(ValidationError::EstimatedHoursOutOfRange(_))
        ));
    }

    #[test]
    fn test_assignment_requires_title() {
        assert_eq!(
            validate_new_assignment(&assignment("", 2.0)),
            Err(ValidationError::MissingTitle)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::CreditsOutOfRange(12).to_string(),
            "Credits must be between 1 and 10, got 12"
        );
        assert_eq!(
            ValidationError::EstimatedHoursOutOfRange(0.1).to_string(),
            "Estimated hours must be between 0.5 and 100, got 0.1"
        );
    }
}
