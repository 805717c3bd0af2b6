//! Core data types for the planner.
//!
//! Field names serialize in camelCase so snapshots stay readable by the web
//! client that owns the records.

use chrono::{NaiveDate, NaiveTime};
#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Assignment priority as entered on the form.
#[cfg_attr(feature = "python", pyclass(eq, eq_int))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Numeric rank used for ordering: high = 3, medium = 2, low = 1.
    pub fn weight(self) -> i32 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid priority: {0:?} (expected \"low\", \"medium\" or \"high\")")]
pub struct InvalidPriority(pub String);

impl FromStr for Priority {
    type Err = InvalidPriority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(InvalidPriority(other.to_string())),
        }
    }
}

/// The signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// A registered course.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    pub color: String,
    pub credits: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professor: Option<String>,
}

/// A gradable task belonging to a course.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub id: String,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub course_id: String,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub title: String,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    #[serde(with = "calendar_date")]
    pub due_date: NaiveDate,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub priority: Priority,
    /// Hours of work, expected in 0.5..=100.
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub estimated_hours: f64,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub completed: bool,
}

/// A block of time allocated to one assignment.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub id: String,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub assignment_id: String,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub completed: bool,
}

/// Course fields as submitted, before an id is assigned.
#[derive(Clone, Debug, PartialEq)]
pub struct NewCourse {
    pub name: String,
    pub color: String,
    pub credits: u32,
    pub professor: Option<String>,
}

impl NewCourse {
    pub fn into_course(self, id: String) -> Course {
        Course {
            id,
            name: self.name,
            color: self.color,
            credits: self.credits,
            professor: self.professor,
        }
    }
}

/// Assignment fields as submitted. New assignments always start incomplete.
#[derive(Clone, Debug, PartialEq)]
pub struct NewAssignment {
    pub course_id: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub estimated_hours: f64,
}

impl NewAssignment {
    pub fn into_assignment(self, id: String) -> Assignment {
        Assignment {
            id,
            course_id: self.course_id,
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            priority: self.priority,
            estimated_hours: self.estimated_hours,
            completed: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewStudySession {
    pub assignment_id: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub completed: bool,
}

impl NewStudySession {
    pub fn into_session(self, id: String) -> StudySession {
        StudySession {
            id,
            assignment_id: self.assignment_id,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            completed: self.completed,
        }
    }
}

/// Partial course edit. `None` leaves the field unchanged;
/// `professor: Some(None)` clears it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CourseUpdate {
    pub name: Option<String>,
    pub color: Option<String>,
    pub credits: Option<u32>,
    pub professor: Option<Option<String>>,
}

impl CourseUpdate {
    pub fn apply_to(self, course: &mut Course) {
        if let Some(name) = self.name {
            course.name = name;
        }
        if let Some(color) = self.color {
            course.color = color;
        }
        if let Some(credits) = self.credits {
            course.credits = credits;
        }
        if let Some(professor) = self.professor {
            course.professor = professor;
        }
    }
}

/// Partial assignment edit. `None` leaves the field unchanged;
/// `description: Some(None)` clears it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssignmentUpdate {
    pub course_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub estimated_hours: Option<f64>,
    pub completed: Option<bool>,
}

impl AssignmentUpdate {
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }

    pub fn apply_to(self, assignment: &mut Assignment) {
        if let Some(course_id) = self.course_id {
            assignment.course_id = course_id;
        }
        if let Some(title) = self.title {
            assignment.title = title;
        }
        if let Some(description) = self.description {
            assignment.description = description;
        }
        if let Some(due_date) = self.due_date {
            assignment.due_date = due_date;
        }
        if let Some(priority) = self.priority {
            assignment.priority = priority;
        }
        if let Some(hours) = self.estimated_hours {
            assignment.estimated_hours = hours;
        }
        if let Some(completed) = self.completed {
            assignment.completed = completed;
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudySessionUpdate {
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub completed: Option<bool>,
}

impl StudySessionUpdate {
    pub fn apply_to(self, session: &mut StudySession) {
        if let Some(date) = self.date {
            session.date = date;
        }
        if let Some(start_time) = self.start_time {
            session.start_time = start_time;
        }
        if let Some(end_time) = self.end_time {
            session.end_time = end_time;
        }
        if let Some(completed) = self.completed {
            session.completed = completed;
        }
    }
}

/// Session times are stored as `HH:MM`.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(de::Error::custom)
    }
}

/// Dates are written as `YYYY-MM-DD`. Reading also accepts RFC 3339
/// datetimes (what the web client stores for `Date` values) and keeps the
/// date as written in the string.
mod calendar_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(de::Error::custom)
    }

    pub(super) fn parse(raw: &str) -> Result<NaiveDate, String> {
        if let Ok(date) = NaiveDate::parse_from_str(raw, FORMAT) {
            return Ok(date);
        }
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .map_err(|e| format!("invalid date {:?}: {}", raw, e))
    }
}
