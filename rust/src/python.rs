//! PyO3 bindings for the scheduler.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use chrono::{NaiveDate, NaiveTime};
use pyo3::prelude::*;

use crate::config::SchedulingConfig;
use crate::ids::UuidAllocator;
use crate::logging::Verbosity;
use crate::models::{Assignment, Priority, StudySession};

#[pymethods]
impl Priority {
    #[pyo3(name = "weight")]
    fn py_weight(&self) -> i32 {
        self.weight()
    }

    fn __str__(&self) -> &'static str {
        self.as_str()
    }
}

#[pymethods]
impl Assignment {
    #[new]
    #[pyo3(signature = (
        id,
        course_id,
        title,
        due_date,
        priority,
        estimated_hours,
        completed=false,
        description=None
    ))]
    #[allow(clippy::too_many_arguments)]
    fn py_new(
        id: String,
        course_id: String,
        title: String,
        due_date: NaiveDate,
        priority: Priority,
        estimated_hours: f64,
        completed: bool,
        description: Option<String>,
    ) -> Self {
        Self {
            id,
            course_id,
            title,
            description,
            due_date,
            priority,
            estimated_hours,
            completed,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Assignment(id={:?}, priority={}, due={}, hours={}, completed={})",
            self.id, self.priority, self.due_date, self.estimated_hours, self.completed
        )
    }
}

#[pymethods]
impl StudySession {
    fn __repr__(&self) -> String {
        format!(
            "StudySession(id={:?}, assignment_id={:?}, date={}, {}-{})",
            self.id,
            self.assignment_id,
            self.date,
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }
}

#[pymethods]
impl SchedulingConfig {
    #[new]
    #[pyo3(signature = (session_hours=None, start_time=None, end_time=None, verbosity=None))]
    fn py_new(
        session_hours: Option<f64>,
        start_time: Option<NaiveTime>,
        end_time: Option<NaiveTime>,
        verbosity: Option<u8>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            session_hours: session_hours.unwrap_or(defaults.session_hours),
            start_time: start_time.unwrap_or(defaults.start_time),
            end_time: end_time.unwrap_or(defaults.end_time),
            verbosity: verbosity.map_or(defaults.verbosity, Verbosity::from_level),
        }
    }

    #[getter(verbosity)]
    fn py_verbosity(&self) -> u8 {
        self.verbosity.level()
    }

    #[setter(verbosity)]
    fn set_py_verbosity(&mut self, level: u8) {
        self.verbosity = Verbosity::from_level(level);
    }

    fn __repr__(&self) -> String {
        format!(
            "SchedulingConfig(session_hours={}, start_time={}, end_time={}, verbosity={})",
            self.session_hours,
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M"),
            self.verbosity.level()
        )
    }
}

/// Generate study sessions for every incomplete assignment.
///
/// # Arguments
/// * `assignments` - Assignments as currently stored
/// * `today` - Date of the first possible session
/// * `config` - Session sizing and times (defaults: 2h, 14:00-16:00)
///
/// # Returns
/// * List of new StudySession objects with fresh UUIDs
#[pyfunction]
#[pyo3(name = "generate_schedule", signature = (assignments, today, config=None))]
fn py_generate_schedule(
    assignments: Vec<Assignment>,
    today: NaiveDate,
    config: Option<SchedulingConfig>,
) -> Vec<StudySession> {
    let config = config.unwrap_or_default();
    crate::scheduler::generate_schedule(&assignments, today, &config, &mut UuidAllocator)
}

/// The study_planner Python module.
#[pymodule]
fn study_planner(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Priority>()?;
    m.add_class::<Assignment>()?;
    m.add_class::<StudySession>()?;
    m.add_class::<SchedulingConfig>()?;

    m.add_function(wrap_pyfunction!(py_generate_schedule, m)?)?;

    Ok(())
}
