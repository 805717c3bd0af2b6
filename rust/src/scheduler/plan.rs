//! Session proposals before ids are attached.

use chrono::{NaiveDate, NaiveTime};

use crate::models::StudySession;

/// One proposed session, without an identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionPlan {
    pub assignment_id: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Days after the scheduling date: sorted position + session index.
    pub day_offset: usize,
}

impl SessionPlan {
    /// Attach an id. Generated sessions always start incomplete.
    pub fn into_session(self, id: String) -> StudySession {
        StudySession {
            id,
            assignment_id: self.assignment_id,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            completed: false,
        }
    }
}
