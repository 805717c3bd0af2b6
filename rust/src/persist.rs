//! JSON snapshots of the application state for client-side storage.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::AppState;

/// Storage key the web client files snapshots under.
pub const STORAGE_KEY: &str = "study-planner-storage";

/// Snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 0;

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Stored envelope: the state plus a format version.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    state: AppState,
    version: u32,
}

/// Serialize the state into a versioned JSON snapshot.
pub fn to_snapshot(state: &AppState) -> Result<String, PersistError> {
    #[derive(Serialize)]
    struct SnapshotRef<'a> {
        state: &'a AppState,
        version: u32,
    }

    Ok(serde_json::to_string(&SnapshotRef {
        state,
        version: SNAPSHOT_VERSION,
    })?)
}

/// Restore the state from a snapshot produced by [`to_snapshot`].
pub fn from_snapshot(json: &str) -> Result<AppState, PersistError> {
    let snapshot: Snapshot = serde_json::from_str(json)?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(PersistError::UnsupportedVersion {
            found: snapshot.version,
            expected: SNAPSHOT_VERSION,
        });
    }
    Ok(snapshot.state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchedulingConfig;
    use crate::ids::SequentialAllocator;
    use crate::models::{NewAssignment, NewCourse, Priority, User};
    use chrono::NaiveDate;

    fn planner_state() -> AppState {
        let mut ids = SequentialAllocator::new("r");
        AppState::new()
            .login(User {
                id: "u1".to_string(),
                email: "grace@example.edu".to_string(),
                name: "Grace".to_string(),
            })
            .add_course(
                NewCourse {
                    name: "Operating Systems".to_string(),
                    color: "#f59e0b".to_string(),
                    credits: 4,
                    professor: Some("Hopper".to_string()),
                },
                &mut ids,
            )
            .unwrap()
            .add_assignment(
                NewAssignment {
                    course_id: "r-1".to_string(),
                    title: "Scheduler lab".to_string(),
                    description: Some("Round robin".to_string()),
                    due_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
                    priority: Priority::High,
                    estimated_hours: 5.0,
                },
                &mut ids,
            )
            .unwrap()
            .apply_generated_schedule(
                NaiveDate::from_ymd_opt(2025, 3, 20).unwrap(),
                &SchedulingConfig::default(),
                &mut ids,
            )
    }

    #[test]
    fn test_snapshot_restores_state() {
        let state = planner_state();
        let json = to_snapshot(&state).unwrap();
        assert!(json.contains("\"studySessions\""));
        assert!(json.contains("\"startTime\":\"14:00\""));
        assert_eq!(from_snapshot(&json).unwrap(), state);
    }

    #[test]
    fn test_reads_web_client_snapshot() {
        let json = r##"{"state":{
            "user":{"id":"u1","email":"s@example.edu","name":"Sam"},
            "courses":[{"id":"c1","name":"Physics","color":"#ef4444","credits":3}],
            "assignments":[{"id":"a1","courseId":"c1","title":"Lab","description":"",
                "dueDate":"2025-09-11T00:00:00.000Z","priority":"high",
                "estimatedHours":5,"completed":false}],
            "studySessions":[{"id":"s1","assignmentId":"a1",
                "date":"2025-09-01T14:23:05.120Z","startTime":"14:00",
                "endTime":"16:00","completed":false}],
            "isAuthenticated":true},"version":0}"##;
        let state = from_snapshot(json).unwrap();
        assert!(state.is_authenticated);
        assert_eq!(
            state.assignments[0].due_date,
            NaiveDate::from_ymd_opt(2025, 9, 11).unwrap()
        );
        assert_eq!(
            state.study_sessions[0].date,
            NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
        );
        assert!((state.assignments[0].estimated_hours - 5.0).abs() < f64::EPSILON);

        // written back with plain dates and read again unchanged
        let rewritten = to_snapshot(&state).unwrap();
        assert!(rewritten.contains("\"dueDate\":\"2025-09-11\""));
        assert_eq!(from_snapshot(&rewritten).unwrap(), state);
    }

    #[test]
    fn test_rejects_unknown_version() {
        let json = r#"{"state":{"user":null,"courses":[],"assignments":[],
            "studySessions":[],"isAuthenticated":false},"version":3}"#;
        assert!(matches!(
            from_snapshot(json),
            Err(PersistError::UnsupportedVersion { found: 3, .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = from_snapshot("{not json").unwrap_err();
        assert!(matches!(err, PersistError::Malformed(_)));
        assert!(err.to_string().starts_with("Malformed snapshot"));
    }
}
