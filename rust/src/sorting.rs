//! Assignment ordering for the scheduler.
//!
//! Priority dominates, due date breaks ties:
//! - higher priority weight first (high, medium, low)
//! - within one priority, earlier due date first
//! - remaining ties keep their input order

use chrono::NaiveDate;

use crate::models::Assignment;

/// Sort key for assignment prioritization.
///
/// Derived `Ord` compares fields in declaration order, so lower = more urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey {
    /// Negated priority weight so that high priority sorts first.
    pub neg_weight: i32,
    pub due_date: NaiveDate,
}

/// Compute the sort key for a single assignment.
pub fn compute_sort_key(assignment: &Assignment) -> SortKey {
    SortKey {
        neg_weight: -assignment.priority.weight(),
        due_date: assignment.due_date,
    }
}

/// Incomplete assignments in scheduling order (most urgent first).
///
/// Completed assignments are dropped. The sort is stable.
pub fn sort_pending(assignments: &[Assignment]) -> Vec<&Assignment> {
    let mut pending: Vec<&Assignment> = assignments.iter().filter(|a| !a.completed).collect();
    pending.sort_by_key(|a| compute_sort_key(a));
    pending
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn make_assignment(id: &str, priority: Priority, due: NaiveDate) -> Assignment {
        Assignment {
            id: id.to_string(),
            course_id: "course".to_string(),
            title: id.to_string(),
            description: None,
            due_date: due,
            priority,
            estimated_hours: 2.0,
            completed: false,
        }
    }

    fn ids(sorted: &[&Assignment]) -> Vec<String> {
        sorted.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn test_priority_beats_due_date() {
        let assignments = vec![
            make_assignment("low_soon", Priority::Low, make_date(2025, 1, 2)),
            make_assignment("high_late", Priority::High, make_date(2025, 6, 30)),
            make_assignment("medium_mid", Priority::Medium, make_date(2025, 3, 1)),
        ];
        let sorted = sort_pending(&assignments);
        assert_eq!(ids(&sorted), vec!["high_late", "medium_mid", "low_soon"]);
    }

    #[test]
    fn test_due_date_breaks_priority_ties() {
        let assignments = vec![
            make_assignment("later", Priority::Medium, make_date(2025, 1, 20)),
            make_assignment("sooner", Priority::Medium, make_date(2025, 1, 10)),
        ];
        let sorted = sort_pending(&assignments);
        assert_eq!(ids(&sorted), vec!["sooner", "later"]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let due = make_date(2025, 1, 10);
        let assignments = vec![
            make_assignment("b", Priority::High, due),
            make_assignment("a", Priority::High, due),
            make_assignment("c", Priority::High, due),
        ];
        let sorted = sort_pending(&assignments);
        assert_eq!(ids(&sorted), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_completed_assignments_are_dropped() {
        let mut done = make_assignment("done", Priority::High, make_date(2025, 1, 1));
        done.completed = true;
        let assignments = vec![
            done,
            make_assignment("open", Priority::Low, make_date(2025, 1, 1)),
        ];
        let sorted = sort_pending(&assignments);
        assert_eq!(ids(&sorted), vec!["open"]);
    }

    #[test]
    fn test_sort_key_ordering() {
        let due = make_date(2025, 1, 1);
        let high = compute_sort_key(&make_assignment("h", Priority::High, due));
        let low = compute_sort_key(&make_assignment("l", Priority::Low, due));
        assert!(high < low);
        assert_eq!(high.neg_weight, -3);
    }
}
