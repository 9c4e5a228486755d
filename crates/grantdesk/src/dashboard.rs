//! Dashboard aggregation for grantdesk.
//!
//! Assembles the overview counts and course distributions the console
//! renders. The store itself reports every fault; the never-crash policy
//! lives here: a failed aggregate degrades to a zero or empty value and the
//! fault is logged, so the overview always renders.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use crate::error::Result;
use crate::records::StatusBucket;
use crate::store::{CourseCount, CourseTable, Store};

/// Aggregate overview of the scholarship program.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// When this summary was assembled.
    pub generated_at: DateTime<Utc>,
    /// Total applicant records.
    pub total_applicants: i64,
    /// Total maintainer records.
    pub total_maintainers: i64,
    /// Applicants with accepted-like statuses.
    pub accepted: i64,
    /// Applicants with pending-like statuses.
    pub pending: i64,
    /// Applicants with rejected-like statuses.
    pub rejected: i64,
    /// Applicant counts per course.
    pub applicants_by_course: Vec<CourseCount>,
    /// Maintainer counts per course.
    pub maintainers_by_course: Vec<CourseCount>,
}

impl DashboardSummary {
    /// Assemble a summary from the store, degrading faults to zeros.
    #[must_use]
    pub fn collect(store: &Store) -> Self {
        Self {
            generated_at: Utc::now(),
            total_applicants: count_or_zero("total applicants", store.count_applicants()),
            total_maintainers: count_or_zero("total maintainers", store.count_maintainers()),
            accepted: count_or_zero(
                "accepted applicants",
                store.count_applicants_in(StatusBucket::Accepted),
            ),
            pending: count_or_zero(
                "pending applicants",
                store.count_applicants_in(StatusBucket::Pending),
            ),
            rejected: count_or_zero(
                "rejected applicants",
                store.count_applicants_in(StatusBucket::Rejected),
            ),
            applicants_by_course: courses_or_empty(
                "applicants by course",
                store.group_by_course(CourseTable::Applicants),
            ),
            maintainers_by_course: courses_or_empty(
                "maintainers by course",
                store.group_by_course(CourseTable::Maintainers),
            ),
        }
    }

    /// Total applicants across the three status buckets.
    #[must_use]
    pub fn bucketed_total(&self) -> i64 {
        self.accepted + self.pending + self.rejected
    }
}

/// Degrade a failed count to zero, logging the fault.
fn count_or_zero(label: &str, result: Result<i64>) -> i64 {
    match result {
        Ok(count) => count,
        Err(e) => {
            warn!("Dashboard count '{}' degraded to 0: {}", label, e);
            0
        }
    }
}

/// Degrade a failed grouping to an empty distribution, logging the fault.
fn courses_or_empty(label: &str, result: Result<Vec<CourseCount>>) -> Vec<CourseCount> {
    match result {
        Ok(counts) => counts,
        Err(e) => {
            warn!("Dashboard grouping '{}' degraded to empty: {}", label, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store() -> Store {
        let store = Store::open_in_memory().unwrap();
        for (id, course, status) in [
            ("22-0001", Some("BSCS"), Some("Accepted")),
            ("22-0002", Some("BSCS"), Some("pending")),
            ("22-0003", Some("BSIT"), Some("Denied")),
            ("22-0004", None, Some("approve")),
        ] {
            store
                .raw_execute(
                    "INSERT INTO Applicants (applicant_id, name, course, status)
                     VALUES (?1, ?2, ?3, ?4)",
                    rusqlite::params![id, format!("Applicant {id}"), course, status],
                )
                .unwrap();
        }
        store
            .raw_execute(
                "INSERT INTO Maintainer (student_id, name, username, email, course, status)
                 VALUES ('21-0001', 'M', 'm', 'm@example.edu', 'BSCS', 'claimed')",
                [],
            )
            .unwrap();
        store
    }

    #[test]
    fn test_collect_counts() {
        let store = seeded_store();
        let summary = DashboardSummary::collect(&store);

        assert_eq!(summary.total_applicants, 4);
        assert_eq!(summary.total_maintainers, 1);
        assert_eq!(summary.accepted, 2);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.bucketed_total(), 4);
    }

    #[test]
    fn test_collect_course_distributions() {
        let store = seeded_store();
        let summary = DashboardSummary::collect(&store);

        assert_eq!(summary.applicants_by_course.len(), 3);
        assert!(summary.applicants_by_course.contains(&CourseCount {
            course: "Unknown".to_string(),
            count: 1,
        }));
        assert_eq!(summary.maintainers_by_course.len(), 1);
        assert_eq!(summary.maintainers_by_course[0].course, "BSCS");
    }

    #[test]
    fn test_collect_degrades_faults_to_zero() {
        let store = Store::open_in_memory().unwrap();
        // Drop the tables the aggregates query so every one of them faults
        store.raw_execute("DROP TABLE Applicants", []).unwrap();
        store.raw_execute("DROP TABLE Maintainer", []).unwrap();

        let summary = DashboardSummary::collect(&store);
        assert_eq!(summary.total_applicants, 0);
        assert_eq!(summary.total_maintainers, 0);
        assert_eq!(summary.bucketed_total(), 0);
        assert!(summary.applicants_by_course.is_empty());
        assert!(summary.maintainers_by_course.is_empty());
    }

    #[test]
    fn test_collect_empty_store() {
        let store = Store::open_in_memory().unwrap();
        let summary = DashboardSummary::collect(&store);

        assert_eq!(summary.total_applicants, 0);
        assert_eq!(summary.bucketed_total(), 0);
        assert!(summary.applicants_by_course.is_empty());
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let store = seeded_store();
        let summary = DashboardSummary::collect(&store);

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("total_applicants"));
        assert!(json.contains("generated_at"));
        assert!(json.contains("applicants_by_course"));
    }
}
