//! Aggregate row counts across the three tables.

use serde::Serialize;
use sqlx::FromRow;

/// Snapshot of how much is stored, as reported by `GET /health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize)]
pub struct CatalogStats {
    pub accounts: i64,
    pub courses: i64,
    /// Courses with `is_active = true`.
    pub active_courses: i64,
    pub assignments: i64,
    /// Assignments with `is_finished = false`.
    pub open_assignments: i64,
}
