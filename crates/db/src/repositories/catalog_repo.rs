//! Read-only aggregates spanning accounts, courses and assignments.

use sqlx::PgPool;

use crate::models::catalog::CatalogStats;

pub struct CatalogRepo;

impl CatalogRepo {
    /// Count rows in every table in a single round trip.
    pub async fn stats(pool: &PgPool) -> Result<CatalogStats, sqlx::Error> {
        sqlx::query_as::<_, CatalogStats>(
            "SELECT
                (SELECT COUNT(*) FROM accounts) AS accounts,
                (SELECT COUNT(*) FROM courses) AS courses,
                (SELECT COUNT(*) FROM courses WHERE is_active) AS active_courses,
                (SELECT COUNT(*) FROM assignments) AS assignments,
                (SELECT COUNT(*) FROM assignments WHERE NOT is_finished) AS open_assignments",
        )
        .fetch_one(pool)
        .await
    }
}
