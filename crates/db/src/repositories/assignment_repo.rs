//! Repository for the `assignments` table.

use linkasa_core::types::DbId;
use sqlx::PgPool;

use crate::models::assignment::{Assignment, CreateAssignment, UpdateAssignment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, course_id, name, description, is_finished";

/// Provides CRUD operations for assignments.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Insert a new assignment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAssignment,
    ) -> Result<Assignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO assignments (user_id, course_id, name, description, is_finished)
             VALUES ($1, $2, $3, $4, COALESCE($5, false))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(input.user_id)
            .bind(input.course_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.is_finished)
            .fetch_one(pool)
            .await
    }

    /// Find an assignment by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Assignment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assignments WHERE id = $1");
        sqlx::query_as::<_, Assignment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all assignments in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Assignment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assignments ORDER BY id");
        sqlx::query_as::<_, Assignment>(&query)
            .fetch_all(pool)
            .await
    }

    /// List assignments for a course. An unknown course yields an empty list.
    pub async fn list_by_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<Assignment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assignments WHERE course_id = $1 ORDER BY id");
        sqlx::query_as::<_, Assignment>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    /// Update an assignment. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAssignment,
    ) -> Result<Option<Assignment>, sqlx::Error> {
        let query = format!(
            "UPDATE assignments SET
                user_id = COALESCE($2, user_id),
                course_id = COALESCE($3, course_id),
                name = COALESCE($4, name),
                description = COALESCE($5, description),
                is_finished = COALESCE($6, is_finished)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(id)
            .bind(input.user_id)
            .bind(input.course_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.is_finished)
            .fetch_optional(pool)
            .await
    }

    /// Delete an assignment. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assignments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
