//! Assignment entity model and DTOs.
//!
//! `user_id` and `course_id` are plain columns; nothing checks that the
//! referenced account or course exists.

use linkasa_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An assignment row from the `assignments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: DbId,
    pub user_id: DbId,
    pub course_id: DbId,
    pub name: String,
    pub description: String,
    pub is_finished: bool,
}

/// DTO for creating a new assignment.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssignment {
    pub user_id: DbId,
    pub course_id: DbId,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    /// Defaults to `false` if omitted.
    pub is_finished: Option<bool>,
}

/// DTO for updating an existing assignment. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssignment {
    pub user_id: Option<DbId>,
    pub course_id: Option<DbId>,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,
    pub is_finished: Option<bool>,
}
