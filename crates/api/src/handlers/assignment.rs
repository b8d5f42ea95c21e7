//! Handlers for the `/assignments` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use linkasa_core::error::CoreError;
use linkasa_core::types::DbId;
use linkasa_db::models::assignment::{Assignment, CreateAssignment, UpdateAssignment};
use linkasa_db::repositories::AssignmentRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::json::ValidatedJson;
use crate::middleware::path::ApiPath;
use crate::state::AppState;

/// POST /assignments
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateAssignment>,
) -> AppResult<(StatusCode, Json<Assignment>)> {
    let assignment = AssignmentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// GET /assignments
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Assignment>>> {
    let assignments = AssignmentRepo::list(&state.pool).await?;
    Ok(Json(assignments))
}

/// GET /assignments/course/{course_id}
///
/// The course itself is not looked up; an unknown id yields `[]`.
pub async fn list_by_course(
    State(state): State<AppState>,
    ApiPath(course_id): ApiPath<DbId>,
) -> AppResult<Json<Vec<Assignment>>> {
    let assignments = AssignmentRepo::list_by_course(&state.pool, course_id).await?;
    Ok(Json(assignments))
}

/// GET /assignments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Assignment>> {
    let assignment = AssignmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found(id))?;
    Ok(Json(assignment))
}

/// PATCH /assignments/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateAssignment>,
) -> AppResult<Json<Assignment>> {
    let assignment = AssignmentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(not_found(id))?;
    Ok(Json(assignment))
}

/// DELETE /assignments/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if AssignmentRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Assignment",
        id,
    })
}
