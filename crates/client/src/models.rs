//! Wire types for the LinKasa API.

use linkasa_core::types::DbId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Lecturer,
}

/// Account as returned by the API. The server never sends the password.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Partial account update; `None` fields are left out of the request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Sent in the clear over the wire; the server stores only a hash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// `GET /health` body.
#[derive(Debug, Clone, Deserialize)]
pub struct Health {
    pub status: String,
    pub version: String,
    pub database: String,
    pub token_lifetime_secs: i64,
    pub catalog: Option<CatalogStats>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CatalogStats {
    pub accounts: i64,
    pub courses: i64,
    pub active_courses: i64,
    pub assignments: i64,
    pub open_assignments: i64,
}

#[derive(Debug, Serialize)]
pub(crate) struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AccessToken {
    pub access_token: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub category: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub category: String,
}

/// Partial course update; `None` fields are left out of the request.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: DbId,
    pub user_id: DbId,
    pub course_id: DbId,
    pub name: String,
    pub description: String,
    pub is_finished: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssignment {
    pub user_id: DbId,
    pub course_id: DbId,
    pub name: String,
    pub description: String,
    pub is_finished: bool,
}

/// Partial assignment update; `None` fields are left out of the request.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_finished: Option<bool>,
}
