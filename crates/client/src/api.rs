//! REST client for the LinKasa HTTP endpoints, built on [`reqwest`].

use linkasa_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::models::{
    AccessToken, Account, AccountChanges, Assignment, AssignmentChanges, Course, CourseChanges,
    Credentials, Health, NewAssignment, NewCourse, Registration,
};

/// HTTP client for one LinKasa server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    api_url: String,
}

impl ApiClient {
    /// * `api_url` - Base URL without a trailing slash, e.g. `http://localhost:3000`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// `GET /health`. A degraded server still answers 200.
    pub async fn health(&self) -> Result<Health, ClientError> {
        let response = self.client.get(self.url("/health")).send().await?;
        Self::parse_response(response).await
    }

    // -----------------------------------------------------------------------
    // Auth
    // -----------------------------------------------------------------------

    /// `POST /auth/login`, returning the raw access token.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ClientError> {
        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(&Credentials { email, password })
            .send()
            .await?;

        let token: AccessToken = Self::parse_response(response).await?;
        Ok(token.access_token)
    }

    /// `POST /auth/register`.
    pub async fn register(&self, registration: &Registration) -> Result<Account, ClientError> {
        let response = self
            .client
            .post(self.url("/auth/register"))
            .json(registration)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `GET /accounts/{id}` with a bearer token.
    pub async fn account(&self, id: DbId, token: &str) -> Result<Account, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/accounts/{id}")))
            .bearer_auth(token)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    // -----------------------------------------------------------------------
    // Accounts (bearer token required)
    // -----------------------------------------------------------------------

    /// `GET /accounts`.
    pub async fn accounts(&self, token: &str) -> Result<Vec<Account>, ClientError> {
        let response = self
            .client
            .get(self.url("/accounts"))
            .bearer_auth(token)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `PATCH /accounts/{id}`.
    pub async fn update_account(
        &self,
        id: DbId,
        changes: &AccountChanges,
        token: &str,
    ) -> Result<Account, ClientError> {
        let response = self
            .client
            .patch(self.url(&format!("/accounts/{id}")))
            .bearer_auth(token)
            .json(changes)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `DELETE /accounts/{id}`.
    pub async fn delete_account(&self, id: DbId, token: &str) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/accounts/{id}")))
            .bearer_auth(token)
            .send()
            .await?;
        Self::check_status(response).await
    }

    // -----------------------------------------------------------------------
    // Courses
    // -----------------------------------------------------------------------

    pub async fn courses(&self) -> Result<Vec<Course>, ClientError> {
        let response = self.client.get(self.url("/courses")).send().await?;
        Self::parse_response(response).await
    }

    pub async fn course(&self, id: DbId) -> Result<Course, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/courses/{id}")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    pub async fn create_course(&self, course: &NewCourse) -> Result<Course, ClientError> {
        let response = self
            .client
            .post(self.url("/courses"))
            .json(course)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    pub async fn update_course(
        &self,
        id: DbId,
        changes: &CourseChanges,
    ) -> Result<Course, ClientError> {
        let response = self
            .client
            .patch(self.url(&format!("/courses/{id}")))
            .json(changes)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    pub async fn delete_course(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/courses/{id}")))
            .send()
            .await?;
        Self::check_status(response).await
    }

    // -----------------------------------------------------------------------
    // Assignments
    // -----------------------------------------------------------------------

    pub async fn assignments(&self) -> Result<Vec<Assignment>, ClientError> {
        let response = self.client.get(self.url("/assignments")).send().await?;
        Self::parse_response(response).await
    }

    pub async fn assignment(&self, id: DbId) -> Result<Assignment, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/assignments/{id}")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `GET /assignments/course/{course_id}`.
    pub async fn assignments_for_course(
        &self,
        course_id: DbId,
    ) -> Result<Vec<Assignment>, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/assignments/course/{course_id}")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    pub async fn create_assignment(
        &self,
        assignment: &NewAssignment,
    ) -> Result<Assignment, ClientError> {
        let response = self
            .client
            .post(self.url("/assignments"))
            .json(assignment)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    pub async fn update_assignment(
        &self,
        id: DbId,
        changes: &AssignmentChanges,
    ) -> Result<Assignment, ClientError> {
        let response = self
            .client
            .patch(self.url(&format!("/assignments/{id}")))
            .json(changes)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    pub async fn delete_assignment(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/assignments/{id}")))
            .send()
            .await?;
        Self::check_status(response).await
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_url)
    }

    /// Turn a non-2xx response into [`ClientError::Api`], otherwise
    /// deserialize the body.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::error_for_status(response).await?;
        Ok(response.json().await?)
    }

    async fn check_status(response: reqwest::Response) -> Result<(), ClientError> {
        Self::error_for_status(response).await?;
        Ok(())
    }

    async fn error_for_status(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.text().await {
            Ok(body) => error_message(&body),
            Err(e) => {
                tracing::debug!(error = %e, "Could not read error body");
                fallback_message(status)
            }
        };
        tracing::debug!(status = status.as_u16(), %message, "API request failed");

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Pull the `error` field out of a JSON error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

/// Message used when the error body is unreadable: the status's canonical reason.
fn fallback_message(status: reqwest::StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}
