//! Account entity model and DTOs.

use linkasa_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Role an account registers with. Stored as the Postgres enum `account_role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "account_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Lecturer,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Lecturer => "lecturer",
        }
    }
}

/// Full account row from the `accounts` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`AccountResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Safe account representation for API responses (no password).
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            email: account.email,
            role: account.role,
        }
    }
}

/// DTO for inserting a new account. The password must already be hashed.
#[derive(Debug)]
pub struct CreateAccount {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// DTO for updating an existing account. All fields are optional.
#[derive(Debug, Default)]
pub struct UpdateAccount {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<Role>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_drops_password_hash() {
        let account = Account {
            id: 7,
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            role: Role::Lecturer,
        };

        let json = serde_json::to_value(AccountResponse::from(account)).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["role"], "lecturer");
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn test_role_rejects_unknown_value() {
        let parsed: Result<Role, _> = serde_json::from_str("\"admin\"");
        assert!(parsed.is_err());
        let parsed: Role = serde_json::from_str("\"student\"").unwrap();
        assert_eq!(parsed.as_str(), "student");
    }
}
