/// User model
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id SERIAL PRIMARY KEY,
///     name VARCHAR(255) NOT NULL,
///     email VARCHAR(255) NOT NULL UNIQUE,
///     age INTEGER,
///     phone VARCHAR(50),
///     address TEXT,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::repository::{BindValue, Resource};

/// A persisted user row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Surrogate primary key, generated by the store
    pub id: i32,

    /// Display name
    pub name: String,

    /// Email address, unique across all users
    pub email: String,

    pub age: Option<i32>,
    pub phone: Option<String>,
    pub address: Option<String>,

    /// Set by the store on insert
    pub created_at: DateTime<Utc>,

    /// Set by the store on insert, rewritten on every update
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a user
///
/// `name` and `email` are required and must be non-empty; the rest are
/// optional scalars.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub email: String,

    pub age: Option<i32>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Input for a full-field user update
///
/// Carries the same field set as [`CreateUser`]: an update rewrites every
/// mutable column, so omitted optional fields become NULL.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUser {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub email: String,

    pub age: Option<i32>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Resource for User {
    const TABLE: &'static str = "users";
    const TITLE: &'static str = "User";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "email",
        "age",
        "phone",
        "address",
        "created_at",
        "updated_at",
    ];
    const INSERT_COLUMNS: &'static [&'static str] = &["name", "email", "age", "phone", "address"];
    const UPDATE_COLUMNS: &'static [&'static str] = Self::INSERT_COLUMNS;

    type Create = CreateUser;
    type Update = UpdateUser;

    fn create_values(data: CreateUser) -> Vec<BindValue> {
        vec![
            BindValue::Text(Some(data.name)),
            BindValue::Text(Some(data.email)),
            BindValue::Int(data.age),
            BindValue::Text(data.phone),
            BindValue::Text(data.address),
        ]
    }

    fn update_values(data: UpdateUser) -> Vec<BindValue> {
        vec![
            BindValue::Text(Some(data.name)),
            BindValue::Text(Some(data.email)),
            BindValue::Int(data.age),
            BindValue::Text(data.phone),
            BindValue::Text(data.address),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_requires_nonempty_name() {
        let payload = CreateUser {
            name: "".to_string(),
            email: "ann@x.com".to_string(),
            age: None,
            phone: None,
            address: None,
        };

        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_create_user_requires_nonempty_email() {
        let payload = CreateUser {
            name: "Ann".to_string(),
            email: "".to_string(),
            age: None,
            phone: None,
            address: None,
        };

        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_create_user_optional_fields_may_be_absent() {
        let payload: CreateUser =
            serde_json::from_str(r#"{"name": "Ann", "email": "ann@x.com"}"#).unwrap();

        assert!(payload.validate().is_ok());
        assert_eq!(payload.age, None);
        assert_eq!(payload.phone, None);
    }

    #[test]
    fn test_update_columns_match_insert_columns() {
        assert_eq!(User::UPDATE_COLUMNS, User::INSERT_COLUMNS);
    }
}
