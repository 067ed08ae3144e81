/// Todo model
///
/// Todos belong to a user via `user_id`. The store enforces the foreign
/// key, and `ON DELETE CASCADE` removes a user's todos with the user.
/// `user_id` is not existence-checked at this layer; a dangling reference
/// surfaces as a store error.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE todos (
///     id SERIAL PRIMARY KEY,
///     user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     title VARCHAR(255) NOT NULL,
///     description TEXT,
///     completed BOOLEAN NOT NULL DEFAULT FALSE,
///     due_date DATE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::repository::{BindValue, Resource};

/// A persisted todo row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    /// Surrogate primary key, generated by the store
    pub id: i32,

    /// Owning user
    pub user_id: i32,

    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub due_date: Option<NaiveDate>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a todo
///
/// `user_id` and a non-empty `title` are required. `completed` defaults to
/// false when omitted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTodo {
    pub user_id: i32,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,

    pub description: Option<String>,
    pub completed: Option<bool>,
    pub due_date: Option<NaiveDate>,
}

/// Input for a full-field todo update
///
/// Rewrites every mutable column; an omitted `completed` resets to false,
/// omitted optional fields become NULL.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateTodo {
    pub user_id: i32,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,

    pub description: Option<String>,
    pub completed: Option<bool>,
    pub due_date: Option<NaiveDate>,
}

impl Resource for Todo {
    const TABLE: &'static str = "todos";
    const TITLE: &'static str = "Todo";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "user_id",
        "title",
        "description",
        "completed",
        "due_date",
        "created_at",
        "updated_at",
    ];
    const INSERT_COLUMNS: &'static [&'static str] =
        &["user_id", "title", "description", "completed", "due_date"];
    const UPDATE_COLUMNS: &'static [&'static str] = Self::INSERT_COLUMNS;

    type Create = CreateTodo;
    type Update = UpdateTodo;

    fn create_values(data: CreateTodo) -> Vec<BindValue> {
        vec![
            BindValue::Int(Some(data.user_id)),
            BindValue::Text(Some(data.title)),
            BindValue::Text(data.description),
            BindValue::Bool(data.completed.unwrap_or(false)),
            BindValue::Date(data.due_date),
        ]
    }

    fn update_values(data: UpdateTodo) -> Vec<BindValue> {
        vec![
            BindValue::Int(Some(data.user_id)),
            BindValue::Text(Some(data.title)),
            BindValue::Text(data.description),
            BindValue::Bool(data.completed.unwrap_or(false)),
            BindValue::Date(data.due_date),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_todo_requires_nonempty_title() {
        let payload = CreateTodo {
            user_id: 1,
            title: "".to_string(),
            description: None,
            completed: None,
            due_date: None,
        };

        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_create_todo_minimal_body_deserializes() {
        let payload: CreateTodo =
            serde_json::from_str(r#"{"user_id": 1, "title": "T"}"#).unwrap();

        assert!(payload.validate().is_ok());
        assert_eq!(payload.completed, None);
        assert_eq!(payload.due_date, None);
    }

    #[test]
    fn test_due_date_parses_iso_date() {
        let payload: CreateTodo = serde_json::from_str(
            r#"{"user_id": 1, "title": "T", "due_date": "2026-09-01"}"#,
        )
        .unwrap();

        assert_eq!(
            payload.due_date,
            Some(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
        );
    }
}
