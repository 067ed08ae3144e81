/// Generic resource repository
///
/// One CRUD implementation shared by every entity. An entity opts in by
/// implementing [`Resource`], which supplies its table name, column lists,
/// and payload types; the repository assembles the SQL text from those
/// compile-time constants and binds every runtime value as a parameter.
/// SQL text never contains interpolated request data.
///
/// "Not found" is decided by inspecting the result set (a zero-row
/// `RETURNING` or zero affected rows), never by treating the statement
/// itself as failed.
///
/// # Example
///
/// ```no_run
/// use tasknest_shared::models::user::{CreateUser, User};
/// use tasknest_shared::repository;
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// let user: User = repository::create(
///     &pool,
///     CreateUser {
///         name: "Ann".to_string(),
///         email: "ann@example.com".to_string(),
///         age: None,
///         phone: None,
///         address: None,
///     },
/// )
/// .await?;
///
/// let fetched: User = repository::get_by_id(&pool, user.id).await?;
/// assert_eq!(fetched.email, user.email);
/// # Ok(())
/// # }
/// ```
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres};
use validator::Validate;

use crate::error::{RepoError, RepoResult};

/// A column value on its way into a parameterized statement
///
/// Optional scalars bind as `None` → SQL NULL; required values always
/// arrive as `Some` (or as the non-optional variants).
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Int(Option<i32>),
    Bool(bool),
    Text(Option<String>),
    Date(Option<NaiveDate>),
}

/// Per-entity metadata consumed by the generic repository
///
/// Column lists are `'static` constants, so the assembled SQL text is made
/// of trusted fragments only; request values reach the statement exclusively
/// through `bind`.
pub trait Resource:
    for<'r> sqlx::FromRow<'r, PgRow> + Serialize + Send + Unpin + Sized
{
    /// Table name
    const TABLE: &'static str;

    /// Display name used in messages ("User", "Todo")
    const TITLE: &'static str;

    /// Columns selected and returned for every read/write
    const COLUMNS: &'static [&'static str];

    /// Columns supplied on insert (store-generated columns excluded)
    const INSERT_COLUMNS: &'static [&'static str];

    /// Columns rewritten by a full-field update
    const UPDATE_COLUMNS: &'static [&'static str];

    /// Payload accepted by `create`
    type Create: DeserializeOwned + Validate + Send + 'static;

    /// Payload accepted by `update`
    type Update: DeserializeOwned + Validate + Send + 'static;

    /// The create payload's values, in `INSERT_COLUMNS` order
    fn create_values(data: Self::Create) -> Vec<BindValue>;

    /// The update payload's values, in `UPDATE_COLUMNS` order
    fn update_values(data: Self::Update) -> Vec<BindValue>;
}

/// Creates a row and returns it as persisted (store-generated defaults
/// included)
///
/// # Errors
///
/// - [`RepoError::BadRequest`] when a required field is empty
/// - [`RepoError::Conflict`] on a uniqueness violation
/// - [`RepoError::Store`] on any other store failure (including a foreign
///   key violation for todos pointing at a nonexistent user)
pub async fn create<R: Resource>(pool: &PgPool, data: R::Create) -> RepoResult<R> {
    validate_payload(&data)?;

    let sql = insert_sql::<R>();
    let mut query = sqlx::query_as::<Postgres, R>(&sql);
    for value in R::create_values(data) {
        query = match value {
            BindValue::Int(v) => query.bind(v),
            BindValue::Bool(v) => query.bind(v),
            BindValue::Text(v) => query.bind(v),
            BindValue::Date(v) => query.bind(v),
        };
    }

    query
        .fetch_one(pool)
        .await
        .map_err(RepoError::from_store)
}

/// Returns every row in insertion order
///
/// An empty table yields an empty Vec, not an error.
pub async fn list_all<R: Resource>(pool: &PgPool) -> RepoResult<Vec<R>> {
    let sql = select_all_sql::<R>();
    sqlx::query_as::<Postgres, R>(&sql)
        .fetch_all(pool)
        .await
        .map_err(RepoError::from_store)
}

/// Returns the row with the given primary key
///
/// # Errors
///
/// [`RepoError::NotFound`] when no row matches.
pub async fn get_by_id<R: Resource>(pool: &PgPool, id: i32) -> RepoResult<R> {
    let sql = select_by_id_sql::<R>();
    sqlx::query_as::<Postgres, R>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(RepoError::from_store)?
        .ok_or(RepoError::NotFound(R::TITLE))
}

/// Rewrites all mutable fields of the row with the given primary key and
/// returns the updated row
///
/// The id binds as `$1`, field values from `$2` on. A zero-row `RETURNING`
/// means the id matched nothing.
///
/// # Errors
///
/// - [`RepoError::BadRequest`] when a required field is empty
/// - [`RepoError::NotFound`] when the id matches no row
/// - [`RepoError::Conflict`] on a uniqueness violation
pub async fn update<R: Resource>(pool: &PgPool, id: i32, data: R::Update) -> RepoResult<R> {
    validate_payload(&data)?;

    let sql = update_sql::<R>();
    let mut query = sqlx::query_as::<Postgres, R>(&sql).bind(id);
    for value in R::update_values(data) {
        query = match value {
            BindValue::Int(v) => query.bind(v),
            BindValue::Bool(v) => query.bind(v),
            BindValue::Text(v) => query.bind(v),
            BindValue::Date(v) => query.bind(v),
        };
    }

    query
        .fetch_optional(pool)
        .await
        .map_err(RepoError::from_store)?
        .ok_or(RepoError::NotFound(R::TITLE))
}

/// Deletes the row with the given primary key
///
/// # Errors
///
/// [`RepoError::NotFound`] when zero rows were affected.
pub async fn delete_by_id<R: Resource>(pool: &PgPool, id: i32) -> RepoResult<()> {
    let sql = delete_sql::<R>();
    let result = sqlx::query(&sql)
        .bind(id)
        .execute(pool)
        .await
        .map_err(RepoError::from_store)?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(R::TITLE));
    }

    Ok(())
}

/// Runs the payload's declared validations, flattening field errors into a
/// single `BadRequest` message
fn validate_payload<T: Validate>(data: &T) -> RepoResult<()> {
    data.validate().map_err(|e| {
        let messages: Vec<String> = e
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "is invalid".to_string());
                    format!("{}: {}", field, message)
                })
            })
            .collect();
        RepoError::BadRequest(messages.join("; "))
    })
}

fn insert_sql<R: Resource>() -> String {
    let placeholders: Vec<String> = (1..=R::INSERT_COLUMNS.len())
        .map(|i| format!("${}", i))
        .collect();

    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        R::TABLE,
        R::INSERT_COLUMNS.join(", "),
        placeholders.join(", "),
        R::COLUMNS.join(", ")
    )
}

fn select_all_sql<R: Resource>() -> String {
    format!(
        "SELECT {} FROM {} ORDER BY id",
        R::COLUMNS.join(", "),
        R::TABLE
    )
}

fn select_by_id_sql<R: Resource>() -> String {
    format!(
        "SELECT {} FROM {} WHERE id = $1",
        R::COLUMNS.join(", "),
        R::TABLE
    )
}

fn update_sql<R: Resource>() -> String {
    let assignments: Vec<String> = R::UPDATE_COLUMNS
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{} = ${}", col, i + 2))
        .collect();

    format!(
        "UPDATE {} SET {}, updated_at = NOW() WHERE id = $1 RETURNING {}",
        R::TABLE,
        assignments.join(", "),
        R::COLUMNS.join(", ")
    )
}

fn delete_sql<R: Resource>() -> String {
    format!("DELETE FROM {} WHERE id = $1", R::TABLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::todo::{CreateTodo, Todo};
    use crate::models::user::{CreateUser, User};

    #[test]
    fn test_user_insert_sql() {
        assert_eq!(
            insert_sql::<User>(),
            "INSERT INTO users (name, email, age, phone, address) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, name, email, age, phone, address, created_at, updated_at"
        );
    }

    #[test]
    fn test_todo_insert_sql() {
        assert_eq!(
            insert_sql::<Todo>(),
            "INSERT INTO todos (user_id, title, description, completed, due_date) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, user_id, title, description, completed, due_date, created_at, updated_at"
        );
    }

    #[test]
    fn test_user_update_sql_binds_id_first() {
        assert_eq!(
            update_sql::<User>(),
            "UPDATE users SET name = $2, email = $3, age = $4, phone = $5, address = $6, \
             updated_at = NOW() WHERE id = $1 \
             RETURNING id, name, email, age, phone, address, created_at, updated_at"
        );
    }

    #[test]
    fn test_select_sql_orders_by_insertion() {
        assert_eq!(
            select_all_sql::<Todo>(),
            "SELECT id, user_id, title, description, completed, due_date, created_at, updated_at \
             FROM todos ORDER BY id"
        );
    }

    #[test]
    fn test_delete_sql() {
        assert_eq!(delete_sql::<User>(), "DELETE FROM users WHERE id = $1");
    }

    #[test]
    fn test_values_line_up_with_columns() {
        let user_values = User::create_values(CreateUser {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            age: Some(30),
            phone: None,
            address: None,
        });
        assert_eq!(user_values.len(), User::INSERT_COLUMNS.len());

        let todo_values = Todo::create_values(CreateTodo {
            user_id: 1,
            title: "T".to_string(),
            description: None,
            completed: None,
            due_date: None,
        });
        assert_eq!(todo_values.len(), Todo::INSERT_COLUMNS.len());
        // completed defaults to false when omitted
        assert_eq!(todo_values[3], BindValue::Bool(false));
    }

    #[test]
    fn test_validate_payload_rejects_empty_required_field() {
        let payload = CreateUser {
            name: "".to_string(),
            email: "ann@example.com".to_string(),
            age: None,
            phone: None,
            address: None,
        };

        let err = validate_payload(&payload).unwrap_err();
        assert!(matches!(err, RepoError::BadRequest(_)));
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_validate_payload_accepts_valid_input() {
        let payload = CreateUser {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            age: Some(30),
            phone: None,
            address: None,
        };

        assert!(validate_payload(&payload).is_ok());
    }
}
