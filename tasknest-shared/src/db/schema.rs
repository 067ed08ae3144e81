/// Schema bootstrap
///
/// This module creates the `users` and `todos` tables on startup using
/// "create if not exists" semantics, so repeated startups are no-ops.
/// `todos` carries a foreign key to `users`, which is why `users` must be
/// created first.
///
/// Bootstrap failure is fatal: the server must not begin accepting requests
/// against a database whose schema could not be established.
///
/// # Example
///
/// ```no_run
/// use tasknest_shared::db::pool::{create_pool, DatabaseConfig};
/// use tasknest_shared::db::schema::ensure_schema;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
/// ensure_schema(&pool).await?;
/// # Ok(())
/// # }
/// ```
use sqlx::{migrate::MigrateDatabase, postgres::PgPool, Postgres};
use tracing::{debug, info};

/// DDL for the `users` table
const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL UNIQUE,
    age INTEGER,
    phone VARCHAR(50),
    address TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

/// DDL for the `todos` table
///
/// `ON DELETE CASCADE` removes a user's todos together with the user.
const CREATE_TODOS: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id SERIAL PRIMARY KEY,
    user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    title VARCHAR(255) NOT NULL,
    description TEXT,
    completed BOOLEAN NOT NULL DEFAULT FALSE,
    due_date DATE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

/// Ensures the `users` and `todos` tables exist
///
/// Statement order matters: `todos` references `users`, so `users` is
/// created first.
///
/// # Errors
///
/// Returns the first statement's error unchanged; callers treat any failure
/// here as fatal and abort startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    info!("Ensuring database schema");

    for (table, ddl) in [("users", CREATE_USERS), ("todos", CREATE_TODOS)] {
        sqlx::query(ddl).execute(pool).await?;
        debug!(table, "Table ensured");
    }

    info!("Database schema is ready");
    Ok(())
}

/// Creates the database if it doesn't exist
///
/// Useful for development and testing. In production the database should
/// already exist.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), sqlx::Error> {
    if !Postgres::database_exists(database_url).await? {
        info!("Database does not exist, creating it");
        Postgres::create_database(database_url).await?;
        info!("Database created successfully");
    } else {
        debug!("Database already exists");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ddl_is_idempotent() {
        assert!(CREATE_USERS.contains("CREATE TABLE IF NOT EXISTS users"));
        assert!(CREATE_TODOS.contains("CREATE TABLE IF NOT EXISTS todos"));
    }

    #[test]
    fn test_todos_cascade_on_user_delete() {
        assert!(CREATE_TODOS.contains("REFERENCES users(id) ON DELETE CASCADE"));
    }

    #[test]
    fn test_users_email_is_unique() {
        assert!(CREATE_USERS.contains("email VARCHAR(255) NOT NULL UNIQUE"));
    }
}
