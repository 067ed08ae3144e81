/// Generic CRUD handlers
///
/// One set of handlers serves every resource type; `/users` and `/todos`
/// are both instantiations of these functions. A handler extracts and
/// validates its inputs, delegates to the repository, and shapes the
/// outcome into the response envelope.
///
/// # Endpoints (per resource)
///
/// ```text
/// POST   /{resource}        create; 201 with the created row
/// GET    /{resource}        list all; 200 with the full sequence
/// GET    /{resource}/:id    fetch one; 200 or 404
/// PUT    /{resource}/:id    full-field update; 200 or 404
/// DELETE /{resource}/:id    delete; 200 with data: null, or 404
/// ```
///
/// Identifiers arrive as raw path text and are parsed up front; a
/// malformed id is rejected as a 400 before any database work happens.
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};
use crate::response;
use tasknest_shared::repository::{self, Resource};

/// Create a resource
///
/// # Errors
///
/// - `400 Bad Request`: unparseable body or empty required field
/// - `500 Internal Server Error`: uniqueness conflict or other store error
pub async fn create<R: Resource + 'static>(
    State(state): State<AppState>,
    payload: Result<Json<R::Create>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(data) = payload.map_err(bad_body)?;
    let row = repository::create::<R>(&state.db, data).await?;

    Ok(response::created(
        format!("{} created successfully", R::TITLE),
        row,
    ))
}

/// List every row of a resource
///
/// An empty table answers 200 with an empty array.
pub async fn list<R: Resource + 'static>(State(state): State<AppState>) -> ApiResult<Response> {
    let rows = repository::list_all::<R>(&state.db).await?;

    Ok(response::ok(
        format!("{}s retrieved successfully", R::TITLE),
        rows,
    ))
}

/// Fetch a single row by id
///
/// # Errors
///
/// - `400 Bad Request`: malformed id
/// - `404 Not Found`: no row with that id
pub async fn get_by_id<R: Resource + 'static>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let id = parse_id(&id)?;
    let row = repository::get_by_id::<R>(&state.db, id).await?;

    Ok(response::ok(
        format!("{} fetched successfully", R::TITLE),
        row,
    ))
}

/// Full-field update of a single row
///
/// # Errors
///
/// - `400 Bad Request`: malformed id, unparseable body, or empty required
///   field
/// - `404 Not Found`: no row with that id (zero rows returned)
pub async fn update<R: Resource + 'static>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<R::Update>, JsonRejection>,
) -> ApiResult<Response> {
    let id = parse_id(&id)?;
    let Json(data) = payload.map_err(bad_body)?;
    let row = repository::update::<R>(&state.db, id, data).await?;

    Ok(response::ok(
        format!("{} updated successfully", R::TITLE),
        row,
    ))
}

/// Delete a single row by id
///
/// # Errors
///
/// - `400 Bad Request`: malformed id
/// - `404 Not Found`: zero rows affected
pub async fn remove<R: Resource + 'static>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let id = parse_id(&id)?;
    repository::delete_by_id::<R>(&state.db, id).await?;

    Ok(response::deleted(format!("{} deleted", R::TITLE)))
}

/// Parses a path identifier, rejecting anything that is not an integer
/// before it can reach the store
fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>().map_err(|_| {
        ApiError::BadRequest(format!("invalid id '{}': expected an integer", raw))
    })
}

fn bad_body(rejection: JsonRejection) -> ApiError {
    ApiError::BadRequest(rejection.body_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        assert!(parse_id("abc").is_err());
        assert!(parse_id("1.5").is_err());
        assert!(parse_id("").is_err());
        assert!(parse_id("9999999999999").is_err());
    }

    #[test]
    fn test_parse_id_error_is_bad_request() {
        let err = parse_id("abc").unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
        assert!(err.to_string().contains("abc"));
    }
}
