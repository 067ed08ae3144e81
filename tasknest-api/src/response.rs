/// Response envelope
///
/// Every endpoint answers with the same JSON shape:
/// `{ "success": bool, "message": string, "data": ... }`. The `data` key is
/// omitted when there is no payload; deletes answer with an explicit
/// `"data": null`.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The uniform JSON wrapper returned by every endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Whether the operation succeeded
    pub success: bool,

    /// Human-readable outcome description
    pub message: String,

    /// Payload; omitted entirely when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// 201 with the created row
pub fn created<T: Serialize>(message: impl Into<String>, data: T) -> Response {
    (
        StatusCode::CREATED,
        Json(Envelope {
            success: true,
            message: message.into(),
            data: Some(data),
        }),
    )
        .into_response()
}

/// 200 with a row or sequence of rows
pub fn ok<T: Serialize>(message: impl Into<String>, data: T) -> Response {
    (
        StatusCode::OK,
        Json(Envelope {
            success: true,
            message: message.into(),
            data: Some(data),
        }),
    )
        .into_response()
}

/// 200 with an explicit `data: null`
pub fn deleted(message: impl Into<String>) -> Response {
    (
        StatusCode::OK,
        Json(Envelope {
            success: true,
            message: message.into(),
            data: Some(Value::Null),
        }),
    )
        .into_response()
}

/// Failure envelope for a given status
pub fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(Envelope::<Value> {
            success: false,
            message: message.into(),
            data: None,
        }),
    )
        .into_response()
}

/// Failure envelope carrying the requested path as the payload
///
/// Used by the unmatched-route handler.
pub fn failure_with_path(status: StatusCode, message: impl Into<String>, path: &str) -> Response {
    (
        status,
        Json(Envelope {
            success: false,
            message: message.into(),
            data: Some(Value::String(path.to_string())),
        }),
    )
        .into_response()
}
