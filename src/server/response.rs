use crate::prelude::AppError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use tracing::error;

#[must_use]
pub(crate) fn error_status(err: &AppError) -> StatusCode {
    match err {
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        e if e.is_client_error() => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[must_use]
pub(crate) fn error_response(err: &AppError) -> Response {
    let status = error_status(err);
    if status.is_server_error() {
        error!(error = %err, "request failed");
    }
    error_message(status, &err.to_string())
}

#[must_use]
pub(crate) fn error_message(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({"success": false, "error": message}))).into_response()
}

#[must_use]
pub(crate) fn success_message(message: &str) -> Response {
    success_with(json!({ "message": message }))
}

/// `{"success": true}` merged with the given object's fields.
#[must_use]
pub(crate) fn success_with(fields: Value) -> Response {
    let mut body = serde_json::Map::new();
    body.insert("success".to_string(), Value::Bool(true));
    if let Value::Object(extra) = fields {
        body.extend(extra);
    }
    Json(Value::Object(body)).into_response()
}
