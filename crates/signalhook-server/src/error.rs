//! Application error types and Axum response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use signalhook_core::SchemaError;

/// Request failures with HTTP status code mapping.
#[derive(Debug)]
pub enum AppError {
    /// Body could not be parsed at all. Maps to 400.
    BadRequest(String),
    /// Body did not match the signal schema, one entry per bad field. Maps to 422.
    Unprocessable(Vec<SchemaError>),
}

impl From<Vec<SchemaError>> for AppError {
    fn from(issues: Vec<SchemaError>) -> Self {
        AppError::Unprocessable(issues)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

#[derive(Serialize)]
struct ErrorResponse<T> {
    detail: T,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { detail })).into_response()
            }
            AppError::Unprocessable(issues) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse { detail: issues }),
            )
                .into_response(),
        }
    }
}
