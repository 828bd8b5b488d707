use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success envelope shared by every JSON route.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response { Json(self).into_response() }
}

/// Failure envelope: `{"success": false, "error": {...}}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: ApiErrorInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorInfo {
    /// Stable machine-readable code, e.g. `EVENT_NOT_FOUND`.
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    UnprocessableEntity,
    Internal,
}

impl ErrorKind {
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error returned by HTTP handlers. Domain errors convert into it at the
/// route boundary.
#[derive(Debug)]
pub struct AppError {
    kind: ErrorKind,
    info: ApiErrorInfo,
}

impl AppError {
    fn new(
        kind: ErrorKind, code: &str, message: &str, details: Option<&str>,
    ) -> Self {
        Self {
            kind,
            info: ApiErrorInfo {
                code: code.to_string(),
                message: message.to_string(),
                details: details.map(str::to_string),
            },
        }
    }

    pub fn bad_request_with_details(
        code: &str, message: &str, details: &str,
    ) -> Self {
        Self::new(ErrorKind::BadRequest, code, message, Some(details))
    }

    pub fn not_found(code: &str, message: &str) -> Self {
        Self::new(ErrorKind::NotFound, code, message, None)
    }

    pub fn unprocessable_entity(code: &str, message: &str) -> Self {
        Self::new(ErrorKind::UnprocessableEntity, code, message, None)
    }

    pub fn internal_server_error(message: &str) -> Self {
        Self::new(ErrorKind::Internal, "INTERNAL_ERROR", message, None)
    }

    pub fn kind(&self) -> ErrorKind { self.kind }

    pub fn code(&self) -> &str { &self.info.code }

    pub fn status_code(&self) -> StatusCode { self.kind.status_code() }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ApiErrorResponse {
            success: false,
            error: self.info,
        };
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal_server_error(&format!(
            "An unexpected error occurred: {err}"
        ))
    }
}
