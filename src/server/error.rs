use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Request-scoped API failure. Storage errors keep their sqlx cause so the
/// response mapping can tell a missing row from a constraint violation from a
/// dead backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad request")]
    BadRequest,
    #[error("resource not found")]
    NotFound,
    #[error("unprocessable")]
    Unprocessable,
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl From<JsonRejection> for ApiError {
    fn from(_: JsonRejection) -> Self {
        ApiError::BadRequest
    }
}

impl From<QueryRejection> for ApiError {
    fn from(_: QueryRejection) -> Self {
        ApiError::BadRequest
    }
}

// An id segment that does not parse means the route cannot name a resource,
// which the original API reported as 404.
impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        ApiError::NotFound
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: &'static str,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Database(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            // Driver-level errors are constraint violations from bad input;
            // anything else (pool closed, I/O) is the backend's problem.
            ApiError::Database(e) if e.as_database_error().is_some() => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn message_for(status: StatusCode) -> &'static str {
    match status.as_u16() {
        400 => "bad request",
        404 => "resource not found",
        405 => "method not allowed",
        422 => "unprocessable",
        _ => "internal server error",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Database(ref e) = self {
            tracing::error!("Database error: {e}");
        }
        let status = self.status();
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: message_for(status),
        };
        (status, Json(body)).into_response()
    }
}
