use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bcrypt::BcryptError;
use jsonwebtoken::errors::Error as JwtError;
use serde::Serialize;
use sqlx::Error as SqlxError;
use std::{error::Error as StdError, fmt, io::Error as IoError};
use tracing::{error, warn};

pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Every failure leaves the service as `{"error": "<message>"}` with the
/// attached HTTP status.
#[derive(Debug, Clone, Serialize)]
pub struct AppError {
    #[serde(rename = "error")]
    pub message: String,
    #[serde(skip)]
    pub status: StatusCode,
}

impl AppError {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::BAD_REQUEST)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::UNAUTHORIZED)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::FORBIDDEN)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::NOT_FOUND)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Maps a unique-constraint violation to a 400 carrying `conflict`;
    /// anything else goes through the generic sqlx conversion.
    pub fn from_sqlx_conflict(value: SqlxError, conflict: &str) -> Self {
        if is_unique_violation(&value) {
            return Self::bad_request(conflict);
        }
        Self::from(value)
    }
}

pub fn is_unique_violation(value: &SqlxError) -> bool {
    match value {
        SqlxError::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (HTTP {})", self.message, self.status.as_u16())
    }
}

impl StdError for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        warn!("AppError: {} (HTTP {})", self.message, self.status.as_u16());
        (self.status, Json(self)).into_response()
    }
}

// --------------------
// Error conversions
// --------------------

impl From<SqlxError> for AppError {
    fn from(value: SqlxError) -> Self {
        if is_unique_violation(&value) {
            return Self::bad_request("Record already exists");
        }
        error!("storage failure: {value:?}");
        Self::internal(SERVER_ERROR_MESSAGE)
    }
}

impl From<IoError> for AppError {
    fn from(value: IoError) -> Self {
        error!("io failure: {value:?}");
        Self::internal(SERVER_ERROR_MESSAGE)
    }
}

impl From<JsonRejection> for AppError {
    fn from(value: JsonRejection) -> Self {
        Self::bad_request(value.body_text())
    }
}

impl From<JwtError> for AppError {
    fn from(value: JwtError) -> Self {
        warn!("token rejected: {value:?}");
        Self::forbidden("Invalid token")
    }
}

impl From<BcryptError> for AppError {
    fn from(value: BcryptError) -> Self {
        error!("password hashing failure: {value:?}");
        Self::internal(SERVER_ERROR_MESSAGE)
    }
}
