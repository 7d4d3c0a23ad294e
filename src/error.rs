use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

/// The three failure classes every error in the service collapses into.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RideError {
    #[error("{0}")]
    Validation(String),
    #[error("Could not find any rides")]
    NotFound,
    #[error("Unknown error")]
    Server,
}

impl RideError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound => "RIDES_NOT_FOUND_ERROR",
            Self::Server => "SERVER_ERROR",
        }
    }
}

impl From<sqlx::Error> for RideError {
    fn from(err: sqlx::Error) -> Self {
        // Engine detail is logged here and never leaves the process.
        error!("Database error: {}", err);
        Self::Server
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error_code: &'static str,
    message: String,
}

impl IntoResponse for RideError {
    fn into_response(self) -> Response {
        let code = self.code();
        let message = self.to_string();
        error!("ERROR {}:{}", code, message);
        // Validation and not-found render as 500 too; the API uses a single
        // status for every failure class.
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody { error_code: code, message }),
        )
            .into_response()
    }
}
