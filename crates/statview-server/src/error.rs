//! Server error type and its HTTP translation.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use statview_core::error::{ClientCode, StatError};

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Stat(#[from] StatError),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("template error: {0}")]
    Template(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("internal error: {0}")]
    Internal(String),
}

const REDACTED: &str = "internal server error";

impl AppError {
    pub fn client_code(&self) -> &'static str {
        match self {
            AppError::Stat(e) => e.client_code().as_str(),
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Template(_) | AppError::Config(_) | AppError::Internal(_) => {
                ClientCode::Internal.as_str()
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Stat(e) => match e.client_code() {
                ClientCode::BadRequest => StatusCode::BAD_REQUEST,
                ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Template(_) | AppError::Config(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Log and translate to a JSON error response. In production the
    /// message of 5xx errors is replaced so internals do not leak.
    pub fn into_response_for(self, in_production: bool) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            if in_production { REDACTED.to_string() } else { self.to_string() }
        } else {
            tracing::warn!(error = %self, "request rejected");
            self.to_string()
        };

        let body = Json(json!({
            "error": self.client_code(),
            "message": message,
        }));
        (status, body).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_response_for(false)
    }
}
