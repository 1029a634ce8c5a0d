use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum PayrollError {
    #[error("Could not find {kind} {id}")]
    NotFound { kind: &'static str, id: i64 },

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IntoResponse for PayrollError {
    fn into_response(self) -> Response {
        let (status, error_body) = match self {
            // Plain-text message, not the JSON envelope.
            PayrollError::NotFound { .. } => {
                return (StatusCode::NOT_FOUND, self.to_string()).into_response();
            }
            PayrollError::MalformedBody(reason) => {
                let status = StatusCode::BAD_REQUEST;
                let body = ApiErrorBody {
                    code: "BAD_REQUEST".to_string(),
                    message: reason,
                };
                (status, body)
            }
            PayrollError::DatabaseError(_) | PayrollError::Json(_) => {
                tracing::error!(error = %self, "request failed");
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (status, body)
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
