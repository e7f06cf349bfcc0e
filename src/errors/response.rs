use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::errors::AppError;

// The IntoResponse trait implementation converts AppError into a well-formed
// HTTP response. Every body is plain text; callers are not told whether a 500
// came from the database, the hash, or a template file.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Client input errors are bad requests
            AppError::Input(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),

            // Authentication errors
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg).into_response(),

            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string()).into_response()
            }

            AppError::Hash(e) => {
                tracing::error!("Hashing error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error hashing password".to_string(),
                )
                    .into_response()
            }

            AppError::Template(e) => {
                tracing::error!("Template error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error loading template".to_string(),
                )
                    .into_response()
            }
        }
    }
}
