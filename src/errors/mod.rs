// Defines a custom error type and a result type alias for the application
// using the thiserror crate.
use thiserror::Error;

// Make the response module public
pub mod response;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Input(String),

    #[error("{0}")]
    Unauthorized(String),

    // The #[from] attribute automatically converts a sqlx::Error into an
    // AppError::Database using the From trait.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Template error: {0}")]
    Template(#[from] std::io::Error),
}

// Custom result type
pub type AppResult<T> = Result<T, AppError>;
