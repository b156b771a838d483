use thiserror::Error;

/// Custom error types for the sunset-alert application
#[derive(Error, Debug)]
pub enum AppError {
    /// Wrapper for reqwest errors
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Wrapper for JSON deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
