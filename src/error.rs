use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage IO error")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Bad Request: {0}")]
    Validation(String),

    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Token storage error")]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// Builds the error for a non-success response, keeping the body text when
    /// the backend sent one.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        let message = if body.is_empty() {
            format!("HTTP error! status: {}", status.as_u16())
        } else {
            body
        };
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized(message),
            StatusCode::FORBIDDEN => ApiError::Forbidden(message),
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            StatusCode::BAD_REQUEST => ApiError::Validation(message),
            _ => ApiError::Status { status, message },
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Unauthenticated(String),

    #[error("Forbidden")]
    Forbidden,

    #[error("Bad Request {0}")]
    BadRequest(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Storage error")]
    Storage(#[from] StorageError),
}

pub type AppResult<T> = Result<T, AppError>;
pub type ApiResult<T> = Result<T, ApiError>;
