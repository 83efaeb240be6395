//! Storage client errors

/// Errors raised while talking to the storage service
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unauthorized")]
    Unauthorized,

    #[error("login failed: {0}")]
    Login(String),

    #[error("storage service returned {code}: {message}")]
    Upstream { code: i64, message: String },

    #[error("storage service returned no data")]
    MissingData,

    #[error("invalid file name: {0:?}")]
    InvalidFileName(String),

    #[error("invalid header value")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl StorageError {
    /// Check if the failure was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidFileName(_))
    }
}

pub type StorageResult<T> = Result<T, StorageError>;
