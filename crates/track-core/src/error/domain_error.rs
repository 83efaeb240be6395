//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Media not found: {0}")]
    MediaNotFound(i64),

    #[error("Comment not found: {0}")]
    CommentNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown media type: {0}")]
    InvalidMediaType(i16),

    #[error("Image URL must not contain ',': {0}")]
    InvalidImageUrl(String),

    #[error("Timestamp must be a finite, non-negative number of seconds")]
    InvalidTimestamp,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage service error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::MediaNotFound(_) => "UNKNOWN_MEDIA",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidMediaType(_) => "INVALID_MEDIA_TYPE",
            Self::InvalidImageUrl(_) => "INVALID_IMAGE_URL",
            Self::InvalidTimestamp => "INVALID_TIMESTAMP",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::MediaNotFound(_) | Self::CommentNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidMediaType(_)
                | Self::InvalidImageUrl(_)
                | Self::InvalidTimestamp
        )
    }

    /// Check if this error came from the external storage service
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::StorageError(_))
    }

    /// HTTP status the error maps to
    pub fn status_code(&self) -> u16 {
        if self.is_not_found() {
            404
        } else if self.is_validation() {
            400
        } else if self.is_upstream() {
            502
        } else {
            500
        }
    }
}
