//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use track_core::error::DomainError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a foreign key violation on a comment write to the missing side
pub fn map_comment_fk_violation(e: SqlxError, media_id: i64, user_id: i64) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return match db_err.constraint() {
                Some(name) if name.contains("user") => user_not_found(user_id),
                _ => media_not_found(media_id),
            };
        }
    }
    map_db_error(e)
}

/// Create a "user not found" error
pub fn user_not_found(id: i64) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "media not found" error
pub fn media_not_found(id: i64) -> DomainError {
    DomainError::MediaNotFound(id)
}

/// Create a "comment not found" error
pub fn comment_not_found(id: i64) -> DomainError {
    DomainError::CommentNotFound(id)
}
