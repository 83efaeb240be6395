//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every `find`/`list` excludes soft-deleted
//! rows, and `update`/`delete` report the entity's not-found error when the
//! row is missing or already deleted.

use async_trait::async_trait;

use crate::entities::{
    Comment, CommentWithAuthor, Media, NewComment, NewMedia, NewUser, User,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a live user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// List live users, most recently updated first
    async fn list(&self) -> RepoResult<Vec<User>>;

    /// Insert a new user and return the stored row
    async fn create(&self, user: &NewUser) -> RepoResult<User>;

    /// Persist all mutable fields of an existing user and return the stored row
    async fn update(&self, user: &User) -> RepoResult<User>;

    /// Soft delete a user
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Media Repository
// ============================================================================

#[async_trait]
pub trait MediaRepository: Send + Sync {
    /// Find live media by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Media>>;

    /// List live media, most recently updated first
    async fn list(&self) -> RepoResult<Vec<Media>>;

    /// Insert new media and return the stored row
    async fn create(&self, media: &NewMedia) -> RepoResult<Media>;

    /// Persist all mutable fields of existing media and return the stored row
    async fn update(&self, media: &Media) -> RepoResult<Media>;

    /// Soft delete media
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find a live comment by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Comment>>;

    /// Find a live comment together with its author
    async fn find_with_author(&self, id: i64) -> RepoResult<Option<CommentWithAuthor>>;

    /// List live comments on a media item with their authors, in timeline order
    async fn find_by_media(&self, media_id: i64) -> RepoResult<Vec<CommentWithAuthor>>;

    /// Insert a new comment and return the stored row
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment>;

    /// Persist all mutable fields of an existing comment
    async fn update(&self, comment: &Comment) -> RepoResult<()>;

    /// Soft delete a comment
    async fn delete(&self, id: i64) -> RepoResult<()>;
}
