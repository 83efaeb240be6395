//! # track-core
//!
//! Domain layer containing entities, repository traits, and the timeline
//! grouping used by the media viewer.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod timeline;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    join_image_urls, split_image_urls, Comment, CommentChanges, CommentWithAuthor, Media,
    MediaChanges, MediaType, NewComment, NewMedia, NewUser, User, UserChanges,
    IMAGE_URL_DELIMITER,
};
pub use error::DomainError;
pub use timeline::{bucket_markers, format_time, group_by_timestamp, Marker, TimestampGroup, Timestamped};
pub use traits::{CommentRepository, MediaRepository, RepoResult, UserRepository};
