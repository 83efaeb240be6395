//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in track-core.
//! Each repository handles database operations for a specific domain entity.

mod comment;
mod error;
mod media;
mod user;

pub use comment::PgCommentRepository;
pub use media::PgMediaRepository;
pub use user::PgUserRepository;
