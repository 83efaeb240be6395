//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod media;
mod user;

pub use comment::{CommentModel, CommentWithUserModel};
pub use media::MediaModel;
pub use user::UserModel;
