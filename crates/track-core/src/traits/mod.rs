//! Repository traits (ports)

mod repositories;

pub use repositories::{CommentRepository, MediaRepository, RepoResult, UserRepository};
