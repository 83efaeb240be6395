//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod comment;
pub mod context;
pub mod error;
pub mod file;
pub mod media;
pub mod user;

#[cfg(test)]
mod testing;

// Re-export all services for convenience
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use file::FileService;
pub use media::MediaService;
pub use user::UserService;
