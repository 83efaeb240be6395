//! # track-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::{
    CommentService, FileService, MediaService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, UserService,
};
