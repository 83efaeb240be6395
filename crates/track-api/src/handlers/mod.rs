//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod comments;
pub mod files;
pub mod health;
pub mod media;
pub mod users;
