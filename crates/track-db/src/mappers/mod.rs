//! Entity to model mappers
//!
//! This module provides conversions between domain entities (track-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert`/`*Update` structs: Prepare entity data for database operations

mod comment;
mod media;
mod user;

pub use comment::{CommentInsert, CommentUpdate};
pub use media::{MediaInsert, MediaUpdate};
