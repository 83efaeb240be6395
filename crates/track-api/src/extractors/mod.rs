//! Axum extractors for request handling
//!
//! Custom extractors for validated bodies, validated queries and numeric ids.

mod path;
mod validated;

pub use path::IdPath;
pub use validated::{ValidatedJson, ValidatedQuery};
