//! # track-storage
//!
//! Client for the AList-compatible file storage service that hosts media
//! files and comment images.
//!
//! The service wraps every reply in `{ code, message, data }`. The client
//! logs in lazily, caches the token, and on a `401` logs in again and
//! retries the request once.

mod client;
mod error;
mod models;
mod path;

pub use client::StorageClient;
pub use error::{StorageError, StorageResult};
pub use models::{ContentItem, FileType, FsGetResponse, FsListRequest, FsListResponse, StorageEnvelope};
pub use path::{encode_file_path, public_path, upload_path};
