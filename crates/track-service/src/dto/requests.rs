//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Field names are camelCase on the wire.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// User Requests
// ============================================================================

/// Create user request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 64, message = "Name must be 1-64 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 64, message = "Account must be 1-64 characters"))]
    pub account: String,

    /// Avatar image path, usually an uploaded `/p/...` path
    #[serde(default)]
    #[validate(length(max = 1024, message = "Avatar URL must be at most 1024 characters"))]
    pub avatar_url: String,
}

/// Update user request; absent fields stay unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 64, message = "Name must be 1-64 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 64, message = "Account must be 1-64 characters"))]
    pub account: Option<String>,

    #[validate(length(max = 1024, message = "Avatar URL must be at most 1024 characters"))]
    pub avatar_url: Option<String>,
}

// ============================================================================
// Media Requests
// ============================================================================

/// Create media request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMediaRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    /// Storage path for local media or a URL for online media
    #[validate(length(min = 1, max = 2048, message = "Path must be 1-2048 characters"))]
    pub path: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub descript: Option<String>,

    /// 1 = local, 2 = online; defaults to local
    #[serde(rename = "type")]
    #[validate(range(min = 1, max = 2, message = "Type must be 1 (local) or 2 (online)"))]
    pub media_type: Option<i16>,
}

/// Update media request; absent fields stay unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMediaRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 2048, message = "Path must be 1-2048 characters"))]
    pub path: Option<String>,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub descript: Option<String>,

    #[serde(rename = "type")]
    #[validate(range(min = 1, max = 2, message = "Type must be 1 (local) or 2 (online)"))]
    pub media_type: Option<i16>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 4000, message = "Content must be 1-4000 characters"))]
    pub content: String,

    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: i64,

    #[validate(range(min = 1, message = "mediaId must be a positive id"))]
    pub media_id: i64,

    #[serde(default)]
    #[validate(length(max = 32, message = "At most 32 images per comment"))]
    pub image_urls: Vec<String>,

    /// Seconds into playback
    #[validate(range(min = 0.0, message = "Timestamp must not be negative"))]
    pub timestamp: f64,
}

/// Update comment request; absent fields stay unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 4000, message = "Content must be 1-4000 characters"))]
    pub content: Option<String>,

    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: Option<i64>,

    #[validate(range(min = 1, message = "mediaId must be a positive id"))]
    pub media_id: Option<i64>,

    #[validate(length(max = 32, message = "At most 32 images per comment"))]
    pub image_urls: Option<Vec<String>>,

    #[validate(range(min = 0.0, message = "Timestamp must not be negative"))]
    pub timestamp: Option<f64>,
}

/// Timeline query parameters
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TimelineQuery {
    /// Marker bucket width in seconds
    #[validate(range(min = 0.0, message = "Tolerance must not be negative"))]
    pub tolerance: Option<f64>,

    /// Media duration in seconds, enables marker positions
    #[validate(range(min = 0.0, message = "Duration must not be negative"))]
    pub duration: Option<f64>,
}

// ============================================================================
// File Requests
// ============================================================================

fn default_root() -> String {
    "/".to_string()
}

/// Directory listing request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FileListRequest {
    #[serde(default = "default_root")]
    #[validate(length(min = 1, max = 2048, message = "Path must be 1-2048 characters"))]
    pub path: String,

    #[validate(range(min = 1, message = "Page starts at 1"))]
    pub page: Option<u32>,

    #[validate(range(max = 1000, message = "At most 1000 entries per page"))]
    pub per_page: Option<u32>,

    #[serde(default)]
    pub refresh: bool,
}

/// Single file lookup request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FileGetRequest {
    #[validate(length(min = 1, max = 2048, message = "Path must be 1-2048 characters"))]
    pub path: String,
}
