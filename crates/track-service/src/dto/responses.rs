//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output with camelCase
//! field names.

use chrono::{DateTime, Utc};
use serde::Serialize;
use track_core::Marker;
use track_storage::FileType;

// ============================================================================
// Entity Responses
// ============================================================================

/// User as returned by the API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub account: String,
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Media item as returned by the API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaResponse {
    pub id: i64,
    pub name: String,
    pub path: String,
    pub descript: Option<String>,
    #[serde(rename = "type")]
    pub media_type: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Comment as returned by the API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub content: String,
    pub image_urls: Vec<String>,
    pub timestamp: f64,
    pub media_id: i64,
    pub user_id: i64,
    pub is_edited: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Author, present when the comment was loaded with its user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

/// Comments on one media item
#[derive(Debug, Clone, Serialize)]
pub struct CommentListResponse {
    pub list: Vec<CommentResponse>,
}

/// Confirmation for a soft delete
#[derive(Debug, Clone, Serialize)]
pub struct DeletedResponse {
    pub message: String,
}

impl DeletedResponse {
    pub fn new(entity: &str, id: i64) -> Self {
        Self {
            message: format!("{entity} #{id} deleted"),
        }
    }
}

// ============================================================================
// Timeline Responses
// ============================================================================

/// Comments sharing one timestamp
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineGroupResponse {
    pub timestamp: f64,
    pub label: String,
    pub comments: Vec<CommentResponse>,
}

/// Thread groups and scrub-bar markers for a media item
#[derive(Debug, Clone, Serialize)]
pub struct TimelineResponse {
    pub groups: Vec<TimelineGroupResponse>,
    pub markers: Vec<Marker>,
}

// ============================================================================
// File Responses
// ============================================================================

/// One entry of a storage directory
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntryResponse {
    pub name: String,
    /// Full storage path of the entry
    pub path: String,
    pub size: i64,
    pub is_dir: bool,
    pub kind: FileType,
    pub modified: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub thumb: String,
}

/// Storage directory listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileListResponse {
    pub path: String,
    pub total: i64,
    pub write: bool,
    pub items: Vec<FileEntryResponse>,
}

/// Details of a single stored file
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDetailResponse {
    pub name: String,
    pub path: String,
    pub size: i64,
    pub is_dir: bool,
    pub kind: FileType,
    pub modified: String,
    pub raw_url: String,
}

/// Result of an upload
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    /// Public `/p/...` path of the stored file
    pub path: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
