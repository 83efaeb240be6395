//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create user request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub account: String,
    pub avatar_url: String,
}

impl CreateUserRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test User {suffix}"),
            account: format!("tester{suffix}"),
            avatar_url: String::new(),
        }
    }
}

/// User response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub account: String,
    pub avatar_url: String,
}

/// Create media request
#[derive(Debug, Serialize)]
pub struct CreateMediaRequest {
    pub name: String,
    pub path: String,
    pub descript: Option<String>,
    #[serde(rename = "type")]
    pub media_type: i16,
}

impl CreateMediaRequest {
    pub fn local() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("clip-{suffix}"),
            path: format!("/videos/clip-{suffix}.mp4"),
            descript: Some("A test clip".to_string()),
            media_type: 1,
        }
    }
}

/// Media response
#[derive(Debug, Deserialize)]
pub struct MediaResponse {
    pub id: i64,
    pub name: String,
    pub path: String,
    pub descript: Option<String>,
    #[serde(rename = "type")]
    pub media_type: i16,
}

/// Create comment request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub content: String,
    pub user_id: i64,
    pub media_id: i64,
    pub image_urls: Vec<String>,
    pub timestamp: f64,
}

impl CreateCommentRequest {
    pub fn at(user_id: i64, media_id: i64, timestamp: f64) -> Self {
        Self {
            content: format!("Comment at {timestamp}"),
            user_id,
            media_id,
            image_urls: Vec::new(),
            timestamp,
        }
    }
}

/// Comment response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub content: String,
    pub image_urls: Vec<String>,
    pub timestamp: f64,
    pub media_id: i64,
    pub user_id: i64,
    pub is_edited: bool,
    pub user: Option<UserResponse>,
}

/// Comment list wrapper
#[derive(Debug, Deserialize)]
pub struct CommentListResponse {
    pub list: Vec<CommentResponse>,
}

/// Timeline group
#[derive(Debug, Deserialize)]
pub struct TimelineGroup {
    pub timestamp: f64,
    pub label: String,
    pub comments: Vec<CommentResponse>,
}

/// Scrub-bar marker
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub time: f64,
    pub label: String,
    pub comment_ids: Vec<i64>,
    pub count: usize,
    pub position: Option<f64>,
}

/// Timeline response
#[derive(Debug, Deserialize)]
pub struct TimelineResponse {
    pub groups: Vec<TimelineGroup>,
    pub markers: Vec<Marker>,
}

/// Delete confirmation
#[derive(Debug, Deserialize)]
pub struct DeletedResponse {
    pub message: String,
}
