//! Comment database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub media_id: i64,
    pub user_id: i64,
    pub content: String,
    /// Comma-joined image URLs
    pub image_urls: String,
    pub timestamp: f64,
    pub is_edited: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Comment row joined with its author (`comments JOIN users`)
#[derive(Debug, Clone, FromRow)]
pub struct CommentWithUserModel {
    pub id: i64,
    pub media_id: i64,
    pub user_id: i64,
    pub content: String,
    pub image_urls: String,
    pub timestamp: f64,
    pub is_edited: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_name: String,
    pub user_account: String,
    pub user_avatar_url: String,
    pub user_created_at: DateTime<Utc>,
    pub user_updated_at: DateTime<Utc>,
}
