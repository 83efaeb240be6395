//! Comment entity - a note pinned to a point on a media timeline

use chrono::{DateTime, Utc};

use super::user::User;

/// Separator used when image URLs are stored in a single column
pub const IMAGE_URL_DELIMITER: char = ',';

/// Comment entity
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i64,
    pub media_id: i64,
    pub user_id: i64,
    pub content: String,
    pub image_urls: Vec<String>,
    /// Seconds into the media's playback
    pub timestamp: f64,
    pub is_edited: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Values for a comment that has not been persisted yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub media_id: i64,
    pub user_id: i64,
    pub content: String,
    pub image_urls: Vec<String>,
    pub timestamp: f64,
}

/// Partial update; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentChanges {
    pub content: Option<String>,
    pub image_urls: Option<Vec<String>>,
    pub timestamp: Option<f64>,
    pub media_id: Option<i64>,
    pub user_id: Option<i64>,
}

/// Comment joined with the user who wrote it
#[derive(Debug, Clone, PartialEq)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author: User,
}

impl Comment {
    /// Apply an edit. Any update marks the comment as edited.
    pub fn apply(&mut self, changes: CommentChanges) {
        if let Some(content) = changes.content {
            self.content = content;
        }
        if let Some(image_urls) = changes.image_urls {
            self.image_urls = normalize_image_urls(image_urls);
        }
        if let Some(timestamp) = changes.timestamp {
            self.timestamp = timestamp;
        }
        if let Some(media_id) = changes.media_id {
            self.media_id = media_id;
        }
        if let Some(user_id) = changes.user_id {
            self.user_id = user_id;
        }

        self.is_edited = true;
        self.updated_at = Utc::now();
    }

    /// Image URLs in their stored single-column form
    pub fn stored_image_urls(&self) -> String {
        join_image_urls(&self.image_urls)
    }
}

/// Join image URLs into the stored column value, dropping blank entries
pub fn join_image_urls(urls: &[String]) -> String {
    let separator = IMAGE_URL_DELIMITER.to_string();
    urls.iter()
        .map(String::as_str)
        .filter(|url| !is_blank(url))
        .collect::<Vec<_>>()
        .join(separator.as_str())
}

/// Split a stored column value back into image URLs, dropping blank entries
pub fn split_image_urls(stored: &str) -> Vec<String> {
    stored
        .split(IMAGE_URL_DELIMITER)
        .filter(|url| !is_blank(url))
        .map(String::from)
        .collect()
}

fn normalize_image_urls(urls: Vec<String>) -> Vec<String> {
    urls.into_iter().filter(|url| !is_blank(url)).collect()
}

// Whitespace-only entries count as empty; other URLs are kept byte for byte.
fn is_blank(url: &str) -> bool {
    url.trim().is_empty()
}
