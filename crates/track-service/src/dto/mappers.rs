//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use track_core::entities::{Comment, CommentWithAuthor, Media, User};
use track_core::TimestampGroup;
use track_storage::{ContentItem, FsGetResponse};

use super::responses::{
    CommentResponse, FileDetailResponse, FileEntryResponse, MediaResponse, TimelineGroupResponse,
    UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            account: user.account.clone(),
            avatar_url: user.avatar_url.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            account: user.account,
            avatar_url: user.avatar_url,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// ============================================================================
// Media Mappers
// ============================================================================

impl From<&Media> for MediaResponse {
    fn from(media: &Media) -> Self {
        Self {
            id: media.id,
            name: media.name.clone(),
            path: media.path.clone(),
            descript: media.descript.clone(),
            media_type: media.media_type.as_i16(),
            created_at: media.created_at,
            updated_at: media.updated_at,
        }
    }
}

impl From<Media> for MediaResponse {
    fn from(media: Media) -> Self {
        Self::from(&media)
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            image_urls: comment.image_urls,
            timestamp: comment.timestamp,
            media_id: comment.media_id,
            user_id: comment.user_id,
            is_edited: comment.is_edited,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            user: None,
        }
    }
}

impl From<CommentWithAuthor> for CommentResponse {
    fn from(joined: CommentWithAuthor) -> Self {
        Self {
            user: Some(UserResponse::from(joined.author)),
            ..Self::from(joined.comment)
        }
    }
}

impl From<TimestampGroup<CommentWithAuthor>> for TimelineGroupResponse {
    fn from(group: TimestampGroup<CommentWithAuthor>) -> Self {
        Self {
            timestamp: group.timestamp,
            label: group.label,
            comments: group.items.into_iter().map(CommentResponse::from).collect(),
        }
    }
}

// ============================================================================
// File Mappers
// ============================================================================

/// Join a directory and an entry name into a storage path
pub fn child_path(dir: &str, name: &str) -> String {
    format!("{}/{name}", dir.trim_end_matches('/'))
}

impl FileEntryResponse {
    pub fn from_item(dir: &str, item: &ContentItem) -> Self {
        Self {
            name: item.name.clone(),
            path: child_path(dir, &item.name),
            size: item.size,
            is_dir: item.is_dir,
            kind: item.kind(),
            modified: item.modified.clone(),
            thumb: item.thumb.clone(),
        }
    }
}

impl FileDetailResponse {
    pub fn from_detail(path: &str, detail: FsGetResponse) -> Self {
        Self {
            kind: detail.file_type.into(),
            name: detail.name,
            path: path.to_string(),
            size: detail.size,
            is_dir: detail.is_dir,
            modified: detail.modified,
            raw_url: detail.raw_url,
        }
    }
}
