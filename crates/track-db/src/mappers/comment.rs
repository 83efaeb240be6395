//! Comment entity <-> model mapper

use track_core::entities::{
    join_image_urls, split_image_urls, Comment, CommentWithAuthor, NewComment, User,
};

use crate::models::{CommentModel, CommentWithUserModel};

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            media_id: model.media_id,
            user_id: model.user_id,
            content: model.content,
            image_urls: split_image_urls(&model.image_urls),
            timestamp: model.timestamp,
            is_edited: model.is_edited,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Split a joined row into the comment and its author
impl From<CommentWithUserModel> for CommentWithAuthor {
    fn from(model: CommentWithUserModel) -> Self {
        let author = User {
            id: model.user_id,
            name: model.user_name,
            account: model.user_account,
            avatar_url: model.user_avatar_url,
            created_at: model.user_created_at,
            updated_at: model.user_updated_at,
        };
        let comment = Comment {
            id: model.id,
            media_id: model.media_id,
            user_id: model.user_id,
            content: model.content,
            image_urls: split_image_urls(&model.image_urls),
            timestamp: model.timestamp,
            is_edited: model.is_edited,
            created_at: model.created_at,
            updated_at: model.updated_at,
        };
        CommentWithAuthor { comment, author }
    }
}

/// Values for inserting a comment row
pub struct CommentInsert<'a> {
    pub media_id: i64,
    pub user_id: i64,
    pub content: &'a str,
    pub image_urls: String,
    pub timestamp: f64,
}

impl<'a> CommentInsert<'a> {
    pub fn new(comment: &'a NewComment) -> Self {
        Self {
            media_id: comment.media_id,
            user_id: comment.user_id,
            content: &comment.content,
            image_urls: join_image_urls(&comment.image_urls),
            timestamp: comment.timestamp,
        }
    }
}

/// Values for updating a comment row
pub struct CommentUpdate<'a> {
    pub id: i64,
    pub media_id: i64,
    pub user_id: i64,
    pub content: &'a str,
    pub image_urls: String,
    pub timestamp: f64,
    pub is_edited: bool,
}

impl<'a> CommentUpdate<'a> {
    pub fn new(comment: &'a Comment) -> Self {
        Self {
            id: comment.id,
            media_id: comment.media_id,
            user_id: comment.user_id,
            content: &comment.content,
            image_urls: comment.stored_image_urls(),
            timestamp: comment.timestamp,
            is_edited: comment.is_edited,
        }
    }
}
