//! Comment service
//!
//! Handles timeline comments and the grouped timeline view.

use track_core::entities::{CommentChanges, CommentWithAuthor, NewComment, IMAGE_URL_DELIMITER};
use track_core::{bucket_markers, group_by_timestamp, DomainError};
use tracing::{debug, info, instrument};

use crate::dto::{
    CommentListResponse, CommentResponse, CreateCommentRequest, DeletedResponse,
    TimelineGroupResponse, TimelineQuery, TimelineResponse, UpdateCommentRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Image URLs are stored joined by the delimiter, so it may not appear inside one
fn check_image_urls(urls: &[String]) -> ServiceResult<()> {
    match urls.iter().find(|url| url.contains(IMAGE_URL_DELIMITER)) {
        Some(url) => Err(DomainError::InvalidImageUrl(url.clone()).into()),
        None => Ok(()),
    }
}

fn check_timestamp(timestamp: f64) -> ServiceResult<()> {
    if timestamp.is_finite() && timestamp >= 0.0 {
        Ok(())
    } else {
        Err(DomainError::InvalidTimestamp.into())
    }
}

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a comment on a media item
    #[instrument(skip(self, request), fields(media_id = request.media_id, user_id = request.user_id))]
    pub async fn create_comment(
        &self,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        check_timestamp(request.timestamp)?;
        check_image_urls(&request.image_urls)?;
        self.ensure_user(request.user_id).await?;
        self.ensure_media(request.media_id).await?;

        let comment = self
            .ctx
            .comment_repo()
            .create(&NewComment {
                media_id: request.media_id,
                user_id: request.user_id,
                content: request.content,
                image_urls: request.image_urls,
                timestamp: request.timestamp,
            })
            .await?;

        info!(
            comment_id = comment.id,
            timestamp = comment.timestamp,
            "Comment created"
        );

        self.get_comment(comment.id).await
    }

    /// List comments on a media item in timeline order
    #[instrument(skip(self))]
    pub async fn list_by_media(&self, media_id: i64) -> ServiceResult<CommentListResponse> {
        let comments = self.ctx.comment_repo().find_by_media(media_id).await?;

        Ok(CommentListResponse {
            list: comments.into_iter().map(CommentResponse::from).collect(),
        })
    }

    /// Get a comment with its author
    #[instrument(skip(self))]
    pub async fn get_comment(&self, comment_id: i64) -> ServiceResult<CommentResponse> {
        let comment = self.get_comment_with_author(comment_id).await?;
        Ok(CommentResponse::from(comment))
    }

    async fn get_comment_with_author(&self, comment_id: i64) -> ServiceResult<CommentWithAuthor> {
        self.ctx
            .comment_repo()
            .find_with_author(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id))
    }

    /// Edit a comment; absent fields stay unchanged and the comment is marked edited
    #[instrument(skip(self, request))]
    pub async fn update_comment(
        &self,
        comment_id: i64,
        request: UpdateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let mut comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id))?;

        if let Some(timestamp) = request.timestamp {
            check_timestamp(timestamp)?;
        }
        if let Some(urls) = &request.image_urls {
            check_image_urls(urls)?;
        }
        if let Some(user_id) = request.user_id.filter(|id| *id != comment.user_id) {
            self.ensure_user(user_id).await?;
        }
        if let Some(media_id) = request.media_id.filter(|id| *id != comment.media_id) {
            self.ensure_media(media_id).await?;
        }

        comment.apply(CommentChanges {
            content: request.content,
            image_urls: request.image_urls,
            timestamp: request.timestamp,
            media_id: request.media_id,
            user_id: request.user_id,
        });
        self.ctx.comment_repo().update(&comment).await?;
        info!(comment_id, "Comment updated");

        self.get_comment(comment_id).await
    }

    /// Soft delete a comment
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, comment_id: i64) -> ServiceResult<DeletedResponse> {
        self.ctx.comment_repo().delete(comment_id).await?;
        info!(comment_id, "Comment deleted");

        Ok(DeletedResponse::new("Comment", comment_id))
    }

    /// Comments of a media item grouped by timestamp, plus scrub-bar markers
    #[instrument(skip(self, query))]
    pub async fn timeline(
        &self,
        media_id: i64,
        query: TimelineQuery,
    ) -> ServiceResult<TimelineResponse> {
        let tolerance = query.tolerance.unwrap_or(self.ctx.marker_tolerance());
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ServiceError::validation(
                "Tolerance must be a non-negative number of seconds",
            ));
        }

        self.ensure_media(media_id).await?;
        let comments = self.ctx.comment_repo().find_by_media(media_id).await?;

        let markers = bucket_markers(&comments, tolerance, query.duration);
        let groups: Vec<TimelineGroupResponse> = group_by_timestamp(comments)
            .into_iter()
            .map(TimelineGroupResponse::from)
            .collect();

        debug!(
            media_id,
            groups = groups.len(),
            markers = markers.len(),
            "Timeline built"
        );

        Ok(TimelineResponse { groups, markers })
    }

    async fn ensure_user(&self, user_id: i64) -> ServiceResult<()> {
        match self.ctx.user_repo().find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::UserNotFound(user_id).into()),
        }
    }

    async fn ensure_media(&self, media_id: i64) -> ServiceResult<()> {
        match self.ctx.media_repo().find_by_id(media_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::MediaNotFound(media_id).into()),
        }
    }
}
