//! Comment handlers
//!
//! Endpoints for timeline comments and the grouped timeline view.

use axum::extract::State;
use track_service::{
    CommentListResponse, CommentResponse, CommentService, CreateCommentRequest, DeletedResponse,
    TimelineQuery, TimelineResponse, UpdateCommentRequest,
};

use crate::extractors::{IdPath, ValidatedJson, ValidatedQuery};
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Create a comment
///
/// POST /v1/comment/create
pub async fn create_comment(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<ApiJson<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service.create_comment(request).await?;
    Ok(ApiJson(response))
}

/// List comments on a media item in timeline order
///
/// GET /v1/comment/media/{media_id}
pub async fn list_media_comments(
    State(state): State<AppState>,
    IdPath(media_id): IdPath,
) -> ApiResult<ApiJson<CommentListResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service.list_by_media(media_id).await?;
    Ok(ApiJson(response))
}

/// Grouped timeline and scrub-bar markers for a media item
///
/// GET /v1/comment/media/{media_id}/timeline?tolerance=&duration=
pub async fn get_timeline(
    State(state): State<AppState>,
    IdPath(media_id): IdPath,
    ValidatedQuery(query): ValidatedQuery<TimelineQuery>,
) -> ApiResult<ApiJson<TimelineResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service.timeline(media_id, query).await?;
    Ok(ApiJson(response))
}

/// Get a comment with its author
///
/// GET /v1/comment/{id}
pub async fn get_comment(
    State(state): State<AppState>,
    IdPath(comment_id): IdPath,
) -> ApiResult<ApiJson<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service.get_comment(comment_id).await?;
    Ok(ApiJson(response))
}

/// Edit a comment
///
/// POST /v1/comment/update/{id}
pub async fn update_comment(
    State(state): State<AppState>,
    IdPath(comment_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<ApiJson<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service.update_comment(comment_id, request).await?;
    Ok(ApiJson(response))
}

/// Soft delete a comment
///
/// POST /v1/comment/delete/{id}
pub async fn delete_comment(
    State(state): State<AppState>,
    IdPath(comment_id): IdPath,
) -> ApiResult<ApiJson<DeletedResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service.delete_comment(comment_id).await?;
    Ok(ApiJson(response))
}
