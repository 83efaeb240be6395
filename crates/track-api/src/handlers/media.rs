//! Media handlers

use axum::extract::State;
use track_service::{
    CreateMediaRequest, DeletedResponse, MediaResponse, MediaService, UpdateMediaRequest,
};

use crate::extractors::{IdPath, ValidatedJson};
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Create a media item
///
/// POST /v1/media/create
pub async fn create_media(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateMediaRequest>,
) -> ApiResult<ApiJson<MediaResponse>> {
    let service = MediaService::new(state.service_context());
    let response = service.create_media(request).await?;
    Ok(ApiJson(response))
}

/// List media
///
/// GET /v1/media/list
pub async fn list_media(State(state): State<AppState>) -> ApiResult<ApiJson<Vec<MediaResponse>>> {
    let service = MediaService::new(state.service_context());
    let response = service.list_media().await?;
    Ok(ApiJson(response))
}

/// Get media by ID
///
/// GET /v1/media/{id}
pub async fn get_media(
    State(state): State<AppState>,
    IdPath(media_id): IdPath,
) -> ApiResult<ApiJson<MediaResponse>> {
    let service = MediaService::new(state.service_context());
    let response = service.get_media(media_id).await?;
    Ok(ApiJson(response))
}

/// Update a media item
///
/// POST /v1/media/update/{id}
pub async fn update_media(
    State(state): State<AppState>,
    IdPath(media_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateMediaRequest>,
) -> ApiResult<ApiJson<MediaResponse>> {
    let service = MediaService::new(state.service_context());
    let response = service.update_media(media_id, request).await?;
    Ok(ApiJson(response))
}

/// Soft delete a media item
///
/// POST /v1/media/delete/{id}
pub async fn delete_media(
    State(state): State<AppState>,
    IdPath(media_id): IdPath,
) -> ApiResult<ApiJson<DeletedResponse>> {
    let service = MediaService::new(state.service_context());
    let response = service.delete_media(media_id).await?;
    Ok(ApiJson(response))
}
