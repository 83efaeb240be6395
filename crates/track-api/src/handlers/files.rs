//! File handlers
//!
//! Browse the storage service and upload images into it.

use axum::extract::{Multipart, State};
use track_service::{
    FileDetailResponse, FileGetRequest, FileListRequest, FileListResponse, FileService,
    UploadResponse,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiError, ApiJson, ApiResult};
use crate::state::AppState;

/// Multipart field carrying the uploaded file
pub const UPLOAD_FIELD: &str = "file";

/// List a storage directory
///
/// POST /v1/file/list
pub async fn list_files(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<FileListRequest>,
) -> ApiResult<ApiJson<FileListResponse>> {
    let service = FileService::new(state.service_context());
    let response = service.list_files(request).await?;
    Ok(ApiJson(response))
}

/// Look up a single stored file
///
/// POST /v1/file/get
pub async fn get_file(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<FileGetRequest>,
) -> ApiResult<ApiJson<FileDetailResponse>> {
    let service = FileService::new(state.service_context());
    let response = service.get_file(request).await?;
    Ok(ApiJson(response))
}

/// Upload a file into the image directory
///
/// POST /v1/file/upload (multipart field `file`)
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<ApiJson<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::invalid_upload(e.body_text()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| ApiError::invalid_upload("File name is missing"))?;
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::invalid_upload(e.body_text()))?;

        let service = FileService::new(state.service_context());
        let response = service
            .upload(&file_name, content_type.as_deref(), bytes.to_vec())
            .await?;
        return Ok(ApiJson(response));
    }

    Err(ApiError::invalid_upload(format!(
        "Multipart field '{UPLOAD_FIELD}' is missing"
    )))
}
