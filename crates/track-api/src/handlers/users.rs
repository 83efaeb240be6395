//! User handlers

use axum::extract::State;
use track_service::{
    CreateUserRequest, DeletedResponse, UpdateUserRequest, UserResponse, UserService,
};

use crate::extractors::{IdPath, ValidatedJson};
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Create a user
///
/// POST /v1/user/create
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<ApiJson<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.create_user(request).await?;
    Ok(ApiJson(response))
}

/// List users
///
/// GET /v1/user/list
pub async fn list_users(State(state): State<AppState>) -> ApiResult<ApiJson<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.list_users().await?;
    Ok(ApiJson(response))
}

/// Get user by ID
///
/// GET /v1/user/{id}
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
) -> ApiResult<ApiJson<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_user(user_id).await?;
    Ok(ApiJson(response))
}

/// Update a user
///
/// POST /v1/user/update/{id}
pub async fn update_user(
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<ApiJson<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_user(user_id, request).await?;
    Ok(ApiJson(response))
}

/// Soft delete a user
///
/// POST /v1/user/delete/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
) -> ApiResult<ApiJson<DeletedResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.delete_user(user_id).await?;
    Ok(ApiJson(response))
}
