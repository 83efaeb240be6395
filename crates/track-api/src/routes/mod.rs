//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::handlers::{comments, files, health, media, users};
use crate::state::AppState;

/// Largest accepted upload body
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(media_routes())
        .merge(comment_routes())
        .merge(file_routes())
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user/create", post(users::create_user))
        .route("/user/list", get(users::list_users))
        .route("/user/:id", get(users::get_user))
        .route("/user/update/:id", post(users::update_user))
        .route("/user/delete/:id", post(users::delete_user))
}

/// Media routes
fn media_routes() -> Router<AppState> {
    Router::new()
        .route("/media/create", post(media::create_media))
        .route("/media/list", get(media::list_media))
        .route("/media/:id", get(media::get_media))
        .route("/media/update/:id", post(media::update_media))
        .route("/media/delete/:id", post(media::delete_media))
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/comment/create", post(comments::create_comment))
        .route("/comment/media/:media_id", get(comments::list_media_comments))
        .route("/comment/media/:media_id/timeline", get(comments::get_timeline))
        .route("/comment/:id", get(comments::get_comment))
        .route("/comment/update/:id", post(comments::update_comment))
        .route("/comment/delete/:id", post(comments::delete_comment))
}

/// File storage routes
fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/file/list", post(files::list_files))
        .route("/file/get", post(files::get_file))
        .route(
            "/file/upload",
            post(files::upload_file).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
}
