//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_data, assert_error, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

async fn create_user(server: &TestServer) -> UserResponse {
    let response = server
        .post("/api/v1/user/create", &CreateUserRequest::unique())
        .await
        .unwrap();
    assert_data(response).await.unwrap()
}

async fn create_media(server: &TestServer) -> MediaResponse {
    let response = server
        .post("/api/v1/media/create", &CreateMediaRequest::local())
        .await
        .unwrap();
    assert_data(response).await.unwrap()
}

async fn create_comment(server: &TestServer, request: &CreateCommentRequest) -> CommentResponse {
    let response = server.post("/api/v1/comment/create", request).await.unwrap();
    assert_data(response).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_user_crud() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();

    let response = server.post("/api/v1/user/create", &request).await.unwrap();
    let created: UserResponse = assert_data(response).await.unwrap();
    assert_eq!(created.name, request.name);
    assert_eq!(created.account, request.account);

    let response = server
        .post(
            &format!("/api/v1/user/update/{}", created.id),
            &json!({ "avatarUrl": "/p/images/042-me.png" }),
        )
        .await
        .unwrap();
    let updated: UserResponse = assert_data(response).await.unwrap();
    assert_eq!(updated.avatar_url, "/p/images/042-me.png");
    assert_eq!(updated.account, request.account);

    let response = server.get("/api/v1/user/list").await.unwrap();
    let users: Vec<UserResponse> = assert_data(response).await.unwrap();
    assert!(users.iter().any(|u| u.id == created.id));

    let response = server
        .post_empty(&format!("/api/v1/user/delete/{}", created.id))
        .await
        .unwrap();
    let deleted: DeletedResponse = assert_data(response).await.unwrap();
    assert_eq!(deleted.message, format!("User #{} deleted", created.id));

    let response = server
        .get(&format!("/api/v1/user/{}", created.id))
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_user_validation() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/user/create", &json!({ "name": "", "account": "x" }))
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Media Tests
// ============================================================================

#[tokio::test]
async fn test_media_delete_hides_from_list() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let media = create_media(&server).await;

    let response = server
        .post_empty(&format!("/api/v1/media/delete/{}", media.id))
        .await
        .unwrap();
    let deleted: DeletedResponse = assert_data(response).await.unwrap();
    assert_eq!(deleted.message, format!("Media #{} deleted", media.id));

    let response = server.get("/api/v1/media/list").await.unwrap();
    let listed: Vec<MediaResponse> = assert_data(response).await.unwrap();
    assert!(listed.iter().all(|m| m.id != media.id));

    let response = server
        .get(&format!("/api/v1/media/{}", media.id))
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .post_empty(&format!("/api/v1/media/delete/{}", media.id))
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_media_update_type() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let media = create_media(&server).await;
    assert_eq!(media.media_type, 1);

    let response = server
        .post(
            &format!("/api/v1/media/update/{}", media.id),
            &json!({ "type": 2, "path": "https://example.com/clip.mp4" }),
        )
        .await
        .unwrap();
    let updated: MediaResponse = assert_data(response).await.unwrap();
    assert_eq!(updated.media_type, 2);
    assert_eq!(updated.path, "https://example.com/clip.mp4");
    assert_eq!(updated.name, media.name);
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_image_urls_round_trip() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = create_user(&server).await;
    let media = create_media(&server).await;

    let created = create_comment(
        &server,
        &CreateCommentRequest {
            content: "测试评论".to_string(),
            image_urls: vec!["a".to_string(), "b".to_string()],
            ..CreateCommentRequest::at(user.id, media.id, 5.0)
        },
    )
    .await;
    assert_eq!(created.content, "测试评论");
    assert!(!created.is_edited);
    assert_eq!(created.user.as_ref().map(|u| u.id), Some(user.id));

    let response = server
        .get(&format!("/api/v1/comment/{}", created.id))
        .await
        .unwrap();
    let fetched: CommentResponse = assert_data(response).await.unwrap();
    assert_eq!(fetched.image_urls, vec!["a", "b"]);
    assert!((fetched.timestamp - 5.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_comment_update_content_only() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = create_user(&server).await;
    let media = create_media(&server).await;
    let created = create_comment(
        &server,
        &CreateCommentRequest {
            image_urls: vec!["/p/images/001-a.png".to_string()],
            ..CreateCommentRequest::at(user.id, media.id, 42.0)
        },
    )
    .await;

    let response = server
        .post(
            &format!("/api/v1/comment/update/{}", created.id),
            &json!({ "content": "edited" }),
        )
        .await
        .unwrap();
    let updated: CommentResponse = assert_data(response).await.unwrap();

    assert_eq!(updated.content, "edited");
    assert!(updated.is_edited);
    assert_eq!(updated.image_urls, vec!["/p/images/001-a.png"]);
    assert!((updated.timestamp - 42.0).abs() < f64::EPSILON);
    assert_eq!(updated.user_id, user.id);
    assert_eq!(updated.media_id, media.id);
}

#[tokio::test]
async fn test_comment_unknown_media() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = create_user(&server).await;

    let response = server
        .post(
            "/api/v1/comment/create",
            &CreateCommentRequest::at(user.id, i64::MAX, 1.0),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_comment_list_and_timeline() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = create_user(&server).await;
    let media = create_media(&server).await;

    for timestamp in [65.0, 5.0, 5.0, 5.5] {
        create_comment(&server, &CreateCommentRequest::at(user.id, media.id, timestamp)).await;
    }

    let response = server
        .get(&format!("/api/v1/comment/media/{}", media.id))
        .await
        .unwrap();
    let listed: CommentListResponse = assert_data(response).await.unwrap();
    let timestamps: Vec<f64> = listed.list.iter().map(|c| c.timestamp).collect();
    assert_eq!(timestamps, vec![5.0, 5.0, 5.5, 65.0]);

    let response = server
        .get(&format!(
            "/api/v1/comment/media/{}/timeline?tolerance=1&duration=130",
            media.id
        ))
        .await
        .unwrap();
    let timeline: TimelineResponse = assert_data(response).await.unwrap();

    assert_eq!(timeline.groups.len(), 3);
    assert_eq!(timeline.groups[0].label, "0:05");
    assert_eq!(timeline.groups[0].comments.len(), 2);
    assert_eq!(timeline.groups[2].label, "1:05");

    assert_eq!(timeline.markers.len(), 2);
    assert_eq!(timeline.markers[0].count, 3);
    assert_eq!(timeline.markers[1].position, Some(50.0));
}

#[tokio::test]
async fn test_comment_delete_twice() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = create_user(&server).await;
    let media = create_media(&server).await;
    let created = create_comment(&server, &CreateCommentRequest::at(user.id, media.id, 3.0)).await;

    let path = format!("/api/v1/comment/delete/{}", created.id);
    let response = server.post_empty(&path).await.unwrap();
    let deleted: DeletedResponse = assert_data(response).await.unwrap();
    assert_eq!(deleted.message, format!("Comment #{} deleted", created.id));

    let response = server.post_empty(&path).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
}
