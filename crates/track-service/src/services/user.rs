//! User service
//!
//! Handles user profile operations.

use track_core::entities::{NewUser, User, UserChanges};
use tracing::{info, instrument};

use crate::dto::{CreateUserRequest, DeletedResponse, UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a user
    #[instrument(skip(self, request))]
    pub async fn create_user(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .create(&NewUser {
                name: request.name,
                account: request.account,
                avatar_url: request.avatar_url,
            })
            .await?;

        info!(user_id = user.id, account = %user.account, "User created");

        Ok(UserResponse::from(user))
    }

    /// List live users, most recently updated first
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().list().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Get user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: i64) -> ServiceResult<UserResponse> {
        let user = self.get_user_entity(user_id).await?;
        Ok(UserResponse::from(user))
    }

    /// Get user entity by ID
    #[instrument(skip(self))]
    pub async fn get_user_entity(&self, user_id: i64) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id))
    }

    /// Update a user; absent fields stay unchanged
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        user_id: i64,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let mut user = self.get_user_entity(user_id).await?;

        let changed = user.apply(UserChanges {
            name: request.name,
            account: request.account,
            avatar_url: request.avatar_url,
        });
        if !changed {
            return Ok(UserResponse::from(user));
        }

        let stored = self.ctx.user_repo().update(&user).await?;
        info!(user_id, "User updated");

        Ok(UserResponse::from(stored))
    }

    /// Soft delete a user
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: i64) -> ServiceResult<DeletedResponse> {
        self.ctx.user_repo().delete(user_id).await?;
        info!(user_id, "User deleted");

        Ok(DeletedResponse::new("User", user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{context, InMemoryStore};

    fn create_request(account: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: format!("User {account}"),
            account: account.to_string(),
            avatar_url: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_returns_input_fields() {
        let store = InMemoryStore::new();
        let ctx = context(&store);
        let service = UserService::new(&ctx);

        let created = service
            .create_user(CreateUserRequest {
                name: "Alice".to_string(),
                account: "alice".to_string(),
                avatar_url: "/p/images/001-a.png".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(created.name, "Alice");
        assert_eq!(created.account, "alice");
        assert_eq!(created.avatar_url, "/p/images/001-a.png");

        let fetched = service.get_user(created.id).await.unwrap();
        assert_eq!(fetched.account, "alice");
    }

    #[tokio::test]
    async fn test_update_only_touches_given_fields() {
        let store = InMemoryStore::new();
        let ctx = context(&store);
        let service = UserService::new(&ctx);
        let created = service.create_user(create_request("bob")).await.unwrap();

        let updated = service
            .update_user(
                created.id,
                UpdateUserRequest {
                    name: Some("Robert".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Robert");
        assert_eq!(updated.account, "bob");

        let fetched = service.get_user(created.id).await.unwrap();
        assert_eq!(updated.updated_at, fetched.updated_at);
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let store = InMemoryStore::new();
        let ctx = context(&store);
        let service = UserService::new(&ctx);
        let created = service.create_user(create_request("carol")).await.unwrap();

        let deleted = service.delete_user(created.id).await.unwrap();
        assert_eq!(deleted.message, format!("User #{} deleted", created.id));

        let err = service.delete_user(created.id).await.unwrap_err();
        assert_eq!(err.status_code(), 404);

        let err = service.get_user(created.id).await.unwrap_err();
        assert_eq!(err.status_code(), 404);

        let err = service
            .update_user(created.id, UpdateUserRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_list_skips_deleted() {
        let store = InMemoryStore::new();
        let ctx = context(&store);
        let service = UserService::new(&ctx);
        let first = service.create_user(create_request("dave")).await.unwrap();
        let second = service.create_user(create_request("erin")).await.unwrap();

        service.delete_user(first.id).await.unwrap();

        let users = service.list_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, second.id);
    }
}
