//! Media service
//!
//! Handles the media items comments are attached to.

use track_core::entities::{Media, MediaChanges, MediaType, NewMedia};
use track_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{CreateMediaRequest, DeletedResponse, MediaResponse, UpdateMediaRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Map a raw type discriminator, rejecting unknown values
fn media_type(raw: Option<i16>) -> ServiceResult<Option<MediaType>> {
    match raw {
        None => Ok(None),
        Some(value) if MediaType::is_known(value) => Ok(Some(MediaType::from(value))),
        Some(value) => Err(DomainError::InvalidMediaType(value).into()),
    }
}

/// Media service
pub struct MediaService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MediaService<'a> {
    /// Create a new MediaService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a media item
    #[instrument(skip(self, request))]
    pub async fn create_media(&self, request: CreateMediaRequest) -> ServiceResult<MediaResponse> {
        let media_type = media_type(request.media_type)?.unwrap_or_default();

        let media = self
            .ctx
            .media_repo()
            .create(&NewMedia {
                name: request.name,
                path: request.path,
                descript: request.descript,
                media_type,
            })
            .await?;

        info!(media_id = media.id, media_type = ?media.media_type, "Media created");

        Ok(MediaResponse::from(media))
    }

    /// List live media, most recently updated first
    #[instrument(skip(self))]
    pub async fn list_media(&self) -> ServiceResult<Vec<MediaResponse>> {
        let media = self.ctx.media_repo().list().await?;
        Ok(media.into_iter().map(MediaResponse::from).collect())
    }

    /// Get media by ID
    #[instrument(skip(self))]
    pub async fn get_media(&self, media_id: i64) -> ServiceResult<MediaResponse> {
        let media = self.get_media_entity(media_id).await?;
        Ok(MediaResponse::from(media))
    }

    /// Get media entity by ID
    #[instrument(skip(self))]
    pub async fn get_media_entity(&self, media_id: i64) -> ServiceResult<Media> {
        self.ctx
            .media_repo()
            .find_by_id(media_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Media", media_id))
    }

    /// Update a media item; absent fields stay unchanged
    #[instrument(skip(self, request))]
    pub async fn update_media(
        &self,
        media_id: i64,
        request: UpdateMediaRequest,
    ) -> ServiceResult<MediaResponse> {
        let changes = MediaChanges {
            media_type: media_type(request.media_type)?,
            name: request.name,
            path: request.path,
            descript: request.descript,
        };

        let mut media = self.get_media_entity(media_id).await?;
        if !media.apply(changes) {
            return Ok(MediaResponse::from(media));
        }

        let stored = self.ctx.media_repo().update(&media).await?;
        info!(media_id, "Media updated");

        Ok(MediaResponse::from(stored))
    }

    /// Soft delete a media item
    #[instrument(skip(self))]
    pub async fn delete_media(&self, media_id: i64) -> ServiceResult<DeletedResponse> {
        self.ctx.media_repo().delete(media_id).await?;
        info!(media_id, "Media deleted");

        Ok(DeletedResponse::new("Media", media_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{context, InMemoryStore};

    fn create_request(name: &str) -> CreateMediaRequest {
        CreateMediaRequest {
            name: name.to_string(),
            path: format!("/videos/{name}.mp4"),
            descript: None,
            media_type: None,
        }
    }

    #[tokio::test]
    async fn test_create_defaults_to_local() {
        let store = InMemoryStore::new();
        let ctx = context(&store);
        let service = MediaService::new(&ctx);

        let created = service.create_media(create_request("trailer")).await.unwrap();
        assert_eq!(created.media_type, 1);
        assert_eq!(created.path, "/videos/trailer.mp4");
        assert!(created.descript.is_none());
    }

    #[tokio::test]
    async fn test_unknown_type_rejected() {
        let store = InMemoryStore::new();
        let ctx = context(&store);
        let service = MediaService::new(&ctx);

        let err = service
            .create_media(CreateMediaRequest {
                media_type: Some(9),
                ..create_request("bad")
            })
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "INVALID_MEDIA_TYPE");
    }

    #[tokio::test]
    async fn test_update_type_and_description() {
        let store = InMemoryStore::new();
        let ctx = context(&store);
        let service = MediaService::new(&ctx);
        let created = service.create_media(create_request("clip")).await.unwrap();

        let updated = service
            .update_media(
                created.id,
                UpdateMediaRequest {
                    descript: Some("Opening scene".to_string()),
                    media_type: Some(2),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.media_type, 2);
        assert_eq!(updated.descript.as_deref(), Some("Opening scene"));
        assert_eq!(updated.name, "clip");

        let fetched = service.get_media(created.id).await.unwrap();
        assert_eq!(updated.updated_at, fetched.updated_at);
    }

    #[tokio::test]
    async fn test_deleted_media_hidden() {
        let store = InMemoryStore::new();
        let ctx = context(&store);
        let service = MediaService::new(&ctx);
        let first = service.create_media(create_request("one")).await.unwrap();
        service.create_media(create_request("two")).await.unwrap();

        let deleted = service.delete_media(first.id).await.unwrap();
        assert_eq!(deleted.message, format!("Media #{} deleted", first.id));

        let listed = service.list_media().await.unwrap();
        assert!(listed.iter().all(|m| m.id != first.id));
        assert_eq!(listed.len(), 1);

        let err = service.get_media(first.id).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
        let err = service.delete_media(first.id).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
