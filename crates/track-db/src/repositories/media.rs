//! PostgreSQL implementation of MediaRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use track_core::entities::{Media, NewMedia};
use track_core::traits::{MediaRepository, RepoResult};

use crate::mappers::{MediaInsert, MediaUpdate};
use crate::models::MediaModel;

use super::error::{map_db_error, media_not_found};

/// PostgreSQL implementation of MediaRepository
#[derive(Clone)]
pub struct PgMediaRepository {
    pool: PgPool,
}

impl PgMediaRepository {
    /// Create a new PgMediaRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MediaRepository for PgMediaRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Media>> {
        let result = sqlx::query_as::<_, MediaModel>(
            r"
            SELECT id, name, path, descript, media_type, created_at, updated_at, deleted_at
            FROM media
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Media::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Media>> {
        let results = sqlx::query_as::<_, MediaModel>(
            r"
            SELECT id, name, path, descript, media_type, created_at, updated_at, deleted_at
            FROM media
            WHERE deleted_at IS NULL
            ORDER BY updated_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Media::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, media: &NewMedia) -> RepoResult<Media> {
        let insert = MediaInsert::new(media);

        let model = sqlx::query_as::<_, MediaModel>(
            r"
            INSERT INTO media (name, path, descript, media_type)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, path, descript, media_type, created_at, updated_at, deleted_at
            ",
        )
        .bind(insert.name)
        .bind(insert.path)
        .bind(insert.descript)
        .bind(insert.media_type)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Media::from(model))
    }

    #[instrument(skip(self))]
    async fn update(&self, media: &Media) -> RepoResult<Media> {
        let update = MediaUpdate::new(media);

        let model = sqlx::query_as::<_, MediaModel>(
            r"
            UPDATE media
            SET name = $2, path = $3, descript = $4, media_type = $5, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, name, path, descript, media_type, created_at, updated_at, deleted_at
            ",
        )
        .bind(update.id)
        .bind(update.name)
        .bind(update.path)
        .bind(update.descript)
        .bind(update.media_type)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(Media::from).ok_or_else(|| media_not_found(media.id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE media
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(media_not_found(id));
        }

        Ok(())
    }
}
