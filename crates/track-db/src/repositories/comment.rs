//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use track_core::entities::{Comment, CommentWithAuthor, NewComment};
use track_core::traits::{CommentRepository, RepoResult};

use crate::mappers::{CommentInsert, CommentUpdate};
use crate::models::{CommentModel, CommentWithUserModel};

use super::error::{comment_not_found, map_comment_fk_violation, map_db_error};

const SELECT_WITH_AUTHOR: &str = r"
    SELECT c.id, c.media_id, c.user_id, c.content, c.image_urls, c.timestamp, c.is_edited,
           c.created_at, c.updated_at,
           u.name AS user_name, u.account AS user_account, u.avatar_url AS user_avatar_url,
           u.created_at AS user_created_at, u.updated_at AS user_updated_at
    FROM comments c
    JOIN users u ON u.id = c.user_id
";

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, media_id, user_id, content, image_urls, timestamp, is_edited,
                   created_at, updated_at, deleted_at
            FROM comments
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_with_author(&self, id: i64) -> RepoResult<Option<CommentWithAuthor>> {
        // Authors are joined regardless of their own soft-delete state.
        let query = format!("{SELECT_WITH_AUTHOR} WHERE c.id = $1 AND c.deleted_at IS NULL");

        let result = sqlx::query_as::<_, CommentWithUserModel>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(CommentWithAuthor::from))
    }

    #[instrument(skip(self))]
    async fn find_by_media(&self, media_id: i64) -> RepoResult<Vec<CommentWithAuthor>> {
        let query = format!(
            "{SELECT_WITH_AUTHOR} WHERE c.media_id = $1 AND c.deleted_at IS NULL \
             ORDER BY c.timestamp ASC, c.created_at ASC, c.id ASC"
        );

        let results = sqlx::query_as::<_, CommentWithUserModel>(&query)
            .bind(media_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(CommentWithAuthor::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        let insert = CommentInsert::new(comment);

        let model = sqlx::query_as::<_, CommentModel>(
            r"
            INSERT INTO comments (media_id, user_id, content, image_urls, timestamp)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, media_id, user_id, content, image_urls, timestamp, is_edited,
                      created_at, updated_at, deleted_at
            ",
        )
        .bind(insert.media_id)
        .bind(insert.user_id)
        .bind(insert.content)
        .bind(&insert.image_urls)
        .bind(insert.timestamp)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_comment_fk_violation(e, insert.media_id, insert.user_id))?;

        Ok(Comment::from(model))
    }

    #[instrument(skip(self))]
    async fn update(&self, comment: &Comment) -> RepoResult<()> {
        let update = CommentUpdate::new(comment);

        let result = sqlx::query(
            r"
            UPDATE comments
            SET media_id = $2, user_id = $3, content = $4, image_urls = $5, timestamp = $6,
                is_edited = $7, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(update.id)
        .bind(update.media_id)
        .bind(update.user_id)
        .bind(update.content)
        .bind(&update.image_urls)
        .bind(update.timestamp)
        .bind(update.is_edited)
        .execute(&self.pool)
        .await
        .map_err(|e| map_comment_fk_violation(e, update.media_id, update.user_id))?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found(comment.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE comments
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found(id));
        }

        Ok(())
    }
}
