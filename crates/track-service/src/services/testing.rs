//! In-memory repositories for service tests

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use track_common::StorageConfig;
use track_core::entities::{
    Comment, CommentWithAuthor, Media, NewComment, NewMedia, NewUser, User,
};
use track_core::error::DomainError;
use track_core::traits::{CommentRepository, MediaRepository, RepoResult, UserRepository};
use track_storage::StorageClient;

use super::context::{ServiceContext, ServiceContextBuilder};

struct Row<T> {
    value: T,
    deleted: bool,
}

#[derive(Default)]
struct Tables {
    next_id: i64,
    users: Vec<Row<User>>,
    media: Vec<Row<Media>>,
    comments: Vec<Row<Comment>>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

fn live<T: Clone>(rows: &[Row<T>], pred: impl Fn(&T) -> bool) -> Option<T> {
    rows.iter()
        .find(|row| !row.deleted && pred(&row.value))
        .map(|row| row.value.clone())
}

/// Shared in-memory tables implementing every repository trait
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().expect("store lock poisoned")
    }

    /// Raw image column as the database would hold it
    pub fn stored_image_urls(&self, comment_id: i64) -> Option<String> {
        self.tables()
            .comments
            .iter()
            .find(|row| row.value.id == comment_id)
            .map(|row| row.value.stored_image_urls())
    }
}

/// Build a service context over `store`. The storage client points at an
/// address nothing listens on.
pub fn context(store: &Arc<InMemoryStore>) -> ServiceContext {
    let storage = StorageClient::new(&StorageConfig {
        base_url: "http://127.0.0.1:9/api".to_string(),
        username: "admin".to_string(),
        password: "admin".to_string(),
        image_dir: "/images".to_string(),
        timeout_secs: 1,
    })
    .expect("storage client");

    ServiceContextBuilder::new()
        .user_repo(store.clone())
        .media_repo(store.clone())
        .comment_repo(store.clone())
        .storage(storage)
        .build()
        .expect("service context")
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        Ok(live(&self.tables().users, |u| u.id == id))
    }

    async fn list(&self) -> RepoResult<Vec<User>> {
        let mut users: Vec<User> = self
            .tables()
            .users
            .iter()
            .filter(|row| !row.deleted)
            .map(|row| row.value.clone())
            .collect();
        users.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
        Ok(users)
    }

    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        let mut tables = self.tables();
        let now = Utc::now();
        let created = User {
            id: tables.next_id(),
            name: user.name.clone(),
            account: user.account.clone(),
            avatar_url: user.avatar_url.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.users.push(Row {
            value: created.clone(),
            deleted: false,
        });
        Ok(created)
    }

    async fn update(&self, user: &User) -> RepoResult<User> {
        let mut tables = self.tables();
        let row = tables
            .users
            .iter_mut()
            .find(|row| !row.deleted && row.value.id == user.id)
            .ok_or(DomainError::UserNotFound(user.id))?;
        row.value = User {
            updated_at: Utc::now(),
            ..user.clone()
        };
        Ok(row.value.clone())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tables = self.tables();
        let row = tables
            .users
            .iter_mut()
            .find(|row| !row.deleted && row.value.id == id)
            .ok_or(DomainError::UserNotFound(id))?;
        row.deleted = true;
        Ok(())
    }
}

#[async_trait]
impl MediaRepository for InMemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Media>> {
        Ok(live(&self.tables().media, |m| m.id == id))
    }

    async fn list(&self) -> RepoResult<Vec<Media>> {
        let mut media: Vec<Media> = self
            .tables()
            .media
            .iter()
            .filter(|row| !row.deleted)
            .map(|row| row.value.clone())
            .collect();
        media.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
        Ok(media)
    }

    async fn create(&self, media: &NewMedia) -> RepoResult<Media> {
        let mut tables = self.tables();
        let now = Utc::now();
        let created = Media {
            id: tables.next_id(),
            name: media.name.clone(),
            path: media.path.clone(),
            descript: media.descript.clone(),
            media_type: media.media_type,
            created_at: now,
            updated_at: now,
        };
        tables.media.push(Row {
            value: created.clone(),
            deleted: false,
        });
        Ok(created)
    }

    async fn update(&self, media: &Media) -> RepoResult<Media> {
        let mut tables = self.tables();
        let row = tables
            .media
            .iter_mut()
            .find(|row| !row.deleted && row.value.id == media.id)
            .ok_or(DomainError::MediaNotFound(media.id))?;
        row.value = Media {
            updated_at: Utc::now(),
            ..media.clone()
        };
        Ok(row.value.clone())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tables = self.tables();
        let row = tables
            .media
            .iter_mut()
            .find(|row| !row.deleted && row.value.id == id)
            .ok_or(DomainError::MediaNotFound(id))?;
        row.deleted = true;
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Comment>> {
        Ok(live(&self.tables().comments, |c| c.id == id))
    }

    async fn find_with_author(&self, id: i64) -> RepoResult<Option<CommentWithAuthor>> {
        let tables = self.tables();
        let Some(comment) = live(&tables.comments, |c| c.id == id) else {
            return Ok(None);
        };
        let author = tables
            .users
            .iter()
            .find(|row| row.value.id == comment.user_id)
            .map(|row| row.value.clone());
        Ok(author.map(|author| CommentWithAuthor { comment, author }))
    }

    async fn find_by_media(&self, media_id: i64) -> RepoResult<Vec<CommentWithAuthor>> {
        let tables = self.tables();
        let mut joined: Vec<CommentWithAuthor> = tables
            .comments
            .iter()
            .filter(|row| !row.deleted && row.value.media_id == media_id)
            .filter_map(|row| {
                let author = tables.users.iter().find(|u| u.value.id == row.value.user_id)?;
                Some(CommentWithAuthor {
                    comment: row.value.clone(),
                    author: author.value.clone(),
                })
            })
            .collect();
        joined.sort_by(|a, b| {
            a.comment
                .timestamp
                .total_cmp(&b.comment.timestamp)
                .then(a.comment.created_at.cmp(&b.comment.created_at))
                .then(a.comment.id.cmp(&b.comment.id))
        });
        Ok(joined)
    }

    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        let mut tables = self.tables();
        let now = Utc::now();
        let id = tables.next_id();
        // Persist through the same single-column form the database uses
        let stored = track_core::join_image_urls(&comment.image_urls);
        let created = Comment {
            id,
            media_id: comment.media_id,
            user_id: comment.user_id,
            content: comment.content.clone(),
            image_urls: track_core::split_image_urls(&stored),
            timestamp: comment.timestamp,
            is_edited: false,
            created_at: now,
            updated_at: now,
        };
        tables.comments.push(Row {
            value: created.clone(),
            deleted: false,
        });
        Ok(created)
    }

    async fn update(&self, comment: &Comment) -> RepoResult<()> {
        let mut tables = self.tables();
        let row = tables
            .comments
            .iter_mut()
            .find(|row| !row.deleted && row.value.id == comment.id)
            .ok_or(DomainError::CommentNotFound(comment.id))?;
        row.value = comment.clone();
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tables = self.tables();
        let row = tables
            .comments
            .iter_mut()
            .find(|row| !row.deleted && row.value.id == id)
            .ok_or(DomainError::CommentNotFound(id))?;
        row.deleted = true;
        Ok(())
    }
}
