//! Service context - dependency container for services
//!
//! Holds the repositories, the storage client and timeline settings needed by services.

use std::sync::Arc;

use track_core::traits::{CommentRepository, MediaRepository, UserRepository};
use track_db::{PgCommentRepository, PgMediaRepository, PgPool, PgUserRepository};
use track_storage::StorageClient;

use super::error::{ServiceError, ServiceResult};

/// Default marker bucket width in seconds
pub const DEFAULT_MARKER_TOLERANCE: f64 = 1.0;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The file storage client
/// - Timeline settings
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool, absent when repositories are supplied directly
    pool: Option<PgPool>,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    media_repo: Arc<dyn MediaRepository>,
    comment_repo: Arc<dyn CommentRepository>,

    // External services
    storage: StorageClient,

    marker_tolerance: f64,
}

impl ServiceContext {
    /// Create a context backed by PostgreSQL repositories on `pool`
    pub fn from_pool(pool: PgPool, storage: StorageClient, marker_tolerance: f64) -> Self {
        Self {
            user_repo: Arc::new(PgUserRepository::new(pool.clone())),
            media_repo: Arc::new(PgMediaRepository::new(pool.clone())),
            comment_repo: Arc::new(PgCommentRepository::new(pool.clone())),
            pool: Some(pool),
            storage,
            marker_tolerance,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the media repository
    pub fn media_repo(&self) -> &dyn MediaRepository {
        self.media_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    // === External services ===

    /// Get the file storage client
    pub fn storage(&self) -> &StorageClient {
        &self.storage
    }

    /// Marker bucket width used when a request does not pick one
    pub fn marker_tolerance(&self) -> f64 {
        self.marker_tolerance
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("storage", &self.storage.base_url())
            .field("marker_tolerance", &self.marker_tolerance)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    media_repo: Option<Arc<dyn MediaRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    storage: Option<StorageClient>,
    marker_tolerance: f64,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            user_repo: None,
            media_repo: None,
            comment_repo: None,
            storage: None,
            marker_tolerance: DEFAULT_MARKER_TOLERANCE,
        }
    }

    /// Use PostgreSQL repositories on `pool` for any repository not set explicitly
    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn media_repo(mut self, repo: Arc<dyn MediaRepository>) -> Self {
        self.media_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn storage(mut self, storage: StorageClient) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn marker_tolerance(mut self, seconds: f64) -> Self {
        self.marker_tolerance = seconds;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let pool = self.pool;
        let missing = |name: &str| ServiceError::validation(format!("{name} is required"));

        let user_repo: Arc<dyn UserRepository> = match (self.user_repo, &pool) {
            (Some(repo), _) => repo,
            (None, Some(pool)) => Arc::new(PgUserRepository::new(pool.clone())),
            (None, None) => return Err(missing("user_repo")),
        };
        let media_repo: Arc<dyn MediaRepository> = match (self.media_repo, &pool) {
            (Some(repo), _) => repo,
            (None, Some(pool)) => Arc::new(PgMediaRepository::new(pool.clone())),
            (None, None) => return Err(missing("media_repo")),
        };
        let comment_repo: Arc<dyn CommentRepository> = match (self.comment_repo, &pool) {
            (Some(repo), _) => repo,
            (None, Some(pool)) => Arc::new(PgCommentRepository::new(pool.clone())),
            (None, None) => return Err(missing("comment_repo")),
        };

        if !self.marker_tolerance.is_finite() || self.marker_tolerance < 0.0 {
            return Err(ServiceError::validation(
                "marker_tolerance must be a non-negative number of seconds",
            ));
        }

        Ok(ServiceContext {
            pool,
            user_repo,
            media_repo,
            comment_repo,
            storage: self.storage.ok_or_else(|| missing("storage"))?,
            marker_tolerance: self.marker_tolerance,
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
