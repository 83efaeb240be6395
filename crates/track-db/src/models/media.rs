//! Media database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for media table
#[derive(Debug, Clone, FromRow)]
pub struct MediaModel {
    pub id: i64,
    pub name: String,
    pub path: String,
    pub descript: Option<String>,
    pub media_type: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
