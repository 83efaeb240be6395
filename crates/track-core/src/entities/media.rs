//! Media entity - a video or image asset that comments are attached to

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where the media file lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[repr(i16)]
pub enum MediaType {
    /// File picked from the storage service listing
    #[default]
    Local = 1,
    /// Remote URL typed in by the user
    Online = 2,
}

impl MediaType {
    /// Get the numeric value
    #[inline]
    #[must_use]
    pub fn as_i16(self) -> i16 {
        self as i16
    }

    /// Check whether a raw discriminator maps to a known type
    #[must_use]
    pub fn is_known(value: i16) -> bool {
        matches!(value, 1 | 2)
    }
}

impl From<i16> for MediaType {
    fn from(value: i16) -> Self {
        match value {
            2 => Self::Online,
            _ => Self::Local, // Default for 1 and unknown values
        }
    }
}

impl From<MediaType> for i16 {
    fn from(mt: MediaType) -> Self {
        mt as i16
    }
}

/// Media entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub id: i64,
    pub name: String,
    /// Storage path or remote URL
    pub path: String,
    pub descript: Option<String>,
    pub media_type: MediaType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Values for media that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMedia {
    pub name: String,
    pub path: String,
    pub descript: Option<String>,
    pub media_type: MediaType,
}

/// Partial update; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaChanges {
    pub name: Option<String>,
    pub path: Option<String>,
    pub descript: Option<String>,
    pub media_type: Option<MediaType>,
}

impl Media {
    /// Apply a partial update, returning whether anything changed
    pub fn apply(&mut self, changes: MediaChanges) -> bool {
        let mut changed = false;

        if let Some(name) = changes.name {
            if name != self.name {
                self.name = name;
                changed = true;
            }
        }
        if let Some(path) = changes.path {
            if path != self.path {
                self.path = path;
                changed = true;
            }
        }
        if let Some(descript) = changes.descript {
            if self.descript.as_deref() != Some(descript.as_str()) {
                self.descript = Some(descript);
                changed = true;
            }
        }
        if let Some(media_type) = changes.media_type {
            if media_type != self.media_type {
                self.media_type = media_type;
                changed = true;
            }
        }

        if changed {
            self.updated_at = Utc::now();
        }
        changed
    }

    /// Check if the media points at a remote URL
    #[inline]
    pub fn is_online(&self) -> bool {
        self.media_type == MediaType::Online
    }
}
