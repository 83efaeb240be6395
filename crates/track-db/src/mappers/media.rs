//! Media entity <-> model mapper

use track_core::entities::{Media, MediaType, NewMedia};

use crate::models::MediaModel;

/// Convert MediaModel to Media entity
impl From<MediaModel> for Media {
    fn from(model: MediaModel) -> Self {
        Media {
            id: model.id,
            name: model.name,
            path: model.path,
            descript: model.descript,
            media_type: MediaType::from(model.media_type),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Values for inserting a media row
pub struct MediaInsert<'a> {
    pub name: &'a str,
    pub path: &'a str,
    pub descript: Option<&'a str>,
    pub media_type: i16,
}

impl<'a> MediaInsert<'a> {
    pub fn new(media: &'a NewMedia) -> Self {
        Self {
            name: &media.name,
            path: &media.path,
            descript: media.descript.as_deref(),
            media_type: media.media_type.as_i16(),
        }
    }
}

/// Values for updating a media row
pub struct MediaUpdate<'a> {
    pub id: i64,
    pub name: &'a str,
    pub path: &'a str,
    pub descript: Option<&'a str>,
    pub media_type: i16,
}

impl<'a> MediaUpdate<'a> {
    pub fn new(media: &'a Media) -> Self {
        Self {
            id: media.id,
            name: &media.name,
            path: &media.path,
            descript: media.descript.as_deref(),
            media_type: media.media_type.as_i16(),
        }
    }
}
