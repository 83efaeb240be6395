//! Wire types of the storage service API

use serde::{Deserialize, Serialize};

/// Reply envelope used by every storage endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct StorageEnvelope<T> {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginData {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct FsGetRequest<'a> {
    pub path: &'a str,
}

/// `POST /fs/list` body
#[derive(Debug, Clone, Serialize)]
pub struct FsListRequest {
    pub path: String,
    pub page: u32,
    pub per_page: u32,
    pub refresh: bool,
    pub password: String,
}

impl FsListRequest {
    /// List the first page of a directory with the service's default page size
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            page: 1,
            per_page: 0,
            refresh: false,
            password: String::new(),
        }
    }
}

/// File kind reported by the storage service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Unknown,
    Folder,
    Video,
    Audio,
    Text,
    Image,
}

impl From<i32> for FileType {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Folder,
            2 => Self::Video,
            3 => Self::Audio,
            4 => Self::Text,
            5 => Self::Image,
            _ => Self::Unknown,
        }
    }
}

/// One entry of a directory listing
#[derive(Debug, Clone, Deserialize)]
pub struct ContentItem {
    pub name: String,
    #[serde(default)]
    pub size: i64,
    pub is_dir: bool,
    #[serde(default)]
    pub modified: String,
    #[serde(default)]
    pub sign: String,
    #[serde(default)]
    pub thumb: String,
    #[serde(rename = "type", default)]
    pub file_type: i32,
}

impl ContentItem {
    pub fn kind(&self) -> FileType {
        FileType::from(self.file_type)
    }
}

/// `POST /fs/list` reply data
#[derive(Debug, Clone, Deserialize)]
pub struct FsListResponse {
    /// `null` for an empty directory
    #[serde(default)]
    pub content: Option<Vec<ContentItem>>,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub readme: String,
    #[serde(default)]
    pub write: bool,
    #[serde(default)]
    pub provider: String,
}

impl FsListResponse {
    pub fn items(&self) -> &[ContentItem] {
        self.content.as_deref().unwrap_or_default()
    }
}

/// `POST /fs/get` reply data
#[derive(Debug, Clone, Deserialize)]
pub struct FsGetResponse {
    pub name: String,
    #[serde(default)]
    pub size: i64,
    pub is_dir: bool,
    #[serde(default)]
    pub modified: String,
    #[serde(default)]
    pub raw_url: String,
    #[serde(default)]
    pub sign: String,
    #[serde(default)]
    pub thumb: String,
    #[serde(default)]
    pub provider: String,
    #[serde(rename = "type", default)]
    pub file_type: i32,
}
