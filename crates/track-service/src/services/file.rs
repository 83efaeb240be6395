//! File service
//!
//! Browses and uploads files on the external storage service.

use track_storage::FsListRequest;
use tracing::{info, instrument};

use crate::dto::{
    FileDetailResponse, FileEntryResponse, FileGetRequest, FileListRequest, FileListResponse,
    UploadResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// File service
pub struct FileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FileService<'a> {
    /// Create a new FileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List a storage directory
    #[instrument(skip(self, request), fields(path = %request.path))]
    pub async fn list_files(&self, request: FileListRequest) -> ServiceResult<FileListResponse> {
        let mut listing = FsListRequest::new(request.path.as_str());
        if let Some(page) = request.page {
            listing.page = page;
        }
        if let Some(per_page) = request.per_page {
            listing.per_page = per_page;
        }
        listing.refresh = request.refresh;

        let reply = self.ctx.storage().list(&listing).await?;
        let items = reply
            .items()
            .iter()
            .map(|item| FileEntryResponse::from_item(&request.path, item))
            .collect();

        Ok(FileListResponse {
            path: request.path,
            total: reply.total,
            write: reply.write,
            items,
        })
    }

    /// Look up a single file
    #[instrument(skip(self, request), fields(path = %request.path))]
    pub async fn get_file(&self, request: FileGetRequest) -> ServiceResult<FileDetailResponse> {
        let detail = self.ctx.storage().get(&request.path).await?;
        Ok(FileDetailResponse::from_detail(&request.path, detail))
    }

    /// Upload a file into the image directory
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload(
        &self,
        file_name: &str,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> ServiceResult<UploadResponse> {
        let path = self
            .ctx
            .storage()
            .upload(file_name, content_type, bytes)
            .await?;
        info!(path = %path, "File uploaded");

        Ok(UploadResponse { path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{context, InMemoryStore};

    #[tokio::test]
    async fn test_upload_rejects_blank_name() {
        let store = InMemoryStore::new();
        let ctx = context(&store);

        let err = FileService::new(&ctx)
            .upload("  ", None, b"png".to_vec())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_unreachable_storage_is_bad_gateway() {
        let store = InMemoryStore::new();
        let ctx = context(&store);

        let err = FileService::new(&ctx)
            .get_file(FileGetRequest {
                path: "/images/a.png".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 502);
    }
}
