//! HTTP client for the storage service

use std::sync::Arc;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::{DeserializeOwned, IgnoredAny};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use track_common::StorageConfig;

use crate::error::{StorageError, StorageResult};
use crate::models::{
    FsGetRequest, FsGetResponse, FsListRequest, FsListResponse, LoginData, LoginRequest,
    StorageEnvelope,
};
use crate::path::{encode_file_path, public_path, upload_path};

const SUCCESS: i64 = 200;
const UNAUTHORIZED: i64 = 401;

#[derive(Debug)]
struct Credentials {
    username: String,
    password: String,
}

/// Storage service client
///
/// Cheap to clone; clones share the HTTP connection pool and the cached token.
#[derive(Debug, Clone)]
pub struct StorageClient {
    client: Client,
    base_url: Arc<str>,
    image_dir: Arc<str>,
    credentials: Arc<Credentials>,
    token: Arc<RwLock<Option<String>>>,
}

impl StorageClient {
    /// Create a client from configuration
    pub fn new(config: &StorageConfig) -> StorageResult<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            base_url: Arc::from(config.base_url.trim_end_matches('/')),
            image_dir: Arc::from(config.image_dir.as_str()),
            credentials: Arc::new(Credentials {
                username: config.username.clone(),
                password: config.password.clone(),
            }),
            token: Arc::new(RwLock::new(None)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    /// Log in and cache the issued token
    #[instrument(skip(self))]
    pub async fn login(&self) -> StorageResult<String> {
        let body = LoginRequest {
            username: &self.credentials.username,
            password: &self.credentials.password,
        };

        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(&body)
            .send()
            .await?;
        let envelope: StorageEnvelope<LoginData> = response.json().await?;

        if envelope.code != SUCCESS {
            return Err(StorageError::Login(envelope.message));
        }
        let token = envelope.data.ok_or(StorageError::MissingData)?.token;

        *self.token.write().await = Some(token.clone());
        info!("Logged in to storage service");
        Ok(token)
    }

    async fn current_token(&self) -> StorageResult<String> {
        if let Some(token) = self.token.read().await.as_ref() {
            return Ok(token.clone());
        }
        self.login().await
    }

    /// Replace a token the service rejected. A token refreshed meanwhile by
    /// another request is reused instead of logging in again.
    async fn refresh_token(&self, rejected: &str) -> StorageResult<String> {
        {
            let guard = self.token.read().await;
            if let Some(current) = guard.as_deref() {
                if current != rejected {
                    return Ok(current.to_string());
                }
            }
        }
        self.login().await
    }

    async fn execute<T: DeserializeOwned>(request: RequestBuilder) -> StorageResult<Option<T>> {
        let response = request.send().await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(StorageError::Unauthorized);
        }

        let envelope: StorageEnvelope<T> = response.json().await?;
        match envelope.code {
            SUCCESS => Ok(envelope.data),
            UNAUTHORIZED => Err(StorageError::Unauthorized),
            code => Err(StorageError::Upstream {
                code,
                message: envelope.message,
            }),
        }
    }

    /// Send an authorized request, logging in again once on `401`
    async fn send_authorized<T, F>(&self, build: F) -> StorageResult<Option<T>>
    where
        T: DeserializeOwned,
        F: Fn(HeaderValue) -> RequestBuilder,
    {
        let token = self.current_token().await?;

        match Self::execute(build(HeaderValue::from_str(&token)?)).await {
            Err(StorageError::Unauthorized) => {
                warn!("Storage token rejected, logging in again");
                let token = self.refresh_token(&token).await?;
                Self::execute(build(HeaderValue::from_str(&token)?)).await
            }
            other => other,
        }
    }

    /// List a directory
    #[instrument(skip(self), fields(path = %request.path))]
    pub async fn list(&self, request: &FsListRequest) -> StorageResult<FsListResponse> {
        let url = self.url("/fs/list");
        let listing = self
            .send_authorized(|token| {
                self.client
                    .post(&url)
                    .header(AUTHORIZATION, token)
                    .json(request)
            })
            .await?
            .ok_or(StorageError::MissingData)?;

        debug!(total = listing_total(&listing), "Listed storage directory");
        Ok(listing)
    }

    /// Fetch details of a single file
    #[instrument(skip(self))]
    pub async fn get(&self, path: &str) -> StorageResult<FsGetResponse> {
        let url = self.url("/fs/get");
        let body = FsGetRequest { path };

        self.send_authorized(|token| {
            self.client
                .post(&url)
                .header(AUTHORIZATION, token)
                .json(&body)
        })
        .await?
        .ok_or(StorageError::MissingData)
    }

    /// Upload a file into the image directory and return its public path
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload(
        &self,
        file_name: &str,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> StorageResult<String> {
        let path = upload_path(&self.image_dir, file_name)?;
        let file_path = HeaderValue::from_str(&encode_file_path(&path))?;
        let url = self.url("/fs/form");
        let stored_name = path.rsplit('/').next().unwrap_or(file_name).to_string();

        self.send_authorized::<IgnoredAny, _>(|token| {
            let mut part = Part::bytes(bytes.clone()).file_name(stored_name.clone());
            if let Some(mime) = content_type {
                part = match part.mime_str(mime) {
                    Ok(typed) => typed,
                    Err(_) => Part::bytes(bytes.clone()).file_name(stored_name.clone()),
                };
            }

            self.client
                .put(&url)
                .header(AUTHORIZATION, token)
                .header("File-Path", file_path.clone())
                .header("As-Task", "true")
                .multipart(Form::new().part("file", part))
        })
        .await?;

        info!(path = %path, "Uploaded file to storage");
        Ok(public_path(&path))
    }
}

fn listing_total(listing: &FsListResponse) -> i64 {
    if listing.total > 0 {
        listing.total
    } else {
        listing.items().len() as i64
    }
}
