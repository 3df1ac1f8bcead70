//! Authoritative read API of the board.
//!
//! The relay only says that something changed; the contents shown when a
//! page is first opened come from here.

use async_trait::async_trait;
use bbs_relay_shared::{ResponseRecord, ThreadSummary};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::{
    error::ApiError,
    reconciler::{Page, PageSnapshot},
};

/// Discriminator the API uses when a bot-verification challenge is needed
pub const VERIFICATION_REQUIRED: &str = "VERIFICATION_REQUIRED";

/// Read access to boards and threads
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardApi: Send + Sync {
    /// Current thread list of a board
    async fn threads(&self, board: &str) -> Result<Vec<ThreadSummary>, ApiError>;

    /// Every response of a thread, oldest first
    async fn responses(
        &self,
        board: &str,
        thread_id: u64,
    ) -> Result<Vec<ResponseRecord>, ApiError>;
}

/// Fetch the initial contents of `page`
pub async fn fetch_snapshot<A>(api: &A, page: &Page) -> Result<PageSnapshot, ApiError>
where
    A: BoardApi + ?Sized,
{
    match page {
        Page::Board { board } => api.threads(board).await.map(PageSnapshot::Threads),
        Page::Thread { board, thread_id } => api
            .responses(board, *thread_id)
            .await
            .map(PageSnapshot::Responses),
    }
}

/// Structured error body of the board API
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    sitekey: Option<String>,
}

/// Map a non-2xx answer to an [`ApiError`]
pub fn decode_error(status: StatusCode, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(error) if error.detail == VERIFICATION_REQUIRED => ApiError::VerificationRequired {
            sitekey: error.sitekey,
            message: error.message.unwrap_or(error.detail),
        },
        Ok(error) => ApiError::Status {
            status: status.as_u16(),
            detail: error.detail,
            message: error.message,
        },
        Err(_) => ApiError::Status {
            status: status.as_u16(),
            detail: status
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_string(),
            message: None,
        },
    }
}

/// [`BoardApi`] over HTTP (reqwest)
pub struct HttpBoardApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBoardApi {
    /// `base_url` is the origin of the board, e.g. `http://127.0.0.1:8000`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await?;
        let error = decode_error(status, &body);
        tracing::warn!("GET {} failed: {}", url, error);
        Err(error)
    }
}

#[async_trait]
impl BoardApi for HttpBoardApi {
    async fn threads(&self, board: &str) -> Result<Vec<ThreadSummary>, ApiError> {
        self.get(&format!("/api/boards/{board}/threads")).await
    }

    async fn responses(
        &self,
        board: &str,
        thread_id: u64,
    ) -> Result<Vec<ResponseRecord>, ApiError> {
        self.get(&format!("/api/boards/{board}/threads/{thread_id}"))
            .await
    }
}
