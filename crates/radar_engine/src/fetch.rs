use std::time::Duration;

use chrono::NaiveDate;
use futures_util::StreamExt;
use radar_logging::{radar_debug, radar_info};
use reqwest::header::{ACCEPT, USER_AGENT};

use crate::decode::decode_search_response;
use crate::query::search_url;
use crate::{FailureKind, FetchError, RepoFetchError, RepoSummary};

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub api_base_url: String,
    pub user_agent: String,
    /// `None` leaves the connection phase unbounded.
    pub connect_timeout: Option<Duration>,
    /// `None` leaves the whole request unbounded.
    pub request_timeout: Option<Duration>,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: "repo-radar".to_string(),
            connect_timeout: None,
            request_timeout: None,
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch repositories created after `created_after`, most starred first.
    async fn fetch_repositories(
        &self,
        created_after: NaiveDate,
    ) -> Result<Vec<RepoSummary>, RepoFetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    async fn download(&self, created_after: NaiveDate) -> Result<Vec<u8>, FetchError> {
        let url = search_url(&self.settings.api_base_url, created_after)?;
        let client = self.build_client()?;
        radar_info!("Requesting {}", url);

        let response = client
            .get(url)
            .header(USER_AGENT, &self.settings.user_agent)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        radar_debug!("Downloaded {} bytes", bytes.len());
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch_repositories(
        &self,
        created_after: NaiveDate,
    ) -> Result<Vec<RepoSummary>, RepoFetchError> {
        let bytes = self.download(created_after).await?;
        let repos = decode_search_response(&bytes)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
        Ok(repos)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
