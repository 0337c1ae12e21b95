//! Client for the remote artwork catalog.
//!
//! The catalog serves `GET /artworks?page={n}&limit={size}` with a body of
//! `{data: [...], pagination: {total, total_pages, current_page}}`. Only
//! `data` and `pagination.total` are used.

use std::time::Duration;

use artsel_engine::{Artwork, FetchError, FetchedPage};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Source of catalog pages.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the 1-indexed `page_number` with up to `limit` records.
    async fn fetch_page(&self, page_number: u64, limit: u64) -> Result<FetchedPage, FetchError>;
}

/// Response body of the artworks listing.
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    pub data: Vec<Artwork>,
    pub pagination: Pagination,
}

/// Pagination block of the artworks listing.
#[derive(Debug, Deserialize)]
pub struct Pagination {
    pub total: u64,
    #[serde(default)]
    pub total_pages: u64,
    #[serde(default)]
    pub current_page: u64,
}

impl From<CatalogResponse> for FetchedPage {
    fn from(response: CatalogResponse) -> Self {
        FetchedPage {
            items: response.data,
            total_count: response.pagination.total,
        }
    }
}

/// HTTP catalog client.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    base_url: String,
    http_client: Client,
}

impl HttpCatalog {
    /// Create a client for the catalog at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into(),
            http_client,
        })
    }

    fn artworks_url(&self) -> String {
        format!("{}/artworks", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_page(&self, page_number: u64, limit: u64) -> Result<FetchedPage, FetchError> {
        let response = self
            .http_client
            .get(self.artworks_url())
            .query(&[("page", page_number), ("limit", limit)])
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport(format!("catalog returned {}", status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        parse_response(&body)
    }
}

/// Decode an artworks listing body.
pub fn parse_response(body: &[u8]) -> Result<FetchedPage, FetchError> {
    serde_json::from_slice::<CatalogResponse>(body)
        .map(FetchedPage::from)
        .map_err(|e| FetchError::Parse(e.to_string()))
}
