//! Catalog Client
//!
//! Fetches product pages from the remote catalog API.
//!
//! The request is a plain `GET {endpoint}?limit={limit}&skip={offset}` with no
//! authentication; the body is decoded into a [`ProductPage`].

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use snafu::{ResultExt, Snafu};

use crate::domain::{PageRequest, ProductPage};

/// Failure of a single page fetch
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum FetchError {
    /// HTTP client could not be constructed
    #[snafu(display("Failed to build HTTP client: {source}"))]
    Client { source: reqwest::Error },

    /// Transport failure, timeout, or truncated body
    #[snafu(display("Request to {url} failed: {source}"))]
    Request { url: String, source: reqwest::Error },

    /// Server answered with a non-success status
    #[snafu(display("{url} returned HTTP {status}"))]
    Status { url: String, status: u16 },

    /// Body was not a product page
    #[snafu(display("Unexpected response from {url}: {source}"))]
    Decode {
        url: String,
        source: serde_json::Error,
    },
}

/// Source of catalog pages
pub trait PageFetcher: Send + Sync + 'static {
    /// Fetch one page of products
    fn fetch_page(
        &self,
        request: PageRequest,
    ) -> impl Future<Output = Result<ProductPage, FetchError>> + Send + 'static;
}

/// [`PageFetcher`] backed by reqwest
#[derive(Clone, Debug)]
pub struct HttpPageFetcher {
    client: reqwest::Client,
    endpoint: Arc<str>,
}

impl HttpPageFetcher {
    /// Create a fetcher for the given products endpoint
    pub fn new(endpoint: impl Into<Arc<str>>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context(ClientSnafu)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// The configured products endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PageFetcher for HttpPageFetcher {
    fn fetch_page(
        &self,
        request: PageRequest,
    ) -> impl Future<Output = Result<ProductPage, FetchError>> + Send + 'static {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();

        async move {
            let url = endpoint.to_string();
            tracing::debug!(url = %url, offset = request.offset, limit = request.limit, "Fetching catalog page");

            let response = client
                .get(&url)
                .query(&[("limit", request.limit), ("skip", request.offset)])
                .send()
                .await
                .context(RequestSnafu { url: url.clone() })?;

            let status = response.status();
            if !status.is_success() {
                return StatusSnafu {
                    url,
                    status: status.as_u16(),
                }
                .fail();
            }

            let body = response
                .bytes()
                .await
                .context(RequestSnafu { url: url.clone() })?;

            let page: ProductPage = serde_json::from_slice(&body).context(DecodeSnafu { url })?;
            tracing::debug!(
                offset = request.offset,
                fetched = page.products.len(),
                total = page.total,
                "Catalog page received"
            );
            Ok(page)
        }
    }
}
