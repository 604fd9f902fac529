//! Main ArticClient

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use url::Url;

use crate::api::PAGE_LIMIT;
use crate::api::Page;
use crate::api::PageNumber;
use crate::error::ApiError;
use crate::error::FetchError;
use crate::model::Artwork;

/// Default catalog endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1/artworks";

const DEFAULT_USER_AGENT: &str = concat!("artic-lib/", env!("CARGO_PKG_VERSION"));

/// The main client for reading pages from the artwork catalog.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across threads safely.
///
/// # Example
///
/// ```ignore
/// use artic_lib::ArticClient;
/// use artic_lib::api::PageNumber;
///
/// let client = ArticClient::builder().build()?;
/// let page = client.fetch_page(PageNumber::FIRST).await?;
///
/// println!("{} artworks in the catalog", page.total_count());
/// ```
#[derive(Clone)]
pub struct ArticClient {
    inner: Arc<ArticClientInner>,
}

struct ArticClientInner {
    base_url: Url,
    http_client: Client,
    timeout: Option<Duration>,
}

impl ArticClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> ArticClientBuilder {
        ArticClientBuilder::new()
    }

    /// Fetches one page of artworks.
    ///
    /// Every request asks for exactly [`PAGE_LIMIT`] records. Records come
    /// back in server order together with the catalog-wide total.
    pub async fn fetch_page(&self, page: PageNumber) -> Result<Page, FetchError> {
        self.get_page(page)
            .await
            .map_err(|e| FetchError::new(page, e))
    }

    /// Returns the base URL of the catalog endpoint.
    pub fn base_url(&self) -> &str {
        self.inner.base_url.as_str()
    }

    /// Builds the request URL for a page.
    pub fn page_url(&self, page: PageNumber) -> Url {
        let mut url = self.inner.base_url.clone();
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("limit", &PAGE_LIMIT.to_string());
        url
    }

    async fn get_page(&self, page: PageNumber) -> Result<Page, ApiError> {
        let url = self.page_url(page);
        debug!("GET {}", url);

        let mut request = self
            .inner
            .http_client
            .get(url)
            .header(ACCEPT, "application/json");

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| self.map_send_error(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            return Err(ApiError::from_response(status.as_u16(), body));
        }

        let parsed: ArtworksResponse = serde_json::from_str(&body)
            .map_err(|e| ApiError::malformed(e.to_string(), Some(body.clone())))?;

        debug!(
            "Page {} returned {} of {} artworks",
            page,
            parsed.data.len(),
            parsed.pagination.total
        );

        Ok(Page::new(page, parsed.data, parsed.pagination.total))
    }

    fn map_send_error(&self, err: reqwest::Error) -> ApiError {
        match self.inner.timeout {
            Some(timeout) if err.is_timeout() => ApiError::Timeout(timeout),
            _ => ApiError::from(err),
        }
    }
}

impl std::fmt::Debug for ArticClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArticClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

/// Collection response of the artworks endpoint.
#[derive(Debug, Deserialize)]
struct ArtworksResponse {
    /// The records in this page.
    data: Vec<Artwork>,
    /// Paging metadata.
    pagination: Pagination,
}

#[derive(Debug, Deserialize)]
struct Pagination {
    /// Total number of artworks in the catalog.
    total: usize,
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for constructing an [`ArticClient`].
///
/// All fields are optional; the default targets the public catalog.
///
/// # Example
///
/// ```ignore
/// let client = ArticClient::builder()
///     .base_url("http://localhost:8080/api/v1/artworks")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub struct ArticClientBuilder {
    base_url: String,
    user_agent: String,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl ArticClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the catalog endpoint URL.
    ///
    /// Defaults to [`DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the `User-Agent` sent with every request.
    ///
    /// Ignored when a custom HTTP client is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`ArticClient`].
    ///
    /// Fails if the base URL cannot be parsed or the HTTP client cannot be
    /// constructed.
    pub fn build(self) -> Result<ArticClient, ApiError> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder().user_agent(self.user_agent);
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build().map_err(ApiError::Network)?
            }
        };

        Ok(ArticClient {
            inner: Arc::new(ArticClientInner {
                base_url,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ArticClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
