use crate::config::Config;
use crate::error::{BookshelfError, Result};
use crate::models::{BookId, RawVolume, Volume, VolumeList};
use crate::services::BooksApi;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

/// `BooksApi` backed by the Google Books `volumes` endpoint.
#[derive(Debug, Clone)]
pub struct GoogleBooksClient {
    client: Client,
    base_url: String,
    default_query: Option<String>,
}

impl GoogleBooksClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| {
                BookshelfError::Transport(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self::with_client(
            client,
            &config.base_url,
            config.default_query(),
        ))
    }

    pub fn with_client(client: Client, base_url: &str, default_query: Option<&str>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            default_query: default_query.map(str::to_string),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Substitute the configured default for an empty query, or reject it.
    fn resolve_query<'a>(&'a self, query: &'a str) -> Result<&'a str> {
        if !query.trim().is_empty() {
            return Ok(query);
        }

        match self.default_query.as_deref() {
            Some(default) => {
                debug!("Empty query, falling back to default '{}'", default);
                Ok(default)
            }
            None => Err(BookshelfError::InvalidInput(
                "Query cannot be empty".to_string(),
            )),
        }
    }

    /// `<base>/<id>` with the id escaped as a single path segment.
    fn detail_url(&self, id: &BookId) -> Result<Url> {
        // url drops dot segments on push, which would silently hit another resource
        if matches!(id.as_str(), "" | "." | "..") {
            return Err(BookshelfError::InvalidInput(format!(
                "Volume id '{}' is not a valid path segment",
                id
            )));
        }

        let mut url = Url::parse(&self.base_url).map_err(|e| {
            BookshelfError::Config(format!("Invalid base url {}: {}", self.base_url, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                BookshelfError::Config(format!("Base url {} cannot take a path", self.base_url))
            })?
            .pop_if_empty()
            .push(id.as_str());

        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        let url = response.url().to_string();

        if !status.is_success() {
            error!("Books API returned {} for {}", status, url);
            return Err(BookshelfError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            BookshelfError::Decode(format!("Failed to parse response from {}: {}", url, e))
        })
    }
}

#[async_trait]
impl BooksApi for GoogleBooksClient {
    async fn list_ids(&self, query: &str) -> Result<Vec<BookId>> {
        let query = self.resolve_query(query)?;
        let url = format!("{}/", self.base_url);

        debug!("Listing volumes for '{}'", query);
        let list: VolumeList = self
            .get_json(self.client.get(&url).query(&[("q", query)]))
            .await?;

        Ok(list.into_ids())
    }

    async fn fetch_detail(&self, id: &BookId) -> Result<RawVolume> {
        let url = self.detail_url(id)?;

        debug!("Fetching volume {}", id);
        let volume: Volume = self.get_json(self.client.get(url)).await?;

        volume.into_raw(id.clone())
    }
}
