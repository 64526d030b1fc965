//! HTTP-backed page source

use super::types::TrendingResponse;
use super::PageSource;
use crate::config::FeedConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::types::{GridItem, PageRequest};
use async_trait::async_trait;
use tracing::debug;

/// Page source backed by the remote trending endpoint.
///
/// Issues `GET {base_url}{trending_path}?api_key=…&limit=…&offset=…` and
/// converts the raw records into normalized [`GridItem`]s.
#[derive(Debug)]
pub struct HttpPageSource {
    client: HttpClient,
    trending_path: String,
}

impl HttpPageSource {
    /// Create a source from a feed config
    pub fn new(config: &FeedConfig) -> Result<Self> {
        let client = HttpClient::with_config(
            HttpClientConfig::builder()
                .base_url(&config.base_url)
                .timeout(config.timeout())
                .default_query("api_key", &config.api_key)
                .user_agent(&config.user_agent)
                .build(),
        )?;

        Ok(Self {
            client,
            trending_path: config.trending_path.clone(),
        })
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self, request: PageRequest) -> Result<Vec<GridItem>> {
        let response: TrendingResponse = self
            .client
            .get_json(
                &self.trending_path,
                RequestConfig::new()
                    .query("limit", request.page_size.to_string())
                    .query("offset", request.offset.to_string()),
            )
            .await?;

        let items = response.into_items();
        debug!(
            "fetched {} items at offset {} (limit {})",
            items.len(),
            request.offset,
            request.page_size
        );
        Ok(items)
    }
}
