use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::app::Result;
use crate::fetcher::Fetcher;

/// reqwest-based [`Fetcher`] against the external API server.
///
/// The client carries no timeout: a hung request simply never resolves and
/// the caller's panel keeps its prior content. Retrying is left to the user
/// issuing a new interaction.
pub struct HttpFetcher {
    client: Client,
    api_base: Url,
}

impl HttpFetcher {
    pub fn new(api_base: &str) -> Result<Self> {
        let api_base = Url::parse(api_base)?;
        let client = Client::builder()
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("linkcard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, api_base })
    }

    fn endpoint(&self, path: &str, param: &str, value: &str) -> Result<Url> {
        let mut url = self.api_base.join(path)?;
        url.query_pairs_mut().append_pair(param, value);
        Ok(url)
    }

    async fn get_text(&self, url: Url) -> Result<String> {
        debug!(%url, "api request");
        let response = self.client.get(url).send().await?;
        response.error_for_status_ref()?;
        Ok(response.text().await?)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_link_markup(&self, url: &str) -> Result<String> {
        let endpoint = self.endpoint("/api/v1/og", "url", url)?;
        self.get_text(endpoint).await
    }

    async fn fetch_key(&self, length: u32) -> Result<String> {
        let endpoint = self.endpoint("/api/v1/key", "length", &length.to_string())?;
        self.get_text(endpoint).await
    }
}
