pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

/// Async access to the two external API endpoints. Both return the raw
/// response body as text; transport failures propagate to the caller
/// uninterpreted (no retries, no local recovery).
#[async_trait]
pub trait Fetcher {
    /// Retrieve the raw HTML markup of `url` via the og-preview endpoint.
    async fn fetch_link_markup(&self, url: &str) -> Result<String>;

    /// Generate a key of `length` characters via the key endpoint.
    async fn fetch_key(&self, length: u32) -> Result<String>;
}
