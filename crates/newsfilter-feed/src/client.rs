//! HTTP client for fetching RSS feeds.

use std::time::Duration;

use newsfilter_core::Item;
use tracing::{debug, info, warn};

use crate::error::{FeedError, FeedResult};
use crate::parse::parse_channel;

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("newsfilter/", env!("CARGO_PKG_VERSION"));

/// Client for fetching RSS feeds.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http_client: reqwest::Client,
    timeout: Duration,
}

impl FeedClient {
    /// Creates a client with the default timeout.
    pub fn new() -> FeedResult<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a client with a custom request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (e.g. the TLS
    /// backend fails to initialize).
    pub fn with_timeout(timeout: Duration) -> FeedResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http_client,
            timeout,
        })
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetches one feed and returns its items in feed order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the body is not RSS.
    pub async fn fetch(&self, url: &str) -> FeedResult<Vec<Item>> {
        debug!(url, "fetching feed");

        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        parse_channel(&body)
    }

    /// Fetches several feeds in order and concatenates their items.
    ///
    /// A feed that fails is logged and skipped; the others are still returned.
    pub async fn fetch_all<S: AsRef<str>>(&self, urls: &[S]) -> Vec<Item> {
        let mut items = Vec::new();

        for url in urls {
            let url = url.as_ref();
            match self.fetch(url).await {
                Ok(fetched) => {
                    info!(url, count = fetched.len(), "fetched feed");
                    items.extend(fetched);
                }
                Err(e) => warn!(url, "failed to fetch feed: {e}"),
            }
        }

        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        let client = FeedClient::new().unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_custom_timeout() {
        let client = FeedClient::with_timeout(Duration::from_millis(250)).unwrap();
        assert_eq!(client.timeout(), Duration::from_millis(250));
    }

    #[test]
    fn test_user_agent_names_crate() {
        assert!(USER_AGENT.starts_with("newsfilter/"));
    }
}
