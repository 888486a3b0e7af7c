use async_trait::async_trait;
use rerouter_application::ports::RemoteListSource;
use rerouter_domain::{DomainError, RemoteLists};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Fetches `{social_media, search_engines}` from a JSON endpoint.
pub struct HttpRemoteListSource {
    url: String,
    client: reqwest::Client,
}

impl HttpRemoteListSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("rerouter/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::RemoteFetch(e.to_string()))?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RemoteListSource for HttpRemoteListSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<RemoteLists, DomainError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DomainError::RemoteFetch(format!("fetch error for {}: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Remote list source returned an error status");
            return Err(DomainError::RemoteFetch(format!(
                "HTTP {} for {}",
                status.as_u16(),
                self.url
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::RemoteFetch(format!("read error for {}: {}", self.url, e)))?;

        let lists = RemoteLists::parse(&body)?;
        debug!(
            sites = lists.social_media.len(),
            destinations = lists.search_engines.len(),
            "Remote lists fetched"
        );
        Ok(lists)
    }
}
