use async_trait::async_trait;
use rerouter_domain::{DomainError, RemoteLists};

/// Remote provider of the site and destination lists.
#[async_trait]
pub trait RemoteListSource: Send + Sync {
    /// Fetches and validates the lists.
    ///
    /// # Errors
    ///
    /// * `DomainError::RemoteFetch` - Network failure, non-success status or invalid payload
    async fn fetch(&self) -> Result<RemoteLists, DomainError>;
}
