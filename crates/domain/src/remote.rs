use crate::errors::DomainError;
use crate::validators::{validate_destination, validate_site};
use serde::{Deserialize, Serialize};

/// Payload of the remote list source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteLists {
    pub social_media: Vec<String>,
    pub search_engines: Vec<String>,
}

impl RemoteLists {
    pub fn parse(body: &str) -> Result<Self, DomainError> {
        let lists: RemoteLists = serde_json::from_str(body)
            .map_err(|e| DomainError::RemoteFetch(format!("invalid payload: {e}")))?;
        lists.validate()?;
        Ok(lists)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.search_engines.is_empty() {
            return Err(DomainError::RemoteFetch(
                "empty search engines list".to_string(),
            ));
        }
        for site in &self.social_media {
            validate_site(site).map_err(DomainError::RemoteFetch)?;
        }
        for url in &self.search_engines {
            validate_destination(url).map_err(DomainError::RemoteFetch)?;
        }
        Ok(())
    }
}
