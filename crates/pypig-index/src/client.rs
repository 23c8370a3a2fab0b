//! HTTP access to the index: listing and removal.

use crate::listing::ListingSource;
use crate::{IndexError, IndexUrl};
use std::time::Duration;

/// Path of the directory listing below the index root.
const LISTING_PATH: &str = "packages";

/// Blocking client for one index.
///
/// Requests go to the credential-free base URL with an explicit
/// `Authorization` header, so reserved characters in credentials reach the
/// server unencoded.
pub struct IndexClient {
    agent: ureq::Agent,
    base: String,
    authorization: String,
}

/// Server reply to a removal request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl IndexClient {
    /// Create a client whose requests all use `timeout`.
    pub fn new(url: &IndexUrl, timeout: Duration) -> Self {
        Self::with_base(url.base(), url.basic_auth(), timeout)
    }

    pub(crate) fn with_base(
        base: impl Into<String>,
        authorization: String,
        timeout: Duration,
    ) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            base: base.into(),
            authorization,
        }
    }

    fn listing_url(&self) -> String {
        format!("{}/{}", self.base.trim_end_matches('/'), LISTING_PATH)
    }

    /// Remove one package version from the index.
    ///
    /// Non-success statuses are returned as [`IndexError::Status`].
    pub fn remove(&self, name: &str, version: &str) -> Result<RemoveResponse, IndexError> {
        tracing::debug!(url = %self.base, name, version, "removing package");
        let response = self
            .agent
            .post(&self.base)
            .set("Authorization", &self.authorization)
            .send_form(&[
                (":action", "remove_pkg"),
                ("name", name),
                ("version", version),
            ])?;
        let status = response.status();
        let status_text = response.status_text().to_string();
        let body = response.into_string()?;
        Ok(RemoveResponse {
            status,
            status_text,
            body,
        })
    }
}

impl ListingSource for IndexClient {
    fn fetch_listing(&self) -> Result<String, IndexError> {
        let url = self.listing_url();
        tracing::debug!(url = %url, "fetching package listing");
        let response = self
            .agent
            .get(&url)
            .set("Authorization", &self.authorization)
            .call()?;
        Ok(response.into_string()?)
    }
}


#[cfg(all(test, feature = "test-network"))]
mod network_tests {
    use super::*;

    /// Requires PYPIG_TEST_INDEX/USERNAME/PASSWORD pointing at a live index.
    #[test]
    fn test_fetch_live_listing() {
        let var = |key: &str| std::env::var(key).unwrap();
        let url = IndexUrl::compose(
            &var("PYPIG_TEST_INDEX"),
            &var("PYPIG_TEST_USERNAME"),
            &var("PYPIG_TEST_PASSWORD"),
        )
        .unwrap();
        let client = IndexClient::new(&url, Duration::from_secs(30));
        let text = client.fetch_listing().unwrap();
        assert!(!crate::parse_listing(&text).packages.is_empty());
    }
}
