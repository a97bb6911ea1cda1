//! REST Countries HTTP client.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use url::Url;

use super::response::AlphaResponse;
use super::CountrySource;
use crate::config::API_VERSION;
use crate::error_handling::{
    categorize_reqwest_error, categorize_status, InitializationError, LookupError,
};
use crate::models::Country;

/// [`CountrySource`] backed by the REST Countries v3.1 API.
///
/// Cheap to clone; the underlying `reqwest::Client` is shared.
#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    client: Arc<reqwest::Client>,
    base_url: Url,
}

impl RestCountriesClient {
    /// Creates a client rooted at `base_url` (e.g. `https://restcountries.com`).
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::BaseUrlError` if `base_url` does not parse
    /// or cannot carry path segments (e.g. `mailto:` URLs).
    pub fn new(client: Arc<reqwest::Client>, base_url: &str) -> Result<Self, InitializationError> {
        let parsed = Url::parse(base_url).map_err(|e| InitializationError::BaseUrlError {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(InitializationError::BaseUrlError {
                url: base_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            });
        }
        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Builds `{base}/v3.1/{segments...}` with each segment percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, LookupError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| LookupError::ServiceUnavailable("invalid base URL".to_string()))?
            .pop_if_empty()
            .push(API_VERSION)
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, LookupError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            debug!("{} answered {}", url, status);
            return Err(categorize_status(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| categorize_reqwest_error(&e))?;
        serde_json::from_slice(&body).map_err(|e| {
            debug!("Undecodable body from {}: {}", url, e);
            LookupError::ServiceUnavailable(format!("invalid response body: {e}"))
        })
    }
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    async fn by_full_name(&self, name: &str) -> Result<Vec<Country>, LookupError> {
        let mut url = self.endpoint(&["name", name])?;
        url.query_pairs_mut().append_pair("fullText", "true");
        self.get_json(url).await
    }

    async fn by_name(&self, name: &str) -> Result<Vec<Country>, LookupError> {
        let url = self.endpoint(&["name", name])?;
        self.get_json(url).await
    }

    async fn by_code(&self, code: &str) -> Result<Option<Country>, LookupError> {
        let url = self.endpoint(&["alpha", code])?;
        let response: AlphaResponse = self.get_json(url).await?;
        Ok(response.into_first())
    }

    async fn by_region(&self, region: &str) -> Result<Vec<Country>, LookupError> {
        let url = self.endpoint(&["region", region])?;
        self.get_json(url).await
    }
}
