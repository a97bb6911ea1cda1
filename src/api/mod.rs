//! Country data sources.
//!
//! [`CountrySource`] is the seam between the search pipelines and the network.
//! [`RestCountriesClient`] implements it against the REST Countries API.

mod response;
mod rest;

use async_trait::async_trait;

use crate::error_handling::LookupError;
use crate::models::Country;

pub use response::AlphaResponse;
pub use rest::RestCountriesClient;

/// Lookups the search pipelines need.
///
/// Implementations normalize endpoint quirks before returning: callers only
/// ever see `Country` values or a [`LookupError`].
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Countries whose full name equals `name` (`/name/{name}?fullText=true`).
    async fn by_full_name(&self, name: &str) -> Result<Vec<Country>, LookupError>;

    /// Countries whose name contains `name` (`/name/{name}`).
    async fn by_name(&self, name: &str) -> Result<Vec<Country>, LookupError>;

    /// The country with ISO alpha code `code` (`/alpha/{code}`).
    async fn by_code(&self, code: &str) -> Result<Option<Country>, LookupError>;

    /// All countries in `region` (`/region/{region}`).
    async fn by_region(&self, region: &str) -> Result<Vec<Country>, LookupError>;
}
