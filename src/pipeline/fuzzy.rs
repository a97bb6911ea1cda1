//! Fuzzy-mode resolution: substring lookup ranked client-side.

use log::debug;

use crate::api::CountrySource;
use crate::error_handling::LookupError;
use crate::matching::{best_match, rank_candidates};
use crate::models::Country;

/// Resolves `query` to the best-scoring country among the name-search results.
///
/// An empty result list is `NotFound`; scoring never sees it.
pub async fn resolve<S>(source: &S, query: &str) -> Result<Country, LookupError>
where
    S: CountrySource + ?Sized,
{
    let candidates = source.by_name(query).await?;
    if log::log_enabled!(log::Level::Debug) {
        for scored in rank_candidates(&candidates, query) {
            debug!(
                "Candidate '{}' scored {} for '{}'",
                scored.country.common_name(),
                scored.score,
                query
            );
        }
    }
    best_match(&candidates, query)
        .cloned()
        .ok_or(LookupError::NotFound)
}
