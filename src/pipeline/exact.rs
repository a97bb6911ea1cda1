//! Exact-mode resolution: full-text name lookup with an alpha-code fallback.

use log::debug;

use crate::api::CountrySource;
use crate::config::ALPHA_CODE_MAX_LEN;
use crate::error_handling::LookupError;
use crate::models::Country;

/// Resolves `query` to one country.
///
/// Any failure of the full-text lookup (error status, transport failure or an
/// empty array) falls back to `/alpha/{query}` when the query is short enough
/// to be an ISO code. Longer queries fail with `NotFound`. Errors of the
/// fallback lookup are returned as they are.
pub async fn resolve<S>(source: &S, query: &str) -> Result<Country, LookupError>
where
    S: CountrySource + ?Sized,
{
    let by_name = source
        .by_full_name(query)
        .await
        .and_then(|countries| countries.into_iter().next().ok_or(LookupError::NotFound));

    match by_name {
        Ok(country) => Ok(country),
        Err(e) if query.chars().count() <= ALPHA_CODE_MAX_LEN => {
            debug!("Full-text lookup for '{}' failed ({}), trying alpha code", query, e);
            source.by_code(query).await?.ok_or(LookupError::NotFound)
        }
        Err(e) => {
            debug!("Full-text lookup for '{}' failed: {}", query, e);
            Err(LookupError::NotFound)
        }
    }
}
