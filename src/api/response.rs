//! Response shapes that need normalizing.

use serde::Deserialize;

use crate::models::Country;

/// Body of `/alpha/{code}`.
///
/// Depending on the API version the endpoint answers with either a bare
/// country object or a single-element array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AlphaResponse {
    Many(Vec<Country>),
    One(Box<Country>),
}

impl AlphaResponse {
    /// The first (and normally only) country in the response.
    pub fn into_first(self) -> Option<Country> {
        match self {
            AlphaResponse::Many(countries) => countries.into_iter().next(),
            AlphaResponse::One(country) => Some(*country),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_response_single_object() {
        let body = r#"{"name": {"common": "France"}, "cca2": "FR"}"#;
        let response: AlphaResponse = serde_json::from_str(body).unwrap();
        let country = response.into_first().unwrap();
        assert_eq!(country.common_name(), "France");
    }

    #[test]
    fn test_alpha_response_single_element_array() {
        let body = r#"[{"name": {"common": "France"}, "cca2": "FR"}]"#;
        let response: AlphaResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(response, AlphaResponse::Many(_)));
        assert_eq!(response.into_first().unwrap().cca2.as_deref(), Some("FR"));
    }

    #[test]
    fn test_alpha_response_empty_array() {
        let response: AlphaResponse = serde_json::from_str("[]").unwrap();
        assert!(response.into_first().is_none());
    }
}
