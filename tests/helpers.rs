// Shared test helpers for mock REST Countries responses and session setup.

use std::sync::Arc;

use serde_json::{json, Value};
use wiremock::MockServer;

use country_lookup::api::RestCountriesClient;
use country_lookup::render::MemoryView;
use country_lookup::{SearchMode, SearchSession};

/// Builds a country object in the REST Countries v3.1 shape.
pub fn country_json(name: &str, region: &str, capital: &str, population: u64) -> Value {
    json!({
        "name": {"common": name, "official": format!("Republic of {name}")},
        "flags": {"png": format!("https://flagcdn.com/w320/{}.png", name.to_lowercase())},
        "capital": [capital],
        "region": region,
        "subregion": format!("Western {region}"),
        "population": population,
        "languages": {"eng": "English"},
        "currencies": {"EUR": {"name": "Euro", "symbol": "€"}},
        "altSpellings": [name.get(..2).unwrap_or(name).to_uppercase()],
    })
}

/// Creates a session whose source points at the mock server.
pub fn mock_session(server: &MockServer, mode: SearchMode) -> SearchSession<RestCountriesClient, MemoryView> {
    let client = RestCountriesClient::new(Arc::new(reqwest::Client::new()), &server.uri())
        .expect("Failed to create client for mock server");
    SearchSession::new(client, MemoryView::new(), mode)
}

/// A small Europe used by several tests.
#[allow(dead_code)] // Used by other test files
pub fn europe() -> Value {
    json!([
        country_json("Germany", "Europe", "Berlin", 83_240_525),
        country_json("France", "Europe", "Paris", 67_391_582),
        country_json("Belgium", "Europe", "Brussels", 11_555_997),
    ])
}
