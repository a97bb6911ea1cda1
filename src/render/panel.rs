//! Details panel and region listing built from API data.
//!
//! These are plain values: building one never touches a view, so every
//! formatting rule is testable without a terminal.

use crate::config::{SearchMode, FUZZY_REGION_CARD_LIMIT, NOT_AVAILABLE};
use crate::models::Country;

use super::format::{compare_names, format_population, or_not_available};

/// Rendered text of the country details view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    pub flag_url: String,
    pub flag_alt: String,
    pub name: String,
    /// Only filled in fuzzy mode.
    pub native_name: Option<String>,
    pub capital: String,
    pub region: String,
    pub population: String,
    pub languages: String,
    pub currency: String,
}

impl DetailPanel {
    pub fn new(country: &Country, mode: SearchMode) -> Self {
        let name = country.common_name().to_string();
        let (capital, region, native_name) = match mode {
            SearchMode::Exact => (
                if country.capital.is_empty() {
                    NOT_AVAILABLE.to_string()
                } else {
                    country.capital.join(", ")
                },
                region_with_subregion(country),
                None,
            ),
            SearchMode::Fuzzy => (
                or_not_available(country.first_capital()),
                or_not_available(country.region.as_deref()),
                Some(first_native_name(country)),
            ),
        };

        Self {
            flag_url: flag_url(country),
            flag_alt: country
                .flags
                .alt
                .clone()
                .filter(|alt| !alt.is_empty())
                .unwrap_or_else(|| format!("Flag of {name}")),
            native_name,
            capital,
            region,
            population: format_population(country.population),
            languages: languages(country),
            currency: currency(country),
            name,
        }
    }
}

/// One selectable entry of a region listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionCard {
    pub flag_url: String,
    pub flag_alt: String,
    pub name: String,
    /// Population in exact mode, capital in fuzzy mode.
    pub caption: String,
}

impl RegionCard {
    /// The query a click on this card submits.
    pub fn query(&self) -> &str {
        &self.name
    }
}

/// The other countries of the displayed country's region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionListing {
    pub title: Option<String>,
    pub cards: Vec<RegionCard>,
}

impl RegionListing {
    /// Builds the listing for `members`, leaving out `displayed` (by common
    /// name).
    ///
    /// Exact mode sorts by name; fuzzy mode keeps API order and keeps at most
    /// [`FUZZY_REGION_CARD_LIMIT`] cards. `region_text` is the region as shown
    /// in the details panel and only feeds the fuzzy-mode title.
    pub fn new(displayed: &str, region_text: &str, members: &[Country], mode: SearchMode) -> Self {
        let others = members.iter().filter(|c| c.common_name() != displayed);
        match mode {
            SearchMode::Exact => {
                let mut others: Vec<&Country> = others.collect();
                others.sort_by(|a, b| compare_names(a.common_name(), b.common_name()));
                Self {
                    title: None,
                    cards: others.into_iter().map(exact_card).collect(),
                }
            }
            SearchMode::Fuzzy => Self {
                title: Some(format!("Other Countries in {region_text}")),
                cards: others
                    .take(FUZZY_REGION_CARD_LIMIT)
                    .map(fuzzy_card)
                    .collect(),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card by 1-based position, as numbered on screen.
    pub fn card(&self, position: usize) -> Option<&RegionCard> {
        position.checked_sub(1).and_then(|i| self.cards.get(i))
    }
}

fn exact_card(country: &Country) -> RegionCard {
    let name = country.common_name().to_string();
    RegionCard {
        flag_url: flag_url(country),
        flag_alt: country
            .flags
            .alt
            .clone()
            .filter(|alt| !alt.is_empty())
            .unwrap_or_else(|| format!("Flag of {name}")),
        caption: format!("Pop: {}", format_population(country.population)),
        name,
    }
}

fn fuzzy_card(country: &Country) -> RegionCard {
    let name = country.common_name().to_string();
    RegionCard {
        flag_url: flag_url(country),
        flag_alt: format!("{name} flag"),
        caption: or_not_available(country.first_capital()),
        name,
    }
}

fn flag_url(country: &Country) -> String {
    country.flags.png.clone().unwrap_or_default()
}

fn region_with_subregion(country: &Country) -> String {
    match country.region.as_deref() {
        Some(region) if !region.is_empty() => format!(
            "{region} ({})",
            or_not_available(country.subregion.as_deref())
        ),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn first_native_name(country: &Country) -> String {
    country
        .name
        .native_name
        .first()
        .and_then(|(_, native)| native.common.clone())
        .unwrap_or_default()
}

fn languages(country: &Country) -> String {
    if country.languages.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    country
        .languages
        .iter()
        .map(|(_, name)| name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn currency(country: &Country) -> String {
    match country.currencies.first() {
        Some((code, details)) => format!(
            "{} ({})",
            details.name,
            details
                .symbol
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(code)
        ),
        None => NOT_AVAILABLE.to_string(),
    }
}
