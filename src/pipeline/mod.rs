//! Search pipelines.
//!
//! A search runs at most two sequential requests: the country lookup, then the
//! region lookup. [`SearchSession`] drives both strategies and owns the view.
//!
//! Searches may overlap (interactive mode spawns each one as a task). Every
//! search takes a new generation number and only mutates the view while that
//! number is still the latest, so a slow earlier search can never overwrite a
//! newer result.

pub mod exact;
pub mod fuzzy;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::Mutex;

use crate::api::CountrySource;
use crate::config::SearchMode;
use crate::error_handling::{LookupError, SearchStats};
use crate::render::{CountryView, DetailPanel, RegionListing};

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Details were shown; `region_cards` cards were listed (0 when the
    /// listing was skipped).
    Displayed { country: String, region_cards: usize },
    /// The search failed and its message was shown.
    Failed(LookupError),
    /// A newer search started before this one finished; nothing more was shown.
    Superseded,
}

impl SearchOutcome {
    pub fn is_displayed(&self) -> bool {
        matches!(self, SearchOutcome::Displayed { .. })
    }
}

/// The message shown to the user for `error` in `mode`.
pub fn user_message(mode: SearchMode, error: &LookupError) -> &'static str {
    match (mode, error) {
        (_, LookupError::EmptyQuery) => "Please enter a country name",
        (SearchMode::Exact, LookupError::NotFound) => "Country not found",
        (SearchMode::Exact, LookupError::ServiceUnavailable(_)) => "Failed to fetch country data",
        (SearchMode::Fuzzy, _) => {
            "Country not found or service unavailable. Please try again later."
        }
    }
}

/// Runs searches against a [`CountrySource`] and renders into a [`CountryView`].
///
/// Clones share the source, view, generation counter and statistics, so a
/// clone can be moved into a spawned task.
pub struct SearchSession<S, V> {
    source: Arc<S>,
    view: Arc<Mutex<V>>,
    generation: Arc<AtomicU64>,
    stats: Arc<SearchStats>,
    mode: SearchMode,
}

impl<S, V> Clone for SearchSession<S, V> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            view: Arc::clone(&self.view),
            generation: Arc::clone(&self.generation),
            stats: Arc::clone(&self.stats),
            mode: self.mode,
        }
    }
}

impl<S, V> SearchSession<S, V>
where
    S: CountrySource,
    V: CountryView,
{
    pub fn new(source: S, view: V, mode: SearchMode) -> Self {
        Self {
            source: Arc::new(source),
            view: Arc::new(Mutex::new(view)),
            generation: Arc::new(AtomicU64::new(0)),
            stats: Arc::new(SearchStats::new()),
            mode,
        }
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
    }

    pub fn view(&self) -> &Arc<Mutex<V>> {
        &self.view
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Runs the full pipeline for `raw_query` in the session's mode.
    pub async fn search(&self, raw_query: &str) -> SearchOutcome {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.stats.record_started();

        let outcome = self.run(token, raw_query.trim()).await;
        match &outcome {
            SearchOutcome::Displayed { .. } => self.stats.record_displayed(),
            SearchOutcome::Failed(e) => self.stats.record_failure(e.kind()),
            SearchOutcome::Superseded => self.stats.record_superseded(),
        }
        outcome
    }

    /// Re-runs the pipeline for the `position`-th (1-based) card of the
    /// listing currently shown. Returns `None` if there is no such card.
    pub async fn open_card(&self, position: usize) -> Option<SearchOutcome> {
        let query = {
            let view = self.view.lock().await;
            view.region_listing()
                .and_then(|listing| listing.card(position))
                .map(|card| card.query().to_string())
        }?;
        Some(self.search(&query).await)
    }

    async fn run(&self, token: u64, query: &str) -> SearchOutcome {
        if query.is_empty() {
            return self.fail(token, LookupError::EmptyQuery).await;
        }
        if !self.render(token, |view| view.reset()).await {
            return SearchOutcome::Superseded;
        }

        info!("Searching '{}' ({} mode)", query, self.mode);
        let resolved = match self.mode {
            SearchMode::Exact => exact::resolve(self.source.as_ref(), query).await,
            SearchMode::Fuzzy => fuzzy::resolve(self.source.as_ref(), query).await,
        };
        let country = match resolved {
            Ok(country) => country,
            Err(e) => return self.fail(token, e).await,
        };

        let panel = DetailPanel::new(&country, self.mode);
        if !self.render(token, |view| view.show_details(&panel)).await {
            return SearchOutcome::Superseded;
        }

        let region = match country.region.as_deref().filter(|r| !r.is_empty()) {
            Some(region) => region,
            None if self.mode == SearchMode::Fuzzy => {
                return SearchOutcome::Displayed {
                    country: panel.name,
                    region_cards: 0,
                };
            }
            None => return self.fail(token, LookupError::NotFound).await,
        };

        let members = match self.source.by_region(region).await {
            Ok(members) => members,
            Err(e) => return self.fail(token, e).await,
        };
        if members.is_empty() && self.mode == SearchMode::Fuzzy {
            return SearchOutcome::Displayed {
                country: panel.name,
                region_cards: 0,
            };
        }

        let listing = RegionListing::new(&panel.name, &panel.region, &members, self.mode);
        if !self.render(token, |view| view.show_region(&listing)).await {
            return SearchOutcome::Superseded;
        }

        SearchOutcome::Displayed {
            country: panel.name,
            region_cards: listing.cards.len(),
        }
    }

    /// Applies `f` to the view if `token` is still the latest search.
    async fn render<F: FnOnce(&mut V)>(&self, token: u64, f: F) -> bool {
        let mut view = self.view.lock().await;
        if self.generation.load(Ordering::SeqCst) != token {
            debug!("Discarding render of superseded search #{}", token);
            return false;
        }
        f(&mut view);
        true
    }

    async fn fail(&self, token: u64, error: LookupError) -> SearchOutcome {
        let message = user_message(self.mode, &error);
        if !self.render(token, |view| view.show_error(message)).await {
            return SearchOutcome::Superseded;
        }
        warn!("Search #{} failed: {}", token, error);
        SearchOutcome::Failed(error)
    }
}
