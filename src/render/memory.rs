//! In-memory view.
//!
//! Keeps exactly what a screen would show. Used by headless callers and by the
//! tests to observe what a search rendered.

use super::panel::{DetailPanel, RegionListing};
use super::CountryView;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryView {
    pub details: Option<DetailPanel>,
    pub region: Option<RegionListing>,
    pub error: Option<String>,
    /// Number of render calls received, including resets.
    pub updates: usize,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn displayed_name(&self) -> Option<&str> {
        self.details.as_ref().map(|d| d.name.as_str())
    }

    pub fn region_names(&self) -> Vec<&str> {
        self.region
            .as_ref()
            .map(|r| r.cards.iter().map(|c| c.name.as_str()).collect())
            .unwrap_or_default()
    }
}

impl CountryView for MemoryView {
    fn reset(&mut self) {
        self.details = None;
        self.region = None;
        self.error = None;
        self.updates += 1;
    }

    fn show_details(&mut self, panel: &DetailPanel) {
        self.details = Some(panel.clone());
        self.updates += 1;
    }

    fn show_region(&mut self, listing: &RegionListing) {
        self.region = Some(listing.clone());
        self.updates += 1;
    }

    fn show_error(&mut self, message: &str) {
        self.details = None;
        self.region = None;
        self.error = Some(message.to_string());
        self.updates += 1;
    }

    fn region_listing(&self) -> Option<&RegionListing> {
        self.region.as_ref()
    }
}
