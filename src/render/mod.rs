//! Presentation of search results.
//!
//! The pipelines build [`DetailPanel`] and [`RegionListing`] values and hand
//! them to a [`CountryView`]. Views only display; they never decide what to
//! show.

mod format;
mod memory;
mod panel;
mod terminal;

pub use format::{collation_key, format_population, group_thousands};
pub use memory::MemoryView;
pub use panel::{DetailPanel, RegionCard, RegionListing};
pub use terminal::TerminalView;

/// Output boundary for a search session.
///
/// `show_error` hides any details and region listing currently shown.
pub trait CountryView: Send {
    /// Hides details, region listing and error before a new search.
    fn reset(&mut self);
    fn show_details(&mut self, panel: &DetailPanel);
    fn show_region(&mut self, listing: &RegionListing);
    fn show_error(&mut self, message: &str);
    /// The listing currently shown, if any; its cards are what can be opened.
    fn region_listing(&self) -> Option<&RegionListing>;
}
