//! Terminal view.

use std::io::Write;

use colored::*;
use log::warn;

use super::panel::{DetailPanel, RegionListing};
use super::CountryView;

/// Writes panels to a terminal (or any writer) as colored text.
///
/// Region cards are numbered from 1 so they can be selected with `:open N`.
/// The last listing is kept for that purpose and cleared on reset and error.
pub struct TerminalView<W: Write + Send> {
    out: W,
    listing: Option<RegionListing>,
}

impl TerminalView<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out, listing: None }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_details(&mut self, panel: &DetailPanel) -> std::io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", panel.name.bold())?;
        if let Some(native) = panel.native_name.as_deref().filter(|n| !n.is_empty()) {
            writeln!(self.out, "  {}", native.italic())?;
        }
        let rows = [
            ("Flag", format!("{} ({})", panel.flag_url, panel.flag_alt)),
            ("Capital", panel.capital.clone()),
            ("Region", panel.region.clone()),
            ("Population", panel.population.clone()),
            ("Languages", panel.languages.clone()),
            ("Currency", panel.currency.clone()),
        ];
        for (label, value) in rows {
            writeln!(self.out, "  {:<11} {}", format!("{label}:").cyan(), value)?;
        }
        self.out.flush()
    }

    fn write_region(&mut self, listing: &RegionListing) -> std::io::Result<()> {
        writeln!(self.out)?;
        if let Some(title) = &listing.title {
            writeln!(self.out, "{}", title.bold())?;
        }
        for (i, card) in listing.cards.iter().enumerate() {
            writeln!(
                self.out,
                "  {:>3}. {}  {}",
                (i + 1).to_string().yellow(),
                card.name,
                card.caption.dimmed()
            )?;
        }
        self.out.flush()
    }

    fn write_error(&mut self, message: &str) -> std::io::Result<()> {
        writeln!(self.out, "{}", message.red())?;
        self.out.flush()
    }
}

impl<W: Write + Send> CountryView for TerminalView<W> {
    fn reset(&mut self) {
        self.listing = None;
    }

    fn show_details(&mut self, panel: &DetailPanel) {
        if let Err(e) = self.write_details(panel) {
            warn!("Failed to write country details: {}", e);
        }
    }

    fn show_region(&mut self, listing: &RegionListing) {
        if let Err(e) = self.write_region(listing) {
            warn!("Failed to write region listing: {}", e);
        }
        self.listing = Some(listing.clone());
    }

    fn show_error(&mut self, message: &str) {
        self.listing = None;
        if let Err(e) = self.write_error(message) {
            warn!("Failed to write error message: {}", e);
        }
    }

    fn region_listing(&self) -> Option<&RegionListing> {
        self.listing.as_ref()
    }
}
