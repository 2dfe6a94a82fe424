//! Selection flags shared by the holiday commands.

use clap::Args;
use holidays_core::selection::Selection;

/// Country, subdivision and holiday type filters.
#[derive(Debug, Clone, Default, Args)]
pub struct SelectionArgs {
    /// Country ISO code (defaults to HOLIDAYS_COUNTRY, then DE).
    #[arg(long, short)]
    pub country: Option<String>,

    /// Subdivision code, e.g. DE-BY. Omit for the whole country.
    #[arg(long, short)]
    pub subdivision: Option<String>,

    /// Leave out public holidays.
    #[arg(long)]
    pub no_public: bool,

    /// Include school holidays.
    #[arg(long)]
    pub school: bool,
}

impl SelectionArgs {
    /// Builds the selection, falling back to `default_country`.
    pub fn to_selection(&self, default_country: &str) -> Selection {
        let country = self
            .country
            .clone()
            .unwrap_or_else(|| default_country.to_string());

        let mut selection = Selection::new(country).with_filters(!self.no_public, self.school);
        if let Some(code) = self.subdivision.as_deref().filter(|c| !c.is_empty()) {
            selection = selection.with_subdivision(code);
        }
        selection
    }
}
