use serde::Serialize;

use super::state::{Fetch, Selection, SelectionChange};
use crate::holiday::{
    materialize, CalendarEvent, Country, HolidayError, HolidayRecord, Subdivision,
};

/// Everything the holiday page shows, plus the bookkeeping that keeps stale
/// responses from overwriting newer ones.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ViewState {
    pub selection: Selection,
    pub countries: Vec<Country>,
    /// Always scoped to `selection.country`.
    pub subdivisions: Vec<Subdivision>,
    pub events: Vec<CalendarEvent>,
    /// Non-fatal message shown inline, e.g. after a failed fetch.
    pub notice: Option<String>,
    #[serde(skip)]
    holiday_generation: u64,
}

impl ViewState {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    /// Applies a selection change. A country change clears the subdivision
    /// list right away so it never shows another country's entries.
    pub fn apply(&mut self, change: SelectionChange) -> Result<Vec<Fetch>, HolidayError> {
        if matches!(change, SelectionChange::Country(_)) {
            self.subdivisions.clear();
        }
        self.selection.apply(change)
    }

    pub fn set_countries(&mut self, countries: Vec<Country>) {
        self.countries = countries;
    }

    /// Stores a subdivision list if it still belongs to the selected country.
    /// Returns false when the response is stale and was dropped.
    pub fn complete_subdivision_fetch(
        &mut self,
        country_iso_code: &str,
        subdivisions: Vec<Subdivision>,
    ) -> bool {
        if !country_iso_code.eq_ignore_ascii_case(&self.selection.country) {
            return false;
        }
        self.subdivisions = subdivisions;
        true
    }

    /// Registers a new holiday request and returns its generation token.
    pub fn begin_holiday_fetch(&mut self) -> u64 {
        self.holiday_generation += 1;
        self.holiday_generation
    }

    /// Materializes the records of a finished request.
    /// Returns false when a newer request was started meanwhile.
    pub fn complete_holiday_fetch(&mut self, generation: u64, records: &[HolidayRecord]) -> bool {
        if generation != self.holiday_generation {
            return false;
        }
        self.events = materialize(records);
        true
    }

    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn selected_country(&self) -> Option<&Country> {
        self.countries
            .iter()
            .find(|c| c.iso_code.eq_ignore_ascii_case(&self.selection.country))
    }

    pub fn selected_subdivision(&self) -> Option<&Subdivision> {
        let code = self.selection.subdivision.as_deref()?;
        self.subdivisions.iter().find(|s| s.code == code)
    }
}
