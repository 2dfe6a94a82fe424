//! Selection controller: runs the fetch plans of the holiday page.
//!
//! The controller is the imperative shell around [`ViewState`]. It performs
//! the fetches a selection change requires, one after another, and turns any
//! failure into an inline notice instead of returning it.

use std::path::{Path, PathBuf};

use holidays_core::selection::{Fetch, Selection, SelectionChange, ViewState};

use crate::error::{ClientError, Result};
use crate::export::{export_events, ExportFormat};
use crate::source::HolidaySource;

/// The holiday page: current selection, fetched lists and events.
pub struct HolidayApp<S> {
    source: S,
    view: ViewState,
}

impl<S: HolidaySource> HolidayApp<S> {
    pub fn new(source: S, selection: Selection) -> Self {
        Self {
            source,
            view: ViewState::new(selection),
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Initial load: countries, then subdivisions and holidays for the
    /// starting selection.
    pub async fn load(&mut self) {
        self.view.clear_notice();

        match self.source.countries().await {
            Ok(countries) => {
                tracing::info!(count = countries.len(), "Loaded countries");
                self.view.set_countries(countries);
            }
            Err(err) => {
                self.report(err);
                return;
            }
        }

        self.refresh().await;
    }

    /// Re-fetches subdivisions and holidays for the current selection.
    pub async fn refresh(&mut self) {
        match self.view.selection.refresh_plan() {
            Ok(plan) => self.run(plan).await,
            Err(err) => self.report(err.into()),
        }
    }

    pub async fn select_country(&mut self, iso_code: impl Into<String>) {
        self.change(SelectionChange::Country(iso_code.into())).await;
    }

    /// `None` (or an empty code) selects all subdivisions.
    pub async fn select_subdivision(&mut self, code: Option<String>) {
        self.change(SelectionChange::Subdivision(code)).await;
    }

    pub async fn set_public_holidays(&mut self, include: bool) {
        self.change(SelectionChange::PublicHolidays(include)).await;
    }

    pub async fn set_school_holidays(&mut self, include: bool) {
        self.change(SelectionChange::SchoolHolidays(include)).await;
    }

    /// Writes the export-year events to `dir`. Returns the written path, or
    /// None after recording the failure as the notice.
    pub fn export(&mut self, format: ExportFormat, dir: &Path) -> Option<PathBuf> {
        self.view.clear_notice();
        match export_events(&self.view.events, format, dir) {
            Ok(path) => Some(path),
            Err(err) => {
                self.report(err);
                None
            }
        }
    }

    async fn change(&mut self, change: SelectionChange) {
        tracing::debug!(?change, "Selection change");
        self.view.clear_notice();

        match self.view.apply(change) {
            Ok(plan) => self.run(plan).await,
            Err(err) => self.report(err.into()),
        }
    }

    /// Executes a plan in order, stopping at the first failure.
    async fn run(&mut self, plan: Vec<Fetch>) {
        for fetch in plan {
            if let Err(err) = self.execute(fetch).await {
                self.report(err);
                return;
            }
        }
    }

    async fn execute(&mut self, fetch: Fetch) -> Result<()> {
        match fetch {
            Fetch::Subdivisions(query) => {
                let subdivisions = self.source.subdivisions(&query).await?;
                let count = subdivisions.len();
                if self
                    .view
                    .complete_subdivision_fetch(&query.country_iso_code, subdivisions)
                {
                    tracing::info!(country = %query.country_iso_code, count, "Loaded subdivisions");
                } else {
                    tracing::debug!(country = %query.country_iso_code, "Dropped stale subdivisions");
                }
            }
            Fetch::Holidays(query) => {
                let generation = self.view.begin_holiday_fetch();
                let records = self.source.holidays(&query).await?;
                if self.view.complete_holiday_fetch(generation, &records) {
                    tracing::info!(
                        country = %query.country_iso_code,
                        subdivision = ?query.subdivision_code,
                        events = self.view.events.len(),
                        "Loaded holidays"
                    );
                } else {
                    tracing::debug!(generation, "Dropped stale holidays");
                }
            }
        }
        Ok(())
    }

    fn report(&mut self, err: ClientError) {
        tracing::warn!(error = %err, "Holiday page error");
        self.view.set_notice(err.to_string());
    }
}
