use serde::{Deserialize, Serialize};

use crate::holiday::{HolidayError, HolidayQuery, SubdivisionQuery};

/// Country selected before the user picks one.
pub const DEFAULT_COUNTRY: &str = "DE";

/// The user's current choice of country, subdivision and holiday filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub country: String,
    /// None means "all subdivisions".
    pub subdivision: Option<String>,
    pub include_public: bool,
    pub include_school: bool,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTRY)
    }
}

/// A single user interaction with the selection controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    Country(String),
    Subdivision(Option<String>),
    PublicHolidays(bool),
    SchoolHolidays(bool),
}

/// A fetch the controller must perform, in plan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch {
    Subdivisions(SubdivisionQuery),
    Holidays(HolidayQuery),
}

impl Selection {
    /// Creates a selection for a country with public holidays only.
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            subdivision: None,
            include_public: true,
            include_school: false,
        }
    }

    pub fn with_subdivision(mut self, subdivision: impl Into<String>) -> Self {
        self.subdivision = Some(subdivision.into()).filter(|s: &String| !s.trim().is_empty());
        self
    }

    pub fn with_filters(mut self, include_public: bool, include_school: bool) -> Self {
        self.include_public = include_public;
        self.include_school = include_school;
        self
    }

    pub fn holiday_query(&self) -> Result<HolidayQuery, HolidayError> {
        HolidayQuery::new(
            self.country.clone(),
            self.subdivision.as_deref(),
            self.include_public,
            self.include_school,
        )
    }

    pub fn subdivision_query(&self) -> Result<SubdivisionQuery, HolidayError> {
        SubdivisionQuery::new(self.country.clone())
    }

    /// Plan for a full refresh: subdivisions of the current country, then holidays.
    pub fn refresh_plan(&self) -> Result<Vec<Fetch>, HolidayError> {
        Ok(vec![
            Fetch::Subdivisions(self.subdivision_query()?),
            Fetch::Holidays(self.holiday_query()?),
        ])
    }

    /// Applies a change and returns the fetches it requires.
    ///
    /// A country change resets the subdivision before planning, so the
    /// holiday fetch that follows never carries the old country's subdivision.
    /// The selection is updated even when planning fails.
    pub fn apply(&mut self, change: SelectionChange) -> Result<Vec<Fetch>, HolidayError> {
        match change {
            SelectionChange::Country(country) => {
                self.subdivision = None;
                self.country = country;
                self.refresh_plan()
            }
            SelectionChange::Subdivision(subdivision) => {
                self.subdivision = subdivision.filter(|s| !s.trim().is_empty());
                Ok(vec![Fetch::Holidays(self.holiday_query()?)])
            }
            SelectionChange::PublicHolidays(include) => {
                self.include_public = include;
                Ok(vec![Fetch::Holidays(self.holiday_query()?)])
            }
            SelectionChange::SchoolHolidays(include) => {
                self.include_school = include;
                Ok(vec![Fetch::Holidays(self.holiday_query()?)])
            }
        }
    }
}
