use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::serde::{deserialize_api_date, deserialize_id};

/// A country the holiday API knows about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Selection key, e.g. `DE`.
    pub iso_code: String,
    pub name: String,
}

impl Country {
    pub fn new(
        id: impl Into<String>,
        iso_code: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            iso_code: iso_code.into(),
            name: name.into(),
        }
    }
}

/// A subdivision (state, canton, region) scoped to a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subdivision {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Selection key, e.g. `DE-BY`.
    pub code: String,
    pub long_name: String,
}

impl Subdivision {
    pub fn new(id: impl Into<String>, code: impl Into<String>, long_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            long_name: long_name.into(),
        }
    }
}

/// A raw holiday range as returned by the API. Both dates are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayRecord {
    pub name: String,
    #[serde(deserialize_with = "deserialize_api_date")]
    pub start_date: NaiveDate,
    #[serde(deserialize_with = "deserialize_api_date")]
    pub end_date: NaiveDate,
}

impl HolidayRecord {
    pub fn new(name: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            start_date,
            end_date,
        }
    }

    /// Creates a single-day holiday.
    pub fn single_day(name: impl Into<String>, date: NaiveDate) -> Self {
        Self::new(name, date, date)
    }
}

/// Holiday category used as a query filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HolidayType {
    Public,
    School,
}

impl HolidayType {
    /// Wire value of the `HolidayType` query parameter.
    pub fn code(self) -> u8 {
        match self {
            HolidayType::Public => 0,
            HolidayType::School => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HolidayType::Public => "Public Holidays",
            HolidayType::School => "School Holidays",
        }
    }
}

/// A displayable calendar event derived from a [`HolidayRecord`].
///
/// `start` and `end` are local midnight of the record's first and last day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub title: String,
}

impl CalendarEvent {
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }

    /// Returns true if the event starts and ends on the same day.
    pub fn is_single_day(&self) -> bool {
        self.start_date() == self.end_date()
    }
}
