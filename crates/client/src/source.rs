//! The seam between the selection controller and where holiday data comes from.

use async_trait::async_trait;
use holidays_core::holiday::{Country, HolidayQuery, HolidayRecord, Subdivision, SubdivisionQuery};

use crate::client::HolidayClient;
use crate::error::Result;

/// A source of countries, subdivisions and holiday records.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    async fn countries(&self) -> Result<Vec<Country>>;

    async fn subdivisions(&self, query: &SubdivisionQuery) -> Result<Vec<Subdivision>>;

    async fn holidays(&self, query: &HolidayQuery) -> Result<Vec<HolidayRecord>>;
}

#[async_trait]
impl HolidaySource for HolidayClient {
    async fn countries(&self) -> Result<Vec<Country>> {
        self.fetch_countries().await
    }

    async fn subdivisions(&self, query: &SubdivisionQuery) -> Result<Vec<Subdivision>> {
        self.fetch_subdivisions_query(query).await
    }

    async fn holidays(&self, query: &HolidayQuery) -> Result<Vec<HolidayRecord>> {
        self.fetch_holidays_query(query).await
    }
}
