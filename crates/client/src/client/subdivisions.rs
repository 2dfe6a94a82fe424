//! Subdivision API operations.

use holidays_core::holiday::{Subdivision, SubdivisionQuery, SUBDIVISIONS_ENDPOINT};

use super::HolidayClient;
use crate::error::Result;

impl HolidayClient {
    /// List the subdivisions of a country.
    pub async fn fetch_subdivisions(&self, country_iso_code: &str) -> Result<Vec<Subdivision>> {
        let query = SubdivisionQuery::new(country_iso_code)?;
        self.fetch_subdivisions_query(&query).await
    }

    pub async fn fetch_subdivisions_query(
        &self,
        query: &SubdivisionQuery,
    ) -> Result<Vec<Subdivision>> {
        self.get_result(SUBDIVISIONS_ENDPOINT, &query.to_params())
            .await
    }
}
