//! Country API operations.

use holidays_core::holiday::{Country, COUNTRIES_ENDPOINT};

use super::HolidayClient;
use crate::error::Result;

impl HolidayClient {
    /// List all countries.
    pub async fn fetch_countries(&self) -> Result<Vec<Country>> {
        self.get_result(COUNTRIES_ENDPOINT, &[]).await
    }
}
