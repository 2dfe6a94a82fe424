//! API request and response types for the holiday endpoints.
//!
//! Shared between the HTTP fetcher and its tests. Following the Functional Core
//! pattern, these are pure data types with no I/O.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::{EnvelopeError, HolidayError};
use super::types::HolidayType;

/// Endpoint listing all countries.
pub const COUNTRIES_ENDPOINT: &str = "getcountry";
/// Endpoint listing the subdivisions of one country.
pub const SUBDIVISIONS_ENDPOINT: &str = "getsubdivision";
/// Endpoint listing holidays for a selection.
pub const HOLIDAYS_ENDPOINT: &str = "getholiday";

/// First day of the fixed holiday query window.
pub const VALID_FROM: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 1) {
    Some(date) => date,
    None => panic!("invalid window start"),
};

/// Last day of the fixed holiday query window.
pub const VALID_TO: NaiveDate = match NaiveDate::from_ymd_opt(2025, 12, 31) {
    Some(date) => date,
    None => panic!("invalid window end"),
};

/// Query parameters for the subdivision endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubdivisionQuery {
    pub country_iso_code: String,
}

impl SubdivisionQuery {
    pub fn new(country_iso_code: impl Into<String>) -> Result<Self, HolidayError> {
        let country_iso_code = country_iso_code.into();
        if country_iso_code.trim().is_empty() {
            return Err(HolidayError::MissingSelection);
        }
        Ok(Self { country_iso_code })
    }

    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![("CountryIsoCode", self.country_iso_code.clone())]
    }
}

/// Query parameters for the holiday endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayQuery {
    pub country_iso_code: String,
    pub subdivision_code: Option<String>,
    pub include_public: bool,
    pub include_school: bool,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
}

impl HolidayQuery {
    /// Builds a query over the fixed window.
    ///
    /// An empty subdivision code is treated as "no subdivision". An empty
    /// country code is rejected, so no request is ever issued without one.
    pub fn new(
        country_iso_code: impl Into<String>,
        subdivision_code: Option<&str>,
        include_public: bool,
        include_school: bool,
    ) -> Result<Self, HolidayError> {
        let country_iso_code = country_iso_code.into();
        if country_iso_code.trim().is_empty() {
            return Err(HolidayError::MissingSelection);
        }

        Ok(Self {
            country_iso_code,
            subdivision_code: subdivision_code
                .filter(|code| !code.trim().is_empty())
                .map(str::to_string),
            include_public,
            include_school,
            valid_from: VALID_FROM,
            valid_to: VALID_TO,
        })
    }

    /// Active holiday type filters, public first.
    pub fn holiday_types(&self) -> Vec<HolidayType> {
        let mut types = Vec::with_capacity(2);
        if self.include_public {
            types.push(HolidayType::Public);
        }
        if self.include_school {
            types.push(HolidayType::School);
        }
        types
    }

    /// Ordered query parameters. `HolidayType` repeats once per active filter
    /// and is absent when both filters are off.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("CountryIsoCode", self.country_iso_code.clone()),
            ("ValidFrom", self.valid_from.format("%Y-%m-%d").to_string()),
            ("ValidTo", self.valid_to.format("%Y-%m-%d").to_string()),
        ];
        for holiday_type in self.holiday_types() {
            params.push(("HolidayType", holiday_type.code().to_string()));
        }
        if let Some(code) = &self.subdivision_code {
            params.push(("SubdivisionCode", code.clone()));
        }
        params
    }

    /// Encodes [`Self::to_params`] as a URL query string (without `?`).
    pub fn to_query_string(&self) -> String {
        encode_params(&self.to_params())
    }
}

/// Form-encodes query parameters in order.
pub fn encode_params(params: &[(&str, String)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())))
        .finish()
}

/// Error details sent alongside an unsuccessful response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorInfo {
    #[serde(default)]
    pub message: Option<String>,
}

/// The `{ result: ... }` wrapper every endpoint responds with.
///
/// Absent fields deserialize to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub result: Option<T>,
    pub success: Option<bool>,
    pub error: Option<ApiErrorInfo>,
}

impl<T> ApiEnvelope<T> {
    /// Unwraps the `result` field.
    ///
    /// A server-reported failure wins over a present result.
    pub fn into_result(self) -> Result<T, EnvelopeError> {
        if self.success == Some(false) {
            let message = self
                .error
                .and_then(|e| e.message)
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(EnvelopeError::ServerReported(message));
        }
        self.result.ok_or(EnvelopeError::MissingResult)
    }
}
