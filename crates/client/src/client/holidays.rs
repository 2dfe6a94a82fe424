//! Holiday API operations.

use holidays_core::holiday::{HolidayQuery, HolidayRecord, HOLIDAYS_ENDPOINT};

use super::HolidayClient;
use crate::error::Result;

impl HolidayClient {
    /// List holidays for a country over the fixed query window.
    ///
    /// An empty country code fails with `MissingSelection` before any request
    /// is sent.
    pub async fn fetch_holidays(
        &self,
        country_iso_code: &str,
        subdivision_code: Option<&str>,
        include_public: bool,
        include_school: bool,
    ) -> Result<Vec<HolidayRecord>> {
        let query = HolidayQuery::new(
            country_iso_code,
            subdivision_code,
            include_public,
            include_school,
        )?;
        self.fetch_holidays_query(&query).await
    }

    pub async fn fetch_holidays_query(&self, query: &HolidayQuery) -> Result<Vec<HolidayRecord>> {
        let records: Vec<HolidayRecord> =
            self.get_result(HOLIDAYS_ENDPOINT, &query.to_params()).await?;
        tracing::debug!(
            query = %query.to_query_string(),
            count = records.len(),
            "Fetched holidays"
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use chrono::NaiveDate;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn holiday_body() -> serde_json::Value {
        serde_json::json!({
            "result": [
                { "name": "Neujahr", "startDate": "2024-01-01", "endDate": "2024-01-01" },
                { "name": "Osterferien", "startDate": "2024-03-25T00:00:00", "endDate": "2024-04-06T00:00:00" }
            ]
        })
    }

    /// Values of a query parameter across the single received request.
    async fn received_values(server: &MockServer, key: &str) -> Vec<String> {
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        requests[0]
            .url
            .query_pairs()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
            .collect()
    }

    #[tokio::test]
    async fn test_fetch_holidays_query_contract() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/getholiday"))
            .and(query_param("CountryIsoCode", "DE"))
            .and(query_param("ValidFrom", "2024-01-01"))
            .and(query_param("ValidTo", "2025-12-31"))
            .and(query_param("SubdivisionCode", "DE-BY"))
            .respond_with(ResponseTemplate::new(200).set_body_json(holiday_body()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HolidayClient::new(mock_server.uri());
        let records = client
            .fetch_holidays("DE", Some("DE-BY"), true, true)
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[1].end_date,
            NaiveDate::from_ymd_opt(2024, 4, 6).unwrap()
        );
        assert_eq!(
            received_values(&mock_server, "HolidayType").await,
            vec!["0".to_string(), "1".to_string()]
        );
    }

    #[tokio::test]
    async fn test_fetch_holidays_school_only() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/getholiday"))
            .respond_with(ResponseTemplate::new(200).set_body_json(holiday_body()))
            .mount(&mock_server)
            .await;

        let client = HolidayClient::new(mock_server.uri());
        client.fetch_holidays("DE", None, false, true).await.unwrap();

        assert_eq!(
            received_values(&mock_server, "HolidayType").await,
            vec!["1".to_string()]
        );
        assert!(received_values(&mock_server, "SubdivisionCode")
            .await
            .is_empty());
    }

    #[tokio::test]
    async fn test_fetch_holidays_no_filters_sends_no_type() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/getholiday"))
            .respond_with(ResponseTemplate::new(200).set_body_json(holiday_body()))
            .mount(&mock_server)
            .await;

        let client = HolidayClient::new(mock_server.uri());
        client.fetch_holidays("DE", None, false, false).await.unwrap();

        assert!(received_values(&mock_server, "HolidayType")
            .await
            .is_empty());
    }

    #[tokio::test]
    async fn test_fetch_holidays_missing_country() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = HolidayClient::new(mock_server.uri());
        let err = client
            .fetch_holidays("", None, true, false)
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::MissingSelection));
    }

    #[tokio::test]
    async fn test_fetch_holidays_bad_date_is_decode_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/getholiday"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "result": [{ "name": "X", "startDate": "someday", "endDate": "2024-01-01" }]
            })))
            .mount(&mock_server)
            .await;

        let client = HolidayClient::new(mock_server.uri());
        let err = client
            .fetch_holidays("DE", None, true, false)
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::DecodeFailed { endpoint: "getholiday", .. }));
    }

    #[tokio::test]
    async fn test_fetch_holidays_is_idempotent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/getholiday"))
            .respond_with(ResponseTemplate::new(200).set_body_json(holiday_body()))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = HolidayClient::new(mock_server.uri());
        let first = client.fetch_holidays("DE", None, true, false).await.unwrap();
        let second = client.fetch_holidays("DE", None, true, false).await.unwrap();

        assert_eq!(
            holidays_core::holiday::materialize(&first),
            holidays_core::holiday::materialize(&second)
        );
    }
}
