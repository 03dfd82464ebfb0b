//! MOEX ISS API client
//!
//! ISS is the exchange's public information/statistics service. Bond data
//! lives under `engines/stock/markets/bonds`; every response is a set of
//! named tables shaped as parallel `columns`/`data` arrays. No
//! authentication is required.

use crate::config::ScreenerConfig;
use crate::error::{Result, ScreenerError};
use crate::filter;
use crate::model::{BondRecord, FilterCriteria};
use crate::normalize::{self, IssPayload, IssTable};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use reqwest::Client;

/// Data source seam consumed by the bot layer
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BondDataSource: Send + Sync {
    /// Fetch candidates for the criteria and apply every present criterion
    async fn search_bonds(&self, criteria: &FilterCriteria) -> Result<Vec<BondRecord>>;

    /// Look up a single bond by its ticker identifier
    async fn bond_by_ticker(&self, ticker: &str) -> Result<Option<BondRecord>>;
}

/// MOEX ISS client
#[derive(Debug, Clone)]
pub struct IssClient {
    client: Client,
    config: ScreenerConfig,
}

impl IssClient {
    /// Create a new ISS client with the configured request timeout
    pub fn new(config: ScreenerConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { client, config })
    }

    /// Build provider query parameters from filter criteria.
    ///
    /// Absent criteria are omitted entirely. `years_to_maturity` expands to
    /// a calendar-naive maturity window of 365 days per year starting
    /// today; zero years adds no window. `iss.meta=off` is appended at
    /// request time, not here.
    pub fn query_params(criteria: &FilterCriteria) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(rating) = &criteria.credit_rating {
            params.push(("creditrating".to_string(), rating.to_uppercase()));
        }
        if let Some(min_coupon) = criteria.min_coupon_percent {
            params.push(("couponvalue_ge".to_string(), min_coupon.to_string()));
        }
        if let Some(min_yield) = criteria.min_effective_yield {
            params.push(("yieldtomaturity_ge".to_string(), min_yield.to_string()));
        }
        if let Some(years) = criteria.years_to_maturity {
            if years > 0 {
                let from = Utc::now().date_naive();
                let to = from + Duration::days(365 * i64::from(years));
                params.push((
                    "matdate_from".to_string(),
                    from.format("%Y-%m-%d").to_string(),
                ));
                params.push(("matdate_to".to_string(), to.format("%Y-%m-%d").to_string()));
            }
        }

        params
    }

    /// Fetch the bond listing with server-side filter parameters applied
    pub async fn fetch_filtered(&self, criteria: &FilterCriteria) -> Result<Vec<BondRecord>> {
        let url = format!(
            "{}/engines/stock/markets/bonds/securities.json",
            self.config.base_url
        );
        let params = Self::query_params(criteria);
        let payload = self.get_payload(&url, &params).await?;

        Ok(payload
            .get("securities")
            .map(IssTable::records)
            .unwrap_or_default())
    }

    /// Fetch the full (or board-scoped) listing with yield data merged in.
    ///
    /// This is the fetch-all path for criteria the provider cannot filter
    /// server-side: `marketdata_yields` supplies `effectiveyield` and
    /// `duration`, merged bare by `secid`.
    pub async fn fetch_listing(&self, board: Option<&str>) -> Result<Vec<BondRecord>> {
        let url = match board {
            Some(board) => format!(
                "{}/engines/stock/markets/bonds/boards/{board}/securities.json",
                self.config.base_url
            ),
            None => format!(
                "{}/engines/stock/markets/bonds/securities.json",
                self.config.base_url
            ),
        };
        let payload = self.get_payload(&url, &[]).await?;

        let mut records = payload
            .get("securities")
            .map(IssTable::records)
            .unwrap_or_default();
        if let Some(yields) = payload.get("marketdata_yields") {
            normalize::merge_aux_table(&mut records, yields, None);
        }

        Ok(records)
    }

    /// Fetch one bond by ticker, merging market data and yields into the
    /// primary record. `Ok(None)` when the provider knows no such security.
    pub async fn fetch_bond(&self, ticker: &str) -> Result<Option<BondRecord>> {
        let ticker = ticker.trim();
        if ticker.is_empty() || !ticker.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ScreenerError::InvalidTicker(ticker.to_string()));
        }

        let url = format!(
            "{}/engines/stock/markets/bonds/securities/{ticker}.json",
            self.config.base_url
        );
        let payload = self.get_payload(&url, &[]).await?;

        let Some(mut record) = payload.get("securities").and_then(IssTable::first_record)
        else {
            return Ok(None);
        };

        if let Some(marketdata) = payload.get("marketdata") {
            if let Some(row) = marketdata.data.first() {
                record.merge_row(&marketdata.columns, row, Some("marketdata"));
            }
        }
        if let Some(yields) = payload.get("marketdata_yields") {
            if let Some(row) = yields.data.first() {
                record.merge_row(&yields.columns, row, Some("yields"));
            }
        }

        Ok(Some(record))
    }

    async fn get_payload(&self, url: &str, params: &[(String, String)]) -> Result<IssPayload> {
        tracing::debug!(url, "requesting ISS payload");

        let response = self
            .client
            .get(url)
            .query(&[("iss.meta", "off")])
            .query(params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ScreenerError::ApiError(format!(
                "ISS request failed: {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl BondDataSource for IssClient {
    async fn search_bonds(&self, criteria: &FilterCriteria) -> Result<Vec<BondRecord>> {
        let candidates = if criteria.needs_listing() {
            self.fetch_listing(self.config.board.as_deref()).await?
        } else {
            self.fetch_filtered(criteria).await?
        };

        // Server-side parameters narrow the candidate set; the filter
        // engine remains authoritative for every criterion.
        Ok(filter::apply(candidates, criteria))
    }

    async fn bond_by_ticker(&self, ticker: &str) -> Result<Option<BondRecord>> {
        self.fetch_bond(ticker).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_alone_yields_exactly_one_uppercased_param() {
        let criteria = FilterCriteria {
            credit_rating: Some("aaa".to_string()),
            ..Default::default()
        };

        let params = IssClient::query_params(&criteria);

        assert_eq!(params, vec![("creditrating".to_string(), "AAA".to_string())]);
    }

    #[test]
    fn test_empty_criteria_yield_no_params() {
        assert!(IssClient::query_params(&FilterCriteria::default()).is_empty());
    }

    #[test]
    fn test_maturity_window_spans_365_days_per_year() {
        let criteria = FilterCriteria {
            years_to_maturity: Some(2),
            ..Default::default()
        };

        let params = IssClient::query_params(&criteria);

        let from = params
            .iter()
            .find(|(k, _)| k == "matdate_from")
            .map(|(_, v)| v.clone())
            .expect("lower bound present");
        let to = params
            .iter()
            .find(|(k, _)| k == "matdate_to")
            .map(|(_, v)| v.clone())
            .expect("upper bound present");

        let today = Utc::now().date_naive();
        assert_eq!(from, today.format("%Y-%m-%d").to_string());
        assert_eq!(
            to,
            (today + Duration::days(730)).format("%Y-%m-%d").to_string()
        );
    }

    #[test]
    fn test_zero_years_adds_no_window() {
        let criteria = FilterCriteria {
            years_to_maturity: Some(0),
            ..Default::default()
        };

        assert!(IssClient::query_params(&criteria).is_empty());
    }

    #[test]
    fn test_numeric_thresholds_map_to_ge_params() {
        let criteria = FilterCriteria {
            min_coupon_percent: Some(8.0),
            min_effective_yield: Some(12.5),
            ..Default::default()
        };

        let params = IssClient::query_params(&criteria);

        assert_eq!(params.len(), 2);
        assert!(params.contains(&("couponvalue_ge".to_string(), "8".to_string())));
        assert!(params.contains(&("yieldtomaturity_ge".to_string(), "12.5".to_string())));
    }

    #[test]
    fn test_rejects_malformed_ticker() {
        let client = IssClient::new(ScreenerConfig::default()).expect("client");
        let result = tokio_test::block_on(client.fetch_bond("../etc"));
        assert!(matches!(result, Err(ScreenerError::InvalidTicker(_))));
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_fetch_listing() {
        let client = IssClient::new(ScreenerConfig::default()).expect("client");
        let records = client.fetch_listing(Some("TQCB")).await.expect("listing");

        assert!(!records.is_empty());
        assert!(records.iter().all(|r| r.secid.is_some()));
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_fetch_bond_unknown_ticker() {
        let client = IssClient::new(ScreenerConfig::default()).expect("client");
        let record = client.fetch_bond("ZZZZZZ999999").await.expect("fetch");
        assert!(record.is_none());
    }
}
