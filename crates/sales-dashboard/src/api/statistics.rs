use serde::Deserialize;
use shared::CONFIG;

use super::{FetchError, HttpClient};
use crate::state::Month;

/// Monthly sales aggregates
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_sales: f64,
    pub sold_items: u64,
    pub unsold_items: u64,
}

pub fn statistics_url(month: Month) -> String {
    format!("{}{}?month={}", CONFIG.api_base, CONFIG.endpoints.statistics, month)
}

/// Fetch sales totals for a month
pub async fn fetch_statistics<C: HttpClient>(client: &C, month: Month) -> Result<Statistics, FetchError> {
    client.get_json(&statistics_url(month)).await
}
