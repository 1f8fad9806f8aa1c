use serde::Deserialize;
use shared::CONFIG;

use super::{FetchError, HttpClient};
use crate::state::Month;

/// One bar of the price-range chart
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBucket {
    pub price_range: String,
    pub item_count: u64,
}

pub fn price_chart_url(month: Month) -> String {
    format!("{}{}?month={}", CONFIG.api_base, CONFIG.endpoints.price_chart, month)
}

/// Fetch item counts per price range for a month, in display order
pub async fn fetch_price_chart<C: HttpClient>(client: &C, month: Month) -> Result<Vec<PriceBucket>, FetchError> {
    client.get_json(&price_chart_url(month)).await
}
