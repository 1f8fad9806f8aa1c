mod http;
mod price_chart;
mod statistics;
mod transactions;

pub use http::{FetchError, GlooClient, HttpClient};
pub use price_chart::{PriceBucket, fetch_price_chart, price_chart_url};
pub use statistics::{Statistics, fetch_statistics, statistics_url};
pub use transactions::{Transaction, fetch_transactions, transactions_url};
