//! Static dashboard configuration shared by the web crate

/// Static dashboard configuration
pub struct Config {
    pub title: &'static str,

    // Prefix for every API request; empty means same origin
    pub api_base: &'static str,
    pub endpoints: Endpoints,

    /// Month the selector starts on (1-12)
    pub default_month: u8,

    pub chart: ChartStyle,
}

pub struct Endpoints {
    pub transactions: &'static str,
    pub statistics: &'static str,
    pub price_chart: &'static str,
}

/// Fixed look of the price-range bar chart
pub struct ChartStyle {
    pub dataset_label: &'static str,
    pub background_color: &'static str,
    pub border_color: &'static str,
    pub border_width: u32,
}

pub static CONFIG: Config = Config {
    title: "Transactions Dashboard",

    api_base: match option_env!("DASHBOARD_API_BASE") {
        Some(base) => base,
        None => "",
    },

    endpoints: Endpoints {
        transactions: "/api/transactions",
        statistics: "/api/statistics",
        price_chart: "/api/pricechart",
    },

    default_month: 3,

    chart: ChartStyle {
        dataset_label: "Number of Items",
        background_color: "rgba(54, 162, 235, 0.6)",
        border_color: "rgba(54, 162, 235, 1)",
        border_width: 1,
    },
};
