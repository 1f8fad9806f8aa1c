mod price_chart;
mod section;
mod statistics_panel;
mod transactions_table;

pub use price_chart::PriceChart;
pub use section::Section;
pub use statistics_panel::StatisticsPanel;
pub use transactions_table::TransactionsTable;
