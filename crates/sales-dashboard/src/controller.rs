//! Dashboard controller: turns page events into backend queries and hands
//! the decoded responses to the display surface.
//!
//! Every refresh is one request followed by a full replacement of its
//! display region. Overlapping requests are neither cancelled nor
//! de-duplicated; whichever response resolves last is what stays on screen.

use std::cell::{Cell, RefCell};

use thiserror::Error;

use crate::api::{
    FetchError, HttpClient, PriceBucket, Transaction, fetch_price_chart, fetch_statistics, fetch_transactions,
};
use crate::chart::{BarChartConfig, ChartError};
use crate::diagnostics::Diagnostics;
use crate::state::{Month, PageCursor};
use crate::summary::SummaryLines;

#[derive(Debug, Error)]
pub enum RefreshError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Chart(#[from] ChartError),
}

/// The three display regions the controller writes to
pub trait DashboardSurface {
    /// Replace every table row with `rows`, in order
    fn replace_rows(&self, rows: Vec<Transaction>);
    fn set_summary(&self, summary: SummaryLines);
    /// Destroy the current chart (if any) and draw a new one
    fn replace_chart(&self, config: &BarChartConfig) -> Result<(), ChartError>;
}

pub struct Dashboard<C, S, D> {
    client: C,
    surface: S,
    diagnostics: D,
    month: Cell<Month>,
    page: Cell<PageCursor>,
    search_text: RefCell<String>,
}

impl<C, S, D> Dashboard<C, S, D>
where
    C: HttpClient,
    S: DashboardSurface,
    D: Diagnostics,
{
    pub fn new(client: C, surface: S, diagnostics: D, month: Month) -> Self {
        Self {
            client,
            surface,
            diagnostics,
            month: Cell::new(month),
            page: Cell::new(PageCursor::FIRST),
            search_text: RefCell::new(String::new()),
        }
    }

    // =========================================================================
    // Refresh operations
    // =========================================================================

    /// Reload the transactions table for the current month, search and page
    pub async fn refresh_transactions(&self) {
        if let Err(e) = self.load_transactions().await {
            self.diagnostics.error("Error fetching transactions:", &e);
        }
    }

    /// Reload the sales summary lines for the current month
    pub async fn refresh_statistics(&self) {
        if let Err(e) = self.load_statistics().await {
            self.diagnostics.error("Error fetching statistics:", &e);
        }
    }

    /// Redraw the price-range chart for the current month
    pub async fn refresh_price_chart(&self) {
        if let Err(e) = self.load_price_chart().await {
            self.diagnostics.error("Error fetching price chart data:", &e);
        }
    }

    async fn load_transactions(&self) -> Result<(), RefreshError> {
        let search_text = self.search_text.borrow().clone();
        let rows = fetch_transactions(&self.client, self.month.get(), &search_text, self.page.get()).await?;
        self.surface.replace_rows(rows);
        Ok(())
    }

    async fn load_statistics(&self) -> Result<(), RefreshError> {
        let stats = fetch_statistics(&self.client, self.month.get()).await?;
        self.surface.set_summary(SummaryLines::from(&stats));
        Ok(())
    }

    async fn load_price_chart(&self) -> Result<(), RefreshError> {
        let buckets: Vec<PriceBucket> = fetch_price_chart(&self.client, self.month.get()).await?;
        self.surface.replace_chart(&BarChartConfig::from_buckets(&buckets))?;
        Ok(())
    }

    /// All three refreshes, issued in table, summary, chart order and
    /// completing independently
    async fn refresh_all(&self) {
        futures::join!(
            self.refresh_transactions(),
            self.refresh_statistics(),
            self.refresh_price_chart(),
        );
    }

    // =========================================================================
    // Page events
    // =========================================================================

    pub async fn on_load(&self) {
        self.refresh_all().await;
    }

    /// Month selector changed; `value` is the selector's raw value
    pub async fn on_month_change(&self, value: &str) {
        match value.parse::<Month>() {
            Ok(month) => {
                self.month.set(month);
                self.refresh_all().await;
            }
            Err(e) => self.diagnostics.warn(&format!("Ignoring month selection: {}", e)),
        }
    }

    /// Search box changed; fires on every keystroke
    pub async fn on_search_input(&self, text: String) {
        *self.search_text.borrow_mut() = text;
        self.refresh_transactions().await;
    }

    pub async fn on_previous_page(&self) {
        let mut page = self.page.get();
        if page.previous() {
            self.page.set(page);
            self.refresh_transactions().await;
        }
    }

    pub async fn on_next_page(&self) {
        let mut page = self.page.get();
        page.next();
        self.page.set(page);
        self.refresh_transactions().await;
    }
}
