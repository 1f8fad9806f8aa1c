//! Display surface backed by Leptos signals and the Chart.js canvas

use std::cell::RefCell;

use leptos::prelude::*;

use crate::api::Transaction;
use crate::chart::{BarChartConfig, ChartError, ChartSlot};
use crate::chart_js::ChartJsRenderer;
use crate::controller::DashboardSurface;
use crate::summary::SummaryLines;

pub struct SignalSurface {
    rows: RwSignal<Vec<Transaction>>,
    summary: RwSignal<SummaryLines>,
    chart: RefCell<ChartSlot<ChartJsRenderer>>,
}

impl SignalSurface {
    pub fn new(rows: RwSignal<Vec<Transaction>>, summary: RwSignal<SummaryLines>, renderer: ChartJsRenderer) -> Self {
        Self {
            rows,
            summary,
            chart: RefCell::new(ChartSlot::new(renderer)),
        }
    }
}

impl DashboardSurface for SignalSurface {
    fn replace_rows(&self, rows: Vec<Transaction>) {
        self.rows.set(rows);
    }

    fn set_summary(&self, summary: SummaryLines) {
        self.summary.set(summary);
    }

    fn replace_chart(&self, config: &BarChartConfig) -> Result<(), ChartError> {
        self.chart.borrow_mut().replace(config)
    }
}
