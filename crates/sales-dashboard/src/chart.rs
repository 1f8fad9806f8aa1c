//! Price-range bar chart: configuration and instance lifetime
//!
//! A canvas holds at most one live chart. `ChartSlot` destroys the current
//! instance before creating the next one, whether or not creation succeeds.

use serde::Serialize;
use shared::CONFIG;
use thiserror::Error;

use crate::api::PriceBucket;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart canvas is not mounted")]
    MissingCanvas,
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("failed to serialize chart config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("chart library error: {0}")]
    Library(String),
}

/// Chart.js configuration for a single-dataset vertical bar chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChartConfig {
    #[serde(rename = "type")]
    kind: &'static str,
    data: BarData,
    options: BarOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct BarData {
    labels: Vec<String>,
    datasets: Vec<BarDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct BarDataset {
    label: &'static str,
    data: Vec<u64>,
    background_color: &'static str,
    border_color: &'static str,
    border_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct BarOptions {
    scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Scales {
    y: ValueAxis,
}

// Count axis: starts at zero, whole-number ticks
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValueAxis {
    begin_at_zero: bool,
    ticks: Ticks,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct Ticks {
    step_size: u32,
}

impl BarChartConfig {
    /// One bar per bucket, in response order
    pub fn from_buckets(buckets: &[PriceBucket]) -> Self {
        let style = &CONFIG.chart;
        Self {
            kind: "bar",
            data: BarData {
                labels: buckets.iter().map(|b| b.price_range.clone()).collect(),
                datasets: vec![BarDataset {
                    label: style.dataset_label,
                    data: buckets.iter().map(|b| b.item_count).collect(),
                    background_color: style.background_color,
                    border_color: style.border_color,
                    border_width: style.border_width,
                }],
            },
            options: BarOptions {
                scales: Scales {
                    y: ValueAxis {
                        begin_at_zero: true,
                        ticks: Ticks { step_size: 1 },
                    },
                },
            },
        }
    }

    pub fn to_json(&self) -> Result<String, ChartError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A live chart bound to a canvas
pub trait ChartHandle {
    fn destroy(&self);
}

/// Creates chart instances on the dashboard canvas
pub trait ChartRenderer {
    type Handle: ChartHandle;

    fn render(&self, config: &BarChartConfig) -> Result<Self::Handle, ChartError>;
}

/// Owner of the single chart instance on a canvas
pub struct ChartSlot<R: ChartRenderer> {
    renderer: R,
    current: Option<R::Handle>,
}

impl<R: ChartRenderer> ChartSlot<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            current: None,
        }
    }

    /// Release the current chart, then render a new one from `config`
    ///
    /// On error the slot is left empty.
    pub fn replace(&mut self, config: &BarChartConfig) -> Result<(), ChartError> {
        if let Some(old) = self.current.take() {
            old.destroy();
        }
        self.current = Some(self.renderer.render(config)?);
        Ok(())
    }
}

impl<R: ChartRenderer> Drop for ChartSlot<R> {
    fn drop(&mut self) {
        if let Some(chart) = self.current.take() {
            chart.destroy();
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    /// Renderer that tracks how many instances are alive
    #[derive(Clone, Default)]
    pub struct FakeRenderer {
        pub live: Rc<Cell<i32>>,
        pub created: Rc<Cell<u32>>,
        pub last_labels: Rc<RefCell<Vec<String>>>,
        pub fail: Rc<Cell<bool>>,
    }

    pub struct FakeChart {
        live: Rc<Cell<i32>>,
    }

    impl ChartHandle for FakeChart {
        fn destroy(&self) {
            self.live.set(self.live.get() - 1);
        }
    }

    impl ChartRenderer for FakeRenderer {
        type Handle = FakeChart;

        fn render(&self, config: &BarChartConfig) -> Result<FakeChart, ChartError> {
            if self.fail.get() {
                return Err(ChartError::Library("Chart is not defined".to_string()));
            }
            self.live.set(self.live.get() + 1);
            self.created.set(self.created.get() + 1);
            *self.last_labels.borrow_mut() = config.data.labels.clone();
            Ok(FakeChart {
                live: self.live.clone(),
            })
        }
    }
}
