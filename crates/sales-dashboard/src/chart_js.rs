//! Chart.js bindings
//! Expects the global `Chart` class (loaded by index.html)

use leptos::html;
use leptos::prelude::{GetUntracked, NodeRef};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::chart::{BarChartConfig, ChartError, ChartHandle, ChartRenderer};

#[wasm_bindgen]
extern "C" {
    /// A Chart.js chart instance
    pub type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(context: &CanvasRenderingContext2d, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(method, js_name = destroy)]
    fn destroy_instance(this: &Chart);
}

impl ChartHandle for Chart {
    fn destroy(&self) {
        self.destroy_instance();
    }
}

/// Renders onto the dashboard `<canvas>` once it is mounted
#[derive(Clone, Copy)]
pub struct ChartJsRenderer {
    canvas: NodeRef<html::Canvas>,
}

impl ChartJsRenderer {
    pub fn new(canvas: NodeRef<html::Canvas>) -> Self {
        Self { canvas }
    }
}

impl ChartRenderer for ChartJsRenderer {
    type Handle = Chart;

    fn render(&self, config: &BarChartConfig) -> Result<Chart, ChartError> {
        let canvas = self.canvas.get_untracked().ok_or(ChartError::MissingCanvas)?;

        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(ChartError::NoContext)?;

        let config = js_sys::JSON::parse(&config.to_json()?).map_err(|e| ChartError::Library(format!("{:?}", e)))?;

        Chart::new(&context, &config).map_err(|e| ChartError::Library(format!("{:?}", e)))
    }
}
