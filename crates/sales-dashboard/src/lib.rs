//! Browser dashboard for monthly transactions, sales statistics and a
//! price-range chart, fed by three JSON endpoints.

pub mod api;
pub mod app;
pub mod chart;
pub mod chart_js;
pub mod components;
pub mod controller;
pub mod diagnostics;
pub mod pages;
pub mod state;
pub mod summary;
pub mod surface;
