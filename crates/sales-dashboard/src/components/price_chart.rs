use leptos::html;
use leptos::prelude::*;

/// Canvas the price-range chart is drawn on
#[component]
pub fn PriceChart(canvas: NodeRef<html::Canvas>) -> impl IntoView {
    view! {
        <canvas id="priceChart" node_ref=canvas></canvas>
    }
}
