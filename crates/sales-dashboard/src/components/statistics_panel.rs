use leptos::prelude::*;

use crate::summary::SummaryLines;

#[component]
pub fn StatisticsPanel(summary: RwSignal<SummaryLines>) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <div id="totalSales">{move || summary.with(|s| s.total_sales.clone())}</div>
            <div id="soldItems">{move || summary.with(|s| s.sold_items.clone())}</div>
            <div id="unsoldItems">{move || summary.with(|s| s.unsold_items.clone())}</div>
        </div>
    }
}
