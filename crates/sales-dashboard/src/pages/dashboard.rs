use std::rc::Rc;

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::CONFIG;

use crate::api::{GlooClient, Transaction};
use crate::chart_js::ChartJsRenderer;
use crate::components::{PriceChart, Section, StatisticsPanel, TransactionsTable};
use crate::controller::Dashboard;
use crate::diagnostics::Console;
use crate::state::Month;
use crate::surface::SignalSurface;
use crate::summary::SummaryLines;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let initial_month = Month::initial();

    let rows = RwSignal::new(Vec::<Transaction>::new());
    let summary = RwSignal::new(SummaryLines::default());
    let canvas = NodeRef::<html::Canvas>::new();

    let surface = SignalSurface::new(rows, summary, ChartJsRenderer::new(canvas));
    // Rc + JS chart handle: not Send, so keep it in local storage
    let dashboard = StoredValue::new_local(Rc::new(Dashboard::new(GlooClient, surface, Console, initial_month)));

    // Initial load: table, summary, chart
    Effect::new(move |_| {
        let dashboard = dashboard.get_value();
        spawn_local(async move { dashboard.on_load().await });
    });

    let on_previous = move |_| {
        let dashboard = dashboard.get_value();
        spawn_local(async move { dashboard.on_previous_page().await });
    };

    let on_next = move |_| {
        let dashboard = dashboard.get_value();
        spawn_local(async move { dashboard.on_next_page().await });
    };

    view! {
        <main class="max-w-[100ch] mx-auto px-4 py-8">
            <header class="mb-8 text-center">
                <h1 class="text-xl font-bold">{CONFIG.title}</h1>
            </header>

            <div class="mb-6 flex gap-4">
                <select
                    id="monthSelect"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let dashboard = dashboard.get_value();
                        spawn_local(async move { dashboard.on_month_change(&value).await });
                    }
                >
                    {Month::all()
                        .map(|month| {
                            view! {
                                <option value={month.number().to_string()} selected={month == initial_month}>
                                    {month.name()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <input
                    id="searchInput"
                    type="text"
                    placeholder="Search transactions"
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        let dashboard = dashboard.get_value();
                        spawn_local(async move { dashboard.on_search_input(text).await });
                    }
                />
            </div>

            <Section id="transactions" title="Transactions">
                <TransactionsTable rows=rows />
                <div class="mt-2 flex gap-2">
                    <button id="prevBtn" on:click=on_previous>"Previous"</button>
                    <button id="nextBtn" on:click=on_next>"Next"</button>
                </div>
            </Section>

            <Section id="statistics" title="Statistics">
                <StatisticsPanel summary=summary />
            </Section>

            <Section id="price-range" title="Price Range">
                <PriceChart canvas=canvas />
            </Section>
        </main>
    }
}
