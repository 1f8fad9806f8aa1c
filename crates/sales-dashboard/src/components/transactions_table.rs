use leptos::prelude::*;

use crate::api::Transaction;

/// Transactions table; the body is rebuilt whenever `rows` changes
#[component]
pub fn TransactionsTable(rows: RwSignal<Vec<Transaction>>) -> impl IntoView {
    view! {
        <table id="transactionsTable" class="w-full">
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Description"</th>
                    <th>"Price"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    rows.get()
                        .iter()
                        .map(|transaction| {
                            let [title, description, price] = transaction.cells();
                            view! {
                                <tr>
                                    <td>{title}</td>
                                    <td>{description}</td>
                                    <td>{price}</td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}
