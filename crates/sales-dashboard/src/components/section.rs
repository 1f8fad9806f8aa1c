use leptos::prelude::*;

/// Titled dashboard panel
#[component]
pub fn Section(#[prop(into)] id: String, #[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section id=id class="mb-8">
            <h2 class="font-bold uppercase mb-3">{title}</h2>
            <div class="pl-4 border-l border-[var(--rule)]">
                {children()}
            </div>
        </section>
    }
}
