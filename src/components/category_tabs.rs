//! Category Tabs Component
//!
//! Category filter buttons, "All" first.

use leptos::prelude::*;

use crate::models::{Category, CategoryFilter};

/// Filter options in display order
pub fn filter_options() -> Vec<CategoryFilter> {
    std::iter::once(CategoryFilter::All)
        .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
        .collect()
}

#[component]
pub fn CategoryTabs(
    selected: ReadSignal<CategoryFilter>,
    on_change: Callback<CategoryFilter>,
) -> impl IntoView {
    view! {
        <div class="category-tabs">
            {filter_options().into_iter().map(|option| {
                let label = option.label().to_string();
                let current = option.clone();
                let is_selected = move || selected.get() == current;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "category-tab active" } else { "category-tab" }
                        on:click=move |_| on_change.run(option.clone())
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
