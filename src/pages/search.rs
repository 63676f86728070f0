//! Search Page
//!
//! Substring search with category filter and sort order.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::alert::alert_failure;
use crate::api;
use crate::components::{CategoryTabs, ItemCard};
use crate::context::use_app_context;
use crate::inventory::{search_view, SortOrder};
use crate::models::{CategoryFilter, Item};
use crate::request::Generation;

#[component]
pub fn SearchPage() -> impl IntoView {
    let ctx = use_app_context();

    let (items, set_items) = signal(Vec::<Item>::new());
    let (term, set_term) = signal(String::new());
    let (filter, set_filter) = signal(CategoryFilter::All);
    let (order, set_order) = signal(SortOrder::Name);

    let generation = Generation::new();
    on_cleanup({
        let generation = generation.clone();
        move || generation.invalidate()
    });

    Effect::new(move |_| {
        let user = ctx.session.get();
        let ticket = generation.begin();
        let generation = generation.clone();

        let Some(user) = user else {
            set_items.set(Vec::new());
            return;
        };

        spawn_local(async move {
            let result = api::list_items(user.id).await;
            if !generation.is_current(ticket) {
                log::debug!("[SEARCH] discarding stale item list");
                return;
            }
            match result {
                Ok(loaded) => set_items.set(loaded),
                Err(e) => alert_failure("Loading items", &e),
            }
        });
    });

    let results = move || search_view(&items.get(), &filter.get(), &term.get(), order.get());

    view! {
        <div class="search-page">
            <div class="search-card">
                <h1>"Find items"</h1>

                <div class="search-controls">
                    <input
                        type="text"
                        placeholder="Search ingredients..."
                        prop:value=move || term.get()
                        on:input=move |ev| set_term.set(event_target_value(&ev))
                    />
                    <select on:change=move |ev| set_order.set(SortOrder::from_value(&event_target_value(&ev)))>
                        {SortOrder::ALL.into_iter().map(|option| view! {
                            <option value=option.as_value() selected=move || order.get() == option>
                                {option.label()}
                            </option>
                        }).collect_view()}
                    </select>
                </div>

                <CategoryTabs
                    selected=filter
                    on_change=Callback::new(move |next| set_filter.set(next))
                />

                <Show
                    when=move || !results().is_empty()
                    fallback=|| view! { <div class="empty-state">"No items match your search."</div> }
                >
                    <div class="item-grid">
                        <For
                            each=results
                            key=|item| item.id
                            children=move |item| view! { <ItemCard item=item /> }
                        />
                    </div>
                </Show>
            </div>
        </div>
    }
}
