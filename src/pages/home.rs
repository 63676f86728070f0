//! Home Page
//!
//! The user's item list with category tabs, exact-name search, delete and
//! logout.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::alert::{alert, alert_failure, reload_page};
use crate::api;
use crate::components::{Button, ButtonVariant, CategoryTabs, ItemCard, SideMenu};
use crate::context::use_app_context;
use crate::inventory::home_view;
use crate::models::CategoryFilter;
use crate::request::Generation;
use crate::store::{store_set_items, use_app_store, AppStateStoreFields};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (filter, set_filter) = signal(CategoryFilter::All);
    let (search, set_search) = signal(String::new());
    let (menu_open, set_menu_open) = signal(false);

    let generation = Generation::new();
    on_cleanup({
        let generation = generation.clone();
        move || generation.invalidate()
    });

    // Reload on mount and whenever the session changes
    Effect::new(move |_| {
        let user = ctx.session.get();
        let ticket = generation.begin();
        let generation = generation.clone();

        let Some(user) = user else {
            store_set_items(&store, Vec::new());
            ctx.cache_items(&[]);
            return;
        };

        spawn_local(async move {
            let result = api::list_items(user.id).await;
            if !generation.is_current(ticket) {
                log::debug!("[HOME] discarding stale item list");
                return;
            }
            match result {
                Ok(items) => {
                    log::info!("[HOME] loaded {} items", items.len());
                    ctx.cache_items(&items);
                    store_set_items(&store, items);
                }
                Err(e) => alert_failure("Loading items", &e),
            }
        });
    });

    let on_delete = Callback::new(move |id: i64| {
        spawn_local(async move {
            let outcome = api::delete_item(id).await;
            let settled = {
                let items_field = store.items();
                let mut items = items_field.write();
                ctx.settle_delete(outcome, id, &mut items)
            };
            match settled {
                Ok(()) => log::info!("[HOME] deleted item {}", id),
                Err(e) => alert_failure("Delete", &e),
            }
        });
    });

    let logout = Callback::new(move |_: ()| {
        ctx.sign_out();
        alert("You have been logged out.");
        reload_page();
    });

    let visible = move || home_view(&store.items().get(), &filter.get(), &search.get());

    view! {
        <div class="home-page">
            <nav class="top-bar">
                <div class="top-bar-left">
                    <button class="menu-btn" on:click=move |_| set_menu_open.set(true)>"☰"</button>
                    <A href="/" attr:class="brand">"COOKFARM"</A>
                </div>

                <div class="top-bar-search">
                    <input
                        type="text"
                        placeholder="Enter an ingredient name"
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                </div>

                <div class="top-bar-right">
                    {move || match ctx.session.get() {
                        Some(user) => view! {
                            <span class="greeting">{format!("Hi, {}", user.name)}</span>
                            <Button variant=ButtonVariant::Outline on_click=logout>"Log out"</Button>
                        }.into_any(),
                        None => view! {
                            <A href="/login" attr:class="btn btn-outline">"Log in"</A>
                        }.into_any(),
                    }}
                </div>
            </nav>

            <SideMenu open=menu_open set_open=set_menu_open />

            <section class="content">
                <CategoryTabs
                    selected=filter
                    on_change=Callback::new(move |next| set_filter.set(next))
                />

                <Show
                    when=move || !visible().is_empty()
                    fallback=|| view! { <div class="empty-state">"No matching items."</div> }
                >
                    <div class="item-grid">
                        <For
                            each=visible
                            key=|item| item.id
                            children=move |item| view! { <ItemCard item=item on_delete=on_delete /> }
                        />
                    </div>
                </Show>
            </section>

            <A href="/add" attr:class="fab" attr:aria-label="Add item">"+"</A>
        </div>
    }
}
