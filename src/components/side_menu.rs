//! Side Menu Component
//!
//! Slide-out navigation; clicking the backdrop closes it.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

const MENU_LINKS: &[(&str, &str)] = &[
    ("/add", "Add item"),
    ("/search", "Find items"),
    ("/calendar", "Expiry calendar"),
];

#[component]
pub fn SideMenu(
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="side-menu-backdrop" on:click=move |_| set_open.set(false)>
                <nav class="side-menu" on:click=|ev: MouseEvent| ev.stop_propagation()>
                    <div class="side-menu-header">
                        <h2>"Menu"</h2>
                        <button class="side-menu-close" on:click=move |_| set_open.set(false)>"✕"</button>
                    </div>
                    <ul>
                        {MENU_LINKS.iter().map(|(path, label)| view! {
                            <li>
                                <a href=*path on:click=move |_| set_open.set(false)>{*label}</a>
                            </li>
                        }).collect_view()}
                    </ul>
                </nav>
            </div>
        </Show>
    }
}
