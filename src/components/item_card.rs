//! Item Card Component
//!
//! One inventory item with edit and delete actions.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::calendar;
use crate::context::use_app_context;
use crate::models::{format_date, Item};

/// Short expiry badge text, `None` when there is no expiry date
pub fn expiry_badge(days_left: Option<i64>) -> Option<String> {
    match days_left? {
        d if d < 0 => Some("Expired".to_string()),
        0 => Some("D-Day".to_string()),
        d => Some(format!("D-{}", d)),
    }
}

/// Card for a single item; clicking it opens the detail view
///
/// Without `on_delete` the delete button is not rendered.
#[component]
pub fn ItemCard(
    item: Item,
    #[prop(optional)] on_delete: Option<Callback<i64>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let id = item.id;
    let today = calendar::today();
    let expired = item.is_expired(today);
    let badge = expiry_badge(item.days_until_expiry(today));
    let edit_target = item.clone();

    let open_detail = {
        let navigate = navigate.clone();
        move |_| navigate(&format!("/detail/{}", id), Default::default())
    };

    let edit = move |ev: MouseEvent| {
        ev.stop_propagation();
        ctx.begin_edit(edit_target.clone());
        navigate(&format!("/add?edit={}", id), Default::default());
    };

    view! {
        <div class=if expired { "item-card expired" } else { "item-card" } on:click=open_detail>
            <div class="item-card-header">
                <h3 class="item-card-title">{item.name.clone()}</h3>
                {badge.map(|text| view! { <span class="expiry-badge">{text}</span> })}
            </div>
            <p class="item-card-line">"Category: " {item.category.label().to_string()}</p>
            <p class="item-card-line">"Added: " {format_date(item.added_date)}</p>
            <p class="item-card-line">"Expires: " {format_date(item.expiry_date)}</p>
            <p class="item-card-note">{item.note.clone()}</p>
            <div class="item-card-actions">
                <button class="card-btn" on:click=edit>"Edit"</button>
                {on_delete.map(|on_delete| view! {
                    <button
                        class="card-btn"
                        on:click=move |ev: MouseEvent| {
                            ev.stop_propagation();
                            on_delete.run(id);
                        }
                    >
                        "Delete"
                    </button>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_badge() {
        assert_eq!(expiry_badge(None), None);
        assert_eq!(expiry_badge(Some(-2)), Some("Expired".to_string()));
        assert_eq!(expiry_badge(Some(0)), Some("D-Day".to_string()));
        assert_eq!(expiry_badge(Some(5)), Some("D-5".to_string()));
    }
}
