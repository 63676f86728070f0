//! Detail Page
//!
//! Read-only view of one item, resolved from the local cache.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::context::use_app_context;
use crate::models::{format_date, Item};

/// Parse the `:id` route segment
pub fn parse_item_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse().ok()
}

#[component]
pub fn DetailPage() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();

    let item = Memo::new(move |_| {
        let raw = params.read().get("id");
        parse_item_id(raw.as_deref()).and_then(|id| ctx.cached_item(id))
    });

    let field = move |read: fn(&Item) -> String| move || item.get().map(|i| read(&i)).unwrap_or_default();

    view! {
        <div class="detail-page">
            <div class="detail-card">
                <h2 class="detail-title">{field(|i| i.name.clone())}</h2>
                <p><strong>"Category: "</strong>{field(|i| i.category.label().to_string())}</p>
                <p><strong>"Added: "</strong>{field(|i| format_date(i.added_date))}</p>
                <p><strong>"Expires: "</strong>{field(|i| format_date(i.expiry_date))}</p>
                <p class="detail-note"><strong>"Note: "</strong>{field(|i| i.note.clone())}</p>
                <A href="/" attr:class="btn btn-primary">"Back"</A>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item_id() {
        assert_eq!(parse_item_id(Some("12")), Some(12));
        assert_eq!(parse_item_id(Some("abc")), None);
        assert_eq!(parse_item_id(None), None);
    }
}
