//! Add / Edit Page
//!
//! One form for both modes. Edit mode is `/add?edit={id}`; the record comes
//! from the item card's hand-off, or from the item cache after a reload.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::alert::{alert, alert_failure};
use crate::api;
use crate::components::Button;
use crate::context::use_app_context;
use crate::error::ApiError;
use crate::models::{Category, Item, ItemDraft};
use crate::pages::detail::parse_item_id;
use crate::validation::validate_item;

/// Pick the record to edit for the requested id.
///
/// The handed-over record wins when it matches; otherwise `lookup` resolves
/// the id. Without an id the form is in create mode.
pub fn resolve_editing<F>(handed: Option<Item>, requested: Option<i64>, lookup: F) -> Option<Item>
where
    F: FnOnce(i64) -> Option<Item>,
{
    let id = requested?;
    match handed {
        Some(item) if item.id == id => Some(item),
        _ => lookup(id),
    }
}

/// Select options: the known categories, plus the current one if unknown
pub fn category_options(current: &Category) -> Vec<Category> {
    let mut options = Category::ALL.to_vec();
    if !options.contains(current) {
        options.push(current.clone());
    }
    options
}

#[component]
pub fn ItemFormPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let query = use_query_map();

    let requested = parse_item_id(query.read_untracked().get("edit").as_deref());
    let editing = resolve_editing(ctx.take_editing(), requested, |id| ctx.cached_item(id));
    if let (Some(id), None) = (requested, editing.as_ref()) {
        log::warn!("[FORM] item {} not in cache, opening in create mode", id);
    }
    let editing_id = editing.as_ref().map(|item| item.id);
    let draft = editing.as_ref().map(ItemDraft::from_item).unwrap_or_default();
    let options = category_options(&draft.category);

    let name = RwSignal::new(draft.name);
    let category = RwSignal::new(draft.category);
    let added_date = RwSignal::new(draft.added_date);
    let expiry_date = RwSignal::new(draft.expiry_date);
    let note = RwSignal::new(draft.note);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(user) = ctx.current_user() else {
            alert(&ApiError::NotLoggedIn.to_string());
            return;
        };

        let draft = ItemDraft {
            name: name.get_untracked(),
            category: category.get_untracked(),
            added_date: added_date.get_untracked(),
            expiry_date: expiry_date.get_untracked(),
            note: note.get_untracked(),
        };
        let form = match validate_item(&draft) {
            Ok(form) => form,
            Err(errors) => {
                alert(errors.first().unwrap_or("Please fill in every field."));
                return;
            }
        };

        busy.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_item(id, &form).await,
                None => api::create_item(user.id, &form).await,
            };
            busy.set(false);
            match result {
                Ok(reply) => {
                    log::info!("[FORM] saved: {}", reply.trim());
                    alert(if editing_id.is_some() { "Item updated!" } else { "Item added!" });
                    navigate("/", Default::default());
                }
                Err(e) => alert_failure(if editing_id.is_some() { "Update" } else { "Add" }, &e),
            }
        });
    };

    let title = if editing_id.is_some() { "Edit item" } else { "Add item" };
    let submit_label = if editing_id.is_some() { "Save changes" } else { "Add" };

    view! {
        <div class="form-page">
            <div class="form-card">
                <h1>{title}</h1>
                <form class="item-form" on:submit=on_submit>
                    <div class="form-field">
                        <label for="name">"Name"</label>
                        <input
                            id="name"
                            type="text"
                            required
                            placeholder="Ingredient name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label for="category">"Category"</label>
                        <select
                            id="category"
                            on:change=move |ev| category.set(Category::from(event_target_value(&ev)))
                        >
                            {options.into_iter().map(|option| {
                                let value = option.as_wire().to_string();
                                let label = option.label().to_string();
                                view! {
                                    <option value=value selected=move || category.get() == option>
                                        {label}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-field">
                        <label for="added-date">"Date added"</label>
                        <input
                            id="added-date"
                            type="date"
                            required
                            prop:value=move || added_date.get()
                            on:input=move |ev| added_date.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label for="expiry-date">"Expiry date"</label>
                        <input
                            id="expiry-date"
                            type="date"
                            required
                            prop:value=move || expiry_date.get()
                            on:input=move |ev| expiry_date.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label for="note">"Note"</label>
                        <textarea
                            id="note"
                            rows="4"
                            required
                            placeholder="Anything worth remembering"
                            prop:value=move || note.get()
                            on:input=move |ev| note.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="form-actions">
                        <A href="/" attr:class="btn btn-outline">"Cancel"</A>
                        <Button button_type="submit" busy=busy>
                            {submit_label}
                        </Button>
                    </div>
                </form>
            </div>
        </div>
    }
}
