//! Labeled Input Component
//!
//! Text input with a label and an optional validation message.

use leptos::prelude::*;

#[component]
pub fn LabeledInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    value: RwSignal<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
    /// Runs on every keystroke, e.g. to clear this field's error
    #[prop(optional)] on_edit: Option<Callback<()>>,
) -> impl IntoView {
    let message = move || error.and_then(|e| e.get());
    let id = format!("field-{}", name);

    view! {
        <div class="labeled-input">
            <label for=id.clone()>{label}</label>
            <input
                id=id
                name=name
                type=input_type.unwrap_or_else(|| "text".to_string())
                placeholder=placeholder
                class=move || if message().is_some() { "input input-error" } else { "input" }
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    if let Some(on_edit) = on_edit {
                        on_edit.run(());
                    }
                }
            />
            {move || message().map(|text| view! { <span class="field-error">{text}</span> })}
        </div>
    }
}
