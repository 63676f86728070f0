//! Button Component
//!
//! Styled button with a busy state.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
        }
    }
}

/// Button that disables itself and shows a spinner while `busy`
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] button_type: Option<String>,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] busy: Option<Signal<bool>>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let is_busy = move || busy.map(|b| b.get()).unwrap_or(false);
    let class = format!("{} {}", variant.class(), class);

    view! {
        <button
            type=button_type.unwrap_or_else(|| "button".to_string())
            class=move || if is_busy() { format!("{} busy", class) } else { class.clone() }
            disabled=is_busy
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            <Show when=is_busy>
                <span class="spinner"></span>
            </Show>
            <span class=move || if is_busy() { "btn-label hidden" } else { "btn-label" }>
                {children()}
            </span>
        </button>
    }
}
