//! Login Page
//!
//! Email + password login; the returned user becomes the session.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::alert::{alert, alert_failure};
use crate::api;
use crate::components::{Button, LabeledInput};
use crate::context::use_app_context;
use crate::error::{Field, FieldErrors};
use crate::validation::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let error_for = move |field: Field| Signal::derive(move || errors.get().get(field).map(str::to_string));
    let clear_error = move |field: Field| Callback::new(move |_| errors.update(|e| e.clear(field)));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(FieldErrors::default());
        busy.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::login(&request).await;
            busy.set(false);
            match result {
                Ok(user) => {
                    let greeting = format!("Welcome, {}!", user.name);
                    ctx.sign_in(user);
                    alert(&greeting);
                    navigate("/", Default::default());
                }
                Err(e) => alert_failure("Login", &e),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-header">
                    <h2>"Log in"</h2>
                    <p>"Welcome to COOKFARM!"</p>
                </div>
                <form class="auth-form" on:submit=on_submit>
                    <LabeledInput
                        label="Email"
                        name="email"
                        input_type="email"
                        placeholder="your@email.com"
                        value=email
                        error=error_for(Field::Email)
                        on_edit=clear_error(Field::Email)
                    />
                    <LabeledInput
                        label="Password"
                        name="password"
                        input_type="password"
                        placeholder="******"
                        value=password
                        error=error_for(Field::Password)
                        on_edit=clear_error(Field::Password)
                    />
                    <Button button_type="submit" class="auth-submit" busy=busy>
                        "Log in"
                    </Button>
                    <p class="auth-switch">
                        "Don't have an account? "
                        <A href="/register">"Sign up"</A>
                    </p>
                </form>
            </div>
        </div>
    }
}
