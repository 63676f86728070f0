//! Register Page
//!
//! Account creation; success sends the user to the login page.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::alert::{alert, alert_failure};
use crate::api;
use crate::components::{Button, LabeledInput};
use crate::error::{Field, FieldErrors};
use crate::validation::RegisterForm;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let error_for = move |field: Field| Signal::derive(move || errors.get().get(field).map(str::to_string));
    let clear_error = move |field: Field| Callback::new(move |_| errors.update(|e| e.clear(field)));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = RegisterForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            name: name.get_untracked(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(found) => {
                log::debug!("[REGISTER] rejected client-side: {:?}", found);
                errors.set(found);
                return;
            }
        };
        errors.set(FieldErrors::default());
        busy.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::register(&request).await;
            busy.set(false);
            match result {
                Ok(reply) => {
                    log::info!("[REGISTER] {}", reply.trim());
                    alert("Sign-up complete! Taking you to the login page.");
                    navigate("/login", Default::default());
                }
                Err(e) => alert_failure("Sign-up", &e),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-header">
                    <h2>"Sign up"</h2>
                    <p>"Get started with COOKFARM!"</p>
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
                    <LabeledInput
                        label="Confirm password"
                        name="confirm-password"
                        input_type="password"
                        placeholder="******"
                        value=confirm_password
                        error=error_for(Field::ConfirmPassword)
                        on_edit=clear_error(Field::ConfirmPassword)
                    />
                    <LabeledInput
                        label="Name"
                        name="name"
                        placeholder="Jane Doe"
                        value=name
                        error=error_for(Field::Name)
                        on_edit=clear_error(Field::Name)
                    />
                    <Button button_type="submit" class="auth-submit" busy=busy>
                        "Sign up"
                    </Button>
                    <p class="auth-switch">
                        "Already have an account? "
                        <A href="/login">"Log in"</A>
                    </p>
                </form>
            </div>
        </div>
    }
}
