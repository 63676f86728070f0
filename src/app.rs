//! Cookfarm Frontend App
//!
//! Root component: provides shared state and maps routes to pages.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::{ParamSegment, StaticSegment};
use reactive_stores::Store;

use crate::context::AppContext;
use crate::pages::calendar::CalendarPage;
use crate::pages::detail::DetailPage;
use crate::pages::home::HomePage;
use crate::pages::item_form::ItemFormPage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::pages::search::SearchPage;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // Session comes back from local storage before the first page renders
    provide_context(AppContext::restore());
    provide_context(Store::new(AppState::default()));

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <div class="not-found">"Page not found."</div> }>
                    <Route path=StaticSegment("") view=HomePage />
                    <Route path=StaticSegment("login") view=LoginPage />
                    <Route path=StaticSegment("register") view=RegisterPage />
                    <Route path=StaticSegment("add") view=ItemFormPage />
                    <Route path=(StaticSegment("detail"), ParamSegment("id")) view=DetailPage />
                    <Route path=StaticSegment("search") view=SearchPage />
                    <Route path=StaticSegment("calendar") view=CalendarPage />
                </Routes>
            </main>
        </Router>
    }
}
