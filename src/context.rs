//! Application Context
//!
//! Shared state provided via Leptos Context API. Pages read the session and
//! the item cache through this object and never touch local storage.

use leptos::prelude::*;

use crate::error::ApiError;
use crate::inventory::apply_delete;
use crate::models::{Item, User};
use crate::storage::LocalStore;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Logged-in user - read
    pub session: ReadSignal<Option<User>>,
    /// Logged-in user - write
    set_session: WriteSignal<Option<User>>,
    /// Record handed from an item card to the edit form
    editing: RwSignal<Option<Item>>,
}

impl AppContext {
    /// Restore the session persisted by an earlier visit
    pub fn restore() -> Self {
        let (session, set_session) = signal(LocalStore::browser().load_user());
        Self {
            session,
            set_session,
            editing: RwSignal::new(None),
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.session.get_untracked()
    }

    /// Persist and publish a freshly logged-in user
    pub fn sign_in(&self, user: User) {
        if let Err(e) = LocalStore::browser().save_user(&user) {
            log::warn!("[CTX] session not persisted: {}", e);
        }
        log::info!("[CTX] signed in as user {}", user.id);
        self.set_session.set(Some(user));
    }

    pub fn sign_out(&self) {
        if let Err(e) = LocalStore::browser().clear_user() {
            log::warn!("[CTX] session not cleared: {}", e);
        }
        log::info!("[CTX] signed out");
        self.set_session.set(None);
    }

    /// Mirror the last-fetched list into the local cache
    pub fn cache_items(&self, items: &[Item]) {
        if let Err(e) = LocalStore::browser().save_items(items) {
            log::warn!("[CTX] item cache not written: {}", e);
        }
    }

    pub fn cached_item(&self, id: i64) -> Option<Item> {
        LocalStore::browser().find_item(id)
    }

    /// Settle a delete request against `items` and the item cache
    pub fn settle_delete(
        &self,
        outcome: Result<(), ApiError>,
        id: i64,
        items: &mut Vec<Item>,
    ) -> Result<(), ApiError> {
        apply_delete(outcome, id, items, &LocalStore::browser())
    }

    /// Hand a record to the form page before navigating to `/add?edit={id}`
    pub fn begin_edit(&self, item: Item) {
        self.editing.set(Some(item));
    }

    /// Take the handed-over record, if any; the form is in create mode otherwise
    pub fn take_editing(&self) -> Option<Item> {
        let item = self.editing.get_untracked();
        if item.is_some() {
            self.editing.set(None);
        }
        item
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
