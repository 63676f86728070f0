//! Local Storage Access
//!
//! The only module that touches `window.localStorage`. Holds the session
//! (`currentUser`) and the last-fetched item list (`products`).

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;
use crate::models::{Item, User};

pub const CURRENT_USER_KEY: &str = "currentUser";
pub const PRODUCTS_KEY: &str = "products";

/// String key-value backend
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write { key: key.to_string(), reason: format!("{:?}", e) })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Write { key: key.to_string(), reason: format!("{:?}", e) })
    }
}

/// Typed view over a key-value backend
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore<S> {
    backend: S,
}

impl LocalStore<BrowserStorage> {
    pub fn browser() -> Self {
        Self { backend: BrowserStorage }
    }
}

impl<S: KeyValueStore> LocalStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.backend.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("[STORAGE] ignoring unreadable `{}`: {}", key, e);
                None
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)
            .map_err(|e| StorageError::Encode { key: key.to_string(), reason: e.to_string() })?;
        self.backend.set(key, &raw)
    }

    // ========================
    // Session
    // ========================

    pub fn load_user(&self) -> Option<User> {
        self.read(CURRENT_USER_KEY)
    }

    pub fn save_user(&self, user: &User) -> Result<(), StorageError> {
        self.write(CURRENT_USER_KEY, user)
    }

    pub fn clear_user(&self) -> Result<(), StorageError> {
        self.backend.remove(CURRENT_USER_KEY)
    }

    // ========================
    // Item cache
    // ========================

    pub fn load_items(&self) -> Vec<Item> {
        self.read(PRODUCTS_KEY).unwrap_or_default()
    }

    pub fn save_items(&self, items: &[Item]) -> Result<(), StorageError> {
        self.write(PRODUCTS_KEY, items)
    }

    /// Resolve one item from the cache without a network round trip
    pub fn find_item(&self, id: i64) -> Option<Item> {
        self.load_items().into_iter().find(|item| item.id == id)
    }

    /// Drop one id from the cache, leaving everything else in place
    pub fn remove_item(&self, id: i64) -> Result<(), StorageError> {
        let mut items = self.load_items();
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Ok(());
        }
        self.save_items(&items)
    }
}


#[cfg(test)]
mod tests {
    use super::memory::MemoryStorage;
    use super::*;
    use crate::models::Category;

    fn make_item(id: i64, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            category: Category::Fruit,
            added_date: None,
            expiry_date: None,
            note: format!("note {}", id),
        }
    }

    #[test]
    fn test_session_round_trip() {
        let backend = MemoryStorage::default();
        let store = LocalStore::new(&backend);
        assert_eq!(store.load_user(), None);

        let user = User { id: 9, email: "kim@example.com".to_string(), name: "Kim".to_string() };
        store.save_user(&user).unwrap();
        assert_eq!(store.load_user(), Some(user));

        store.clear_user().unwrap();
        assert_eq!(store.load_user(), None);
        assert_eq!(backend.raw(CURRENT_USER_KEY), None);
    }

    #[test]
    fn test_find_item_reads_cache() {
        let backend = MemoryStorage::default();
        let store = LocalStore::new(&backend);
        store.save_items(&[make_item(1, "Pear"), make_item(2, "Plum")]).unwrap();

        assert_eq!(store.find_item(2).map(|i| i.name), Some("Plum".to_string()));
        assert_eq!(store.find_item(3), None);
    }

    #[test]
    fn test_remove_item_drops_only_that_id() {
        let backend = MemoryStorage::default();
        let store = LocalStore::new(&backend);
        store
            .save_items(&[make_item(1, "Pear"), make_item(2, "Plum"), make_item(3, "Fig")])
            .unwrap();

        store.remove_item(2).unwrap();
        let ids: Vec<i64> = store.load_items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_remove_missing_id_leaves_bytes_untouched() {
        let backend = MemoryStorage::default();
        let store = LocalStore::new(&backend);
        store.save_items(&[make_item(1, "Pear")]).unwrap();
        let before = backend.raw(PRODUCTS_KEY);

        store.remove_item(42).unwrap();
        assert_eq!(backend.raw(PRODUCTS_KEY), before);
    }

    #[test]
    fn test_legacy_cache_with_memo_is_normalized() {
        let backend = MemoryStorage::default();
        (&backend)
            .set(PRODUCTS_KEY, r#"[{"id":5,"name":"Beef","category":"육류","memo":"500g"}]"#)
            .unwrap();
        let store = LocalStore::new(&backend);
        let item = store.find_item(5).unwrap();
        assert_eq!(item.note, "500g");
        assert_eq!(item.category, Category::Meat);
    }

    #[test]
    fn test_corrupt_entries_read_as_empty() {
        let backend = MemoryStorage::default();
        (&backend).set(PRODUCTS_KEY, "not json").unwrap();
        (&backend).set(CURRENT_USER_KEY, "{").unwrap();
        let store = LocalStore::new(&backend);
        assert!(store.load_items().is_empty());
        assert_eq!(store.load_user(), None);
    }
}
