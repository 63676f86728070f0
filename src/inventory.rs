//! Inventory Views
//!
//! Client-side filtering and sorting of the fetched item list.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::error::ApiError;
use crate::models::{CategoryFilter, Item};
use crate::storage::{KeyValueStore, LocalStore};

/// Home page list: an exact name match overrides the category filter
pub fn home_view(items: &[Item], filter: &CategoryFilter, term: &str) -> Vec<Item> {
    let term = term.trim();
    items
        .iter()
        .filter(|item| {
            if term.is_empty() {
                filter.matches(&item.category)
            } else {
                item.name == term
            }
        })
        .cloned()
        .collect()
}

/// Search page ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Name,
    ExpirySoonest,
    AddedNewest,
    AddedOldest,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::Name,
        SortOrder::ExpirySoonest,
        SortOrder::AddedNewest,
        SortOrder::AddedOldest,
    ];

    pub fn as_value(self) -> &'static str {
        match self {
            SortOrder::Name => "name",
            SortOrder::ExpirySoonest => "expiry-soon",
            SortOrder::AddedNewest => "added-new",
            SortOrder::AddedOldest => "added-old",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|order| order.as_value() == value)
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Name => "Name",
            SortOrder::ExpirySoonest => "Expiring soonest",
            SortOrder::AddedNewest => "Newest added",
            SortOrder::AddedOldest => "Oldest added",
        }
    }
}

/// Search page list: category filter, substring match, then sort
pub fn search_view(
    items: &[Item],
    filter: &CategoryFilter,
    term: &str,
    order: SortOrder,
) -> Vec<Item> {
    let term = term.trim();
    let mut found: Vec<Item> = items
        .iter()
        .filter(|item| filter.matches(&item.category))
        .filter(|item| term.is_empty() || item.name.contains(term))
        .cloned()
        .collect();
    sort_items(&mut found, order);
    found
}

pub fn sort_items(items: &mut [Item], order: SortOrder) {
    match order {
        SortOrder::Name => items.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortOrder::ExpirySoonest => sort_dated(items, |item| item.expiry_date, Ordering::Less),
        SortOrder::AddedNewest => sort_dated(items, |item| item.added_date, Ordering::Greater),
        SortOrder::AddedOldest => sort_dated(items, |item| item.added_date, Ordering::Less),
    }
}

/// Case-insensitive first, exact text as the tie-break
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Stable sort of the dated items among the slots they occupy.
///
/// Items without the date keep their position. `first` is the ordering an
/// earlier date should have (`Less` for ascending).
fn sort_dated<F>(items: &mut [Item], key: F, first: Ordering)
where
    F: Fn(&Item) -> Option<NaiveDate>,
{
    let slots: Vec<usize> = (0..items.len()).filter(|&i| key(&items[i]).is_some()).collect();
    let mut dated: Vec<Item> = slots.iter().map(|&i| items[i].clone()).collect();
    dated.sort_by(|a, b| {
        let ordering = key(a).cmp(&key(b));
        if first == Ordering::Less {
            ordering
        } else {
            ordering.reverse()
        }
    });
    for (slot, item) in slots.into_iter().zip(dated) {
        items[slot] = item;
    }
}

/// Apply a delete outcome to the shown list and the local cache.
///
/// A rejected delete touches neither; an accepted one drops exactly `id`
/// from both.
pub fn apply_delete<S: KeyValueStore>(
    outcome: Result<(), ApiError>,
    id: i64,
    items: &mut Vec<Item>,
    cache: &LocalStore<S>,
) -> Result<(), ApiError> {
    outcome?;
    items.retain(|item| item.id != id);
    if let Err(e) = cache.remove_item(id) {
        log::warn!("[INVENTORY] item {} not removed from cache: {}", id, e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::storage::memory::MemoryStorage;
    use crate::storage::PRODUCTS_KEY;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn make_item(id: i64, name: &str, category: Category, added: Option<NaiveDate>, expiry: Option<NaiveDate>) -> Item {
        Item {
            id,
            name: name.to_string(),
            category,
            added_date: added,
            expiry_date: expiry,
            note: String::new(),
        }
    }

    fn pantry() -> Vec<Item> {
        vec![
            make_item(1, "Carrot", Category::Vegetable, date(2025, 1, 3), date(2025, 1, 20)),
            make_item(2, "Apple", Category::Fruit, date(2025, 1, 1), date(2025, 1, 10)),
            make_item(3, "Milk", Category::Dairy, None, date(2025, 1, 5)),
            make_item(4, "Green Apple", Category::Fruit, date(2025, 1, 2), None),
            make_item(5, "Pork", Category::Meat, date(2025, 1, 4), date(2025, 1, 8)),
        ]
    }

    fn ids(items: &[Item]) -> Vec<i64> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_home_empty_term_uses_category() {
        let items = pantry();
        assert_eq!(ids(&home_view(&items, &CategoryFilter::All, "  ")), vec![1, 2, 3, 4, 5]);
        let fruit = CategoryFilter::Only(Category::Fruit);
        assert_eq!(ids(&home_view(&items, &fruit, "")), vec![2, 4]);
    }

    #[test]
    fn test_home_term_is_exact_and_ignores_category() {
        let items = pantry();
        let dairy = CategoryFilter::Only(Category::Dairy);
        assert_eq!(ids(&home_view(&items, &dairy, " Apple ")), vec![2]);
        assert!(home_view(&items, &CategoryFilter::All, "Appl").is_empty());
    }

    #[test]
    fn test_search_substring_and_category() {
        let items = pantry();
        let found = search_view(&items, &CategoryFilter::All, "Apple", SortOrder::Name);
        assert_eq!(ids(&found), vec![2, 4]);
        let meat = CategoryFilter::Only(Category::Meat);
        assert_eq!(ids(&search_view(&items, &meat, "", SortOrder::Name)), vec![5]);
    }

    #[test]
    fn test_sort_by_name() {
        let found = search_view(&pantry(), &CategoryFilter::All, "", SortOrder::Name);
        assert_eq!(ids(&found), vec![2, 1, 4, 3, 5]);
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let mut items = vec![
            make_item(1, "banana", Category::Fruit, None, None),
            make_item(2, "apple", Category::Fruit, None, None),
            make_item(3, "Banana", Category::Fruit, None, None),
            make_item(4, "Apple", Category::Fruit, None, None),
        ];
        sort_items(&mut items, SortOrder::Name);
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "apple", "Banana", "banana"]);
    }

    #[test]
    fn test_sort_by_expiry_keeps_undated_in_place() {
        let found = search_view(&pantry(), &CategoryFilter::All, "", SortOrder::ExpirySoonest);
        // slot 3 (Green Apple) has no expiry and stays put
        assert_eq!(ids(&found), vec![3, 5, 2, 4, 1]);
        let dated: Vec<NaiveDate> = found.iter().filter_map(|i| i.expiry_date).collect();
        assert!(dated.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_sort_by_added_date() {
        let newest = search_view(&pantry(), &CategoryFilter::All, "", SortOrder::AddedNewest);
        assert_eq!(ids(&newest), vec![5, 1, 3, 4, 2]);
        let oldest = search_view(&pantry(), &CategoryFilter::All, "", SortOrder::AddedOldest);
        assert_eq!(ids(&oldest), vec![2, 4, 3, 1, 5]);
    }

    #[test]
    fn test_accepted_delete_drops_only_that_id() {
        let backend = MemoryStorage::default();
        let cache = LocalStore::new(&backend);
        let mut items = pantry();
        cache.save_items(&items).unwrap();

        apply_delete(Ok(()), 3, &mut items, &cache).unwrap();
        assert_eq!(ids(&items), vec![1, 2, 4, 5]);
        assert_eq!(ids(&cache.load_items()), vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_rejected_delete_leaves_list_and_cache_untouched() {
        let backend = MemoryStorage::default();
        let cache = LocalStore::new(&backend);
        let mut items = pantry();
        cache.save_items(&items).unwrap();
        let before = backend.raw(PRODUCTS_KEY);

        let rejected = ApiError::Rejected { status: 500, message: "db down".to_string() };
        let outcome = apply_delete(Err(rejected.clone()), 3, &mut items, &cache);
        assert_eq!(outcome, Err(rejected));
        assert_eq!(items, pantry());
        assert_eq!(backend.raw(PRODUCTS_KEY), before);
    }

    #[test]
    fn test_sort_order_values() {
        for order in SortOrder::ALL {
            assert_eq!(SortOrder::from_value(order.as_value()), order);
        }
        assert_eq!(SortOrder::from_value("bogus"), SortOrder::Name);
    }
}
