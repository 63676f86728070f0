//! Frontend Models
//!
//! Data structures matching the Cookfarm API payloads.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Food category as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    Vegetable,
    Fruit,
    Meat,
    Dairy,
    /// Anything the backend returns outside the fixed set
    Other(String),
}

impl Category {
    /// Fixed categories in form order; the first one is the form default
    pub const ALL: [Category; 4] = [
        Category::Vegetable,
        Category::Fruit,
        Category::Meat,
        Category::Dairy,
    ];

    /// Value sent to and received from the API
    pub fn as_wire(&self) -> &str {
        match self {
            Category::Vegetable => "채소",
            Category::Fruit => "과일",
            Category::Meat => "육류",
            Category::Dairy => "유제품",
            Category::Other(raw) => raw,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &str {
        match self {
            Category::Vegetable => "Vegetable",
            Category::Fruit => "Fruit",
            Category::Meat => "Meat",
            Category::Dairy => "Dairy",
            Category::Other(raw) => raw,
        }
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        match raw.trim() {
            "채소" | "vegetable" => Category::Vegetable,
            "과일" | "fruit" => Category::Fruit,
            "육류" | "meat" => Category::Meat,
            "유제품" | "dairy" => Category::Dairy,
            _ => Category::Other(raw),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(raw) => raw,
            known => known.as_wire().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category selection with an "all" sentinel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    /// Value used in `<select>` elements; empty means all
    pub fn as_value(&self) -> &str {
        match self {
            CategoryFilter::All => "",
            CategoryFilter::Only(category) => category.as_wire(),
        }
    }

    pub fn from_value(value: &str) -> Self {
        if value.trim().is_empty() {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(Category::from(value.to_string()))
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

/// Inventory item (normalized)
///
/// Serialized with the note under `description`, which is also the shape
/// written to the local cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ItemRecord")]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub category: Category,
    pub added_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    #[serde(rename = "description")]
    pub note: String,
}

impl Item {
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date.is_some_and(|date| date < today)
    }

    /// Negative once the expiry date has passed
    pub fn days_until_expiry(&self, today: NaiveDate) -> Option<i64> {
        self.expiry_date.map(|date| (date - today).num_days())
    }
}

/// Item as it arrives on the wire, before normalization.
///
/// The backend names the note `memo`; cached lists name it `description`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemRecord {
    id: i64,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    added_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    expiry_date: Option<NaiveDate>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    memo: Option<String>,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.unwrap_or_default(),
            category: record
                .category
                .map(Category::from)
                .unwrap_or_else(|| Category::Other(String::new())),
            added_date: record.added_date,
            expiry_date: record.expiry_date,
            note: record.description.or(record.memo).unwrap_or_default(),
        }
    }
}

/// Accepts `"YYYY-MM-DD"` or `[y, m, d]`; anything else becomes `None`.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| parse_date_value(&value)))
}

fn parse_date_value(value: &serde_json::Value) -> Option<NaiveDate> {
    match value {
        serde_json::Value::String(text) => parse_iso_date(text),
        serde_json::Value::Array(parts) if parts.len() >= 3 => {
            let year = i32::try_from(parts[0].as_i64()?).ok()?;
            let month = u32::try_from(parts[1].as_u64()?).ok()?;
            let day = u32::try_from(parts[2].as_u64()?).ok()?;
            NaiveDate::from_ymd_opt(year, month, day)
        }
        _ => None,
    }
}

/// Parse the `YYYY-MM-DD` format used by `<input type="date">`
pub fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

/// Format an optional date the way date inputs expect it
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Add/edit form payload.
///
/// The note is sent as both `description` (read on create) and `memo`
/// (read on update).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemForm {
    pub name: String,
    pub category: Category,
    pub added_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub description: String,
    pub memo: String,
}

/// Editable form state, one string per input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemDraft {
    pub name: String,
    pub category: Category,
    pub added_date: String,
    pub expiry_date: String,
    pub note: String,
}

impl ItemDraft {
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category.clone(),
            added_date: format_date(item.added_date),
            expiry_date: format_date(item.expiry_date),
            note: item.note.clone(),
        }
    }
}

/// Logged-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Body of `POST /api/users/login`, on success and on rejection
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub status: String,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_memo_is_normalized_into_note() {
        let json = r#"{"id":7,"name":"Milk","category":"유제품","addedDate":"2025-03-01","expiryDate":"2025-03-09","memo":"2 bottles"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.category, Category::Dairy);
        assert_eq!(item.note, "2 bottles");
        assert_eq!(item.added_date, Some(date(2025, 3, 1)));
        assert_eq!(item.expiry_date, Some(date(2025, 3, 9)));
    }

    #[test]
    fn test_description_wins_over_memo() {
        let json = r#"{"id":1,"name":"Egg","category":"육류","description":"fresh","memo":"old"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.note, "fresh");
    }

    #[test]
    fn test_missing_fields_default() {
        let json = r#"{"id":3,"name":null,"expiryDate":"","addedDate":null}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.name, "");
        assert_eq!(item.note, "");
        assert_eq!(item.added_date, None);
        assert_eq!(item.expiry_date, None);
        assert_eq!(item.category, Category::Other(String::new()));
    }

    #[test]
    fn test_array_dates_are_accepted() {
        let json = r#"{"id":3,"name":"Kale","category":"채소","expiryDate":[2024,2,29]}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.expiry_date, Some(date(2024, 2, 29)));
    }

    #[test]
    fn test_cached_shape_reads_back() {
        let item = Item {
            id: 11,
            name: "Apple".to_string(),
            category: Category::Fruit,
            added_date: Some(date(2025, 1, 2)),
            expiry_date: None,
            note: "red".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["description"], "red");
        assert_eq!(json["category"], "과일");
        assert_eq!(json["addedDate"], "2025-01-02");
        let back: Item = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_unknown_category_is_kept() {
        let category = Category::from("간식".to_string());
        assert_eq!(category, Category::Other("간식".to_string()));
        assert_eq!(String::from(category), "간식");
        assert_eq!(Category::from("meat".to_string()), Category::Meat);
    }

    #[test]
    fn test_form_sends_note_under_both_names() {
        let form = ItemForm {
            name: "Tofu".to_string(),
            category: Category::Vegetable,
            added_date: date(2025, 5, 1),
            expiry_date: date(2025, 5, 8),
            description: "soft".to_string(),
            memo: "soft".to_string(),
        };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["description"], "soft");
        assert_eq!(json["memo"], "soft");
        assert_eq!(json["expiryDate"], "2025-05-08");
        assert_eq!(json["category"], "채소");
    }

    #[test]
    fn test_expiry_helpers() {
        let item = Item {
            id: 1,
            name: "Fish".to_string(),
            category: Category::Meat,
            added_date: None,
            expiry_date: Some(date(2025, 6, 10)),
            note: String::new(),
        };
        assert!(!item.is_expired(date(2025, 6, 10)));
        assert!(item.is_expired(date(2025, 6, 11)));
        assert_eq!(item.days_until_expiry(date(2025, 6, 7)), Some(3));
    }

    #[test]
    fn test_filter_values() {
        assert_eq!(CategoryFilter::from_value(""), CategoryFilter::All);
        let fruit = CategoryFilter::from_value("과일");
        assert_eq!(fruit, CategoryFilter::Only(Category::Fruit));
        assert!(fruit.matches(&Category::Fruit));
        assert!(!fruit.matches(&Category::Meat));
        assert!(CategoryFilter::All.matches(&Category::Other("x".to_string())));
    }
}
