//! Calendar Utilities
//!
//! Month grid math for the expiry calendar.

use chrono::{Datelike, NaiveDate};

use crate::models::{CategoryFilter, Item};

pub const WEEKS: usize = 6;
pub const DAYS_PER_WEEK: usize = 7;
pub const GRID_CELLS: usize = WEEKS * DAYS_PER_WEEK;

pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Selected month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    /// 1-based
    pub month: u32,
}

impl MonthCursor {
    pub fn containing(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn days_in_month(self) -> u32 {
        let Some(first) = self.first_day() else { return 0 };
        let next = self.next();
        match next.first_day() {
            Some(next_first) => (next_first - first).num_days() as u32,
            None => 31,
        }
    }

    pub fn label(self) -> String {
        format!("{}-{:02}", self.year, self.month)
    }
}

/// Sunday-first 6×7 grid; `None` for cells outside the month
pub fn month_grid(cursor: MonthCursor) -> Vec<Option<NaiveDate>> {
    let mut cells = vec![None; GRID_CELLS];
    let Some(first) = cursor.first_day() else { return cells };
    let offset = first.weekday().num_days_from_sunday() as usize;

    for (day, date) in first.iter_days().take(cursor.days_in_month() as usize).enumerate() {
        if let Some(cell) = cells.get_mut(offset + day) {
            *cell = Some(date);
        }
    }
    cells
}

/// Items whose expiry date is exactly `date` and match the filter
pub fn expiring_on<'a>(items: &'a [Item], date: NaiveDate, filter: &CategoryFilter) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| item.expiry_date == Some(date) && filter.matches(&item.category))
        .collect()
}

/// Today's date according to the browser clock
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_grid_always_has_42_cells() {
        for month in 1..=12 {
            for year in [2023, 2024, 2025] {
                let cursor = MonthCursor { year, month };
                let grid = month_grid(cursor);
                assert_eq!(grid.len(), 42);
                let filled = grid.iter().filter(|c| c.is_some()).count();
                assert_eq!(filled as u32, cursor.days_in_month(), "{}", cursor.label());
            }
        }
    }

    #[test]
    fn test_grid_offset_is_sunday_first() {
        // 2025-06-01 is a Sunday, 2025-05-01 a Thursday
        let june = month_grid(MonthCursor { year: 2025, month: 6 });
        assert_eq!(june[0], Some(date(2025, 6, 1)));
        let may = month_grid(MonthCursor { year: 2025, month: 5 });
        assert_eq!(may[3], None);
        assert_eq!(may[4], Some(date(2025, 5, 1)));
        assert_eq!(may[4 + 30], Some(date(2025, 5, 31)));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(MonthCursor { year: 2024, month: 2 }.days_in_month(), 29);
        assert_eq!(MonthCursor { year: 2025, month: 2 }.days_in_month(), 28);
        assert_eq!(MonthCursor { year: 2025, month: 12 }.days_in_month(), 31);
    }

    #[test]
    fn test_month_steps_roll_over_year() {
        let jan = MonthCursor { year: 2025, month: 1 };
        assert_eq!(jan.prev(), MonthCursor { year: 2024, month: 12 });
        assert_eq!(jan.prev().next(), jan);
        let dec = MonthCursor { year: 2025, month: 12 };
        assert_eq!(dec.next(), MonthCursor { year: 2026, month: 1 });
        assert_eq!(MonthCursor::containing(date(2025, 3, 17)), MonthCursor { year: 2025, month: 3 });
    }

    #[test]
    fn test_expiring_on_matches_date_and_category() {
        let items = vec![
            Item {
                id: 1,
                name: "Yogurt".to_string(),
                category: Category::Dairy,
                added_date: None,
                expiry_date: Some(date(2025, 4, 2)),
                note: String::new(),
            },
            Item {
                id: 2,
                name: "Spinach".to_string(),
                category: Category::Vegetable,
                added_date: None,
                expiry_date: Some(date(2025, 4, 2)),
                note: String::new(),
            },
            Item {
                id: 3,
                name: "Cheese".to_string(),
                category: Category::Dairy,
                added_date: None,
                expiry_date: Some(date(2025, 4, 3)),
                note: String::new(),
            },
        ];
        assert_eq!(expiring_on(&items, date(2025, 4, 2), &CategoryFilter::All).len(), 2);
        let dairy = CategoryFilter::Only(Category::Dairy);
        let due: Vec<i64> = expiring_on(&items, date(2025, 4, 2), &dairy).iter().map(|i| i.id).collect();
        assert_eq!(due, vec![1]);
    }
}
