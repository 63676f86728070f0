//! UI Components
//!
//! Reusable Leptos components.

mod button;
mod category_tabs;
mod item_card;
mod labeled_input;
mod side_menu;

pub use button::{Button, ButtonVariant};
pub use category_tabs::{filter_options, CategoryTabs};
pub use item_card::ItemCard;
pub use labeled_input::LabeledInput;
pub use side_menu::SideMenu;
