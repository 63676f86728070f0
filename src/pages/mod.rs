//! Pages
//!
//! One component per route.

pub mod calendar;
pub mod detail;
pub mod home;
pub mod item_form;
pub mod login;
pub mod register;
pub mod search;
