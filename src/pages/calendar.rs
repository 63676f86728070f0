//! Calendar Page
//!
//! Month grid of expiry dates.

use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::alert::alert_failure;
use crate::api;
use crate::calendar::{expiring_on, month_grid, today, MonthCursor, DAYS_PER_WEEK, WEEKDAY_LABELS};
use crate::components::filter_options;
use crate::context::use_app_context;
use crate::models::{CategoryFilter, Item};
use crate::request::Generation;

/// CSS class for one in-month day cell
pub fn day_class(date: NaiveDate, today: NaiveDate, has_expiring: bool) -> String {
    let mut class = String::from("calendar-cell");
    if has_expiring {
        class.push_str(" has-expiring");
    }
    if date == today {
        class.push_str(" today");
    }
    class
}

/// Class and expiring item names for one in-month day
pub fn day_cell(
    items: &[Item],
    filter: &CategoryFilter,
    date: NaiveDate,
    today: NaiveDate,
) -> (String, Vec<String>) {
    let due: Vec<String> = expiring_on(items, date, filter)
        .into_iter()
        .map(|item| item.name.clone())
        .collect();
    (day_class(date, today, !due.is_empty()), due)
}

#[component]
pub fn CalendarPage() -> impl IntoView {
    let ctx = use_app_context();
    let today = today();

    let (cursor, set_cursor) = signal(MonthCursor::containing(today));
    let (filter, set_filter) = signal(CategoryFilter::All);
    let (items, set_items) = signal(Vec::<Item>::new());

    let generation = Generation::new();
    on_cleanup({
        let generation = generation.clone();
        move || generation.invalidate()
    });

    // Refetch when the month or category changes; filtering itself is local
    Effect::new(move |_| {
        let user = ctx.session.get();
        let _ = cursor.get();
        let _ = filter.get();
        let ticket = generation.begin();
        let generation = generation.clone();

        let Some(user) = user else {
            set_items.set(Vec::new());
            return;
        };

        spawn_local(async move {
            let result = api::list_items(user.id).await;
            if !generation.is_current(ticket) {
                log::debug!("[CALENDAR] discarding stale item list");
                return;
            }
            match result {
                Ok(loaded) => set_items.set(loaded),
                Err(e) => alert_failure("Loading items", &e),
            }
        });
    });

    let weeks = move || {
        let items = items.get();
        let filter = filter.get();
        month_grid(cursor.get())
            .chunks(DAYS_PER_WEEK)
            .map(|week| {
                let cells = week.iter().map(|cell| match *cell {
                    None => view! { <div class="calendar-cell empty"></div> }.into_any(),
                    Some(date) => {
                        let (class, due) = day_cell(&items, &filter, date, today);
                        view! {
                            <div class=class>
                                <div class="calendar-day">{date.day()}</div>
                                {due.into_iter().map(|name| view! {
                                    <div class="calendar-item">{name}</div>
                                }).collect_view()}
                            </div>
                        }.into_any()
                    }
                }).collect_view();
                view! { <div class="calendar-week">{cells}</div> }
            })
            .collect_view()
    };

    view! {
        <div class="calendar-page">
            <h1>"Expiry calendar"</h1>
            <div class="calendar-card">
                <div class="calendar-toolbar">
                    <div class="calendar-nav">
                        <button on:click=move |_| set_cursor.update(|c| *c = c.prev())>"‹"</button>
                        <h2>{move || cursor.get().label()}</h2>
                        <button on:click=move |_| set_cursor.update(|c| *c = c.next())>"›"</button>
                    </div>
                    <select on:change=move |ev| set_filter.set(CategoryFilter::from_value(&event_target_value(&ev)))>
                        {filter_options().into_iter().map(|option| {
                            let value = option.as_value().to_string();
                            let label = option.label().to_string();
                            view! {
                                <option value=value selected=move || filter.get() == option>{label}</option>
                            }
                        }).collect_view()}
                    </select>
                </div>
                <div class="calendar-week calendar-weekdays">
                    {WEEKDAY_LABELS.iter().map(|label| view! {
                        <div class="calendar-weekday">{*label}</div>
                    }).collect_view()}
                </div>
                {weeks}
            </div>
        </div>
    }
}
