//! Fixtures shared by the unit tests.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::{Month, MonthComponent, Selection, Weekday};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("test date must be valid")
}

pub fn month(year: i32, month: u8) -> Month {
    Month::new(year, month).expect("test month must be valid")
}

pub fn weekday(value: u8) -> Weekday {
    Weekday::new(value).expect("test weekday must be valid")
}

/// A 6x7 Sunday-first grid, the common month view layout.
pub fn component(year: i32, month_number: u8) -> MonthComponent {
    MonthComponent::new(month(year, month_number), 42, weekday(1))
        .expect("test component must be valid")
}

/// Sunday-first date selection.
pub fn date_selection(year: i32, month: u32, day: u32) -> Selection {
    Selection::date(date(year, month, day), weekday(1))
}

pub fn selections<const N: usize>(items: [Selection; N]) -> HashSet<Selection> {
    items.into_iter().collect()
}
