//! Date arithmetic for laying a month out on a day grid.

use chrono::{Days, NaiveDate};

use crate::{Month, Weekday};

/// The date in the first cell of `month`'s grid: the most recent
/// `first_weekday` on or before the first of the month.
///
/// Returns `None` when the month lies outside chrono's date range.
pub fn first_grid_date(month: Month, first_weekday: Weekday) -> Option<NaiveDate> {
    let first = month.first_date()?;
    let offset = first_weekday.days_until(Weekday::of(first));
    first.checked_sub_days(Days::new(u64::from(offset)))
}

/// The date in cell `offset` of `month`'s grid, without materializing the grid.
pub fn date_at_offset(month: Month, first_weekday: Weekday, offset: usize) -> Option<NaiveDate> {
    let offset = u64::try_from(offset).ok()?;
    first_grid_date(month, first_weekday)?.checked_add_days(Days::new(offset))
}

/// `count` consecutive dates starting at the grid's anchor date.
///
/// Empty when the anchor date cannot be constructed.
pub fn grid_dates(month: Month, first_weekday: Weekday, count: usize) -> Vec<NaiveDate> {
    first_grid_date(month, first_weekday)
        .map(|anchor| anchor.iter_days().take(count).collect())
        .unwrap_or_default()
}

/// Every date shown by a `row_count` x `column_count` grid of `month`.
pub fn date_range(
    month: Month,
    first_weekday: Weekday,
    row_count: usize,
    column_count: usize,
) -> Vec<NaiveDate> {
    grid_dates(month, first_weekday, row_count.saturating_mul(column_count))
}
