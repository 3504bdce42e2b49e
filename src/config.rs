//! Grid shape and weekday convention for one calendar instance.

use std::num::NonZeroUsize;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::arithmetic::date_range;
use crate::range::month_range;
use crate::{GridError, Month, MonthComponent, Selection, Weekday, WindowChanges};

/// Layout options shared by every grid of a calendar.
///
/// There are no defaults; each option must be supplied. Deserialization
/// rejects zero dimensions and weekdays outside 1..=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    first_weekday: Weekday,
    row_count:     NonZeroUsize,
    column_count:  NonZeroUsize,
}

impl GridConfig {
    /// # Errors
    /// Returns `GridError::InvalidWeekday` if `first_weekday` is outside 1..=7,
    /// or `GridError::ZeroDimension` if either dimension is 0.
    pub fn new(first_weekday: u8, row_count: usize, column_count: usize) -> Result<Self, GridError> {
        Ok(Self {
            first_weekday: Weekday::new(first_weekday)?,
            row_count:     NonZeroUsize::new(row_count).ok_or(GridError::ZeroDimension("row_count"))?,
            column_count:  NonZeroUsize::new(column_count)
                .ok_or(GridError::ZeroDimension("column_count"))?,
        })
    }

    #[inline]
    pub const fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    #[inline]
    pub const fn row_count(&self) -> usize {
        self.row_count.get()
    }

    #[inline]
    pub const fn column_count(&self) -> usize {
        self.column_count.get()
    }

    /// Cells per grid.
    pub const fn day_count(&self) -> usize {
        self.row_count.saturating_mul(self.column_count).get()
    }

    pub const fn component(&self, month: Month) -> MonthComponent {
        MonthComponent::with_day_count(
            month,
            self.row_count.saturating_mul(self.column_count),
            self.first_weekday,
        )
    }

    /// One grid per month from `min` to `max` inclusive.
    pub fn window(&self, min: Month, max: Month) -> Vec<MonthComponent> {
        month_range(min, max)
            .into_iter()
            .map(|month| self.component(month))
            .collect()
    }

    /// Grids for `radius` months on either side of `month`, and `month` itself.
    pub fn window_around(&self, month: Month, radius: u32) -> Vec<MonthComponent> {
        let radius = i64::from(radius);
        self.window(month.with_offset(-radius), month.with_offset(radius))
    }

    /// Every date shown by `month`'s grid.
    pub fn date_range(&self, month: Month) -> Vec<NaiveDate> {
        date_range(
            month,
            self.first_weekday,
            self.row_count(),
            self.column_count(),
        )
    }

    /// A changed-cell calculator over `components`, bounded by [`Self::day_count`].
    pub const fn window_changes<'a>(&self, components: &'a [MonthComponent]) -> WindowChanges<'a> {
        WindowChanges::new(components, self.row_count.saturating_mul(self.column_count))
    }

    pub const fn select_date(&self, date: NaiveDate) -> Selection {
        Selection::date(date, self.first_weekday)
    }

    pub const fn select_weekday(&self, weekday: Weekday) -> Selection {
        Selection::repeating_weekday(weekday, self.first_weekday)
    }
}
