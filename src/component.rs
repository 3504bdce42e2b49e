use std::collections::HashSet;
use std::num::NonZeroUsize;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::arithmetic::{date_at_offset, first_grid_date, grid_dates};
use crate::highlight::{HighlightPart, highlight_part};
use crate::{GridError, Month, Selection, Weekday};

/// One rendered grid of a month: `day_count` cells aligned so that the first
/// cell falls on `first_weekday`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthComponent {
    month:         Month,
    day_count:     NonZeroUsize,
    first_weekday: Weekday,
}

impl MonthComponent {
    /// # Errors
    /// Returns `GridError::ZeroDimension` if `day_count` is 0.
    pub fn new(month: Month, day_count: usize, first_weekday: Weekday) -> Result<Self, GridError> {
        let day_count = NonZeroUsize::new(day_count).ok_or(GridError::ZeroDimension("day_count"))?;
        Ok(Self::with_day_count(month, day_count, first_weekday))
    }

    pub const fn with_day_count(month: Month, day_count: NonZeroUsize, first_weekday: Weekday) -> Self {
        Self {
            month,
            day_count,
            first_weekday,
        }
    }

    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    #[inline]
    pub const fn day_count(&self) -> usize {
        self.day_count.get()
    }

    #[inline]
    pub const fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    /// The same grid shape laid out for another month.
    #[must_use]
    pub const fn with_month(&self, month: Month) -> Self {
        Self { month, ..*self }
    }

    /// This grid flanked by the previous and next month's grids of the same shape.
    pub fn surrounding_window(&self) -> [Self; 3] {
        [
            self.with_month(self.month.previous()),
            *self,
            self.with_month(self.month.next()),
        ]
    }

    pub fn first_grid_date(&self) -> Option<NaiveDate> {
        first_grid_date(self.month, self.first_weekday)
    }

    /// The date shown in cell `index`, or `None` outside `0..day_count`.
    pub fn date_at_index(&self, index: usize) -> Option<NaiveDate> {
        if index >= self.day_count() {
            return None;
        }
        date_at_offset(self.month, self.first_weekday, index)
    }

    /// Every date shown by this grid, in cell order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        grid_dates(self.month, self.first_weekday, self.day_count())
    }

    /// The cell showing `date`, if this grid shows it at all.
    pub fn day_index_of(&self, date: NaiveDate) -> Option<usize> {
        let anchor = self.first_grid_date()?;
        let diff = date.signed_duration_since(anchor).num_days();
        usize::try_from(diff).ok().filter(|&index| index < self.day_count())
    }

    /// Whether `date` belongs to this grid's calendar month.
    ///
    /// Spillover dates from the neighbouring months are shown by the grid but
    /// are not contained by it.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.month.contains(date)
    }

    /// The render-ready cell at `index`.
    pub fn day(&self, index: usize, selections: &HashSet<Selection>, today: NaiveDate) -> Option<Day> {
        let date = self.date_at_index(index)?;
        Some(self.build_day(date, selections, today))
    }

    /// Render-ready cells for the whole grid.
    pub fn days(&self, selections: &HashSet<Selection>, today: NaiveDate) -> Vec<Day> {
        self.dates()
            .into_iter()
            .map(|date| self.build_day(date, selections, today))
            .collect()
    }

    fn build_day(&self, date: NaiveDate, selections: &HashSet<Selection>, today: NaiveDate) -> Day {
        Day::new(date, today)
            .with_current_month(self.contains(date))
            .with_selected(selections.iter().any(|selection| selection.contains(date)))
            .with_highlight_part(highlight_part(selections, date))
    }
}

/// The content of a single grid cell.
///
/// Built once per render pass and never mutated; the `with_*` methods return
/// modified copies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Day {
    date:             NaiveDate,
    description:      String,
    is_current_month: bool,
    is_selected:      bool,
    is_today:         bool,
    highlight_part:   HighlightPart,
}

impl Day {
    /// A plain cell for `date`, labelled with its day of month. `is_today` is
    /// fixed here by comparing against `today`.
    pub fn new(date: NaiveDate, today: NaiveDate) -> Self {
        Self {
            date,
            description: date.day().to_string(),
            is_current_month: false,
            is_selected: false,
            is_today: date == today,
            highlight_part: HighlightPart::NONE,
        }
    }

    /// A plain cell for `date`, compared against the local clock's current day.
    pub fn today_relative(date: NaiveDate) -> Self {
        Self::new(date, Local::now().date_naive())
    }

    #[must_use]
    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_current_month(self, is_current_month: bool) -> Self {
        Self {
            is_current_month,
            ..self
        }
    }

    #[must_use]
    pub fn with_selected(self, is_selected: bool) -> Self {
        Self { is_selected, ..self }
    }

    #[must_use]
    pub fn with_highlight_part(self, highlight_part: HighlightPart) -> Self {
        Self {
            highlight_part,
            ..self
        }
    }

    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn is_current_month(&self) -> bool {
        self.is_current_month
    }

    pub const fn is_selected(&self) -> bool {
        self.is_selected
    }

    pub const fn is_today(&self) -> bool {
        self.is_today
    }

    pub const fn highlight_part(&self) -> HighlightPart {
        self.highlight_part
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{component, date, date_selection, month, selections, weekday};

    #[test]
    fn test_new_rejects_zero_day_count() {
        let result = MonthComponent::new(month(2018, 4), 0, weekday(1));
        assert!(matches!(result, Err(GridError::ZeroDimension("day_count"))));
    }

    #[test]
    fn test_accessors() {
        let april = component(2018, 4);
        assert_eq!(april.month(), month(2018, 4));
        assert_eq!(april.day_count(), 42);
        assert_eq!(april.first_weekday(), weekday(1));
    }

    #[test]
    fn test_date_at_index() {
        let april = component(2018, 4);
        assert_eq!(april.date_at_index(0), Some(date(2018, 4, 1)));
        assert_eq!(april.date_at_index(14), Some(date(2018, 4, 15)));
        assert_eq!(april.date_at_index(41), Some(date(2018, 5, 12)));
        assert_eq!(april.date_at_index(42), None);
    }

    #[test]
    fn test_dates_match_cells() {
        let march = component(2018, 3);
        let dates = march.dates();
        assert_eq!(dates.len(), 42);
        for (index, expected) in dates.iter().enumerate() {
            assert_eq!(march.date_at_index(index), Some(*expected));
            assert_eq!(march.day_index_of(*expected), Some(index));
        }
    }

    #[test]
    fn test_day_index_of_outside_grid() {
        let april = component(2018, 4);
        assert_eq!(april.day_index_of(date(2018, 3, 31)), None);
        assert_eq!(april.day_index_of(date(2018, 5, 13)), None);
        assert_eq!(april.day_index_of(date(2018, 5, 12)), Some(41));
    }

    #[test]
    fn test_contains_is_calendar_month_only() {
        let april = component(2018, 4);
        // shown in the grid, but owned by May
        assert!(april.day_index_of(date(2018, 5, 3)).is_some());
        assert!(!april.contains(date(2018, 5, 3)));
        assert!(april.contains(date(2018, 4, 30)));
    }

    #[test]
    fn test_surrounding_window() {
        let january = component(2018, 1);
        let [previous, current, next] = january.surrounding_window();
        assert_eq!(previous.month(), month(2017, 12));
        assert_eq!(current, january);
        assert_eq!(next.month(), month(2018, 2));
        assert_eq!(previous.day_count(), 42);
        assert_eq!(next.first_weekday(), weekday(1));
    }

    #[test]
    fn test_day_builder() {
        let day = Day::new(date(2018, 4, 15), date(2018, 4, 15));
        assert_eq!(day.description(), "15");
        assert!(day.is_today());
        assert!(!day.is_selected());
        assert!(!day.is_current_month());
        assert_eq!(day.highlight_part(), HighlightPart::NONE);

        let updated = day
            .clone()
            .with_selected(true)
            .with_current_month(true)
            .with_description("Sun 15")
            .with_highlight_part(HighlightPart::MID);
        assert!(updated.is_selected());
        assert!(updated.is_current_month());
        assert_eq!(updated.description(), "Sun 15");
        assert_eq!(updated.highlight_part(), HighlightPart::MID);
        assert_eq!(updated.date(), day.date());
        // the original is untouched
        assert!(!day.is_selected());
    }

    #[test]
    fn test_day_is_today_fixed_at_construction() {
        let day = Day::new(date(2018, 4, 15), date(2018, 4, 16));
        assert!(!day.is_today());
        assert!(!day.with_selected(true).is_today());
    }

    #[test]
    fn test_day_today_relative() {
        let day = Day::today_relative(date(2000, 1, 1));
        assert!(!day.is_today());
        assert_eq!(day.description(), "1");
    }

    #[test]
    fn test_days_for_grid() {
        let april = component(2018, 4);
        let chosen = selections([
            date_selection(2018, 4, 14),
            date_selection(2018, 4, 15),
            date_selection(2018, 4, 16),
        ]);
        let days = april.days(&chosen, date(2018, 4, 20));
        assert_eq!(days.len(), 42);

        assert!(days[0].is_current_month());
        assert!(!days[41].is_current_month());
        assert!(days[19].is_today());

        assert_eq!(days[13].highlight_part(), HighlightPart::START);
        assert_eq!(days[14].highlight_part(), HighlightPart::MID);
        assert_eq!(days[15].highlight_part(), HighlightPart::END);
        assert!(days[13..=15].iter().all(Day::is_selected));
        assert!(!days[16].is_selected());
        assert_eq!(days[16].highlight_part(), HighlightPart::NONE);

        assert_eq!(april.day(14, &chosen, date(2018, 4, 20)).as_ref(), Some(&days[14]));
        assert_eq!(april.day(42, &chosen, date(2018, 4, 20)), None);
    }

    #[test]
    fn test_serde() {
        let april = component(2018, 4);
        let json = serde_json::to_string(&april).unwrap();
        assert_eq!(json, r#"{"month":"2018-04","day_count":42,"first_weekday":1}"#);
        let parsed: MonthComponent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, april);

        let invalid = r#"{"month":"2018-04","day_count":0,"first_weekday":1}"#;
        assert!(serde_json::from_str::<MonthComponent>(invalid).is_err());
    }
}
