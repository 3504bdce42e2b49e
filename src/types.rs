use crate::GridError;
use crate::consts::{
    DAYS_IN_WEEK, MAX_MONTH, MAX_MONTH_DAYS, MIN_DAY, MIN_MONTH_DAYS, MONTH_SEPARATOR,
    MONTHS_PER_YEAR, SATURDAY, SUNDAY,
};
use crate::prelude::*;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A weekday number guaranteed to be in the range `SUNDAY..=SATURDAY` (1..=7).
/// Uses `NonZeroU8` internally, so 0 is not a valid weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Weekday(NonZeroU8);

impl Weekday {
    /// Creates a new Weekday, validating that it's within `SUNDAY..=SATURDAY`
    ///
    /// # Errors
    /// Returns `GridError::InvalidWeekday` if the value is 0 or > `SATURDAY`.
    pub fn new(value: u8) -> Result<Self, GridError> {
        let non_zero = NonZeroU8::new(value).ok_or(GridError::InvalidWeekday(value))?;
        if value > SATURDAY {
            return Err(GridError::InvalidWeekday(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the weekday value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// The weekday a date falls on.
    pub fn of(date: NaiveDate) -> Self {
        Self::from_zero_based(date.weekday().num_days_from_sunday())
    }

    /// The weekday `n` days after this one, wrapping around the week.
    #[must_use]
    pub fn advanced_by(self, n: usize) -> Self {
        let week = usize::from(DAYS_IN_WEEK);
        let shifted = (usize::from(self.get() - SUNDAY) + n % week) % week;
        // shifted < 7, so the conversion cannot fail
        Self::from_zero_based(u32::try_from(shifted).unwrap_or_default())
    }

    /// Days from this weekday forward to `other`, in `0..7`.
    pub const fn days_until(self, other: Self) -> u8 {
        (other.get() + DAYS_IN_WEEK - self.get()) % DAYS_IN_WEEK
    }

    #[allow(clippy::cast_possible_truncation)]
    const fn from_zero_based(n: u32) -> Self {
        Self(NonZeroU8::MIN.saturating_add((n % DAYS_IN_WEEK as u32) as u8))
    }
}

impl TryFrom<u8> for Weekday {
    type Error = GridError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.0.get()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A calendar month of a specific year.
///
/// Ordering is lexicographic on `(year, month)`. Months serialize as their
/// `YYYY-MM` text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}", "year", "month.get()")]
pub struct Month {
    year:  i32,
    month: NonZeroU8,
}

impl Month {
    /// Creates a new Month, validating that the month number is within `1..=MAX_MONTH`
    ///
    /// # Errors
    /// Returns `GridError::InvalidMonth` if the month is 0 or > `MAX_MONTH`.
    pub fn new(year: i32, month: u8) -> Result<Self, GridError> {
        let non_zero = NonZeroU8::new(month).ok_or(GridError::InvalidMonth(month))?;
        if month > MAX_MONTH {
            return Err(GridError::InvalidMonth(month));
        }
        Ok(Self { year, month: non_zero })
    }

    /// The month a date belongs to.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year:  date.year(),
            month: month_from_zero_based(i64::from(date.month0())),
        }
    }

    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month number (1..=12)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month.get()
    }

    /// Shifts this month by `n` whole months in either direction.
    ///
    /// Total for every input: a result beyond the range of `i32` years
    /// saturates to the first or last representable month.
    #[must_use]
    pub fn with_offset(self, n: i64) -> Self {
        let shifted = self.ordinal().saturating_add(n);
        let month = month_from_zero_based(shifted.rem_euclid(MONTHS_PER_YEAR));
        match i32::try_from(shifted.div_euclid(MONTHS_PER_YEAR)) {
            Ok(year) => Self { year, month },
            Err(_) if shifted < 0 => Self {
                year:  i32::MIN,
                month: NonZeroU8::MIN,
            },
            Err(_) => Self {
                year:  i32::MAX,
                month: month_from_zero_based(MONTHS_PER_YEAR - 1),
            },
        }
    }

    /// Number of months from `other` to `self`, so that
    /// `other.with_offset(self.offset_from(other)) == self`.
    pub fn offset_from(self, other: Self) -> i64 {
        self.ordinal() - other.ordinal()
    }

    #[must_use]
    pub fn previous(self) -> Self {
        self.with_offset(-1)
    }

    #[must_use]
    pub fn next(self) -> Self {
        self.with_offset(1)
    }

    /// Whether `date` falls in this calendar month.
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == u32::from(self.month.get())
    }

    /// The first day of the month, or `None` if the year is outside chrono's range.
    pub fn first_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, u32::from(self.month.get()), MIN_DAY)
    }

    /// Number of days in this calendar month, or `None` if the year is
    /// outside chrono's range.
    pub fn day_count(self) -> Option<u32> {
        self.first_date().map(last_day_of_month)
    }

    /// Lazily yields every date of this month that falls on `weekday`.
    pub fn dates_with_weekday(self, weekday: Weekday) -> impl Iterator<Item = NaiveDate> {
        self.first_date().into_iter().flat_map(move |first| {
            let start = MIN_DAY + u32::from(Weekday::of(first).days_until(weekday));
            (start..=last_day_of_month(first))
                .step_by(usize::from(DAYS_IN_WEEK))
                .filter_map(move |day| first.with_day(day))
        })
    }

    /// Months since year 0, January.
    fn ordinal(self) -> i64 {
        i64::from(self.year) * MONTHS_PER_YEAR + i64::from(self.month.get() - 1)
    }
}

// rem_euclid(12) keeps the value in 0..12
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn month_from_zero_based(month0: i64) -> NonZeroU8 {
    NonZeroU8::MIN.saturating_add(month0.rem_euclid(MONTHS_PER_YEAR) as u8)
}

impl FromStr for Month {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(GridError::EmptyInput);
        }

        // rsplit keeps a leading minus sign with the year
        let (year, month) = trimmed
            .rsplit_once(MONTH_SEPARATOR)
            .ok_or_else(|| GridError::InvalidFormat(trimmed.to_owned()))?;
        let year = year
            .trim()
            .parse::<i32>()
            .map_err(|_| GridError::InvalidFormat(trimmed.to_owned()))?;
        let month = month
            .trim()
            .parse::<u8>()
            .map_err(|_| GridError::InvalidFormat(trimmed.to_owned()))?;

        Self::new(year, month)
    }
}

impl Serialize for Month {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A cell in a displayed sequence of month grids: which grid, and which cell within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "({month_index}, {day_index})")]
pub struct GridPosition {
    pub month_index: usize,
    pub day_index:   usize,
}

impl GridPosition {
    pub const fn new(month_index: usize, day_index: usize) -> Self {
        Self { month_index, day_index }
    }

    /// The next cell in the same grid. No bounds checking is performed.
    #[must_use]
    pub const fn incrementing_day_index(self) -> Self {
        Self::new(self.month_index, self.day_index.wrapping_add(1))
    }

    /// The previous cell in the same grid. No bounds checking is performed:
    /// decrementing cell 0 wraps to an index no grid contains, which callers
    /// drop when filtering against the grid's day count.
    #[must_use]
    pub const fn decrementing_day_index(self) -> Self {
        Self::new(self.month_index, self.day_index.wrapping_sub(1))
    }
}

/// The last day number of `date`'s month.
fn last_day_of_month(date: NaiveDate) -> u32 {
    (MIN_MONTH_DAYS..=MAX_MONTH_DAYS)
        .rev()
        .find(|&day| date.with_day(day).is_some())
        .unwrap_or(MIN_MONTH_DAYS)
}
