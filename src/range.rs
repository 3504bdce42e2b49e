use std::collections::HashSet;

use chrono::NaiveDate;

use crate::{Month, Weekday};

/// Every month from `min` to `max` inclusive, in order. Empty if `min > max`.
pub fn month_range(min: Month, max: Month) -> Vec<Month> {
    if min > max {
        return Vec::new();
    }
    (0..=max.offset_from(min))
        .map(|offset| min.with_offset(offset))
        .collect()
}

/// Number of months [`month_range`] yields for the same bounds.
pub fn month_count(min: Month, max: Month) -> usize {
    usize::try_from(max.offset_from(min).saturating_add(1)).unwrap_or(0)
}

/// `count` consecutive weekdays starting at `first_weekday`, wrapping after Saturday.
pub fn weekday_range(first_weekday: Weekday, count: usize) -> Vec<Weekday> {
    (0..count).map(|n| first_weekday.advanced_by(n)).collect()
}

/// Fills the gaps in a set of dates: every day from the earliest to the
/// latest input date, inclusive.
pub fn connect_selection<I>(dates: I) -> HashSet<NaiveDate>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let bounds = dates.into_iter().fold(None, |bounds, date| match bounds {
        None => Some((date, date)),
        Some((min, max)) => Some((date.min(min), date.max(max))),
    });

    let Some((min, max)) = bounds else {
        return HashSet::new();
    };
    min.iter_days().take_while(|date| *date <= max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, month, weekday};

    #[test]
    fn test_month_range_cases() {
        struct TestCase {
            min:         (i32, u8),
            max:         (i32, u8),
            expected:    usize,
            description: &'static str,
        }

        let cases = [
            TestCase {
                min:         (2018, 4),
                max:         (2018, 4),
                expected:    1,
                description: "single month",
            },
            TestCase {
                min:         (2018, 11),
                max:         (2019, 2),
                expected:    4,
                description: "across year end",
            },
            TestCase {
                min:         (2016, 1),
                max:         (2018, 12),
                expected:    36,
                description: "three whole years",
            },
            TestCase {
                min:         (2018, 5),
                max:         (2018, 4),
                expected:    0,
                description: "min after max",
            },
            TestCase {
                min:         (2019, 1),
                max:         (2018, 12),
                expected:    0,
                description: "min a year after max",
            },
        ];

        for case in &cases {
            let min = month(case.min.0, case.min.1);
            let max = month(case.max.0, case.max.1);
            let range = month_range(min, max);
            assert_eq!(range.len(), case.expected, "{}", case.description);
            assert_eq!(month_count(min, max), case.expected, "{}", case.description);
        }
    }

    #[test]
    fn test_month_range_contents() {
        let range = month_range(month(2018, 11), month(2019, 2));
        assert_eq!(
            range,
            vec![month(2018, 11), month(2018, 12), month(2019, 1), month(2019, 2)]
        );
        assert!(range.windows(2).all(|pair| pair[0].next() == pair[1]));
    }

    #[test]
    fn test_weekday_range() {
        let numbers = |first, count| -> Vec<u8> {
            weekday_range(weekday(first), count)
                .into_iter()
                .map(Weekday::get)
                .collect()
        };
        assert_eq!(numbers(1, 7), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(numbers(5, 7), vec![5, 6, 7, 1, 2, 3, 4]);
        assert_eq!(numbers(7, 3), vec![7, 1, 2]);
        assert_eq!(numbers(3, 10), vec![3, 4, 5, 6, 7, 1, 2, 3, 4, 5]);
        assert!(numbers(2, 0).is_empty());
    }

    #[test]
    fn test_connect_selection_empty_and_single() {
        assert!(connect_selection(Vec::new()).is_empty());
        let single = connect_selection([date(2018, 4, 15)]);
        assert_eq!(single, [date(2018, 4, 15)].into_iter().collect());
    }

    #[test]
    fn test_connect_selection_fills_gaps() {
        let connected = connect_selection([date(2018, 4, 20), date(2018, 3, 30), date(2018, 4, 2)]);
        assert_eq!(connected.len(), 22);
        assert!(connected.contains(&date(2018, 3, 30)));
        assert!(connected.contains(&date(2018, 3, 31)));
        assert!(connected.contains(&date(2018, 4, 1)));
        assert!(connected.contains(&date(2018, 4, 20)));
        assert!(!connected.contains(&date(2018, 4, 21)));
        assert!(!connected.contains(&date(2018, 3, 29)));
        assert_eq!(connected.iter().min(), Some(&date(2018, 3, 30)));
        assert_eq!(connected.iter().max(), Some(&date(2018, 4, 20)));
    }

    #[test]
    fn test_connect_selection_with_duplicates_across_year() {
        let connected = connect_selection([
            date(2018, 12, 30),
            date(2019, 1, 2),
            date(2018, 12, 30),
        ]);
        assert_eq!(connected.len(), 4);
        let mut ordered: Vec<_> = connected.into_iter().collect();
        ordered.sort_unstable();
        assert!(ordered.windows(2).all(|pair| pair[0].succ_opt() == Some(pair[1])));
    }
}
