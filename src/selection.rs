use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{GridPosition, Month, MonthComponent, Weekday};

/// Index of the displayed month within a single-month view's synthesized window.
const SINGLE_MONTH_ANCHOR: usize = 1;

/// A rule deciding which dates count as chosen.
///
/// Selections compare and hash by value, so a set of them deduplicates
/// identical rules. `first_weekday` records the grid convention the rule was
/// made under; resolving cells always follows each grid's own convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selection {
    /// Contains nothing
    #[default]
    Empty,
    /// Exactly one date
    Date {
        date:          NaiveDate,
        first_weekday: Weekday,
    },
    /// Every date falling on `weekday`
    RepeatingWeekday {
        weekday:       Weekday,
        first_weekday: Weekday,
    },
}

impl Selection {
    pub const fn date(date: NaiveDate, first_weekday: Weekday) -> Self {
        Self::Date { date, first_weekday }
    }

    pub const fn repeating_weekday(weekday: Weekday, first_weekday: Weekday) -> Self {
        Self::RepeatingWeekday {
            weekday,
            first_weekday,
        }
    }

    pub const fn first_weekday(&self) -> Option<Weekday> {
        match *self {
            Self::Empty => None,
            Self::Date { first_weekday, .. } | Self::RepeatingWeekday { first_weekday, .. } => {
                Some(first_weekday)
            },
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            Self::Empty => false,
            Self::Date { date: selected, .. } => selected == date,
            Self::RepeatingWeekday { weekday, .. } => Weekday::of(date) == weekday,
        }
    }

    /// Every cell of `components` that shows a date this selection contains.
    ///
    /// A date is resolved against the grid of its own month and the grids on
    /// either side, since those show it as a spillover day. An `anchor_index`
    /// outside the window, or a date whose month is not in the window,
    /// resolves to nothing.
    pub fn grid_positions(
        &self,
        components: &[MonthComponent],
        anchor_index: usize,
    ) -> HashSet<GridPosition> {
        if anchor_index >= components.len() {
            trace!(anchor_index, months = components.len(), "anchor outside month window");
            return HashSet::new();
        }
        self.resolve(components)
    }

    /// Cells of a single displayed grid showing dates this selection contains.
    ///
    /// Dates are resolved in the window `[previous, current, next]` so that
    /// spillover dates from the neighbouring months are found; only the
    /// displayed grid's cells are reported, with `month_index` 0.
    pub fn month_grid_positions(&self, component: &MonthComponent) -> HashSet<GridPosition> {
        let window = component.surrounding_window();
        self.grid_positions(&window, SINGLE_MONTH_ANCHOR)
            .into_iter()
            .filter(|position| position.month_index == SINGLE_MONTH_ANCHOR)
            .map(|position| GridPosition::new(0, position.day_index))
            .collect()
    }

    pub(crate) fn resolve(&self, components: &[MonthComponent]) -> HashSet<GridPosition> {
        let mut positions = HashSet::new();
        match *self {
            Self::Empty => {},
            Self::Date { date, .. } => resolve_date(components, date, &mut positions),
            Self::RepeatingWeekday { weekday, .. } => {
                for (index, component) in components.iter().enumerate() {
                    for date in component.month().dates_with_weekday(weekday) {
                        resolve_at(components, index, date, &mut positions);
                    }
                }
            },
        }
        positions
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "nothing"),
            Self::Date { date, .. } => write!(f, "{date}"),
            Self::RepeatingWeekday { weekday, .. } => write!(f, "every weekday {weekday}"),
        }
    }
}

fn resolve_date(components: &[MonthComponent], date: NaiveDate, positions: &mut HashSet<GridPosition>) {
    let owner = Month::of(date);
    let Some(index) = components.iter().position(|component| component.month() == owner) else {
        trace!(%date, "month not in window");
        return;
    };
    resolve_at(components, index, date, positions);
}

/// Resolves `date`, owned by the grid at `index`, against that grid and its neighbours.
fn resolve_at(
    components: &[MonthComponent],
    index: usize,
    date: NaiveDate,
    positions: &mut HashSet<GridPosition>,
) {
    for candidate in index.saturating_sub(1)..=index.saturating_add(1) {
        let Some(component) = components.get(candidate) else {
            continue;
        };
        if let Some(day_index) = component.day_index_of(date) {
            positions.insert(GridPosition::new(candidate, day_index));
        }
    }
}
