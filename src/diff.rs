//! Selection change extraction and changed-cell calculators.

use std::collections::HashSet;
use std::hash::Hash;
use std::num::NonZeroUsize;

use tracing::debug;

use crate::consts::DAYS_IN_WEEK;
use crate::{GridPosition, Month, MonthComponent, Selection};

/// Items present in exactly one of the two sets.
///
/// Symmetric in its arguments: which side an item came from does not matter
/// to callers, only that its membership changed.
pub fn extract_changes<T>(previous: &HashSet<T>, current: &HashSet<T>) -> HashSet<T>
where
    T: Eq + Hash + Clone,
{
    previous.symmetric_difference(current).cloned().collect()
}

/// Cells of `components` whose selection state may differ between `previous`
/// and `current`.
///
/// Only the selections that changed are resolved, so the cost follows the size
/// of the change rather than the size of the grid.
#[tracing::instrument(skip_all, fields(months = components.len()))]
pub fn grid_selection_changes(
    components: &[MonthComponent],
    previous: &HashSet<Selection>,
    current: &HashSet<Selection>,
) -> HashSet<GridPosition> {
    let changed = extract_changes(previous, current);
    let positions: HashSet<_> = changed
        .iter()
        .flat_map(|selection| selection.resolve(components))
        .collect();
    debug!(
        selections = changed.len(),
        positions = positions.len(),
        "resolved selection changes"
    );
    positions
}

/// [`grid_selection_changes`] for a caller displaying `current_month`.
///
/// The result is not filtered by `current_month`; a month missing from the
/// window is only logged.
pub fn grid_selection_changes_in_month(
    components: &[MonthComponent],
    current_month: Month,
    previous: &HashSet<Selection>,
    current: &HashSet<Selection>,
) -> HashSet<GridPosition> {
    if !components.iter().any(|component| component.month() == current_month) {
        debug!(%current_month, "displayed month is not part of the month window");
    }
    grid_selection_changes(components, previous, current)
}

/// Changed cells of a single displayed grid, reported with `month_index` 0.
#[tracing::instrument(skip_all, fields(month = %component.month()))]
pub fn month_grid_selection_changes(
    component: &MonthComponent,
    previous: &HashSet<Selection>,
    current: &HashSet<Selection>,
) -> HashSet<GridPosition> {
    let changed = extract_changes(previous, current);
    let positions: HashSet<_> = changed
        .iter()
        .flat_map(|selection| selection.month_grid_positions(component))
        .collect();
    debug!(
        selections = changed.len(),
        positions = positions.len(),
        "resolved selection changes"
    );
    positions
}

/// Computes the cells to redraw after a selection change.
pub trait GridChanges {
    fn selection_changes(
        &self,
        previous: &HashSet<Selection>,
        current: &HashSet<Selection>,
    ) -> HashSet<GridPosition>;

    /// Number of cells in each grid; valid day indices are `0..total_day_count()`.
    fn total_day_count(&self) -> usize;
}

/// Cells in one week row of a weekday-stacked grid.
const WEEK_ROW: NonZeroUsize = match NonZeroUsize::new(DAYS_IN_WEEK as usize) {
    Some(days) => days,
    None => NonZeroUsize::MIN,
};

/// Changed cells across a scrolling window of month grids.
#[derive(Debug, Clone, Copy)]
pub struct WindowChanges<'a> {
    components: &'a [MonthComponent],
    day_count:  NonZeroUsize,
}

impl<'a> WindowChanges<'a> {
    /// `day_count` is the number of cells in each grid of the window.
    pub const fn new(components: &'a [MonthComponent], day_count: NonZeroUsize) -> Self {
        Self {
            components,
            day_count,
        }
    }

    /// For grids of `weekday_stacks` full week rows.
    pub const fn with_weekday_stacks(
        components: &'a [MonthComponent],
        weekday_stacks: NonZeroUsize,
    ) -> Self {
        Self::new(components, weekday_stacks.saturating_mul(WEEK_ROW))
    }

    pub const fn components(&self) -> &'a [MonthComponent] {
        self.components
    }
}

impl GridChanges for WindowChanges<'_> {
    fn selection_changes(
        &self,
        previous: &HashSet<Selection>,
        current: &HashSet<Selection>,
    ) -> HashSet<GridPosition> {
        grid_selection_changes(self.components, previous, current)
    }

    fn total_day_count(&self) -> usize {
        self.day_count.get()
    }
}

/// Changed cells of a view that shows one month grid at a time.
#[derive(Debug, Clone, Copy)]
pub struct SingleMonthChanges<'a> {
    component: &'a MonthComponent,
}

impl<'a> SingleMonthChanges<'a> {
    pub const fn new(component: &'a MonthComponent) -> Self {
        Self { component }
    }
}

impl GridChanges for SingleMonthChanges<'_> {
    fn selection_changes(
        &self,
        previous: &HashSet<Selection>,
        current: &HashSet<Selection>,
    ) -> HashSet<GridPosition> {
        month_grid_selection_changes(self.component, previous, current)
    }

    fn total_day_count(&self) -> usize {
        self.component.day_count()
    }
}
