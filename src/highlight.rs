use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::{GridChanges, GridPosition, Selection};

/// The role a selected date plays in a run of consecutive selected dates,
/// used to round only the outer ends of a multi-day highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HighlightPart(u8);

bitflags::bitflags! {
    impl HighlightPart: u8 {
        /// Not selected.
        const NONE = 0;

        /// First date of a run.
        const START = 1 << 0;

        /// Last date of a run.
        const END = 1 << 1;

        /// Inside a run, with selected dates on both sides.
        const MID = 1 << 2;

        /// A run of one date.
        const START_AND_END = Self::START.bits() | Self::END.bits();
    }
}

/// How `date` should be highlighted given the active selections.
pub fn highlight_part(selections: &HashSet<Selection>, date: NaiveDate) -> HighlightPart {
    let is_selected = |date: Option<NaiveDate>| {
        date.is_some_and(|date| selections.iter().any(|selection| selection.contains(date)))
    };

    if !is_selected(Some(date)) {
        return HighlightPart::NONE;
    }

    let previous = is_selected(date.pred_opt());
    let next = is_selected(date.succ_opt());

    // selected on both sides wins over any end flags
    if previous && next {
        return HighlightPart::MID;
    }

    let mut part = HighlightPart::NONE;
    if !next {
        part |= HighlightPart::END;
    }
    if !previous {
        part |= HighlightPart::START;
    }
    part
}

/// Widens another calculator's changed cells to their neighbours.
///
/// Selecting or deselecting a date changes the highlight shape of the cells
/// on either side of it even though their own selection did not change, so
/// those cells must be redrawn too. Neighbours outside the grid are dropped.
#[derive(Debug, Clone, Copy)]
pub struct HighlightChanges<C> {
    base: C,
}

impl<C: GridChanges> HighlightChanges<C> {
    pub const fn new(base: C) -> Self {
        Self { base }
    }

    pub fn into_inner(self) -> C {
        self.base
    }
}

impl<C: GridChanges> GridChanges for HighlightChanges<C> {
    #[tracing::instrument(skip_all)]
    fn selection_changes(
        &self,
        previous: &HashSet<Selection>,
        current: &HashSet<Selection>,
    ) -> HashSet<GridPosition> {
        let total_day_count = self.base.total_day_count();
        let base = self.base.selection_changes(previous, current);

        let mut expanded = HashSet::with_capacity(base.len() * 3);
        for &position in &base {
            for candidate in [
                position.decrementing_day_index(),
                position,
                position.incrementing_day_index(),
            ] {
                if candidate.day_index < total_day_count {
                    expanded.insert(candidate);
                }
            }
        }

        debug!(
            base = base.len(),
            expanded = expanded.len(),
            "expanded changes to highlight neighbours"
        );
        expanded
    }

    fn total_day_count(&self) -> usize {
        self.base.total_day_count()
    }
}
