//! # calendar_grid
//!
//! Lays calendar months out on fixed-size day grids, resolves date selections
//! to grid cells, and works out which cells must be redrawn when the
//! selection set changes.
//!
//! | Module | Description |
//! |--------|-------------|
//! | `types` | `Month`, `Weekday` and `GridPosition` value types |
//! | `arithmetic` | Anchor dates and grid date ranges |
//! | `component` | `MonthComponent` grids and render-ready `Day` cells |
//! | `selection` | `Selection` rules and their cross-month cell resolution |
//! | `diff` | Selection change extraction and changed-cell calculators |
//! | `highlight` | Highlight parts of selected runs and neighbour expansion |
//! | `range` | Month, weekday and contiguous date ranges |
//! | `config` | Grid shape and weekday convention |
//!
//! Every computation is total: dates that cannot be constructed and cells
//! outside a grid produce no output rather than an error. [`GridError`] is
//! only returned by constructors and parsers.

mod arithmetic;
mod component;
mod config;
mod consts;
mod diff;
mod highlight;
mod prelude;
mod range;
mod selection;
#[cfg(test)]
mod test_utils;
mod types;

pub use arithmetic::{date_at_offset, date_range, first_grid_date, grid_dates};
pub use component::{Day, MonthComponent};
pub use config::GridConfig;
pub use consts::*;
pub use diff::{
    GridChanges, SingleMonthChanges, WindowChanges, extract_changes, grid_selection_changes,
    grid_selection_changes_in_month, month_grid_selection_changes,
};
pub use highlight::{HighlightChanges, HighlightPart, highlight_part};
pub use range::{connect_selection, month_count, month_range, weekday_range};
pub use selection::Selection;
pub use types::{GridPosition, Month, Weekday};

/// Error type for constructing and parsing grid values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Month number outside 1..=12.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    /// Weekday number outside 1..=7.
    #[error("Invalid weekday: {0} (must be {min}-{max})", min = SUNDAY, max = SATURDAY)]
    InvalidWeekday(u8),

    /// A grid dimension or cell count of zero.
    #[error("Invalid {0}: must be greater than zero")]
    ZeroDimension(&'static str),

    /// Month text that is not `YYYY-MM`.
    #[error("Invalid month format: {0}")]
    InvalidFormat(String),

    /// Month text that is empty after trimming.
    #[error("Empty month string")]
    EmptyInput,
}
