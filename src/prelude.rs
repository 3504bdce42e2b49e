//! Prelude module for calendar_grid crate.
//!
//! Re-exports the derive macros used across the crate.

pub use derive_more::Display;
