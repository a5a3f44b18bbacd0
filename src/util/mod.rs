//! Browser-facing helpers shared by state and components.

pub mod clock;
pub mod ui_persistence;
pub mod viewport;
