//! Display surfaces for ROI reports
//!
//! The calculator hands every fresh report to a [`DisplaySurface`]. Surfaces
//! only read the report; formatting of money, percentages, and payback
//! periods lives in [`format`].

pub mod format;
pub mod surface;

pub use surface::{DisplaySurface, JsonSurface, TextSurface};
