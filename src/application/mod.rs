//! Application shell
//!
//! Loads settings, builds the catalog and calculator, and renders reports
//! through a display surface.

pub mod app;

pub use app::Application;
