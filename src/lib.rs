//! Finde ROI - return-on-time calculator for the Finde knowledge search product
//!
//! Clamps user inputs into their domains, prices them against a catalog of
//! industry presets and per-seat tiers, and derives monthly and annual value,
//! cost, ROI, payback, and advisory tips through a pure engine.

pub mod application;
pub mod config;
pub mod display;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::Application;
pub use error::{Error, Result};
