//! Domain types and business logic for the ROI calculator
//!
//! Validated inputs, the static catalogs they are resolved against, and the
//! pure engine that turns an input snapshot into metrics and advisories.

pub mod advisory;
pub mod calculator;
pub mod catalog;
pub mod constants;
pub mod engine;
pub mod types;

pub use advisory::{Advisory, SuggestedTier};
pub use calculator::{Calculator, CalculatorInput, InputChange, RoiReport};
pub use catalog::{Catalog, CatalogError, IndustryPreset, PricingTier};
pub use engine::{compute, RoiMetrics};
pub use types::*;
