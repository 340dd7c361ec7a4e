//! Log message constants
//!
//! Centralizes the messages emitted by the calculator and the application
//! shell so wording stays consistent across call sites.

/// Application startup and lifecycle messages
pub mod application {
    pub const STARTING: &str = "Starting Finde ROI calculator";
    pub const SETTINGS_LOADED: &str = "Settings loaded";
    pub const CATALOG_READY: &str = "Catalog ready";
    pub const CUSTOM_CATALOG: &str = "Using catalog from configuration";
    pub const APPLYING_INPUT: &str = "Applying configured input";
    pub const REPORT_RENDERED: &str = "ROI report rendered";
}

/// Catalog validation messages
pub mod catalog {
    pub const PRICE_INVERSION: &str = "Seat price drops for a larger pricing tier";
}

/// Input model messages
pub mod calculator {
    pub const UNKNOWN_INDUSTRY: &str = "Ignoring unknown industry preset";
    pub const UNKNOWN_PLAN: &str = "Ignoring unknown pricing tier";
}
