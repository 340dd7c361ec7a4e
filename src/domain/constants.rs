//! Constants for ROI calculations and input domains

/// Calendar constants used by the ROI formulas
pub mod calculation {
    /// Working weeks per month in the legacy fixed-weeks model
    pub const WORK_WEEKS_PER_MONTH: f64 = 4.0;

    /// Months per year
    pub const MONTHS_PER_YEAR: f64 = 12.0;

    /// Working days per week, used for the per-workday value
    pub const WORK_DAYS_PER_WEEK: f64 = 5.0;

    /// Percentage multiplier
    pub const PERCENT: f64 = 100.0;

    /// Shortest payback period that is ever reported
    pub const MIN_PAYBACK_MONTHS: u64 = 1;
}

/// Inclusive bounds for user-adjustable inputs
pub mod bounds {
    /// Minimum hourly rate (currency per hour)
    pub const HOURLY_RATE_MIN: f64 = 20.0;

    /// Maximum hourly rate (currency per hour)
    pub const HOURLY_RATE_MAX: f64 = 2000.0;

    /// Minimum team size (seats)
    pub const TEAM_SIZE_MIN: u32 = 1;

    /// Maximum team size (seats)
    pub const TEAM_SIZE_MAX: u32 = 1000;

    /// Minimum weekly hours saved per team member
    pub const HOURS_SAVED_MIN: f64 = 1.0;

    /// Maximum weekly hours saved per team member
    pub const HOURS_SAVED_MAX: f64 = 60.0;

    /// Minimum active weeks per year
    pub const USAGE_WEEKS_MIN: u32 = 4;

    /// Maximum active weeks per year
    pub const USAGE_WEEKS_MAX: u32 = 52;
}

/// Starting values for a freshly mounted calculator
pub mod defaults {
    /// Team size before the user touches the field
    pub const TEAM_SIZE: u32 = 12;

    /// Active weeks per year; also the value restored when a preset is selected
    pub const USAGE_WEEKS: u32 = 48;
}

/// Pilot programme terms referenced by advisories
pub mod pilot {
    /// Days after which a pilot conversion no longer keeps its licence credit
    pub const CREDIT_WINDOW_DAYS: u32 = 60;
}
