//! Validated value types for calculator inputs and catalog entries
//!
//! Numeric inputs never reject a value: their constructors clamp into the
//! allowed domain and map non-finite input to the domain minimum. Catalog
//! identifiers and prices are validated and fail with a typed error instead.

use nutype::nutype;

use crate::domain::constants::bounds;

/// Clamp a raw user number into `[min, max]`, mapping NaN and infinities to `min`
pub fn clamp_or_min(raw: f64, min: f64, max: f64) -> f64 {
    if raw.is_finite() {
        raw.clamp(min, max)
    } else {
        min
    }
}

/// Round a raw user number to a whole count, mapping non-finite input to `fallback`
///
/// Negative values saturate at zero and huge values at `u32::MAX`; the caller's
/// clamp brings them into range afterwards.
pub fn whole_or(raw: f64, fallback: u32) -> u32 {
    if raw.is_finite() {
        // `as` saturates for out-of-range floats
        raw.round() as u32
    } else {
        fallback
    }
}

/// Fully loaded hourly rate, currency units per hour
#[nutype(
    sanitize(with = |raw: f64| crate::domain::types::clamp_or_min(
        raw,
        crate::domain::constants::bounds::HOURLY_RATE_MIN,
        crate::domain::constants::bounds::HOURLY_RATE_MAX,
    )),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Display)
)]
pub struct HourlyRate(f64);

impl HourlyRate {
    /// Whether a raw value already lies inside the hourly rate domain
    pub fn contains(raw: f64) -> bool {
        raw.is_finite() && (bounds::HOURLY_RATE_MIN..=bounds::HOURLY_RATE_MAX).contains(&raw)
    }
}

/// Number of seats, each one a team member using the product
#[nutype(
    sanitize(with = |raw: u32| raw.clamp(
        crate::domain::constants::bounds::TEAM_SIZE_MIN,
        crate::domain::constants::bounds::TEAM_SIZE_MAX,
    )),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        Display
    )
)]
pub struct TeamSize(u32);

impl TeamSize {
    /// Build from a raw user number, rounding to the nearest whole seat
    pub fn from_raw(raw: f64) -> Self {
        Self::new(whole_or(raw, bounds::TEAM_SIZE_MIN))
    }

    /// Seat count as a float for use in the ROI formulas
    pub fn as_f64(&self) -> f64 {
        f64::from(self.into_inner())
    }
}

/// Weekly hours reclaimed per team member
///
/// The input surface offers half-hour steps but any value in range is kept.
#[nutype(
    sanitize(with = |raw: f64| crate::domain::types::clamp_or_min(
        raw,
        crate::domain::constants::bounds::HOURS_SAVED_MIN,
        crate::domain::constants::bounds::HOURS_SAVED_MAX,
    )),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Display)
)]
pub struct HoursSaved(f64);

impl HoursSaved {
    /// Whether a raw value already lies inside the hours saved domain
    pub fn contains(raw: f64) -> bool {
        raw.is_finite() && (bounds::HOURS_SAVED_MIN..=bounds::HOURS_SAVED_MAX).contains(&raw)
    }
}

/// Active weeks per year during which the time savings accrue
#[nutype(
    sanitize(with = |raw: u32| raw.clamp(
        crate::domain::constants::bounds::USAGE_WEEKS_MIN,
        crate::domain::constants::bounds::USAGE_WEEKS_MAX,
    )),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        Display
    )
)]
pub struct UsageWeeks(u32);

impl UsageWeeks {
    /// Build from a raw user number, rounding to the nearest whole week
    pub fn from_raw(raw: f64) -> Self {
        Self::new(whole_or(raw, bounds::USAGE_WEEKS_MIN))
    }

    /// Week count as a float for use in the ROI formulas
    pub fn as_f64(&self) -> f64 {
        f64::from(self.into_inner())
    }
}

/// Key of an industry preset in the catalog
#[nutype(
    sanitize(trim, lowercase),
    validate(not_empty, len_char_max = 64),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct PresetId(String);

/// Key of a pricing tier in the catalog
#[nutype(
    sanitize(trim, lowercase),
    validate(not_empty, len_char_max = 64),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct PlanId(String);

/// Human-facing name of a preset or tier
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 120),
    derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, AsRef, Display)
)]
pub struct DisplayLabel(String);

/// Licence price per seat per month
#[nutype(
    validate(finite, greater_or_equal = 0.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Display)
)]
pub struct SeatPrice(f64);

impl SeatPrice {
    /// Whether this is the free pilot price
    pub fn is_free(&self) -> bool {
        self.into_inner() == 0.0
    }
}

/// Largest team a pricing tier is sized for
#[nutype(
    validate(greater = 0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        Display
    )
)]
pub struct SeatCeiling(u32);

impl SeatCeiling {
    /// Whether a team of this size fits under the ceiling
    pub fn admits(&self, team_size: TeamSize) -> bool {
        team_size.into_inner() <= self.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-50.0, 20.0)]
    #[case(0.0, 20.0)]
    #[case(20.0, 20.0)]
    #[case(137.5, 137.5)]
    #[case(2000.0, 2000.0)]
    #[case(10_000.0, 2000.0)]
    #[case(f64::NAN, 20.0)]
    #[case(f64::INFINITY, 20.0)]
    #[case(f64::NEG_INFINITY, 20.0)]
    fn test_hourly_rate_clamps(#[case] raw: f64, #[case] expected: f64) {
        assert_eq!(HourlyRate::new(raw).into_inner(), expected);
    }

    #[rstest]
    #[case(5000.0, 1000)]
    #[case(1000.0, 1000)]
    #[case(12.0, 12)]
    #[case(12.4, 12)]
    #[case(12.6, 13)]
    #[case(0.0, 1)]
    #[case(-3.0, 1)]
    #[case(f64::NAN, 1)]
    fn test_team_size_clamps(#[case] raw: f64, #[case] expected: u32) {
        assert_eq!(TeamSize::from_raw(raw).into_inner(), expected);
    }

    #[rstest]
    #[case(0.5, 1.0)]
    #[case(6.0, 6.0)]
    #[case(6.25, 6.25)]
    #[case(61.0, 60.0)]
    #[case(f64::NAN, 1.0)]
    fn test_hours_saved_clamps(#[case] raw: f64, #[case] expected: f64) {
        assert_eq!(HoursSaved::new(raw).into_inner(), expected);
    }

    #[rstest]
    #[case(1.0, 4)]
    #[case(48.0, 48)]
    #[case(52.0, 52)]
    #[case(53.0, 52)]
    #[case(f64::NAN, 4)]
    fn test_usage_weeks_clamps(#[case] raw: f64, #[case] expected: u32) {
        assert_eq!(UsageWeeks::from_raw(raw).into_inner(), expected);
    }

    #[test]
    fn test_clamping_is_idempotent() {
        let once = HourlyRate::new(4321.0);
        let twice = HourlyRate::new(once.into_inner());
        assert_eq!(once, twice);

        let once = TeamSize::new(5000);
        let twice = TeamSize::new(once.into_inner());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_domain_membership() {
        assert!(HourlyRate::contains(140.0));
        assert!(!HourlyRate::contains(19.99));
        assert!(!HourlyRate::contains(f64::NAN));
        assert!(HoursSaved::contains(60.0));
        assert!(!HoursSaved::contains(0.0));
    }

    #[test]
    fn test_identifiers_are_normalized() {
        let id = PresetId::try_new("  Legal ".to_string()).unwrap();
        assert_eq!(id.as_ref(), "legal");
        assert!(PlanId::try_new("   ".to_string()).is_err());
        assert!(PlanId::try_new("x".repeat(65)).is_err());
    }

    #[test]
    fn test_seat_price_validation() {
        assert!(SeatPrice::try_new(0.0).unwrap().is_free());
        assert!(!SeatPrice::try_new(49.0).unwrap().is_free());
        assert!(SeatPrice::try_new(-1.0).is_err());
        assert!(SeatPrice::try_new(f64::NAN).is_err());
    }

    #[test]
    fn test_seat_ceiling() {
        let ceiling = SeatCeiling::try_new(5).unwrap();
        assert!(ceiling.admits(TeamSize::new(5)));
        assert!(!ceiling.admits(TeamSize::new(6)));
        assert!(SeatCeiling::try_new(0).is_err());
    }
}
