//! ROI engine: derived financial metrics for one calculator snapshot
//!
//! `compute` is a total, pure function. Every division is guarded, so no
//! input in the clamped domain produces NaN or infinity.

use serde::{Deserialize, Serialize};

use crate::domain::calculator::CalculatorInput;
use crate::domain::catalog::PricingTier;
use crate::domain::constants::calculation::{
    MIN_PAYBACK_MONTHS, MONTHS_PER_YEAR, PERCENT, WORK_DAYS_PER_WEEK,
};

/// Metrics derived from one input snapshot and the active pricing tier
///
/// Values are raw currency amounts; rounding is left to the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiMetrics {
    pub monthly_value: f64,
    pub monthly_cost: f64,
    pub monthly_net: f64,
    pub annual_value: f64,
    pub annual_cost: f64,
    pub annual_net: f64,
    /// Net annual gain as a percentage of annual cost; 0 when there is no cost
    pub roi: f64,
    /// Months of net gain needed to cover one year of licence cost
    ///
    /// `None` when the monthly net is not positive or there is no cost to
    /// recover.
    pub payback_months: Option<u64>,
    /// Value generated per working day of active usage
    pub daily_value: f64,
}

impl RoiMetrics {
    /// Whether the monthly gain exceeds the monthly licence cost
    pub fn is_profitable(&self) -> bool {
        self.monthly_net > 0.0
    }
}

/// Compute all metrics for a snapshot and the tier it is priced against
pub fn compute(input: &CalculatorInput, plan: &PricingTier) -> RoiMetrics {
    let team_size = input.team_size.as_f64();
    let usage_weeks = input.usage_weeks.as_f64();

    let annual_value =
        input.hourly_rate.into_inner() * input.hours_saved.into_inner() * team_size * usage_weeks;
    let monthly_value = annual_value / MONTHS_PER_YEAR;
    let monthly_cost = plan.monthly_seat_price.into_inner() * team_size;
    let monthly_net = monthly_value - monthly_cost;
    let annual_cost = monthly_cost * MONTHS_PER_YEAR;
    let annual_net = annual_value - annual_cost;

    let roi = if annual_cost > 0.0 {
        (annual_net / annual_cost) * PERCENT
    } else {
        0.0
    };

    let payback_months = payback_months(annual_cost, monthly_net);

    let workdays = usage_weeks * WORK_DAYS_PER_WEEK;
    let daily_value = annual_value / if workdays > 0.0 { workdays } else { 1.0 };

    RoiMetrics {
        monthly_value,
        monthly_cost,
        monthly_net,
        annual_value,
        annual_cost,
        annual_net,
        roi,
        payback_months,
        daily_value,
    }
}

fn payback_months(annual_cost: f64, monthly_net: f64) -> Option<u64> {
    if monthly_net <= 0.0 || annual_cost <= 0.0 {
        return None;
    }
    // `as` saturates if the ratio is astronomically large
    let months = (annual_cost / monthly_net).ceil() as u64;
    Some(months.max(MIN_PAYBACK_MONTHS))
}
