//! Currency, percentage, and payback formatting
//!
//! Amounts are shown in euros with thousands separators. Whole amounts carry
//! no decimals; anything else is rounded to exactly two, even when the
//! rounded cents are zero.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Currency symbol for every amount
pub const CURRENCY_SYMBOL: &str = "€";

/// Placeholder for values that cannot be shown
pub const NOT_AVAILABLE: &str = "–";

/// Placeholder for a payback period that is never reached
pub const NOT_REACHED: &str = "—";

/// Format a currency amount
pub fn currency(amount: f64) -> String {
    let Some(decimal) = Decimal::from_f64(amount) else {
        return NOT_AVAILABLE.to_string();
    };

    let rounded = decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let magnitude = rounded.abs();
    let whole = magnitude.trunc();
    let cents = ((magnitude - whole) * Decimal::ONE_HUNDRED)
        .to_u32()
        .unwrap_or_default();
    let grouped = group_thousands(whole.to_u128().unwrap_or_default());

    if decimal.fract().is_zero() {
        format!("{sign}{CURRENCY_SYMBOL}{grouped}")
    } else {
        format!("{sign}{CURRENCY_SYMBOL}{grouped}.{cents:02}")
    }
}

/// Format a percentage, rounded to a whole number
pub fn percent(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    // `as` saturates for out-of-range floats
    let grouped = group_thousands(rounded.abs() as u128);
    format!("{sign}{grouped}%")
}

/// Format a payback period in months
pub fn payback(months: Option<u64>) -> String {
    match months {
        Some(1) => "1 month".to_string(),
        Some(months) => format!("{} months", group_thousands(u128::from(months))),
        None => NOT_REACHED.to_string(),
    }
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
