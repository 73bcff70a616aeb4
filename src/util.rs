use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

/// The "YYYY-MM" prefix transactions in the same month as `today` share.
pub fn month_prefix(today: NaiveDate) -> String {
    today.format("%Y-%m").to_string()
}

/// Zero-based month index (January = 0).
pub fn month_index(today: NaiveDate) -> usize {
    today.month0() as usize
}

/// Round half away from zero to `dp` places and render exactly `dp` decimals.
/// e.g. `fixed(dec!(2.5), 0)` → `"3"`, `fixed(dec!(45.5), 2)` → `"45.50"`
pub fn fixed(val: Decimal, dp: u32) -> String {
    let rounded = val.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.prec$}", prec = dp as usize)
}

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"$1,234,567.89"`
pub fn format_amount(val: Decimal) -> String {
    let formatted = fixed(val.abs(), 2);
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if val < Decimal::ZERO {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}

#[cfg(test)]
#[path = "util_tests.rs"]
mod tests;
