//! Next-month spending projection from monthly expense totals.
//!
//! The projection is the mean of all monthly totals, scaled by a fixed
//! seasonal table and by the direction of the last three months.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{CategoryForecast, MonthlyTotal, SpendingPrediction, Transaction, Trend};

/// Fewer qualifying expenses than this short-circuits to a zero prediction.
pub const MIN_TRANSACTIONS: usize = 3;

/// Number of trailing months used for trend and variability.
const RECENT_MONTHS: usize = 3;

pub const INSUFFICIENT_DATA: &str = "Insufficient historical data";

/// Seasonal multipliers in hundredths, indexed by zero-based month.
const SEASONAL_FACTORS: [i64; 12] = [100, 100, 100, 100, 100, 100, 100, 100, 115, 100, 120, 110];

pub struct Predictor;

impl Predictor {
    /// Project next month's spending. `month_index` is the zero-based month of
    /// the reference date and only drives the seasonal adjustment.
    pub fn predict(
        transactions: &[Transaction],
        category: Option<&str>,
        month_index: usize,
    ) -> SpendingPrediction {
        let qualifying = transactions
            .iter()
            .filter(|t| qualifies(t, category))
            .count();

        if qualifying < MIN_TRANSACTIONS {
            tracing::debug!(
                category = category.unwrap_or("*"),
                qualifying,
                "not enough expenses to predict"
            );
            return SpendingPrediction {
                next_month: 0,
                trend: Trend::Stable,
                confidence: 0.2,
                factors: vec![INSUFFICIENT_DATA.to_string()],
            };
        }

        let months = Self::monthly_totals(transactions, category);
        let amounts: Vec<Decimal> = months.iter().map(|m| m.total).collect();
        let avg_spending = mean(&amounts).unwrap_or(Decimal::ZERO);

        let recent = &amounts[amounts.len().saturating_sub(RECENT_MONTHS)..];
        let trend = calculate_trend(recent);

        let prediction = avg_spending
            .saturating_mul(seasonal_multiplier(month_index))
            .saturating_mul(trend_multiplier(trend));
        let next_month = whole_amount(prediction);

        let confidence = (Decimal::from(months.len()) * Decimal::new(1, 1) + Decimal::new(3, 1))
            .min(Decimal::new(9, 1))
            .to_f64()
            .unwrap_or(0.9);

        tracing::trace!(
            category = category.unwrap_or("*"),
            months = months.len(),
            next_month,
            %trend,
            "predicted spending"
        );

        SpendingPrediction {
            next_month,
            trend,
            confidence,
            factors: spending_factors(recent, trend, month_index),
        }
    }

    /// Expense totals per "YYYY-MM", in order of each month's first appearance.
    pub fn monthly_totals(transactions: &[Transaction], category: Option<&str>) -> Vec<MonthlyTotal> {
        let mut months: Vec<MonthlyTotal> = Vec::new();
        for txn in transactions.iter().filter(|t| qualifies(t, category)) {
            let month = txn.month();
            match months.iter_mut().find(|m| m.month == month) {
                Some(bucket) => bucket.total = bucket.total.saturating_add(txn.amount),
                None => months.push(MonthlyTotal {
                    month: month.to_string(),
                    total: txn.amount,
                }),
            }
        }
        months
    }

    /// One prediction per category, in the order given.
    pub fn forecast<I, S>(
        transactions: &[Transaction],
        categories: I,
        month_index: usize,
    ) -> Vec<CategoryForecast>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        categories
            .into_iter()
            .map(|c| CategoryForecast {
                category: c.as_ref().to_string(),
                prediction: Self::predict(transactions, Some(c.as_ref()), month_index),
            })
            .collect()
    }
}

fn qualifies(txn: &Transaction, category: Option<&str>) -> bool {
    txn.is_expense() && category.map_or(true, |c| txn.in_category(c))
}

fn mean(amounts: &[Decimal]) -> Option<Decimal> {
    if amounts.is_empty() {
        return None;
    }
    let sum = amounts
        .iter()
        .fold(Decimal::ZERO, |acc, a| acc.saturating_add(*a));
    Some(sum / Decimal::from(amounts.len()))
}

/// Round half away from zero to a whole amount. Negative projections clamp to
/// zero and anything past `u64::MAX` saturates.
fn whole_amount(prediction: Decimal) -> u64 {
    if prediction <= Decimal::ZERO {
        return 0;
    }
    prediction
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(u64::MAX)
}

/// Compare the first and last of `amounts`; a move beyond ±10% is a trend.
pub(crate) fn calculate_trend(amounts: &[Decimal]) -> Trend {
    let (Some(&first), Some(&last)) = (amounts.first(), amounts.last()) else {
        return Trend::Stable;
    };
    if amounts.len() < 2 {
        return Trend::Stable;
    }

    let threshold = Decimal::new(1, 1);
    match last.checked_sub(first).and_then(|d| d.checked_div(first)) {
        Some(change) if change > threshold => Trend::Increasing,
        Some(change) if change < -threshold => Trend::Decreasing,
        Some(_) => Trend::Stable,
        // Growth from a zero month is unbounded. Zero to zero is flat.
        None if last > first => Trend::Increasing,
        None => Trend::Stable,
    }
}

pub(crate) fn seasonal_multiplier(month_index: usize) -> Decimal {
    SEASONAL_FACTORS
        .get(month_index)
        .map_or(Decimal::ONE, |f| Decimal::new(*f, 2))
}

fn trend_multiplier(trend: Trend) -> Decimal {
    match trend {
        Trend::Increasing => Decimal::new(11, 1),
        Trend::Decreasing => Decimal::new(9, 1),
        Trend::Stable => Decimal::ONE,
    }
}

/// Population variance over squared mean. `None` when undefined (empty or
/// zero mean). A spread too large to represent comes back as `Decimal::MAX`.
pub(crate) fn coefficient_of_variation(amounts: &[Decimal]) -> Option<Decimal> {
    let mean = mean(amounts)?;
    if mean.is_zero() {
        return None;
    }
    // Scale each deviation by the mean before squaring so large totals stay
    // in range: Σ((a - μ) / μ)² / n == σ² / μ².
    let mut sum = Decimal::ZERO;
    for a in amounts {
        let Some(squared) = a
            .checked_sub(mean)
            .and_then(|d| d.checked_div(mean))
            .and_then(|r| r.checked_mul(r))
        else {
            return Some(Decimal::MAX);
        };
        sum = sum.saturating_add(squared);
    }
    Some(sum / Decimal::from(amounts.len()))
}

fn spending_factors(recent: &[Decimal], trend: Trend, month_index: usize) -> Vec<String> {
    let mut factors = Vec::new();

    match trend {
        Trend::Increasing => factors.push("Spending trend is increasing".to_string()),
        Trend::Decreasing => factors.push("Spending trend is decreasing".to_string()),
        Trend::Stable => {}
    }

    if month_index == 8 {
        factors.push("Back-to-school season".to_string());
    }
    if month_index == 10 || month_index == 11 {
        factors.push("Holiday season".to_string());
    }

    let high_variability =
        coefficient_of_variation(recent).is_some_and(|cv| cv > Decimal::new(3, 1));
    if high_variability {
        factors.push("High spending variability".to_string());
    } else {
        factors.push("Consistent spending pattern".to_string());
    }

    factors
}
