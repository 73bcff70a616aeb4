use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{BudgetAlert, BudgetStatus, Budgets, Severity, Transaction};
use crate::predict::Predictor;
use crate::util::{fixed, month_index, month_prefix};

/// Share of the predicted monthly amount assumed to still be ahead, in tenths.
const REMAINING_TENTHS: i64 = 5;

const WARNING_PERCENT: i64 = 80;
const INFO_PERCENT: i64 = 50;

pub struct AlertGenerator;

impl AlertGenerator {
    /// Alerts for the month containing `today`, most severe first.
    ///
    /// At most one alert per budget. Budgets with a zero or negative limit
    /// are skipped.
    pub fn generate(
        transactions: &[Transaction],
        budgets: &Budgets,
        today: NaiveDate,
    ) -> Vec<BudgetAlert> {
        let current_month = month_prefix(today);
        let season = month_index(today);
        let remaining_share = Decimal::new(REMAINING_TENTHS, 1);
        let warning_percent = Decimal::from(WARNING_PERCENT);
        let info_percent = Decimal::from(INFO_PERCENT);
        let mut alerts = Vec::new();

        for (category, limit) in budgets.iter() {
            if limit <= Decimal::ZERO {
                tracing::debug!(category, %limit, "skipping budget with non-positive limit");
                continue;
            }

            let spent = monthly_spending(transactions, category, &current_month);
            let percentage_used = percentage_of(spent, limit);

            let prediction = Predictor::predict(transactions, Some(category), season);
            let predicted_total =
                spent.saturating_add(Decimal::from(prediction.next_month) * remaining_share);

            let (severity, message, predicted_overrun) = if predicted_total > limit {
                let overrun = predicted_total.saturating_sub(limit);
                (
                    Severity::Critical,
                    format!("Predicted to exceed budget by ${} this month", fixed(overrun, 2)),
                    Some(overrun),
                )
            } else if percentage_used > warning_percent {
                (
                    Severity::Warning,
                    format!("{}% of budget used", fixed(percentage_used, 0)),
                    None,
                )
            } else if percentage_used > info_percent {
                (
                    Severity::Info,
                    format!("On track with {}% of budget used", fixed(percentage_used, 0)),
                    None,
                )
            } else {
                tracing::trace!(category, %percentage_used, "budget within limits");
                continue;
            };

            tracing::trace!(category, %severity, %predicted_total, "budget alert");
            alerts.push(BudgetAlert {
                id: format!("{category}-{severity}"),
                category: category.to_string(),
                severity,
                message,
                current_spending: spent,
                budget_limit: limit,
                percentage_used,
                predicted_overrun,
            });
        }

        // Stable: equal severities keep budget order.
        alerts.sort_by(|a, b| b.severity.priority().cmp(&a.severity.priority()));
        alerts
    }

    /// Spending against every budget for the month containing `today`.
    pub fn budget_status(
        transactions: &[Transaction],
        budgets: &Budgets,
        today: NaiveDate,
    ) -> Vec<BudgetStatus> {
        let current_month = month_prefix(today);
        budgets
            .iter()
            .map(|(category, limit)| {
                let spent = monthly_spending(transactions, category, &current_month);
                let percentage_used = if limit > Decimal::ZERO {
                    percentage_of(spent, limit)
                } else {
                    Decimal::ZERO
                };
                BudgetStatus {
                    category: category.to_string(),
                    spent,
                    limit,
                    percentage_used,
                }
            })
            .collect()
    }
}

fn monthly_spending(transactions: &[Transaction], category: &str, month: &str) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.is_expense() && t.in_category(category) && t.date.starts_with(month))
        .fold(Decimal::ZERO, |acc, t| acc.saturating_add(t.amount))
}

/// `spent` as a percentage of a positive `limit`, saturating when the ratio
/// is too large to represent.
fn percentage_of(spent: Decimal, limit: Decimal) -> Decimal {
    spent
        .checked_div(limit)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(if spent.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
}
