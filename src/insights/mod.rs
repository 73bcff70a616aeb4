//! Dashboard insight cards composed from engine output.

use chrono::NaiveDate;
use serde::Serialize;

use crate::analyzer::ExpenseAnalyzer;
use crate::models::{BudgetAlert, Budgets, Severity, SpendingPrediction, Transaction, Trend};

/// Category the forecast card is built for.
pub const FORECAST_CATEGORY: &str = "Food & Dining";

/// Number of budget alerts surfaced as insight cards.
const MAX_ALERT_INSIGHTS: usize = 2;

const ALERT_CONFIDENCE: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Prediction,
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    pub confidence: f64,
    pub priority: Priority,
}

/// Forecast card plus the most severe alerts, highest priority first.
pub fn build_insights(
    analyzer: &ExpenseAnalyzer,
    transactions: &[Transaction],
    budgets: &Budgets,
    today: NaiveDate,
) -> Vec<Insight> {
    let prediction = analyzer.predict_spending(transactions, Some(FORECAST_CATEGORY), today);
    let mut insights = vec![forecast_insight(&prediction)];

    let alerts = analyzer.generate_budget_alerts(transactions, budgets, today);
    insights.extend(alerts.iter().take(MAX_ALERT_INSIGHTS).map(alert_insight));

    insights.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank()));
    insights
}

fn forecast_insight(prediction: &SpendingPrediction) -> Insight {
    Insight {
        id: "food-prediction".to_string(),
        kind: InsightKind::Prediction,
        title: "Food Spending Forecast".to_string(),
        description: format!(
            "Predicted to spend ${} on food next month ({} trend)",
            prediction.next_month,
            prediction.trend
        ),
        confidence: prediction.confidence,
        priority: if prediction.trend == Trend::Increasing {
            Priority::High
        } else {
            Priority::Medium
        },
    }
}

fn alert_insight(alert: &BudgetAlert) -> Insight {
    Insight {
        id: alert.id.clone(),
        kind: InsightKind::Alert,
        title: format!("{} Budget Alert", alert.category),
        description: alert.message.clone(),
        confidence: ALERT_CONFIDENCE,
        priority: match alert.severity {
            Severity::Critical => Priority::High,
            Severity::Warning => Priority::Medium,
            Severity::Info => Priority::Low,
        },
    }
}

#[cfg(test)]
mod tests;
