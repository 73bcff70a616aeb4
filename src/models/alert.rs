use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Sort weight, higher is more urgent.
    pub fn priority(&self) -> u8 {
        match self {
            Self::Critical => 3,
            Self::Warning => 2,
            Self::Info => 1,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAlert {
    /// Format: "{category}-{severity}"
    pub id: String,
    pub category: String,
    #[serde(rename = "type")]
    pub severity: Severity,
    pub message: String,
    pub current_spending: Decimal,
    pub budget_limit: Decimal,
    pub percentage_used: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_overrun: Option<Decimal>,
}

/// Progress of one budget for the current month, whether or not it alerts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub category: String,
    pub spent: Decimal,
    pub limit: Decimal,
    pub percentage_used: Decimal,
}
