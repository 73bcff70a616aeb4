mod alert;
mod budget;
mod prediction;
mod transaction;

pub use alert::{BudgetAlert, BudgetStatus, Severity};
pub use budget::Budgets;
pub use prediction::{CategoryForecast, CategoryPrediction, MonthlyTotal, SpendingPrediction, Trend};
pub use transaction::{Transaction, TransactionKind};
