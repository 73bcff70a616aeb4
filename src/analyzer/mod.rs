//! Entry point for presentation code.
//!
//! Every clock-dependent operation takes the reference date explicitly; the
//! `*_now` variants read the local clock once and delegate.

use chrono::NaiveDate;

use crate::alerts::AlertGenerator;
use crate::categorize::{Categorizer, KeywordTable};
use crate::models::{
    BudgetAlert, BudgetStatus, Budgets, CategoryForecast, CategoryPrediction, MonthlyTotal,
    SpendingPrediction, Transaction,
};
use crate::predict::Predictor;
use crate::util::month_index;

#[derive(Debug, Clone, Default)]
pub struct ExpenseAnalyzer {
    categorizer: Categorizer,
}

impl ExpenseAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keywords(table: KeywordTable) -> Self {
        Self {
            categorizer: Categorizer::new(table),
        }
    }

    pub fn categorizer(&self) -> &Categorizer {
        &self.categorizer
    }

    pub fn categorize_expense(&self, transaction: &Transaction) -> CategoryPrediction {
        self.categorizer.categorize(transaction)
    }

    pub fn predict_spending(
        &self,
        transactions: &[Transaction],
        category: Option<&str>,
        today: NaiveDate,
    ) -> SpendingPrediction {
        Predictor::predict(transactions, category, month_index(today))
    }

    pub fn forecast(
        &self,
        transactions: &[Transaction],
        categories: &[&str],
        today: NaiveDate,
    ) -> Vec<CategoryForecast> {
        Predictor::forecast(transactions, categories.iter().copied(), month_index(today))
    }

    pub fn monthly_totals(
        &self,
        transactions: &[Transaction],
        category: Option<&str>,
    ) -> Vec<MonthlyTotal> {
        Predictor::monthly_totals(transactions, category)
    }

    pub fn generate_budget_alerts(
        &self,
        transactions: &[Transaction],
        budgets: &Budgets,
        today: NaiveDate,
    ) -> Vec<BudgetAlert> {
        AlertGenerator::generate(transactions, budgets, today)
    }

    pub fn budget_status(
        &self,
        transactions: &[Transaction],
        budgets: &Budgets,
        today: NaiveDate,
    ) -> Vec<BudgetStatus> {
        AlertGenerator::budget_status(transactions, budgets, today)
    }

    pub fn predict_spending_now(
        &self,
        transactions: &[Transaction],
        category: Option<&str>,
    ) -> SpendingPrediction {
        self.predict_spending(transactions, category, local_today())
    }

    pub fn generate_budget_alerts_now(
        &self,
        transactions: &[Transaction],
        budgets: &Budgets,
    ) -> Vec<BudgetAlert> {
        self.generate_budget_alerts(transactions, budgets, local_today())
    }
}

/// Today's date on the local clock.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
