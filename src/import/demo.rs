use rust_decimal::Decimal;

use crate::models::{Budgets, Transaction};

const DEMO_EXPENSES: &[(&str, &str, i64, &str, &str)] = &[
    ("1", "Starbucks Coffee", 550, "2024-01-15", "Food & Dining"),
    ("2", "Uber Ride", 1200, "2024-01-14", "Transportation"),
    ("3", "Amazon Purchase", 4599, "2024-01-13", "Shopping"),
    ("4", "Pizza Delivery", 1850, "2024-01-12", "Food & Dining"),
    ("5", "Gas Station", 3500, "2024-01-11", "Transportation"),
    ("6", "Restaurant", 2875, "2024-01-10", "Food & Dining"),
    ("7", "Coffee Shop", 425, "2024-01-09", "Food & Dining"),
    ("8", "Lyft Ride", 850, "2024-01-08", "Transportation"),
    ("9", "Lunch", 1200, "2024-01-07", "Food & Dining"),
    ("10", "Target Shopping", 6799, "2024-01-06", "Shopping"),
];

const DEMO_BUDGETS: &[(&str, i64)] = &[
    ("Food & Dining", 150),
    ("Transportation", 100),
    ("Shopping", 200),
    ("Education", 300),
    ("Entertainment", 50),
];

/// The dashboard's sample month of expenses (January 2024).
pub fn demo_transactions() -> Vec<Transaction> {
    DEMO_EXPENSES
        .iter()
        .map(|(id, description, cents, date, category)| {
            Transaction::expense(id, description, Decimal::new(*cents, 2), date)
                .with_category(category)
        })
        .collect()
}

pub fn demo_budgets() -> Budgets {
    DEMO_BUDGETS
        .iter()
        .map(|(category, limit)| (*category, Decimal::from(*limit)))
        .collect()
}

#[cfg(test)]
#[path = "demo_tests.rs"]
mod tests;
