#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal_macros::dec;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
}

fn expense(category: &str, amount: rust_decimal::Decimal, date: &str) -> Transaction {
    Transaction::expense("t", "Expense", amount, date).with_category(category)
}

fn sample() -> (Vec<Transaction>, Budgets) {
    let txns = vec![
        expense("Food & Dining", dec!(30), "2024-01-02"),
        expense("Food & Dining", dec!(30), "2024-01-05"),
        expense("Food & Dining", dec!(30), "2024-01-08"),
        expense("Food & Dining", dec!(30), "2024-01-11"),
        expense("Shopping", dec!(50), "2024-01-03"),
        expense("Shopping", dec!(40), "2024-01-04"),
        expense("Transportation", dec!(60), "2024-01-06"),
    ];
    let budgets: Budgets = [
        ("Transportation", dec!(100)),
        ("Shopping", dec!(100)),
        ("Food & Dining", dec!(150)),
    ]
    .into_iter()
    .collect();
    (txns, budgets)
}

#[test]
fn test_build_insights_order_and_content() {
    let (txns, budgets) = sample();
    let insights = build_insights(&ExpenseAnalyzer::new(), &txns, &budgets, today());

    let ids: Vec<&str> = insights.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["Food & Dining-critical", "food-prediction", "Shopping-warning"]
    );

    let forecast = &insights[1];
    assert_eq!(forecast.kind, InsightKind::Prediction);
    assert_eq!(forecast.title, "Food Spending Forecast");
    assert_eq!(
        forecast.description,
        "Predicted to spend $120 on food next month (stable trend)"
    );
    assert_eq!(forecast.priority, Priority::Medium);
    assert_eq!(forecast.confidence, 0.4);

    let critical = &insights[0];
    assert_eq!(critical.kind, InsightKind::Alert);
    assert_eq!(critical.title, "Food & Dining Budget Alert");
    assert_eq!(critical.description, "Predicted to exceed budget by $30.00 this month");
    assert_eq!(critical.priority, Priority::High);
    assert_eq!(critical.confidence, 0.9);
}

#[test]
fn test_build_insights_caps_alerts() {
    let (txns, budgets) = sample();
    let insights = build_insights(&ExpenseAnalyzer::new(), &txns, &budgets, today());
    let alert_count = insights
        .iter()
        .filter(|i| i.kind == InsightKind::Alert)
        .count();
    // The Transportation info alert is the third and is dropped
    assert_eq!(alert_count, 2);
    assert!(insights.iter().all(|i| i.id != "Transportation-info"));
}

#[test]
fn test_increasing_trend_is_high_priority() {
    let txns = vec![
        expense("Food & Dining", dec!(100), "2023-12-10"),
        expense("Food & Dining", dec!(100), "2024-01-02"),
        expense("Food & Dining", dec!(100), "2024-01-03"),
    ];
    let insights = build_insights(&ExpenseAnalyzer::new(), &txns, &Budgets::new(), today());
    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].priority, Priority::High);
    // avg 150 * 1.1
    assert_eq!(
        insights[0].description,
        "Predicted to spend $165 on food next month (increasing trend)"
    );
}

#[test]
fn test_insufficient_food_history() {
    let insights = build_insights(&ExpenseAnalyzer::new(), &[], &Budgets::new(), today());
    assert_eq!(insights.len(), 1);
    assert_eq!(
        insights[0].description,
        "Predicted to spend $0 on food next month (stable trend)"
    );
    assert_eq!(insights[0].confidence, 0.2);
}

#[test]
fn test_insight_serializes_lowercase_tags() {
    let insights = build_insights(&ExpenseAnalyzer::new(), &[], &Budgets::new(), today());
    let json = serde_json::to_value(&insights[0]).unwrap();
    assert_eq!(json["type"], "prediction");
    assert_eq!(json["priority"], "medium");
}

#[test]
fn test_priority_rank() {
    assert!(Priority::High.rank() > Priority::Medium.rank());
    assert!(Priority::Medium.rank() > Priority::Low.rank());
    assert_eq!(Priority::Low.to_string(), "low");
}
