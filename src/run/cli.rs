use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Serialize;

use spendsight::insights::{build_insights, Insight};
use spendsight::models::{BudgetStatus, CategoryForecast, CategoryPrediction, SpendingPrediction};
use spendsight::util::{fixed, format_amount, month_prefix};
use spendsight::ExpenseAnalyzer;

use super::{command_name, load_inputs, Inputs, Options};

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    let command = command_name(args);

    if command == "help" || args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }
    if command == "version" || args.iter().any(|a| a == "--version" || a == "-V") {
        println!("spendsight {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let opts = Options::parse(args)?;
    let analyzer = ExpenseAnalyzer::new();

    match command {
        "report" | "r" => cli_report(&analyzer, &opts),
        "categorize" | "c" => cli_categorize(&analyzer, &opts),
        "predict" | "p" => cli_predict(&analyzer, &opts),
        "alerts" | "a" => cli_alerts(&analyzer, &opts),
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Spendsight — expense categorization, forecasts and budget alerts");
    println!();
    println!("Usage: spendsight [command] [options]");
    println!();
    println!("Commands:");
    println!("  report                        Insights, forecasts and alerts (default)");
    println!("  categorize                    Suggest a category for every transaction");
    println!("  predict                       Forecast next month's spending");
    println!("    --category <name>           Only consider one category");
    println!("  alerts                        Budget alerts for the current month");
    println!();
    println!("Options:");
    println!("  --transactions <file.csv>     id,date,description,amount,type,category,merchant");
    println!("                                (default: built-in sample month)");
    println!("  --budgets <file.csv>          category,limit (default: config dir, then sample)");
    println!("  --today <YYYY-MM-DD>          Reference date (default: today)");
    println!("  --json                        Print JSON instead of text");
    println!("  -v, --verbose                 Debug logging on stderr");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{out}");
    Ok(())
}

fn cli_report(analyzer: &ExpenseAnalyzer, opts: &Options) -> Result<()> {
    let Inputs {
        transactions,
        budgets,
        today,
    } = load_inputs(opts)?;

    let insights = build_insights(analyzer, &transactions, &budgets, today);
    let categories: Vec<&str> = budgets.categories().collect();
    let forecasts = analyzer.forecast(&transactions, &categories, today);
    let status = analyzer.budget_status(&transactions, &budgets, today);

    if opts.json {
        #[derive(Serialize)]
        struct Report<'a> {
            month: String,
            insights: &'a [Insight],
            forecasts: &'a [CategoryForecast],
            budgets: &'a [BudgetStatus],
        }
        return print_json(&Report {
            month: month_prefix(today),
            insights: &insights,
            forecasts: &forecasts,
            budgets: &status,
        });
    }

    println!("Spendsight — {}", month_prefix(today));
    println!("{}", "─".repeat(60));

    println!("Insights:");
    for insight in &insights {
        println!(
            "  [{:<6}] {}: {} ({:.0}% confidence)",
            insight.priority.as_str(),
            insight.title,
            insight.description,
            insight.confidence * 100.0
        );
    }

    if !status.is_empty() {
        println!();
        println!("Budgets:");
        for row in &status {
            println!(
                "  {:<20} {:>12} of {:>12}  {:>5}%",
                row.category,
                format_amount(row.spent),
                format_amount(row.limit),
                fixed(row.percentage_used, 0)
            );
        }

        println!();
        println!("Next month:");
        for forecast in &forecasts {
            println!(
                "  {:<20} {}",
                forecast.category,
                describe_prediction(&forecast.prediction)
            );
        }
    }

    Ok(())
}

fn cli_categorize(analyzer: &ExpenseAnalyzer, opts: &Options) -> Result<()> {
    let inputs = load_inputs(opts)?;
    let predictions = analyzer.categorizer().categorize_batch(&inputs.transactions);

    if opts.json {
        #[derive(Serialize)]
        struct Row<'a> {
            id: &'a str,
            description: &'a str,
            #[serde(flatten)]
            prediction: &'a CategoryPrediction,
        }
        let rows: Vec<Row> = inputs
            .transactions
            .iter()
            .zip(&predictions)
            .map(|(t, p)| Row {
                id: &t.id,
                description: &t.description,
                prediction: p,
            })
            .collect();
        return print_json(&rows);
    }

    println!("{:<6} {:<28} {:<16} {:>5}  Reasoning", "ID", "Description", "Category", "Conf");
    println!("{}", "─".repeat(80));
    for (txn, p) in inputs.transactions.iter().zip(&predictions) {
        println!(
            "{:<6} {:<28} {:<16} {:>5.2}  {}",
            txn.id,
            truncate(&txn.description, 28),
            p.category,
            p.confidence,
            p.reasoning
        );
    }

    let uncategorized = inputs
        .transactions
        .iter()
        .filter(|t| t.category.is_none())
        .count();
    if uncategorized > 0 {
        let suggested = inputs
            .transactions
            .iter()
            .filter_map(|t| analyzer.categorizer().suggest_category(t))
            .count();
        println!();
        println!("Suggestions for {suggested}/{uncategorized} uncategorized transactions");
    }
    Ok(())
}

fn cli_predict(analyzer: &ExpenseAnalyzer, opts: &Options) -> Result<()> {
    let inputs = load_inputs(opts)?;
    let category = opts.category.as_deref();
    let prediction = analyzer.predict_spending(&inputs.transactions, category, inputs.today);

    if opts.json {
        return print_json(&prediction);
    }

    println!(
        "{} — {}",
        category.unwrap_or("All expenses"),
        describe_prediction(&prediction)
    );
    for month in analyzer.monthly_totals(&inputs.transactions, category) {
        println!("  {}  {:>12}", month.month, format_amount(month.total));
    }
    for factor in &prediction.factors {
        println!("  • {factor}");
    }
    Ok(())
}

fn cli_alerts(analyzer: &ExpenseAnalyzer, opts: &Options) -> Result<()> {
    let inputs = load_inputs(opts)?;
    let alerts = analyzer.generate_budget_alerts(&inputs.transactions, &inputs.budgets, inputs.today);

    if opts.json {
        return print_json(&alerts);
    }

    if alerts.is_empty() {
        println!("No budget alerts for {}", month_prefix(inputs.today));
        return Ok(());
    }
    for alert in &alerts {
        println!(
            "[{:<8}] {:<20} {}  ({} of {}, {}%)",
            alert.severity.as_str().to_uppercase(),
            alert.category,
            alert.message,
            format_amount(alert.current_spending),
            format_amount(alert.budget_limit),
            fixed(alert.percentage_used, 0)
        );
    }
    Ok(())
}

fn describe_prediction(p: &SpendingPrediction) -> String {
    format!(
        "{} ({}, {:.0}% confidence)",
        format_amount(Decimal::from(p.next_month)),
        p.trend,
        p.confidence * 100.0
    )
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}
