#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal_macros::dec;
use std::io::Write;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

// ── Options ───────────────────────────────────────────────────

#[test]
fn test_options_defaults() {
    let opts = Options::parse(&args(&["spendsight", "report"])).unwrap();
    assert_eq!(opts, Options::default());
}

#[test]
fn test_options_all_flags() {
    let opts = Options::parse(&args(&[
        "spendsight",
        "predict",
        "--transactions",
        "/tmp/t.csv",
        "--budgets",
        "/tmp/b.csv",
        "--today",
        "2024-09-01",
        "--category",
        "Food & Dining",
        "--json",
    ]))
    .unwrap();
    assert_eq!(opts.transactions, Some(PathBuf::from("/tmp/t.csv")));
    assert_eq!(opts.budgets, Some(PathBuf::from("/tmp/b.csv")));
    assert_eq!(opts.today, NaiveDate::from_ymd_opt(2024, 9, 1));
    assert_eq!(opts.category.as_deref(), Some("Food & Dining"));
    assert!(opts.json);
}

#[test]
fn test_options_invalid_today() {
    let err = Options::parse(&args(&["spendsight", "--today", "09/01/2024"])).unwrap_err();
    assert!(err.to_string().contains("--today"));
}

#[test]
fn test_flag_value_missing_argument() {
    let a = args(&["spendsight", "predict", "--category"]);
    assert_eq!(flag_value(&a, "--category"), None);
}

#[test]
fn test_shellexpand() {
    std::env::set_var("HOME", "/home/test");
    assert_eq!(shellexpand("~/data.csv"), "/home/test/data.csv");
    assert_eq!(shellexpand("/abs/data.csv"), "/abs/data.csv");
}

// ── command_name ──────────────────────────────────────────────

#[test]
fn test_command_name_first_positional() {
    assert_eq!(command_name(&args(&["spendsight", "alerts"])), "alerts");
    assert_eq!(command_name(&args(&["spendsight"])), "report");
    assert_eq!(command_name(&args(&["spendsight", "--json"])), "report");
}

#[test]
fn test_command_name_after_flags() {
    assert_eq!(command_name(&args(&["spendsight", "--json", "alerts"])), "alerts");
    assert_eq!(command_name(&args(&["spendsight", "-v", "categorize", "--json"])), "categorize");
}

#[test]
fn test_command_name_skips_flag_values() {
    let a = args(&["spendsight", "--category", "Food", "predict"]);
    assert_eq!(command_name(&a), "predict");

    let a = args(&["spendsight", "--today", "2024-01-31", "--budgets", "b.csv"]);
    assert_eq!(command_name(&a), "report");
}

// ── load_inputs ───────────────────────────────────────────────

#[test]
fn test_load_inputs_demo_uses_sample_month() {
    let opts = Options {
        budgets: Some(PathBuf::from("/nonexistent/budgets.csv")),
        ..Options::default()
    };
    // Explicit budgets path must exist
    assert!(load_inputs(&opts).is_err());

    let mut budgets = tempfile::NamedTempFile::new().unwrap();
    budgets.write_all(b"category,limit\nShopping,200\n").unwrap();
    let opts = Options {
        budgets: Some(budgets.path().to_path_buf()),
        ..Options::default()
    };
    let inputs = load_inputs(&opts).unwrap();
    assert_eq!(inputs.transactions.len(), 10);
    assert_eq!(inputs.budgets.get("Shopping"), Some(dec!(200)));
    assert_eq!(inputs.today, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
}

#[test]
fn test_load_inputs_today_override() {
    let mut budgets = tempfile::NamedTempFile::new().unwrap();
    budgets.write_all(b"category,limit\n").unwrap();
    let opts = Options {
        budgets: Some(budgets.path().to_path_buf()),
        today: NaiveDate::from_ymd_opt(2030, 5, 5),
        ..Options::default()
    };
    let inputs = load_inputs(&opts).unwrap();
    assert_eq!(inputs.today, NaiveDate::from_ymd_opt(2030, 5, 5).unwrap());
    assert!(inputs.budgets.is_empty());
}

#[test]
fn test_load_inputs_budgets_from_config_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("budgets.csv"), "category,limit\nHealth,75\n").unwrap();

    let inputs = load_inputs_with(&Options::default(), Some(dir.path())).unwrap();
    assert_eq!(inputs.budgets.len(), 1);
    assert_eq!(inputs.budgets.get("Health"), Some(dec!(75)));
    // Transactions still come from the sample month
    assert_eq!(inputs.transactions.len(), 10);
}

#[test]
fn test_load_inputs_explicit_budgets_beat_config_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("budgets.csv"), "category,limit\nHealth,75\n").unwrap();
    let explicit = dir.path().join("other.csv");
    std::fs::write(&explicit, "category,limit\nShopping,20\n").unwrap();

    let opts = Options {
        budgets: Some(explicit),
        ..Options::default()
    };
    let inputs = load_inputs_with(&opts, Some(dir.path())).unwrap();
    assert!(!inputs.budgets.contains("Health"));
    assert_eq!(inputs.budgets.get("Shopping"), Some(dec!(20)));
}

#[test]
fn test_load_inputs_config_dir_without_budgets_uses_sample() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = load_inputs_with(&Options::default(), Some(dir.path())).unwrap();
    assert_eq!(inputs.budgets.len(), 5);
    assert_eq!(inputs.budgets.get("Food & Dining"), Some(dec!(150)));

    let inputs = load_inputs_with(&Options::default(), None).unwrap();
    assert_eq!(inputs.budgets.len(), 5);
}
