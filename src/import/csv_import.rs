use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::models::{Budgets, Transaction, TransactionKind};

/// Column positions resolved from a transactions CSV header row.
#[derive(Debug, Clone, PartialEq)]
struct TransactionColumns {
    id: Option<usize>,
    date: usize,
    description: usize,
    amount: usize,
    kind: Option<usize>,
    category: Option<usize>,
    merchant: Option<usize>,
}

impl TransactionColumns {
    fn from_headers(headers: &[String]) -> Result<Self> {
        let h: Vec<String> = headers.iter().map(|s| s.trim().to_lowercase()).collect();
        let required = |name: &str| {
            col_index(&h, name).ok_or_else(|| anyhow::anyhow!("Missing required column '{name}'"))
        };

        Ok(Self {
            id: col_index(&h, "id"),
            date: required("date")?,
            description: required("description")?,
            amount: required("amount")?,
            kind: col_index(&h, "type").or_else(|| col_index(&h, "kind")),
            category: col_index(&h, "category"),
            merchant: col_index(&h, "merchant"),
        })
    }
}

/// Load transactions from a headered CSV file.
///
/// Columns: `id,date,description,amount,type,category,merchant`. Only date,
/// description and amount are required; type defaults to expense.
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open transactions file: {}", path.display()))?;
    let txns = read_transactions(file)?;
    tracing::debug!(count = txns.len(), path = %path.display(), "loaded transactions");
    Ok(txns)
}

pub(crate) fn read_transactions<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .context("Failed to read CSV header")?
        .iter()
        .map(|s| s.to_string())
        .collect();
    let cols = TransactionColumns::from_headers(&headers)?;

    let mut transactions = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        // Header is line 1
        let line = i + 2;
        let record = result.with_context(|| format!("Row {line}: failed to read CSV record"))?;
        let field = |col: Option<usize>| {
            col.and_then(|c| record.get(c))
                .map(str::trim)
                .filter(|s| !s.is_empty())
        };

        let date_str = field(Some(cols.date)).unwrap_or_default();
        if date_str.is_empty() {
            continue;
        }
        let date = parse_date(date_str)
            .with_context(|| format!("Row {line}: failed to parse date '{date_str}'"))?;

        let amount = parse_decimal(field(Some(cols.amount)).unwrap_or_default())
            .with_context(|| format!("Row {line}: failed to parse amount"))?;

        let kind = match field(cols.kind) {
            Some(raw) => TransactionKind::parse(raw)
                .ok_or_else(|| anyhow::anyhow!("Row {line}: unknown transaction type '{raw}'"))?,
            None => TransactionKind::Expense,
        };

        transactions.push(Transaction {
            id: field(cols.id).map_or_else(|| (i + 1).to_string(), str::to_string),
            description: field(Some(cols.description)).unwrap_or_default().to_string(),
            amount: amount.abs(),
            date: date.format("%Y-%m-%d").to_string(),
            kind,
            category: field(cols.category).map(str::to_string),
            merchant: field(cols.merchant).map(str::to_string),
        });
    }

    Ok(transactions)
}

/// Load `category,limit` rows into budgets, keeping file order.
pub fn load_budgets(path: &Path) -> Result<Budgets> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open budgets file: {}", path.display()))?;
    let budgets = read_budgets(file)?;
    tracing::debug!(count = budgets.len(), path = %path.display(), "loaded budgets");
    Ok(budgets)
}

pub(crate) fn read_budgets<R: Read>(reader: R) -> Result<Budgets> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let mut budgets = Budgets::new();
    for (i, result) in rdr.records().enumerate() {
        let line = i + 2;
        let record = result.with_context(|| format!("Row {line}: failed to read CSV record"))?;
        let category = record.get(0).map(str::trim).unwrap_or_default();
        if category.is_empty() {
            continue;
        }
        let limit = parse_decimal(record.get(1).unwrap_or_default())
            .with_context(|| format!("Row {line}: failed to parse limit for '{category}'"))?;
        budgets.insert(category, limit);
    }
    Ok(budgets)
}

fn col_index(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    for fmt in &["%Y-%m-%d", "%m/%d/%Y", "%m-%d-%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d);
        }
    }
    anyhow::bail!("Could not parse date: {}", s)
}

fn parse_decimal(s: &str) -> Result<Decimal> {
    let cleaned = s
        .replace(['$', ','], "")
        .replace('(', "-")
        .replace(')', "")
        .trim()
        .to_string();
    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(&cleaned).context(format!("Failed to parse '{}' as decimal", s))
}

#[cfg(test)]
#[path = "csv_import_tests.rs"]
mod tests;
