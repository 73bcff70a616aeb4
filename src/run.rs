mod cli;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use spendsight::analyzer::local_today;
use spendsight::import;
use spendsight::models::{Budgets, Transaction};

pub(crate) use cli::as_cli;

/// Flags that consume the argument after them.
const VALUE_FLAGS: [&str; 4] = ["--transactions", "--budgets", "--today", "--category"];

/// Flags shared by every command.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Options {
    pub(crate) transactions: Option<PathBuf>,
    pub(crate) budgets: Option<PathBuf>,
    pub(crate) today: Option<NaiveDate>,
    pub(crate) category: Option<String>,
    pub(crate) json: bool,
}

impl Options {
    pub(crate) fn parse(args: &[String]) -> Result<Self> {
        let today = flag_value(args, "--today")
            .map(|s| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .with_context(|| format!("Invalid --today '{s}', expected YYYY-MM-DD"))
            })
            .transpose()?;

        Ok(Self {
            transactions: flag_value(args, "--transactions").map(|s| PathBuf::from(shellexpand(s))),
            budgets: flag_value(args, "--budgets").map(|s| PathBuf::from(shellexpand(s))),
            today,
            category: flag_value(args, "--category").map(str::to_string),
            json: args.iter().any(|a| a == "--json"),
        })
    }
}

/// Everything a command needs: the data set and the reference date.
pub(crate) struct Inputs {
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) budgets: Budgets,
    pub(crate) today: NaiveDate,
}

/// The first positional argument, skipping flags and their values.
pub(crate) fn command_name(args: &[String]) -> &str {
    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        if VALUE_FLAGS.contains(&arg.as_str()) {
            rest.next();
        } else if !arg.starts_with('-') {
            return arg;
        }
    }
    "report"
}

pub(crate) fn load_inputs(opts: &Options) -> Result<Inputs> {
    let config_dir = directories::ProjectDirs::from("com", "spendsight", "Spendsight")
        .map(|dirs| dirs.config_dir().to_path_buf());
    load_inputs_with(opts, config_dir.as_deref())
}

/// `load_inputs` with the config directory supplied by the caller. Without
/// `--budgets`, `budgets.csv` in `config_dir` wins over the sample budgets.
pub(crate) fn load_inputs_with(opts: &Options, config_dir: Option<&Path>) -> Result<Inputs> {
    let (transactions, demo) = match &opts.transactions {
        Some(path) => (import::load_transactions(path)?, false),
        None => (import::demo_transactions(), true),
    };

    let budgets = match &opts.budgets {
        Some(path) => import::load_budgets(path)?,
        None => match config_dir
            .map(|dir| dir.join("budgets.csv"))
            .filter(|p| p.exists())
        {
            Some(path) => {
                tracing::info!(path = %path.display(), "using budgets from config directory");
                import::load_budgets(&path)?
            }
            None => import::demo_budgets(),
        },
    };

    // The demo data set is a fixed past month; analyze it as of its last day.
    let today = match opts.today {
        Some(d) => d,
        None if demo => latest_date(&transactions).unwrap_or_else(local_today),
        None => local_today(),
    };

    Ok(Inputs {
        transactions,
        budgets,
        today,
    })
}

fn latest_date(transactions: &[Transaction]) -> Option<NaiveDate> {
    transactions.iter().filter_map(Transaction::parsed_date).max()
}

pub(crate) fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
