//! Rule-based expense analysis for a personal-finance dashboard.
//!
//! Three pure operations sit at the core: keyword categorization
//! ([`categorize::Categorizer`]), next-month spending projection
//! ([`predict::Predictor`]) and tiered budget alerts
//! ([`alerts::AlertGenerator`]). [`analyzer::ExpenseAnalyzer`] bundles them
//! behind an explicit reference date.

pub mod alerts;
pub mod analyzer;
pub mod categorize;
pub mod import;
pub mod insights;
pub mod models;
pub mod predict;
pub mod util;

pub use analyzer::ExpenseAnalyzer;
