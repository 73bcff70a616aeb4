mod csv_import;
mod demo;

pub use csv_import::{load_budgets, load_transactions};
pub use demo::{demo_budgets, demo_transactions};
