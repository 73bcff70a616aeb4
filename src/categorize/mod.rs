mod keywords;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::{CategoryPrediction, Transaction};

pub use keywords::KeywordTable;

/// Label returned when no keyword matches.
pub const FALLBACK_CATEGORY: &str = "Other";

const FALLBACK_CONFIDENCE: f64 = 0.3;

/// Keyword-substring categorizer over a fixed [`KeywordTable`].
#[derive(Debug, Clone, Default)]
pub struct Categorizer {
    table: KeywordTable,
}

impl Categorizer {
    pub fn new(table: KeywordTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &KeywordTable {
        &self.table
    }

    pub fn categorize(&self, transaction: &Transaction) -> CategoryPrediction {
        let search_text = format!(
            "{} {}",
            transaction.description.to_lowercase(),
            transaction.merchant.as_deref().unwrap_or("").to_lowercase()
        );

        let mut best = CategoryPrediction {
            category: FALLBACK_CATEGORY.to_string(),
            confidence: FALLBACK_CONFIDENCE,
            reasoning: "No clear pattern found".to_string(),
        };

        for entry in self.table.entries() {
            let matches: Vec<&str> = entry
                .keywords
                .iter()
                .filter(|k| search_text.contains(k.as_str()))
                .map(String::as_str)
                .collect();

            if matches.is_empty() {
                continue;
            }

            // Strictly greater: on ties the earlier category keeps the win.
            let confidence = match_confidence(matches.len());
            if confidence > best.confidence {
                best = CategoryPrediction {
                    category: entry.category.clone(),
                    confidence,
                    reasoning: format!("Matched keywords: {}", matches.join(", ")),
                };
            }
        }

        tracing::trace!(
            id = %transaction.id,
            category = %best.category,
            confidence = best.confidence,
            "categorized transaction"
        );
        best
    }

    pub fn categorize_batch(&self, transactions: &[Transaction]) -> Vec<CategoryPrediction> {
        transactions.iter().map(|t| self.categorize(t)).collect()
    }

    /// Category to pre-fill for an uncategorized transaction, if any keyword matched.
    pub fn suggest_category(&self, transaction: &Transaction) -> Option<String> {
        if transaction.category.is_some() {
            return None;
        }
        let prediction = self.categorize(transaction);
        (prediction.category != FALLBACK_CATEGORY).then_some(prediction.category)
    }
}

/// `min(0.95, 0.5 + matches * 0.15)`
fn match_confidence(matches: usize) -> f64 {
    let raw = Decimal::new(50, 2) + Decimal::from(matches) * Decimal::new(15, 2);
    raw.min(Decimal::new(95, 2)).to_f64().unwrap_or(0.95)
}
