use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Category label -> monthly spending limit, kept in insertion order.
///
/// Alert generation walks budgets in this order, and alerts of equal
/// severity come out in the same order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Budgets {
    entries: Vec<(String, Decimal)>,
}

impl Budgets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limit for `category`. An existing category keeps its position.
    pub fn insert(&mut self, category: &str, limit: Decimal) {
        match self.entries.iter_mut().find(|(name, _)| name == category) {
            Some(entry) => entry.1 = limit,
            None => self.entries.push((category.to_string(), limit)),
        }
    }

    pub fn get(&self, category: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, limit)| *limit)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.get(category).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.entries.iter().map(|(name, limit)| (name.as_str(), *limit))
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, Decimal)> for Budgets {
    fn from_iter<I: IntoIterator<Item = (S, Decimal)>>(iter: I) -> Self {
        let mut budgets = Self::new();
        for (category, limit) in iter {
            budgets.insert(category.as_ref(), limit);
        }
        budgets
    }
}

impl Serialize for Budgets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, limit) in &self.entries {
            map.serialize_entry(category, limit)?;
        }
        map.end()
    }
}
