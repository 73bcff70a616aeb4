/// Category -> lowercase keyword substrings, scanned in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordTable {
    entries: Vec<CategoryKeywords>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CategoryKeywords {
    pub(crate) category: String,
    pub(crate) keywords: Vec<String>,
}

const DEFAULT_RULES: &[(&str, &[&str])] = &[
    (
        "Food & Dining",
        &[
            "restaurant", "cafe", "coffee", "pizza", "burger", "food", "dining", "mcdonalds",
            "subway", "starbucks", "doordash", "ubereats", "grubhub",
        ],
    ),
    (
        "Transportation",
        &[
            "uber", "lyft", "taxi", "gas", "fuel", "metro", "bus", "train", "parking", "toll",
            "car", "vehicle", "transit",
        ],
    ),
    (
        "Shopping",
        &[
            "amazon", "target", "walmart", "store", "shop", "retail", "clothing", "electronics",
            "purchase", "buy",
        ],
    ),
    (
        "Education",
        &[
            "university", "college", "school", "tuition", "books", "supplies", "academic",
            "course", "textbook", "library",
        ],
    ),
    (
        "Entertainment",
        &[
            "movie", "theater", "game", "netflix", "spotify", "music", "concert", "event", "fun",
            "entertainment", "streaming",
        ],
    ),
    (
        "Health",
        &[
            "doctor", "hospital", "pharmacy", "medical", "health", "clinic", "prescription",
            "medicine", "dental",
        ],
    ),
    (
        "Utilities",
        &[
            "electric", "gas", "water", "internet", "phone", "cable", "utility", "bill",
            "service",
        ],
    ),
];

impl KeywordTable {
    /// Build a table from `(category, keywords)` pairs. Keywords are lowercased.
    pub fn new<C, K, I>(entries: I) -> Self
    where
        C: Into<String>,
        K: AsRef<str>,
        I: IntoIterator<Item = (C, Vec<K>)>,
    {
        let entries = entries
            .into_iter()
            .map(|(category, keywords)| CategoryKeywords {
                category: category.into(),
                keywords: keywords
                    .iter()
                    .map(|k| k.as_ref().to_lowercase())
                    .collect(),
            })
            .collect();
        Self { entries }
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.category.as_str())
    }

    pub fn keywords(&self, category: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.keywords.as_slice())
    }

    pub(crate) fn entries(&self) -> &[CategoryKeywords] {
        &self.entries
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_RULES
                .iter()
                .map(|(category, keywords)| (*category, keywords.to_vec())),
        )
    }
}
