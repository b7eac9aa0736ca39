use serde::{Deserialize, Serialize};

/// A country and the official languages spoken there
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// Country code, unique within a record list (e.g. "BE")
    pub country: String,
    /// Language codes in the order they were listed (e.g. ["nl", "fr", "de"])
    pub languages: Vec<String>,
}

impl CountryRecord {
    pub fn new<C, I, L>(country: C, languages: I) -> Self
    where
        C: Into<String>,
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            country: country.into(),
            languages: languages.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `language` is one of this country's official languages
    pub fn speaks(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }

    pub fn language_count(&self) -> usize {
        self.languages.len()
    }
}
