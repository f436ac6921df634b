use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

/// Translations of a single language, keyed by translation key.
pub type LanguageEntries = HashMap<String, TransValue>;

/// A single translation value.
///
/// Translation documents hold either a bare template string or an array
/// of plural forms; `untagged` deserialization accepts both shapes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TransValue {
    /// One template string, possibly with `{name}` placeholders.
    Text(String),
    /// Ordered plural forms, conventionally `[singular, plural]`.
    Forms(Vec<String>),
}

/// In-memory translation table: language code → key → value.
///
/// The table is immutable once loaded. Lookups never mutate it, so a
/// shared reference can serve concurrent readers without locking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    languages: HashMap<String, LanguageEntries>,
}

impl TranslationTable {
    /// Entries of `lang`, if the table contains that language.
    #[must_use]
    pub fn language(&self, lang: &str) -> Option<&LanguageEntries> {
        self.languages.get(lang)
    }

    /// Value of `key` in `lang`, if both exist.
    #[must_use]
    pub fn get(&self, lang: &str, key: &str) -> Option<&TransValue> {
        self.languages.get(lang).and_then(|entries| entries.get(key))
    }

    /// Language codes present in the table, in no particular order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Number of languages in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Whether the table contains no languages at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Check every entry against the rules deserialization cannot express.
    ///
    /// Currently the only rule is that plural-forms arrays carry at least
    /// one form. All violations are collected so a broken document is
    /// reported in full rather than one entry at a time.
    ///
    /// # Errors
    /// - A plural-forms array is empty
    pub fn validate(&self) -> Result<(), Vec<EntryError>> {
        let mut errors = Vec::new();

        for (lang, entries) in &self.languages {
            for (key, value) in entries {
                if let TransValue::Forms(forms) = value
                    && forms.is_empty()
                {
                    errors.push(EntryError::new(
                        lang,
                        key,
                        "Plural forms must contain at least one entry",
                    ));
                }
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid entry '{key}' in language '{lang}': {message}")]
pub struct EntryError {
    /// Language code the entry belongs to (e.g., "en")
    pub lang: String,
    /// Key of the offending entry
    pub key: String,
    pub message: String,
}

impl EntryError {
    #[must_use]
    pub fn new(
        lang: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self { lang: lang.into(), key: key.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Translation file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read translation file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse translation file: {0}")]
    ParseError(#[from] jsonc_parser::errors::ParseError),

    #[error("Translation file contains no document")]
    EmptyDocument,

    #[error("Unexpected translation table shape: {0}")]
    ShapeError(#[from] serde_json::Error),

    #[error("Translation table validation failed:\n{}", format_entry_errors(.0))]
    EntryErrors(Vec<EntryError>),
}

fn format_entry_errors(errors: &[EntryError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {}.{} - {}", i + 1, err.lang, err.key, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}
