//! Translation lookup against a loaded table.
//!
//! Lookup is deliberately forgiving about table coverage: a missing
//! language or key degrades to the key itself so a half-translated
//! application still renders something. Caller mistakes (missing
//! interpolation parameters, plural lookups on non-plural keys) are
//! errors instead.

use std::path::Path;

use thiserror::Error;

use crate::format::{
    FormatError,
    interpolate,
};
use crate::table::{
    self,
    LoadError,
    TransValue,
    TranslationTable,
};

/// Errors raised by plural translation lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// Interpolating the selected form failed.
    #[error(transparent)]
    FormatError(#[from] FormatError),

    /// The key resolved to a single string, or fell back to the key
    /// itself, so there are no plural forms to choose from.
    #[error("Translation for '{key}' is not a list")]
    NotPluralizable {
        /// The key whose value lacked plural forms.
        key: String,
    },
}

/// A resolved translation: one string, or every plural form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translated {
    /// A single formatted string (or the key itself on fallback).
    Text(String),
    /// Formatted plural forms, document order preserved.
    List(Vec<String>),
}

impl Translated {
    /// The single string, if this is a `Text` value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::List(_) => None,
        }
    }

    /// The plural forms, if this is a `List` value.
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Text(_) => None,
            Self::List(forms) => Some(forms),
        }
    }

    /// Consume the value, returning the single string if this is `Text`.
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::List(_) => None,
        }
    }
}

/// Resolves translation requests against an immutable table.
///
/// The table never changes after construction, so one `Translator` can be
/// shared freely across threads without locking.
///
/// # Examples
/// ```
/// use ezi18n::Translator;
///
/// let translator = Translator::from_json(
///     r#"{"en": {"greet": "Hi {name}", "apples": ["1 apple", "{n} apples"]}}"#,
/// )?;
///
/// let greeting = translator.translate("greet", "en", &[("name", "Sam")])?;
/// assert_eq!(greeting.as_text(), Some("Hi Sam"));
///
/// assert_eq!(translator.translate_plural("apples", 1, "en", &[])?, "1 apple");
/// assert_eq!(translator.translate_plural("apples", 3, "en", &[("n", "3")])?, "3 apples");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Translator {
    table: TranslationTable,
}

impl Translator {
    /// Wrap an already-deserialized table, validating it first.
    ///
    /// # Errors
    /// - [`LoadError::EntryErrors`] when any entry violates the table
    ///   rules (currently: empty plural-forms arrays)
    pub fn new(table: TranslationTable) -> Result<Self, LoadError> {
        table.validate().map_err(LoadError::EntryErrors)?;
        Ok(Self { table })
    }

    /// Load the translation file at `path`.
    ///
    /// # Errors
    /// - Any [`LoadError`]: missing or unreadable file, unparseable
    ///   document, wrong shape, or invalid entries
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::new(table::load_from_path(path.as_ref())?)
    }

    /// Load the conventional `<stem><suffix>.json` translation file.
    ///
    /// `from_suffixed("main", DEFAULT_SUFFIX)` reads `main_lang.json`
    /// relative to wherever `main` points.
    ///
    /// # Errors
    /// Same as [`Translator::from_path`].
    pub fn from_suffixed(stem: impl AsRef<Path>, suffix: &str) -> Result<Self, LoadError> {
        Self::from_path(table::suffixed_path(stem, suffix))
    }

    /// Parse a translation document held in memory (e.g. `include_str!`).
    ///
    /// # Errors
    /// Same as [`Translator::from_path`], minus the file-system cases.
    pub fn from_json(content: &str) -> Result<Self, LoadError> {
        Self::new(table::load_from_str(content)?)
    }

    /// Read-only access to the underlying table.
    #[must_use]
    pub const fn table(&self) -> &TranslationTable {
        &self.table
    }

    /// Translate `key` into `lang`, interpolating `params`.
    ///
    /// When the language or the key is missing from the table, the miss
    /// is logged at `warn` level and `key` comes back unchanged, and
    /// uninterpolated, as [`Translated::Text`]. A key holding plural
    /// forms yields [`Translated::List`] with every form interpolated.
    ///
    /// # Errors
    /// - [`FormatError`] when a template references a placeholder missing
    ///   from `params`, or its braces are unbalanced
    pub fn translate(
        &self,
        key: &str,
        lang: &str,
        params: &[(&str, &str)],
    ) -> Result<Translated, FormatError> {
        match self.resolve(key, lang) {
            None => Ok(Translated::Text(key.to_string())),
            Some(TransValue::Text(template)) => {
                Ok(Translated::Text(interpolate(template, params)?))
            }
            Some(TransValue::Forms(forms)) => {
                let formatted = forms
                    .iter()
                    .map(|form| interpolate(form, params))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Translated::List(formatted))
            }
        }
    }

    /// Shorthand for [`Translator::translate`].
    ///
    /// # Errors
    /// Same as [`Translator::translate`].
    pub fn t(
        &self,
        key: &str,
        lang: &str,
        params: &[(&str, &str)],
    ) -> Result<Translated, FormatError> {
        self.translate(key, lang, params)
    }

    /// Select and format the singular or plural form of `key`.
    ///
    /// A count of exactly 1 selects the first form; every other count
    /// selects the last. Arrays with more than two forms collapse to that
    /// binary choice, so middle forms are never produced. Only the
    /// selected form is interpolated; `params` needs to cover just that
    /// template.
    ///
    /// # Errors
    /// - [`TranslateError::NotPluralizable`] when the key holds a single
    ///   string, or when the lookup fell back because the language or key
    ///   is missing. Plural lookups never degrade to the key the way
    ///   [`Translator::translate`] does.
    /// - [`TranslateError::FormatError`] when interpolating the selected
    ///   form fails
    pub fn translate_plural(
        &self,
        key: &str,
        count: i64,
        lang: &str,
        params: &[(&str, &str)],
    ) -> Result<String, TranslateError> {
        let forms = match self.resolve(key, lang) {
            Some(TransValue::Forms(forms)) => forms,
            Some(TransValue::Text(_)) | None => {
                return Err(TranslateError::NotPluralizable { key: key.to_string() });
            }
        };

        let selected = if count == 1 { forms.first() } else { forms.last() };
        // Validation guarantees forms are non-empty.
        let Some(template) = selected else {
            return Err(TranslateError::NotPluralizable { key: key.to_string() });
        };

        Ok(interpolate(template, params)?)
    }

    /// Look up the value of `key` in `lang`, logging any miss.
    fn resolve(&self, key: &str, lang: &str) -> Option<&TransValue> {
        let Some(entries) = self.table.language(lang) else {
            tracing::warn!("No translations for language '{lang}'");
            return None;
        };

        let Some(value) = entries.get(key) else {
            tracing::warn!("Translation for '{key}' not found for language '{lang}'");
            return None;
        };

        Some(value)
    }
}
