//! Translation document loading.
//!
//! Documents are JSON with one top-level object per language. JSONC
//! extensions (comments, trailing commas) are accepted as well, since
//! translation files tend to be maintained by hand.

use std::path::{
    Path,
    PathBuf,
};

use jsonc_parser::ParseOptions;

use super::types::{
    LoadError,
    TranslationTable,
};

/// Conventional suffix of translation files: `<stem>_lang.json`.
pub const DEFAULT_SUFFIX: &str = "_lang";

/// Read and parse the translation document at `path`.
///
/// # Arguments
/// * `path` - Path to a JSON/JSONC translation document
///
/// # Errors
/// - [`LoadError::NotFound`] when the file does not exist
/// - [`LoadError::IoError`] for any other read failure
/// - Parse and shape failures as in [`load_from_str`]
pub fn load_from_path(path: &Path) -> Result<TranslationTable, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound { path: path.to_path_buf() });
    }

    tracing::debug!("Loading translation file: {:?}", path);

    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

/// Parse a translation document held in memory.
///
/// # Errors
/// - [`LoadError::ParseError`] when the text is not valid JSON/JSONC
/// - [`LoadError::EmptyDocument`] when the text contains no value at all
/// - [`LoadError::ShapeError`] when the value is not a
///   language → key → value map
pub fn load_from_str(content: &str) -> Result<TranslationTable, LoadError> {
    let value = jsonc_parser::parse_to_serde_value(content, &ParseOptions::default())?
        .ok_or(LoadError::EmptyDocument)?;
    let table: TranslationTable = serde_json::from_value(value)?;
    Ok(table)
}

/// Build the conventional translation-file path for `stem`:
/// `<stem><suffix>.json`.
///
/// The stem is used verbatim and may carry directory components, so
/// `suffixed_path("locales/app", DEFAULT_SUFFIX)` yields
/// `locales/app_lang.json`.
#[must_use]
pub fn suffixed_path(stem: impl AsRef<Path>, suffix: &str) -> PathBuf {
    let mut file_name = stem.as_ref().as_os_str().to_os_string();
    file_name.push(suffix);
    file_name.push(".json");
    PathBuf::from(file_name)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::table::TransValue;

    /// `load_from_path`: well-formed document
    #[rstest]
    fn test_load_from_path_with_valid_document() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("app_lang.json");
        fs::write(&file_path, r#"{"en": {"greet": "Hi {name}"}}"#).unwrap();

        let table = load_from_path(&file_path).unwrap();

        assert_that!(
            table.get("en", "greet"),
            some(eq(&TransValue::Text("Hi {name}".to_string())))
        );
    }

    /// `load_from_path`: missing file reports the path it tried
    #[rstest]
    fn test_load_from_path_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nope_lang.json");

        let result = load_from_path(&file_path);

        let err = result.unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert_that!(err.to_string(), contains_substring("nope_lang.json"));
    }

    /// `load_from_path`: unreadable syntax
    #[rstest]
    fn test_load_from_path_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bad_lang.json");
        fs::write(&file_path, "not json at all").unwrap();

        let result = load_from_path(&file_path);

        assert!(matches!(result, Err(LoadError::ParseError(_))));
    }

    #[rstest]
    fn test_load_from_str_accepts_jsonc() {
        let content = r#"{
            // Greeting shown on the landing page.
            "en": {
                "greet": "Hi {name}",
                "apples": ["1 apple", "{n} apples"],
            },
        }"#;

        let table = load_from_str(content).unwrap();

        assert_that!(
            table.get("en", "apples"),
            some(eq(&TransValue::Forms(vec![
                "1 apple".to_string(),
                "{n} apples".to_string()
            ])))
        );
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace_only("  \n\t")]
    #[case::comment_only("// nothing here\n")]
    fn test_load_from_str_empty_document(#[case] content: &str) {
        let result = load_from_str(content);

        assert!(matches!(result, Err(LoadError::EmptyDocument)));
    }

    #[rstest]
    #[case::top_level_array(r#"["en"]"#)]
    #[case::value_is_number(r#"{"en": {"answer": 42}}"#)]
    #[case::nested_object(r#"{"en": {"menu": {"title": "Menu"}}}"#)]
    fn test_load_from_str_wrong_shape(#[case] content: &str) {
        let result = load_from_str(content);

        assert!(matches!(result, Err(LoadError::ShapeError(_))));
    }

    #[rstest]
    #[case::bare_stem("main", "main_lang.json")]
    #[case::with_directory("locales/app", "locales/app_lang.json")]
    #[case::with_dot_in_stem("v1.2/app", "v1.2/app_lang.json")]
    fn test_suffixed_path_default_suffix(#[case] stem: &str, #[case] expected: &str) {
        assert_eq!(suffixed_path(stem, DEFAULT_SUFFIX), PathBuf::from(expected));
    }

    #[rstest]
    fn test_suffixed_path_custom_suffix() {
        assert_eq!(suffixed_path("main", "_i18n"), PathBuf::from("main_i18n.json"));
        assert_eq!(suffixed_path("main", ""), PathBuf::from("main.json"));
    }
}
