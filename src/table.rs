//! Translation table: data model and document loading.

/// Translation document loader
mod loader;
/// Table types and validation
mod types;

pub use loader::{
    DEFAULT_SUFFIX,
    load_from_path,
    load_from_str,
    suffixed_path,
};
pub use types::{
    EntryError,
    LanguageEntries,
    LoadError,
    TransValue,
    TranslationTable,
};
