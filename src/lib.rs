//! ezi18n
//!
//! 手軽に使えるシンプルな i18n ライブラリ
//!
//! JSON の翻訳テーブルを読み込み、キー検索とフォールバック、
//! プレースホルダ補間、単数形/複数形の選択を提供する

pub mod format;
pub mod table;
pub mod translator;

// 主要な型を再エクスポート
pub use format::FormatError;
pub use table::{
    DEFAULT_SUFFIX,
    EntryError,
    LanguageEntries,
    LoadError,
    TransValue,
    TranslationTable,
};
pub use translator::{
    TranslateError,
    Translated,
    Translator,
};
