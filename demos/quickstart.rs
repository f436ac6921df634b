//! 翻訳 API のクイックスタート
//!
//! 使用方法:
//! ```
//! cargo run --example quickstart
//! ```

use ezi18n::Translator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // tracing を初期化（INFO レベル、フォールバックの warn を表示する）
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let translator = Translator::from_json(
        r#"{
            // 手書きの翻訳ファイルなのでコメントも書ける
            "en": {
                "greet": "Hi {name}",
                "apples": ["1 apple", "{n} apples"],
            },
            "it": {
                "greet": "Ciao {name}",
                "apples": ["1 mela", "{n} mele"],
            },
        }"#,
    )?;

    println!("=== Text lookups ===");
    let greeting = translator.translate("greet", "en", &[("name", "Sam")])?;
    println!("en: {:?}", greeting.as_text());
    let greeting = translator.t("greet", "it", &[("name", "Sam")])?;
    println!("it: {:?}", greeting.as_text());
    println!();

    println!("=== Plural lookups ===");
    println!("1 (en): {}", translator.translate_plural("apples", 1, "en", &[])?);
    println!("5 (en): {}", translator.translate_plural("apples", 5, "en", &[("n", "5")])?);
    println!("3 (it): {}", translator.translate_plural("apples", 3, "it", &[("n", "3")])?);
    println!();

    // 未知の言語は warn ログを出してキーをそのまま返す
    println!("=== Fallback ===");
    let fallback = translator.translate("greet", "fr", &[("name", "Sam")])?;
    println!("fr: {:?}", fallback.as_text());

    Ok(())
}
