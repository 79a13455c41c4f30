//! lexicon モジュール
pub mod jmdict_lexicon;
pub mod lexicon_manager;

/// 再エクスポート
pub use jmdict_lexicon::{JmdictLexicon, Lexicon, LookupOutcome};
pub use lexicon_manager::LexiconManager;
