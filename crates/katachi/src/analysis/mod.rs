//! analysis モジュール
//!
//! 読みの復元・活用形の判定・活用表の生成・結果の統合
pub mod classifier;
pub mod conjugator;
pub mod form_labels;
pub mod morphology;
pub mod reading;
pub mod unifier;

/// 再エクスポート
pub use classifier::{ConjugationClass, DetectedForm, VerbClassInfo, classify, detect_form};
pub use conjugator::{ConjugationForm, ConjugationTable, Conjugated, conjugate};
pub use morphology::{PartOfSpeech, WordMorphology};
pub use reading::{katakana_to_hiragana, reconstruct};
pub use unifier::{LexiconResult, ResultUnifier, UnifyInput};
