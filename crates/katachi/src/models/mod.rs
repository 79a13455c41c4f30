//! models module
pub mod model_definition;

/// 再エクスポート
pub use model_definition::{
  Conjugation, GrammarPoint, LexiconEntry, Morpheme, Sense, UnifiedAnalysisRecord, VerbConjugation,
  VocabularyItem,
};
