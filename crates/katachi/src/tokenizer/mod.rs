//! tokenizer モジュール
pub mod vibrato_tokenizer;

/// 再エクスポート
pub use vibrato_tokenizer::{
  FeatureLayout, MorphemeTokenizer, VibratoMorphemeTokenizer, morpheme_from_feature,
};
