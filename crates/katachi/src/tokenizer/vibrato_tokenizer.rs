//! Morpheme tokenizer using vibrato

use std::sync::Arc;
use tracing::debug;
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::Tokenizer as VibratoImpl;

use crate::models::Morpheme;

/// Splits text into [`Morpheme`]s.
///
/// Implementations are shared between request threads and must be usable
/// concurrently. Tokenization never fails; an empty list means nothing could
/// be analyzed.
pub trait MorphemeTokenizer: Send + Sync {
  /// Tokenizes `text` into morphemes in surface order
  fn tokenize(&self, text: &str) -> Vec<Morpheme>;
}

/// Column layout of the dictionary feature string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureLayout {
  /// `品詞,品詞細分類1,品詞細分類2,品詞細分類3,活用型,活用形,原形,読み,発音`
  Ipadic,
  /// `pos1..pos4,cType,cForm,lForm,lemma,orth,pron,orthBase,pronBase,goshu,...,kana,kanaBase,...`
  Unidic,
}

/// Number of leading feature columns that form `pos_tags`.
const POS_TAG_COLUMNS: usize = 6;

/// UniDic feature strings have at least this many columns.
const UNIDIC_MIN_COLUMNS: usize = 22;

impl FeatureLayout {
  /// Guesses the layout from the number of feature columns.
  pub fn detect(fields: &[&str]) -> Self {
    if fields.len() >= UNIDIC_MIN_COLUMNS { FeatureLayout::Unidic } else { FeatureLayout::Ipadic }
  }
}

/// Japanese morpheme tokenizer using vibrato-rkyv
///
/// - Holds the shared dictionary only
/// - `Clone + Send + Sync`
#[derive(Clone)]
pub struct VibratoMorphemeTokenizer {
  inner: VibratoImpl,
}

impl VibratoMorphemeTokenizer {
  /// Constructs a tokenizer from a shared dictionary (`Arc<Dictionary>`).
  ///
  /// Use this with `DictionaryManager::load()`.
  ///
  /// # Examples
  /// ```rust,no_run
  /// # use katachi::dictionary::DictionaryManager;
  /// # use katachi::tokenizer::{MorphemeTokenizer, VibratoMorphemeTokenizer};
  /// # use vibrato_rkyv::dictionary::PresetDictionaryKind;
  /// let manager = DictionaryManager::with_preset(PresetDictionaryKind::UnidicCwj).unwrap();
  /// let dict = manager.load().unwrap();
  /// let tokenizer = VibratoMorphemeTokenizer::from_shared_dictionary(dict);
  /// let morphemes = tokenizer.tokenize("書いて");
  /// ```
  pub fn from_shared_dictionary(dict: Arc<Dictionary>) -> Self {
    Self {
      inner: VibratoImpl::from_shared_dictionary(dict),
    }
  }
}

impl MorphemeTokenizer for VibratoMorphemeTokenizer {
  fn tokenize(&self, text: &str) -> Vec<Morpheme> {
    // worker holds lattice for analysis and calculation area.
    // Created each time
    let mut worker = self.inner.new_worker();

    worker.reset_sentence(text);
    worker.tokenize();

    debug!(input_text = %text, "Start morphological analysis");

    let mut morphemes = Vec::with_capacity(worker.num_tokens());
    for token in worker.token_iter() {
      let surface = token.surface();
      let feature = token.feature();

      debug!(
        surface = %surface,
        ?feature,
        start = token.range_byte().start,
        end = token.range_byte().end,
        "Token"
      );

      morphemes.push(morpheme_from_feature(surface, feature));
    }

    debug!(input_text = %text, total_tokens = morphemes.len(), "Morphological analysis completed");

    morphemes
  }
}

/// Builds a [`Morpheme`] from a surface and its CSV feature string.
///
/// Missing columns (unknown words carry only the part-of-speech columns)
/// fall back to the surface for the dictionary form and to an empty reading.
pub fn morpheme_from_feature(surface: &str, feature: &str) -> Morpheme {
  let fields: Vec<&str> = feature.split(',').collect();
  let column = |index: usize| fields.get(index).copied().filter(|v| !v.is_empty() && *v != "*");

  let pos_tags = (0..POS_TAG_COLUMNS).map(|i| fields.get(i).copied().unwrap_or("*"));

  match FeatureLayout::detect(&fields) {
    FeatureLayout::Ipadic => {
      let base = column(6).unwrap_or(surface);
      let reading = column(7).unwrap_or_default();
      let morpheme = Morpheme::new(surface, base, reading, base, pos_tags);

      // IPADIC has no reading of the base form; it is only known when uninflected.
      if surface == base && !reading.is_empty() {
        morpheme.with_dictionary_reading(reading)
      } else {
        morpheme
      }
    }
    FeatureLayout::Unidic => {
      let lemma = column(7);
      let base = column(10).or(lemma).unwrap_or(surface);
      let reading = column(20).or(column(9)).unwrap_or_default();
      let normalized = lemma.unwrap_or(base);
      let morpheme = Morpheme::new(surface, base, reading, normalized, pos_tags);

      match column(21).or(column(6)) {
        Some(base_reading) => morpheme.with_dictionary_reading(base_reading),
        None => morpheme,
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const UNIDIC_MI: &str = "動詞,非自立可能,*,*,上一段-マ行,未然形-一般,ミル,見る,見,ミ,見る,ミル,和,*,*,*,*,*,*,用,ミ,ミル,ミ,ミル,1,C2,*,9925656692597248,36107";
  const IPADIC_KAI: &str = "動詞,自立,*,*,五段・カ行イ音便,連用タ接続,書く,カイ,カイ";
  const IPADIC_KAKU: &str = "動詞,自立,*,*,五段・カ行イ音便,基本形,書く,カク,カク";

  /// UniDic: orthBase, kana and kanaBase columns
  #[test]
  fn unidic_feature_maps_to_morpheme() {
    let m = morpheme_from_feature("見", UNIDIC_MI);

    assert_eq!(m.surface, "見");
    assert_eq!(m.dictionary_form, "見る");
    assert_eq!(m.reading, "ミ");
    assert_eq!(m.normalized_form, "見る");
    assert_eq!(m.dictionary_reading.as_deref(), Some("ミル"));
    assert_eq!(m.pos_tags, vec!["動詞", "非自立可能", "*", "*", "上一段-マ行", "未然形-一般"]);
  }

  /// IPADIC: base form and reading columns
  #[test]
  fn ipadic_feature_maps_to_morpheme() {
    let m = morpheme_from_feature("書い", IPADIC_KAI);

    assert_eq!(m.dictionary_form, "書く");
    assert_eq!(m.reading, "カイ");
    assert_eq!(m.pos_tag(4), Some("五段・カ行イ音便"));
    assert_eq!(m.pos_tag(5), Some("連用タ接続"));
    assert!(m.dictionary_reading.is_none());
  }

  /// IPADIC: uninflected surface carries the dictionary reading
  #[test]
  fn ipadic_uninflected_has_dictionary_reading() {
    let m = morpheme_from_feature("書く", IPADIC_KAKU);
    assert_eq!(m.dictionary_reading.as_deref(), Some("カク"));
  }

  /// Unknown words: only part-of-speech columns
  #[test]
  fn unknown_word_falls_back_to_surface() {
    let m = morpheme_from_feature("ほげ", "名詞,一般,*,*,*,*");

    assert_eq!(m.dictionary_form, "ほげ");
    assert_eq!(m.reading, "");
    assert_eq!(m.pos_tags.len(), POS_TAG_COLUMNS);
    assert!(m.dictionary_reading.is_none());
  }

  #[test]
  fn short_feature_is_padded() {
    let m = morpheme_from_feature("？", "記号");
    assert_eq!(m.pos_tags, vec!["記号", "*", "*", "*", "*", "*"]);
  }

  #[test]
  fn layout_detection() {
    let unidic: Vec<&str> = UNIDIC_MI.split(',').collect();
    let ipadic: Vec<&str> = IPADIC_KAI.split(',').collect();

    assert_eq!(FeatureLayout::detect(&unidic), FeatureLayout::Unidic);
    assert_eq!(FeatureLayout::detect(&ipadic), FeatureLayout::Ipadic);
  }
}
