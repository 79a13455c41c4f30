//! 単語の形態素情報
//!
//! Collapses the morphemes of a single word into the view the unifier works
//! with: the head morpheme (dictionary form, tags), the reading basis and,
//! for verbs, the class and detected inflection.

use serde::{Deserialize, Serialize};

use crate::analysis::classifier::{self, ConjugationClass, DetectedForm, VerbClassInfo};
use crate::analysis::reading::katakana_to_hiragana;
use crate::models::Morpheme;

/// Coarse part of speech of the head morpheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
  /// 動詞
  Verb,
  /// 形容詞
  IAdjective,
  /// 形状詞 / 形容動詞語幹
  NaAdjective,
  /// 名詞
  Noun,
  /// 副詞
  Adverb,
  /// Anything else, primary tag kept verbatim
  Other(String),
}

impl PartOfSpeech {
  /// Derives the part of speech from the first two tag slots.
  pub fn from_tags(primary: Option<&str>, detail: Option<&str>) -> Self {
    match (primary, detail) {
      (Some("動詞"), _) => PartOfSpeech::Verb,
      (Some("形容詞"), _) => PartOfSpeech::IAdjective,
      (Some("形状詞"), _) | (Some("名詞"), Some("形容動詞語幹")) => PartOfSpeech::NaAdjective,
      (Some("名詞"), _) => PartOfSpeech::Noun,
      (Some("副詞"), _) => PartOfSpeech::Adverb,
      (other, _) => PartOfSpeech::Other(other.unwrap_or_default().to_string()),
    }
  }

  /// Returns `true` for parts of speech that inflect.
  pub fn is_inflecting(&self) -> bool {
    matches!(self, PartOfSpeech::Verb | PartOfSpeech::IAdjective)
  }
}

/// Verb-specific analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbMorphology {
  /// Class and transitivity
  pub class_info: VerbClassInfo,

  /// Inflection observed on the surface
  pub detected_form: DetectedForm,
}

/// Morphological view of one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMorphology {
  /// The whole (trimmed) word
  pub surface: String,

  /// First morpheme; supplies the dictionary form and tags
  pub head: Morpheme,

  /// Number of morphemes the word was split into
  pub morpheme_count: usize,

  /// Concatenated morpheme readings, in hiragana
  pub surface_reading: String,

  /// Reading of the head's dictionary form, in hiragana
  pub dictionary_reading: Option<String>,

  /// Coarse part of speech of the head
  pub part_of_speech: PartOfSpeech,

  /// Present when the head is a verb
  pub verb: Option<VerbMorphology>,
}

impl WordMorphology {
  /// Builds the view from tokenizer output.
  ///
  /// `lexicon_reading` is used when the tokenizer did not report a reading
  /// for the dictionary form. Returns `None` for an empty morpheme list.
  pub fn analyze(word: &str, morphemes: &[Morpheme], lexicon_reading: Option<&str>) -> Option<Self> {
    let head = morphemes.first()?.clone();

    let surface_reading: String =
      morphemes.iter().map(|m| katakana_to_hiragana(&m.reading)).collect();

    let dictionary_reading = head
      .dictionary_reading
      .as_deref()
      .filter(|reading| !reading.is_empty())
      .or(lexicon_reading)
      .map(katakana_to_hiragana);

    let part_of_speech = PartOfSpeech::from_tags(head.pos_tag(0), head.pos_tag(1));

    let verb = classifier::classify(&head.pos_tags).map(|class_info| VerbMorphology {
      detected_form: classifier::detect_form(
        word,
        &head.dictionary_form,
        dictionary_reading.as_deref(),
        &head.pos_tags,
      ),
      class_info,
    });

    Some(Self {
      surface: word.to_string(),
      head,
      morpheme_count: morphemes.len(),
      surface_reading,
      dictionary_reading,
      part_of_speech,
      verb,
    })
  }

  /// Dictionary form of the head morpheme.
  pub fn dictionary_form(&self) -> &str {
    &self.head.dictionary_form
  }

  /// Returns `true` when the reading should be rebuilt from the dictionary
  /// reading rather than taken from the tokenizer segments.
  ///
  /// Multi-morpheme words that do not inflect (東京タワー) are read exactly
  /// by concatenating their segments.
  pub fn reconstructs_reading(&self) -> bool {
    if self.dictionary_reading.is_none() {
      return false;
    }

    // 来 is read こ／き／く depending on the form; only the segments know which.
    if self.is_kuru_verb() && !self.surface_reading.is_empty() {
      return false;
    }

    self.morpheme_count == 1 || self.part_of_speech.is_inflecting()
  }

  fn is_kuru_verb(&self) -> bool {
    self.verb.as_ref().is_some_and(|verb| verb.class_info.class == ConjugationClass::KuruIrregular)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tokenizer::morpheme_from_feature;

  fn morpheme(surface: &str, base: &str, reading: &str, tags: &[&str]) -> Morpheme {
    Morpheme::new(surface, base, reading, base, tags.iter().copied())
  }

  #[test]
  fn empty_morphemes_yield_none() {
    assert!(WordMorphology::analyze("見る", &[], None).is_none());
  }

  #[test]
  fn verb_head_is_classified() {
    let morphemes = vec![
      morpheme("見", "見る", "ミ", &["動詞", "非自立可能", "*", "*", "上一段-マ行", "未然形-一般"])
        .with_dictionary_reading("ミル"),
      morpheme("られる", "られる", "ラレル", &["助動詞", "*", "*", "*", "助動詞-レル", "終止形-一般"]),
    ];

    let morphology = WordMorphology::analyze("見られる", &morphemes, None).unwrap();

    assert_eq!(morphology.dictionary_form(), "見る");
    assert_eq!(morphology.surface_reading, "みられる");
    assert_eq!(morphology.dictionary_reading.as_deref(), Some("みる"));
    assert_eq!(morphology.part_of_speech, PartOfSpeech::Verb);

    let verb = morphology.verb.unwrap();
    assert_eq!(verb.class_info.class, ConjugationClass::Ichidan);
    assert_eq!(verb.detected_form, DetectedForm::Potential);
  }

  /// IPADIC は活用形トークンに基本形の読みを持たない
  #[test]
  fn ipadic_ichidan_without_reading_is_potential() {
    let morphemes = vec![
      morpheme_from_feature("見", "動詞,自立,*,*,一段,未然形,見る,ミ,ミ"),
      morpheme_from_feature("られる", "動詞,接尾,*,*,一段,基本形,られる,ラレル,ラレル"),
    ];

    let morphology = WordMorphology::analyze("見られる", &morphemes, None).unwrap();
    assert!(morphology.dictionary_reading.is_none());

    let verb = morphology.verb.unwrap();
    assert_eq!(verb.class_info.class, ConjugationClass::Ichidan);
    assert_eq!(verb.detected_form, DetectedForm::Potential);
  }

  #[test]
  fn lexicon_reading_fills_missing_dictionary_reading() {
    let morphemes = vec![morpheme(
      "書い",
      "書く",
      "カイ",
      &["動詞", "自立", "*", "*", "五段・カ行イ音便", "連用タ接続"],
    )];

    let morphology = WordMorphology::analyze("書いて", &morphemes, Some("かく")).unwrap();
    assert_eq!(morphology.dictionary_reading.as_deref(), Some("かく"));
    assert!(morphology.reconstructs_reading());
  }

  #[test]
  fn non_verb_has_no_verb_analysis() {
    let morphemes = vec![
      morpheme("東京", "東京", "トウキョウ", &["名詞", "固有名詞", "地名", "一般", "*", "*"])
        .with_dictionary_reading("トウキョウ"),
      morpheme("タワー", "タワー", "タワー", &["名詞", "普通名詞", "一般", "*", "*", "*"]),
    ];

    let morphology = WordMorphology::analyze("東京タワー", &morphemes, None).unwrap();

    assert!(morphology.verb.is_none());
    assert_eq!(morphology.part_of_speech, PartOfSpeech::Noun);
    assert_eq!(morphology.surface_reading, "とうきょうたわー");
    assert!(!morphology.reconstructs_reading());
  }

  #[test]
  fn part_of_speech_mapping() {
    assert_eq!(PartOfSpeech::from_tags(Some("形状詞"), Some("一般")), PartOfSpeech::NaAdjective);
    assert_eq!(
      PartOfSpeech::from_tags(Some("名詞"), Some("形容動詞語幹")),
      PartOfSpeech::NaAdjective
    );
    assert_eq!(PartOfSpeech::from_tags(Some("副詞"), None), PartOfSpeech::Adverb);
    assert_eq!(PartOfSpeech::from_tags(None, None), PartOfSpeech::Other(String::new()));
  }
}
