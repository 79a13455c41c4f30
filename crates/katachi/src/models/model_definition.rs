//! Data Model Definition
use serde::{Deserialize, Serialize};

use crate::analysis::conjugator::ConjugationTable;

/// One morphological unit returned by the tokenizer.
///
/// Produced once per tokenized unit and never modified afterwards.
/// `pos_tags` follows the six-slot layout shared by UniDic and Sudachi:
///
/// | index | content                              |
/// |-------|--------------------------------------|
/// | 0     | primary part of speech (`動詞`, ...) |
/// | 1..=3 | part-of-speech details               |
/// | 4     | conjugation type (`五段-カ行`, ...)   |
/// | 5     | conjugation form (`連用形-一般`, ...) |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morpheme {
  /// Surface form (string appearing in the input)
  pub surface: String,

  /// Dictionary (citation) form
  pub dictionary_form: String,

  /// Reading of the surface form (katakana as emitted by the dictionary)
  pub reading: String,

  /// Normalized form (lemma)
  pub normalized_form: String,

  /// Part-of-speech tag vector
  pub pos_tags: Vec<String>,

  /// Reading of the dictionary form, when the tokenizer reports one
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub dictionary_reading: Option<String>,
}

impl Morpheme {
  /// Constructor for Morpheme
  pub fn new(
    surface: impl Into<String>,
    dictionary_form: impl Into<String>,
    reading: impl Into<String>,
    normalized_form: impl Into<String>,
    pos_tags: impl IntoIterator<Item = impl Into<String>>,
  ) -> Self {
    Self {
      surface: surface.into(),
      dictionary_form: dictionary_form.into(),
      reading: reading.into(),
      normalized_form: normalized_form.into(),
      pos_tags: pos_tags.into_iter().map(Into::into).collect(),
      dictionary_reading: None,
    }
  }

  /// Sets the reading of the dictionary form
  pub fn with_dictionary_reading(mut self, reading: impl Into<String>) -> Self {
    self.dictionary_reading = Some(reading.into());
    self
  }

  /// Returns the tag at `index`, treating `*` and empty slots as absent.
  pub fn pos_tag(&self, index: usize) -> Option<&str> {
    self.pos_tags.get(index).map(String::as_str).filter(|tag| !tag.is_empty() && *tag != "*")
  }
}

/// One sense of a lexicon entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
  /// Part-of-speech label(s) joined with `, `
  pub pos_label: String,

  /// Glosses in dictionary order
  pub glosses: Vec<String>,
}

/// Lexicon entry as returned by the lexicon adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
  /// First kanji spelling, or the looked-up headword when the entry has none
  pub headword_kanji: String,

  /// Kana readings in dictionary order
  pub readings: Vec<String>,

  /// Senses in dictionary order
  pub senses: Vec<Sense>,
}

/// A grammar point attached to the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarPoint {
  /// Pattern name
  pub pattern: String,

  /// One-line explanation
  pub explanation: String,

  /// Example (the observed surface for detected forms)
  #[serde(rename = "example_in_sentence")]
  pub example: String,

  /// JLPT level label
  pub level: String,

  /// Whether the point deserves special attention
  pub is_special: bool,
}

/// Conjugation information attached to a verb vocabulary item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbConjugation {
  /// Always `true`; kept for consumers that branch on it
  pub has_conjugation: bool,

  /// Dictionary form with the class label, e.g. `見る（一段動詞）`
  pub original_form: String,

  /// Observed surface form
  pub current_form: String,

  /// Machine-readable tag of the detected form
  pub detected_form: String,

  /// Display label of the detected form
  pub conjugation_type: String,

  /// One-line explanation of the detected form
  pub reason: String,

  /// Display label of the conjugation class
  pub verb_class: String,

  /// Display label of the transitivity / independence tag
  pub transitivity: String,

  /// Table generated from the dictionary form
  pub forms: ConjugationTable,

  /// Table generated from the dictionary reading (kana)
  #[serde(skip_serializing_if = "Option::is_none")]
  pub readings: Option<ConjugationTable>,
}

/// Conjugation slot of a vocabulary item.
///
/// Non-verbs serialize as `{"has_conjugation": false}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Conjugation {
  /// Verb with a generated table
  Verb(Box<VerbConjugation>),
  /// Word without conjugation
  None {
    /// Always `false`
    has_conjugation: bool,
  },
}

impl Conjugation {
  /// Conjugation slot of a word without conjugation.
  pub fn none() -> Self {
    Conjugation::None {
      has_conjugation: false,
    }
  }

  /// Returns the verb conjugation, if any.
  pub fn as_verb(&self) -> Option<&VerbConjugation> {
    match self {
      Conjugation::Verb(verb) => Some(verb),
      Conjugation::None { .. } => None,
    }
  }
}

/// One vocabulary item of the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyItem {
  /// The analysed word as given
  pub word: String,

  /// Reading in hiragana
  pub reading: String,

  /// Meaning assembled from the lexicon
  pub meaning: String,

  /// JLPT level label
  pub level: String,

  /// Conjugation information
  pub conjugation: Conjugation,
}

/// The sole externally visible artifact of a word analysis.
///
/// Field names and nesting are the JSON contract for consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnifiedAnalysisRecord {
  /// Short translation
  pub translation: String,

  /// Grammar points
  pub grammar_points: Vec<GrammarPoint>,

  /// Vocabulary items (one for word analysis)
  pub vocabulary: Vec<VocabularyItem>,

  /// Notes about degraded or substituted lookups
  pub special_notes: Vec<String>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn morpheme_pos_tag_skips_placeholders() {
    let m = Morpheme::new("見", "見る", "ミ", "見る", ["動詞", "一般", "*", "", "上一段-マ行"]);

    assert_eq!(m.pos_tag(0), Some("動詞"));
    assert_eq!(m.pos_tag(2), None);
    assert_eq!(m.pos_tag(3), None);
    assert_eq!(m.pos_tag(4), Some("上一段-マ行"));
    assert_eq!(m.pos_tag(9), None);
  }

  #[test]
  fn conjugation_none_serializes_flag_only() {
    let value = serde_json::to_value(Conjugation::none()).unwrap();
    assert_eq!(value, json!({ "has_conjugation": false }));
  }

  #[test]
  fn grammar_point_uses_example_in_sentence_key() {
    let point = GrammarPoint {
      pattern: "p".to_string(),
      explanation: "e".to_string(),
      example: "x".to_string(),
      level: "N2".to_string(),
      is_special: false,
    };

    let value = serde_json::to_value(point).unwrap();
    assert_eq!(value["example_in_sentence"], json!("x"));
    assert!(value.get("example").is_none());
  }

  #[test]
  fn record_serializes_snake_case_fields() {
    let record = UnifiedAnalysisRecord {
      translation: "t".to_string(),
      grammar_points: Vec::new(),
      vocabulary: Vec::new(),
      special_notes: vec!["n".to_string()],
    };

    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"grammar_points\":[]"));
    assert!(json.contains("\"special_notes\":[\"n\"]"));
  }
}
