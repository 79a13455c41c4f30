//! 解析結果の統合
//!
//! Combines the morphology, the generated conjugation tables and the lexicon
//! entries into one [`UnifiedAnalysisRecord`]. Every missing input is replaced
//! by placeholder content and a note; unification itself cannot fail.

use tracing::debug;

use crate::analysis::classifier::{ConjugationClass, DetectedForm};
use crate::analysis::conjugator::{ConjugationTable, conjugate};
use crate::analysis::form_labels::{
  class_label, form_explanation, form_label, transitivity_label,
};
use crate::analysis::morphology::{VerbMorphology, WordMorphology};
use crate::analysis::reading::{katakana_to_hiragana, reconstruct};
use crate::config::AnalysisConfig;
use crate::models::{
  Conjugation, GrammarPoint, LexiconEntry, UnifiedAnalysisRecord, VerbConjugation, VocabularyItem,
};

/// Translation shown when the lexicon has no entry.
pub const NOT_FOUND_TRANSLATION: &str = "（辞書に見つかりません）";

/// Meaning shown when the lexicon has no entry.
pub const NOT_FOUND_MEANING: &str = "（意味が見つかりません）";

/// Pattern name of the verb conjugation grammar point.
pub const VERB_CONJUGATION_PATTERN: &str = "動詞の活用";

/// Outcome of the lexicon stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconResult {
  /// Entries found under `headword`
  Found {
    /// Headword that produced the hit
    headword: String,
    /// Entries in lexicon order
    entries: Vec<LexiconEntry>,
  },
  /// Lexicon consulted, nothing found
  NotFound,
  /// Lexicon not available
  Unavailable,
}

impl LexiconResult {
  /// Entries of a hit, empty otherwise.
  pub fn entries(&self) -> &[LexiconEntry] {
    match self {
      LexiconResult::Found { entries, .. } => entries,
      LexiconResult::NotFound | LexiconResult::Unavailable => &[],
    }
  }
}

/// Inputs of one unification.
#[derive(Debug, Clone, Copy)]
pub struct UnifyInput<'a> {
  /// Trimmed word as given by the caller
  pub word: &'a str,

  /// Morphology, `None` when the tokenizer is unavailable or returned nothing
  pub morphology: Option<&'a WordMorphology>,

  /// Whether the tokenizer adapter is available
  pub tokenizer_available: bool,

  /// Lexicon outcome
  pub lexicon: &'a LexiconResult,
}

/// Builds [`UnifiedAnalysisRecord`]s.
#[derive(Debug, Clone, Default)]
pub struct ResultUnifier {
  settings: AnalysisConfig,
}

impl ResultUnifier {
  /// Creates a unifier with the given output settings.
  pub fn new(settings: AnalysisConfig) -> Self {
    Self { settings }
  }

  /// Output settings.
  pub fn settings(&self) -> &AnalysisConfig {
    &self.settings
  }

  /// Combines all inputs into one record.
  pub fn unify(&self, input: UnifyInput<'_>) -> UnifiedAnalysisRecord {
    let entries = input.lexicon.entries();
    let mut special_notes = Vec::new();
    let mut grammar_points = Vec::new();

    let conjugation = match input.morphology.and_then(|m| m.verb.as_ref().map(|v| (m, v))) {
      Some((morphology, verb)) => {
        let conjugation = self.verb_conjugation(input.word, morphology, verb);
        grammar_points.extend(self.verb_grammar_points(input.word, morphology, verb));

        if !verb.class_info.class.is_supported() {
          special_notes.push(format!(
            "活用の種類「{}」は未対応のため、活用表は未実装です",
            class_label(&verb.class_info.class)
          ));
        }

        Conjugation::Verb(Box::new(conjugation))
      }
      None => Conjugation::none(),
    };

    let vocabulary = VocabularyItem {
      word: input.word.to_string(),
      reading: self.reading(input.word, input.morphology, entries),
      meaning: self.meaning(entries),
      level: self.settings.default_level.clone(),
      conjugation,
    };

    special_notes.extend(self.notes(&input));

    let record = UnifiedAnalysisRecord {
      translation: self.translation(entries),
      grammar_points,
      vocabulary: vec![vocabulary],
      special_notes,
    };

    debug!(
      word = %input.word,
      entries = entries.len(),
      grammar_points = record.grammar_points.len(),
      notes = record.special_notes.len(),
      "Unified analysis record"
    );

    record
  }

  /// First sense of the first entry, up to `translation_gloss_limit` glosses.
  fn translation(&self, entries: &[LexiconEntry]) -> String {
    entries
      .first()
      .and_then(|entry| entry.senses.first())
      .map(|sense| {
        sense.glosses.iter().take(self.settings.translation_gloss_limit).cloned().collect::<Vec<_>>()
      })
      .filter(|glosses| !glosses.is_empty())
      .map(|glosses| glosses.join("; "))
      .unwrap_or_else(|| NOT_FOUND_TRANSLATION.to_string())
  }

  /// First `meaning_sense_limit` senses of the first entry.
  fn meaning(&self, entries: &[LexiconEntry]) -> String {
    let Some(entry) = entries.first() else {
      return NOT_FOUND_MEANING.to_string();
    };

    let groups: Vec<String> = entry
      .senses
      .iter()
      .take(self.settings.meaning_sense_limit)
      .filter(|sense| !sense.glosses.is_empty())
      .map(|sense| sense.glosses.join(", "))
      .collect();

    if groups.is_empty() { NOT_FOUND_MEANING.to_string() } else { groups.join("; ") }
  }

  fn reading(
    &self,
    word: &str,
    morphology: Option<&WordMorphology>,
    entries: &[LexiconEntry],
  ) -> String {
    let reconstructed = morphology
      .map(|m| match m.dictionary_reading.as_deref() {
        Some(dictionary_reading) if m.reconstructs_reading() => {
          reconstruct(word, m.dictionary_form(), dictionary_reading)
        }
        _ => m.surface_reading.clone(),
      })
      .unwrap_or_default();

    let reading = if reconstructed.is_empty() {
      entries.first().and_then(|entry| entry.readings.first()).cloned().unwrap_or_default()
    } else {
      reconstructed
    };

    katakana_to_hiragana(&reading)
  }

  fn verb_conjugation(
    &self,
    word: &str,
    morphology: &WordMorphology,
    verb: &VerbMorphology,
  ) -> VerbConjugation {
    let class = &verb.class_info.class;
    let dictionary_form = morphology.dictionary_form();

    VerbConjugation {
      has_conjugation: true,
      original_form: format!("{dictionary_form}（{}）", class_label(class)),
      current_form: word.to_string(),
      detected_form: verb.detected_form.key().to_string(),
      conjugation_type: form_label(&verb.detected_form),
      reason: form_explanation(&verb.detected_form).to_string(),
      verb_class: class_label(class),
      transitivity: transitivity_label(&verb.class_info.transitivity),
      forms: conjugate(dictionary_form, class),
      readings: reading_table(morphology, class),
    }
  }

  fn verb_grammar_points(
    &self,
    word: &str,
    morphology: &WordMorphology,
    verb: &VerbMorphology,
  ) -> Vec<GrammarPoint> {
    let level = self.settings.default_level.clone();
    let mut points = vec![GrammarPoint {
      pattern: VERB_CONJUGATION_PATTERN.to_string(),
      explanation: format!(
        "{}は{}です（{}）",
        morphology.dictionary_form(),
        class_label(&verb.class_info.class),
        form_label(&verb.detected_form)
      ),
      example: word.to_string(),
      level: level.clone(),
      is_special: false,
    }];

    if is_inflected(&verb.detected_form) {
      points.push(GrammarPoint {
        pattern: form_label(&verb.detected_form),
        explanation: form_explanation(&verb.detected_form).to_string(),
        example: word.to_string(),
        level,
        is_special: is_special_form(&verb.detected_form),
      });
    }

    points
  }

  fn notes(&self, input: &UnifyInput<'_>) -> Vec<String> {
    let mut notes = Vec::new();

    if !input.tokenizer_available {
      notes.push("形態素解析器が利用できないため、読みと活用は解析されていません".to_string());
    } else if input.morphology.is_none() {
      notes.push(format!("「{}」は形態素解析できなかったため、一語として扱いました", input.word));
    }

    match input.lexicon {
      LexiconResult::Unavailable => {
        notes.push("辞書が利用できないため、意味は表示されません".to_string());
      }
      LexiconResult::NotFound => {
        notes.push(format!(
          "「{}」は辞書に見つかりませんでした（珍しい語、活用形、表記ゆれの可能性があります）",
          input.word
        ));
      }
      LexiconResult::Found { headword, .. } if headword != input.word => {
        notes.push(format!("辞書形「{headword}」で検索しました（入力: {}）", input.word));
      }
      LexiconResult::Found { .. } => {}
    }

    notes
  }
}

/// Table generated from the hiragana dictionary reading, when known.
fn reading_table(morphology: &WordMorphology, class: &ConjugationClass) -> Option<ConjugationTable> {
  morphology
    .dictionary_reading
    .as_deref()
    .filter(|reading| !reading.is_empty())
    .map(|reading| conjugate(reading, class))
}

/// Returns `false` for forms that describe the plain dictionary form.
fn is_inflected(form: &DetectedForm) -> bool {
  match form {
    DetectedForm::DictionaryForm | DetectedForm::DictionaryIchidan => false,
    DetectedForm::Tagged(tag) => !matches!(tag.as_str(), "終止形-一般" | "基本形"),
    _ => true,
  }
}

/// Voice changes that learners tend to misread.
fn is_special_form(form: &DetectedForm) -> bool {
  matches!(
    form,
    DetectedForm::CausativePassivePast
      | DetectedForm::CausativePassiveTe
      | DetectedForm::CausativePassive
      | DetectedForm::CausativePast
      | DetectedForm::CausativeTe
      | DetectedForm::Causative
      | DetectedForm::PassivePast
      | DetectedForm::PassiveTe
      | DetectedForm::Passive
      | DetectedForm::Potential
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::analysis::conjugator::ConjugationForm;
  use crate::models::{Morpheme, Sense};

  fn entry(headword: &str, reading: &str, senses: &[&[&str]]) -> LexiconEntry {
    LexiconEntry {
      headword_kanji: headword.to_string(),
      readings: vec![reading.to_string()],
      senses: senses
        .iter()
        .map(|glosses| Sense {
          pos_label: "v5k, vt".to_string(),
          glosses: glosses.iter().map(|g| g.to_string()).collect(),
        })
        .collect(),
    }
  }

  fn kaku_morphology(word: &str) -> WordMorphology {
    let morphemes = vec![
      Morpheme::new("書い", "書く", "カイ", "書く", ["動詞", "一般", "*", "*", "五段-カ行", "連用形-イ音便"])
        .with_dictionary_reading("カク"),
      Morpheme::new("て", "て", "テ", "て", ["助詞", "接続助詞", "*", "*", "*", "*"]),
    ];
    WordMorphology::analyze(word, &morphemes, None).unwrap()
  }

  #[test]
  fn missing_everything_degrades_with_notes() {
    let unifier = ResultUnifier::default();
    let record = unifier.unify(UnifyInput {
      word: "ほげ",
      morphology: None,
      tokenizer_available: true,
      lexicon: &LexiconResult::NotFound,
    });

    assert_eq!(record.translation, NOT_FOUND_TRANSLATION);
    assert!(!record.special_notes.is_empty());
    assert_eq!(record.vocabulary.len(), 1);
    assert_eq!(record.vocabulary[0].meaning, NOT_FOUND_MEANING);
    assert_eq!(record.vocabulary[0].conjugation, Conjugation::none());
  }

  #[test]
  fn unavailable_adapters_are_noted() {
    let unifier = ResultUnifier::default();
    let record = unifier.unify(UnifyInput {
      word: "書いて",
      morphology: None,
      tokenizer_available: false,
      lexicon: &LexiconResult::Unavailable,
    });

    assert_eq!(record.special_notes.len(), 2);
    assert!(record.special_notes[0].contains("形態素解析器"));
    assert!(record.special_notes[1].contains("辞書が利用できない"));
  }

  #[test]
  fn translation_and_meaning_respect_limits() {
    let lexicon = LexiconResult::Found {
      headword: "書く".to_string(),
      entries: vec![entry(
        "書く",
        "かく",
        &[&["to write", "to compose", "to pen", "to draw"], &["to paint"], &["to scratch"]],
      )],
    };

    let record = ResultUnifier::default().unify(UnifyInput {
      word: "書く",
      morphology: None,
      tokenizer_available: true,
      lexicon: &lexicon,
    });

    assert_eq!(record.translation, "to write; to compose; to pen");
    assert_eq!(
      record.vocabulary[0].meaning,
      "to write, to compose, to pen, to draw; to paint"
    );
    assert_eq!(record.vocabulary[0].reading, "かく");
    assert_eq!(record.vocabulary[0].level, "N2");
  }

  #[test]
  fn substituted_headword_is_noted() {
    let morphology = kaku_morphology("書いて");
    let lexicon = LexiconResult::Found {
      headword: "書く".to_string(),
      entries: vec![entry("書く", "かく", &[&["to write"]])],
    };

    let record = ResultUnifier::default().unify(UnifyInput {
      word: "書いて",
      morphology: Some(&morphology),
      tokenizer_available: true,
      lexicon: &lexicon,
    });

    assert_eq!(record.special_notes.len(), 1);
    assert!(record.special_notes[0].contains("書く"));
  }

  #[test]
  fn verb_gets_tables_labels_and_grammar_points() {
    let morphology = kaku_morphology("書いて");
    let record = ResultUnifier::default().unify(UnifyInput {
      word: "書いて",
      morphology: Some(&morphology),
      tokenizer_available: true,
      lexicon: &LexiconResult::NotFound,
    });

    let vocabulary = &record.vocabulary[0];
    assert_eq!(vocabulary.reading, "かいて");

    let verb = vocabulary.conjugation.as_verb().unwrap();
    assert_eq!(verb.detected_form, "te");
    assert_eq!(verb.conjugation_type, "て形");
    assert_eq!(verb.verb_class, "五段動詞");
    assert_eq!(verb.original_form, "書く（五段動詞）");
    assert_eq!(verb.forms.text(ConjugationForm::Te), Some("書いて"));
    assert_eq!(
      verb.readings.as_ref().and_then(|t| t.text(ConjugationForm::Te)),
      Some("かいて")
    );

    assert_eq!(record.grammar_points.len(), 2);
    assert_eq!(record.grammar_points[0].pattern, VERB_CONJUGATION_PATTERN);
    assert_eq!(record.grammar_points[1].example, "書いて");
    assert!(!record.grammar_points[1].is_special);
  }

  fn kuru_reading(word: &str, stem_kana: &str, tail: (&str, &str, &str)) -> String {
    let (tail_surface, tail_reading, tail_base) = tail;
    let morphemes = vec![
      Morpheme::new("来", "来る", stem_kana, "来る", ["動詞", "非自立可能", "*", "*", "カ行変格", "未然形-一般"])
        .with_dictionary_reading("クル"),
      Morpheme::new(tail_surface, tail_base, tail_reading, tail_base, ["助動詞", "*", "*", "*", "*", "*"]),
    ];
    let morphology = WordMorphology::analyze(word, &morphemes, None).unwrap();

    let record = ResultUnifier::default().unify(UnifyInput {
      word,
      morphology: Some(&morphology),
      tokenizer_available: true,
      lexicon: &LexiconResult::NotFound,
    });

    record.vocabulary[0].reading.clone()
  }

  #[test]
  fn kuru_reading_follows_segments() {
    assert_eq!(kuru_reading("来ない", "コ", ("ない", "ナイ", "ない")), "こない");
    assert_eq!(kuru_reading("来ます", "キ", ("ます", "マス", "ます")), "きます");
  }

  #[test]
  fn unsupported_class_is_flagged() {
    let morphemes = vec![Morpheme::new(
      "候ふ",
      "候ふ",
      "サウラウ",
      "候ふ",
      ["動詞", "一般", "*", "*", "文語四段-ハ行", "終止形-一般"],
    )];
    let morphology = WordMorphology::analyze("候ふ", &morphemes, None).unwrap();

    let record = ResultUnifier::default().unify(UnifyInput {
      word: "候ふ",
      morphology: Some(&morphology),
      tokenizer_available: true,
      lexicon: &LexiconResult::NotFound,
    });

    let verb = record.vocabulary[0].conjugation.as_verb().unwrap();
    assert!(verb.forms.is_placeholder());
    assert!(verb.forms.is_complete());
    assert!(record.special_notes.iter().any(|note| note.contains("文語四段-ハ行")));
  }
}
