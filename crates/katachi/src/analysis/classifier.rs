//! 動詞の活用種別判定と活用形検出
//!
//! - [`classify`]: part-of-speech tags → conjugation class + transitivity
//! - [`detect_form`]: surface vs. dictionary form → which inflection was applied
//!
//! Form detection is an ordered suffix cascade ([`SUFFIX_RULES`]); the first
//! matching rule wins, so longer and more specific suffixes come first.

use serde::{Deserialize, Serialize};

use crate::analysis::reading::is_kana;

/// Primary part-of-speech tag of verbs.
pub const VERB_TAG: &str = "動詞";

/// Slot of `pos_tags` holding the independence / transitivity detail.
pub const TRANSITIVITY_SLOT: usize = 1;

/// Slot of `pos_tags` holding the conjugation type.
pub const CONJUGATION_TYPE_SLOT: usize = 4;

/// Slot of `pos_tags` holding the conjugation form.
pub const CONJUGATION_FORM_SLOT: usize = 5;

/// Conjugation class of a verb.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConjugationClass {
  /// 五段動詞
  Godan,
  /// 一段動詞
  Ichidan,
  /// サ行変格活用
  SuruIrregular,
  /// カ行変格活用
  KuruIrregular,
  /// Unrecognized tag, kept verbatim
  Unknown(String),
}

/// Class markers checked in order against the conjugation-type tag.
const CLASS_MARKERS: &[(&[&str], ConjugationClass)] = &[
  (&["五段"], ConjugationClass::Godan),
  (&["一段"], ConjugationClass::Ichidan),
  (&["サ行変格", "サ変"], ConjugationClass::SuruIrregular),
  (&["カ行変格", "カ変"], ConjugationClass::KuruIrregular),
];

impl ConjugationClass {
  /// Maps a conjugation-type tag (`五段-カ行`, `下一段-バ行`, `サ変・スル`, ...) to a class.
  pub fn from_conjugation_tag(tag: &str) -> Self {
    CLASS_MARKERS
      .iter()
      .find(|(markers, _)| markers.iter().any(|marker| tag.contains(marker)))
      .map(|(_, class)| class.clone())
      .unwrap_or_else(|| ConjugationClass::Unknown(tag.to_string()))
  }

  /// Returns `true` for the four classes the conjugator supports.
  pub fn is_supported(&self) -> bool {
    !matches!(self, ConjugationClass::Unknown(_))
  }
}

/// Result of [`classify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbClassInfo {
  /// Raw independence / transitivity tag (`自立`, `非自立可能`, ...), empty if absent
  pub transitivity: String,

  /// Raw conjugation-type tag, empty if absent
  pub conjugation_tag: String,

  /// Resolved class
  pub class: ConjugationClass,
}

/// Classifies a verb from its part-of-speech tags.
///
/// Returns `None` unless the primary tag is [`VERB_TAG`].
pub fn classify(pos_tags: &[String]) -> Option<VerbClassInfo> {
  if tag_at(pos_tags, 0) != Some(VERB_TAG) {
    return None;
  }

  let transitivity = tag_at(pos_tags, TRANSITIVITY_SLOT).unwrap_or_default().to_string();
  let conjugation_tag = tag_at(pos_tags, CONJUGATION_TYPE_SLOT).unwrap_or_default().to_string();
  let class = ConjugationClass::from_conjugation_tag(&conjugation_tag);

  Some(VerbClassInfo {
    transitivity,
    conjugation_tag,
    class,
  })
}

/// Tag at `index`, treating `*` and empty slots as absent.
fn tag_at(pos_tags: &[String], index: usize) -> Option<&str> {
  pos_tags.get(index).map(String::as_str).filter(|tag| !tag.is_empty() && *tag != "*")
}

// ─── 一段動詞判定 ─────────────────────────────────────────────────────

/// Kana that precede the final る of ichidan verbs (i-row and e-row).
const ICHIDAN_STEM_KANA: &str = "いきじちみりえけげせてねべめれ";

/// Returns `true` if the dictionary form looks like an ichidan verb:
/// it ends in `る` and the kana before it belongs to [`ICHIDAN_STEM_KANA`].
///
/// When the character before `る` is a kanji (見る, 寝る), the check runs on
/// `dictionary_reading` instead.
pub fn is_true_ichidan(dictionary_form: &str, dictionary_reading: Option<&str>) -> bool {
  ichidan_by_kana(dictionary_form, dictionary_reading).unwrap_or(false)
}

/// Kana-based ichidan check; `None` when neither the form nor a reading
/// exposes the kana before `る`.
fn ichidan_by_kana(dictionary_form: &str, dictionary_reading: Option<&str>) -> Option<bool> {
  match kana_before_ru(dictionary_form) {
    Some(Some(kana)) => Some(ICHIDAN_STEM_KANA.contains(kana)),
    Some(None) => {
      let kana = kana_before_ru(dictionary_reading?)?;
      Some(kana.is_some_and(|kana| ICHIDAN_STEM_KANA.contains(kana)))
    }
    None => Some(false),
  }
}

/// Whether られる on this verb means potential rather than passive.
///
/// A godan tag always wins. Without a usable reading (IPADIC inflected
/// tokens, lexicon miss) the 一段 tag decides.
fn takes_potential_rareru(
  dictionary_form: &str,
  dictionary_reading: Option<&str>,
  pos_tags: &[String],
) -> bool {
  if is_tagged_class(pos_tags, ConjugationClass::Godan) {
    return false;
  }

  ichidan_by_kana(dictionary_form, dictionary_reading)
    .unwrap_or_else(|| is_tagged_class(pos_tags, ConjugationClass::Ichidan))
}

/// `None` if `text` does not end in `る`; `Some(None)` if the preceding
/// character is missing or not kana.
fn kana_before_ru(text: &str) -> Option<Option<char>> {
  let stem = text.strip_suffix('る')?;
  Some(stem.chars().last().filter(|c| is_kana(*c)))
}

// ─── 活用形検出 ───────────────────────────────────────────────────────

/// Inflection detected on a surface form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectedForm {
  /// させられた
  CausativePassivePast,
  /// させられて
  CausativePassiveTe,
  /// させられる
  CausativePassive,
  /// させた
  CausativePast,
  /// させて
  CausativeTe,
  /// させる
  Causative,
  /// られた／れた
  PassivePast,
  /// られて／れて
  PassiveTe,
  /// られる／れる
  Passive,
  /// られる on an ichidan verb
  Potential,
  /// Lexical ichidan verb ending in れる (忘れる)
  DictionaryIchidan,
  /// なかった
  NegativePast,
  /// なくて／ないで
  NegativeTe,
  /// ない
  Negative,
  /// ませんでした
  PoliteNegativePast,
  /// ません
  PoliteNegative,
  /// ました
  PolitePast,
  /// ます
  Polite,
  /// て／で
  Te,
  /// た／だ
  Ta,
  /// ば
  Conditional,
  /// よう／おう
  Volitional,
  /// Surface equals the dictionary form and no tag is available
  DictionaryForm,
  /// Conjugation-form tag reported by the tokenizer
  Tagged(String),
}

impl DetectedForm {
  /// Machine-readable tag; the raw tokenizer tag for [`DetectedForm::Tagged`].
  pub fn key(&self) -> &str {
    match self {
      DetectedForm::CausativePassivePast => "causative_passive_past",
      DetectedForm::CausativePassiveTe => "causative_passive_te",
      DetectedForm::CausativePassive => "causative_passive",
      DetectedForm::CausativePast => "causative_past",
      DetectedForm::CausativeTe => "causative_te",
      DetectedForm::Causative => "causative",
      DetectedForm::PassivePast => "passive_past",
      DetectedForm::PassiveTe => "passive_te",
      DetectedForm::Passive => "passive",
      DetectedForm::Potential => "potential",
      DetectedForm::DictionaryIchidan => "dictionary_ichidan",
      DetectedForm::NegativePast => "negative_past",
      DetectedForm::NegativeTe => "negative_te",
      DetectedForm::Negative => "negative",
      DetectedForm::PoliteNegativePast => "polite_negative_past",
      DetectedForm::PoliteNegative => "polite_negative",
      DetectedForm::PolitePast => "polite_past",
      DetectedForm::Polite => "polite",
      DetectedForm::Te => "te",
      DetectedForm::Ta => "ta",
      DetectedForm::Conditional => "conditional",
      DetectedForm::Volitional => "volitional",
      DetectedForm::DictionaryForm => "dictionary_form",
      DetectedForm::Tagged(tag) => tag,
    }
  }
}

/// When a [`SuffixRule`] may fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
  /// Surface differs from the dictionary form.
  Inflected,
  /// Like `Inflected`; resolves to [`DetectedForm::Potential`] on a true
  /// ichidan verb that is not tagged godan.
  PassiveOrPotential,
  /// Surface equals the dictionary form.
  Lexical,
}

/// One entry of the suffix cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRule {
  /// Suffix matched against the end of the surface
  pub suffix: &'static str,

  /// Dictionary-form ending of the inflection family; a dictionary form
  /// already ending in it carries the suffix lexically (見せる, 入れる)
  pub base: &'static str,

  /// Form reported on match
  pub form: DetectedForm,

  /// Firing condition
  pub kind: RuleKind,
}

const fn inflected(suffix: &'static str, base: &'static str, form: DetectedForm) -> SuffixRule {
  SuffixRule {
    suffix,
    base,
    form,
    kind: RuleKind::Inflected,
  }
}

/// The suffix cascade, evaluated top to bottom.
pub const SUFFIX_RULES: &[SuffixRule] = &[
  // 使役受身
  inflected("せられた", "せられる", DetectedForm::CausativePassivePast),
  inflected("せられて", "せられる", DetectedForm::CausativePassiveTe),
  inflected("せられる", "せられる", DetectedForm::CausativePassive),
  // 使役
  inflected("せた", "せる", DetectedForm::CausativePast),
  inflected("せて", "せる", DetectedForm::CausativeTe),
  inflected("せる", "せる", DetectedForm::Causative),
  // 受身／可能
  inflected("られた", "られる", DetectedForm::PassivePast),
  inflected("られて", "られる", DetectedForm::PassiveTe),
  SuffixRule {
    suffix: "られる",
    base: "られる",
    form: DetectedForm::Passive,
    kind: RuleKind::PassiveOrPotential,
  },
  // 語彙的な「〜れる」
  SuffixRule {
    suffix: "れる",
    base: "",
    form: DetectedForm::DictionaryIchidan,
    kind: RuleKind::Lexical,
  },
  // 受身（五段）
  inflected("れた", "れる", DetectedForm::PassivePast),
  inflected("れて", "れる", DetectedForm::PassiveTe),
  inflected("れる", "れる", DetectedForm::Passive),
  // 否定
  inflected("なかった", "ない", DetectedForm::NegativePast),
  inflected("なくて", "ない", DetectedForm::NegativeTe),
  inflected("ないで", "ない", DetectedForm::NegativeTe),
  inflected("ない", "ない", DetectedForm::Negative),
  // 丁寧
  inflected("ませんでした", "ます", DetectedForm::PoliteNegativePast),
  inflected("ません", "ます", DetectedForm::PoliteNegative),
  inflected("ました", "ます", DetectedForm::PolitePast),
  inflected("ます", "ます", DetectedForm::Polite),
  // て形・た形
  inflected("て", "", DetectedForm::Te),
  inflected("で", "", DetectedForm::Te),
  inflected("た", "", DetectedForm::Ta),
  inflected("だ", "", DetectedForm::Ta),
  // 仮定・意志
  inflected("ば", "", DetectedForm::Conditional),
  inflected("よう", "", DetectedForm::Volitional),
  inflected("おう", "", DetectedForm::Volitional),
  inflected("こう", "", DetectedForm::Volitional),
  inflected("ごう", "", DetectedForm::Volitional),
  inflected("そう", "", DetectedForm::Volitional),
  inflected("とう", "", DetectedForm::Volitional),
  inflected("のう", "", DetectedForm::Volitional),
  inflected("ぼう", "", DetectedForm::Volitional),
  inflected("もう", "", DetectedForm::Volitional),
  inflected("ろう", "", DetectedForm::Volitional),
];

/// Detects which inflection turned `dictionary_form` into `surface`.
///
/// Falls back to the tokenizer's conjugation-form tag (`pos_tags[5]`) and
/// finally to [`DetectedForm::DictionaryForm`].
pub fn detect_form(
  surface: &str,
  dictionary_form: &str,
  dictionary_reading: Option<&str>,
  pos_tags: &[String],
) -> DetectedForm {
  let inflected = surface != dictionary_form;

  for rule in SUFFIX_RULES {
    if !surface.ends_with(rule.suffix) {
      continue;
    }

    match rule.kind {
      RuleKind::Lexical => {
        if !inflected {
          return rule.form.clone();
        }
      }
      RuleKind::Inflected | RuleKind::PassiveOrPotential => {
        if !inflected || (!rule.base.is_empty() && dictionary_form.ends_with(rule.base)) {
          continue;
        }

        if rule.kind == RuleKind::PassiveOrPotential
          && takes_potential_rareru(dictionary_form, dictionary_reading, pos_tags)
        {
          return DetectedForm::Potential;
        }

        return rule.form.clone();
      }
    }
  }

  match tag_at(pos_tags, CONJUGATION_FORM_SLOT) {
    Some(tag) => DetectedForm::Tagged(tag.to_string()),
    None => DetectedForm::DictionaryForm,
  }
}

fn is_tagged_class(pos_tags: &[String], class: ConjugationClass) -> bool {
  tag_at(pos_tags, CONJUGATION_TYPE_SLOT)
    .is_some_and(|tag| ConjugationClass::from_conjugation_tag(tag) == class)
}
