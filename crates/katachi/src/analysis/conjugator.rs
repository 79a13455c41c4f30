//! 活用表生成
//!
//! Generates the fixed set of thirteen conjugated forms for a verb from its
//! dictionary form and conjugation class. Forms that cannot be generated are
//! kept as an explicit placeholder value instead of being dropped, so every
//! table always carries the same keys.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::classifier::ConjugationClass;

/// Sentinel string used for forms that are not generated.
pub const NOT_IMPLEMENTED: &str = "未実装";

/// Keys of a conjugation table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConjugationForm {
  /// 辞書形
  Dictionary,
  /// ます形
  Polite,
  /// て形
  Te,
  /// た形
  Ta,
  /// ない形
  Negative,
  /// なかった形
  NegativePast,
  /// ば形
  Conditional,
  /// 命令形
  Imperative,
  /// 意志形
  Volitional,
  /// 受身形
  Passive,
  /// 使役形
  Causative,
  /// 可能形
  Potential,
  /// 使役受身形
  CausativePassive,
}

impl ConjugationForm {
  /// All keys in display order.
  pub const ALL: [ConjugationForm; 13] = [
    ConjugationForm::Dictionary,
    ConjugationForm::Polite,
    ConjugationForm::Te,
    ConjugationForm::Ta,
    ConjugationForm::Negative,
    ConjugationForm::NegativePast,
    ConjugationForm::Conditional,
    ConjugationForm::Imperative,
    ConjugationForm::Volitional,
    ConjugationForm::Passive,
    ConjugationForm::Causative,
    ConjugationForm::Potential,
    ConjugationForm::CausativePassive,
  ];
}

/// One cell of a conjugation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conjugated {
  /// Generated surface
  Generated(String),
  /// Not generated for this class; serialized as [`NOT_IMPLEMENTED`]
  NotImplemented,
}

impl Conjugated {
  /// Returns `true` for the placeholder value.
  pub fn is_placeholder(&self) -> bool {
    matches!(self, Conjugated::NotImplemented)
  }

  /// Generated text, `None` for the placeholder.
  pub fn as_str(&self) -> Option<&str> {
    match self {
      Conjugated::Generated(text) => Some(text),
      Conjugated::NotImplemented => None,
    }
  }
}

impl Serialize for Conjugated {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Conjugated::Generated(text) => serializer.serialize_str(text),
      Conjugated::NotImplemented => serializer.serialize_str(NOT_IMPLEMENTED),
    }
  }
}

impl<'de> Deserialize<'de> for Conjugated {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    struct ConjugatedVisitor;

    impl Visitor<'_> for ConjugatedVisitor {
      type Value = Conjugated;

      fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a conjugated form string")
      }

      fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if v == NOT_IMPLEMENTED {
          Ok(Conjugated::NotImplemented)
        } else {
          Ok(Conjugated::Generated(v.to_string()))
        }
      }
    }

    deserializer.deserialize_str(ConjugatedVisitor)
  }
}

/// Conjugation table keyed by [`ConjugationForm`].
///
/// Tables built by [`conjugate`] always contain all thirteen keys.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConjugationTable {
  entries: BTreeMap<ConjugationForm, Conjugated>,
}

impl ConjugationTable {
  /// Table with every key set to the placeholder.
  pub fn placeholder() -> Self {
    Self {
      entries: ConjugationForm::ALL.iter().map(|form| (*form, Conjugated::NotImplemented)).collect(),
    }
  }

  /// Builds a table from thirteen surfaces given in [`ConjugationForm::ALL`] order.
  fn from_surfaces(surfaces: [String; 13]) -> Self {
    Self {
      entries: ConjugationForm::ALL
        .into_iter()
        .zip(surfaces)
        .map(|(form, surface)| (form, Conjugated::Generated(surface)))
        .collect(),
    }
  }

  /// Cell for `form`.
  pub fn get(&self, form: ConjugationForm) -> Option<&Conjugated> {
    self.entries.get(&form)
  }

  /// Generated text for `form`, `None` when absent or placeholder.
  pub fn text(&self, form: ConjugationForm) -> Option<&str> {
    self.get(form).and_then(Conjugated::as_str)
  }

  /// Iterates cells in display order.
  pub fn iter(&self) -> impl Iterator<Item = (ConjugationForm, &Conjugated)> {
    self.entries.iter().map(|(form, cell)| (*form, cell))
  }

  /// Number of keys.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` when the table has no keys.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Returns `true` when every key is present.
  pub fn is_complete(&self) -> bool {
    ConjugationForm::ALL.iter().all(|form| self.entries.contains_key(form))
  }

  /// Returns `true` when every cell is the placeholder.
  pub fn is_placeholder(&self) -> bool {
    self.entries.values().all(Conjugated::is_placeholder)
  }
}

// ─── 五段活用の行テーブル ─────────────────────────────────────────────

/// Row of the godan conjugation grid selected by the final kana.
struct GodanRow {
  ending: char,
  a: &'static str,
  i: &'static str,
  e: &'static str,
  o: &'static str,
}

const GODAN_ROWS: &[GodanRow] = &[
  GodanRow { ending: 'う', a: "わ", i: "い", e: "え", o: "お" },
  GodanRow { ending: 'く', a: "か", i: "き", e: "け", o: "こ" },
  GodanRow { ending: 'ぐ', a: "が", i: "ぎ", e: "げ", o: "ご" },
  GodanRow { ending: 'す', a: "さ", i: "し", e: "せ", o: "そ" },
  GodanRow { ending: 'つ', a: "た", i: "ち", e: "て", o: "と" },
  GodanRow { ending: 'ぬ', a: "な", i: "に", e: "ね", o: "の" },
  GodanRow { ending: 'ぶ', a: "ば", i: "び", e: "べ", o: "ぼ" },
  GodanRow { ending: 'む', a: "ま", i: "み", e: "め", o: "も" },
  GodanRow { ending: 'る', a: "ら", i: "り", e: "れ", o: "ろ" },
];

/// て形・た形の音便 (ending, te, ta)
const GODAN_EUPHONIC: &[(char, &str, &str)] = &[
  ('う', "って", "った"),
  ('つ', "って", "った"),
  ('る', "って", "った"),
  ('く', "いて", "いた"),
  ('ぐ', "いで", "いだ"),
  ('す', "して", "した"),
  ('ぬ', "んで", "んだ"),
  ('ぶ', "んで", "んだ"),
  ('む', "んで", "んだ"),
];

/// 行く always takes the geminate euphonic change.
const IKU_ENDINGS: &[&str] = &["行く", "逝く", "いく"];

// ─── カ変の固定表 ─────────────────────────────────────────────────────

const KURU_KANJI: [&str; 13] = [
  "来る",
  "来ます",
  "来て",
  "来た",
  "来ない",
  "来なかった",
  "来れば",
  "来い",
  "来よう",
  "来られる",
  "来させる",
  "来られる",
  "来させられる",
];

const KURU_KANA: [&str; 13] = [
  "くる",
  "きます",
  "きて",
  "きた",
  "こない",
  "こなかった",
  "くれば",
  "こい",
  "こよう",
  "こられる",
  "こさせる",
  "こられる",
  "こさせられる",
];

/// Generates the conjugation table of `verb` for `class`.
///
/// Unsupported classes and dictionary forms that do not fit the class
/// produce a table of placeholders; this function never fails.
pub fn conjugate(verb: &str, class: &ConjugationClass) -> ConjugationTable {
  let table = match class {
    ConjugationClass::Godan => conjugate_godan(verb),
    ConjugationClass::Ichidan => conjugate_ichidan(verb),
    ConjugationClass::SuruIrregular => conjugate_suru(verb),
    ConjugationClass::KuruIrregular => conjugate_kuru(verb),
    ConjugationClass::Unknown(_) => None,
  };

  table.unwrap_or_else(|| {
    debug!(verb = %verb, ?class, "No conjugation rules apply, using placeholders");
    ConjugationTable::placeholder()
  })
}

fn conjugate_godan(verb: &str) -> Option<ConjugationTable> {
  let ending = verb.chars().last()?;
  let stem = &verb[..verb.len() - ending.len_utf8()];
  let row = GODAN_ROWS.iter().find(|row| row.ending == ending)?;

  let (te, ta) = if IKU_ENDINGS.iter().any(|iku| verb.ends_with(iku)) {
    ("って", "った")
  } else {
    GODAN_EUPHONIC
      .iter()
      .find(|(e, _, _)| *e == ending)
      .map(|(_, te, ta)| (*te, *ta))?
  };

  let (a, i, e, o) = (row.a, row.i, row.e, row.o);

  Some(ConjugationTable::from_surfaces([
    verb.to_string(),
    format!("{stem}{i}ます"),
    format!("{stem}{te}"),
    format!("{stem}{ta}"),
    format!("{stem}{a}ない"),
    format!("{stem}{a}なかった"),
    format!("{stem}{e}ば"),
    format!("{stem}{e}"),
    format!("{stem}{o}う"),
    format!("{stem}{a}れる"),
    format!("{stem}{a}せる"),
    format!("{stem}{e}る"),
    format!("{stem}{a}せられる"),
  ]))
}

fn conjugate_ichidan(verb: &str) -> Option<ConjugationTable> {
  let stem = verb.strip_suffix('る')?;

  Some(ConjugationTable::from_surfaces([
    verb.to_string(),
    format!("{stem}ます"),
    format!("{stem}て"),
    format!("{stem}た"),
    format!("{stem}ない"),
    format!("{stem}なかった"),
    format!("{stem}れば"),
    format!("{stem}ろ"),
    format!("{stem}よう"),
    format!("{stem}られる"),
    format!("{stem}させる"),
    format!("{stem}られる"),
    format!("{stem}させられる"),
  ]))
}

fn conjugate_suru(verb: &str) -> Option<ConjugationTable> {
  let stem = verb.strip_suffix("する").or_else(|| verb.strip_suffix("為る"))?;

  Some(ConjugationTable::from_surfaces([
    verb.to_string(),
    format!("{stem}します"),
    format!("{stem}して"),
    format!("{stem}した"),
    format!("{stem}しない"),
    format!("{stem}しなかった"),
    format!("{stem}すれば"),
    format!("{stem}しろ"),
    format!("{stem}しよう"),
    format!("{stem}される"),
    format!("{stem}させる"),
    format!("{stem}できる"),
    format!("{stem}させられる"),
  ]))
}

/// 来る／くる: fixed table, only a preceding word (持って来る) is carried over.
fn conjugate_kuru(verb: &str) -> Option<ConjugationTable> {
  let (prefix, literals) = match verb.strip_suffix("来る") {
    Some(prefix) => (prefix, KURU_KANJI),
    None => (verb.strip_suffix("くる")?, KURU_KANA),
  };

  Some(ConjugationTable::from_surfaces(literals.map(|literal| format!("{prefix}{literal}"))))
}
