//! 表示用ラベル
//!
//! Lookup tables from internal form tags and tokenizer tags to display labels
//! and one-line explanations. Unknown tags are shown verbatim.

use crate::analysis::classifier::{ConjugationClass, DetectedForm};

/// tag → display label
const FORM_LABELS: &[(&str, &str)] = &[
  ("causative_passive_past", "使役受身・過去形"),
  ("causative_passive_te", "使役受身・て形"),
  ("causative_passive", "使役受身形"),
  ("causative_past", "使役・過去形"),
  ("causative_te", "使役・て形"),
  ("causative", "使役形"),
  ("passive_past", "受身・過去形"),
  ("passive_te", "受身・て形"),
  ("passive", "受身形"),
  ("potential", "可能形"),
  ("dictionary_ichidan", "辞書形（一段動詞）"),
  ("negative_past", "否定・過去形"),
  ("negative_te", "否定・て形"),
  ("negative", "否定形（ない形）"),
  ("polite_negative_past", "丁寧・否定・過去形"),
  ("polite_negative", "丁寧・否定形"),
  ("polite_past", "丁寧・過去形"),
  ("polite", "丁寧形（ます形）"),
  ("te", "て形"),
  ("ta", "過去形（た形）"),
  ("conditional", "仮定形（ば形）"),
  ("volitional", "意志形"),
  ("dictionary_form", "辞書形"),
  // UniDic
  ("終止形-一般", "辞書形"),
  ("連体形-一般", "連体形"),
  ("連用形-一般", "連用形（ます形語幹）"),
  ("連用形-促音便", "連用形（促音便）"),
  ("連用形-イ音便", "連用形（イ音便）"),
  ("連用形-撥音便", "連用形（撥音便）"),
  ("未然形-一般", "未然形（ない形語幹）"),
  ("仮定形-一般", "仮定形"),
  ("命令形", "命令形"),
  ("意志推量形", "意志形"),
  // IPADIC
  ("基本形", "辞書形"),
  ("連用形", "連用形（ます形語幹）"),
  ("連用タ接続", "連用形（た・て接続）"),
  ("未然形", "未然形（ない形語幹）"),
  ("未然ウ接続", "未然形（う接続）"),
  ("仮定形", "仮定形"),
  ("命令ｅ", "命令形"),
  ("命令ｒｏ", "命令形"),
  ("命令ｙｏ", "命令形"),
  ("体言接続", "連体形"),
];

/// tag → one-line explanation
const FORM_EXPLANATIONS: &[(&str, &str)] = &[
  ("causative_passive_past", "使役受身の過去。意に反して〜させられた"),
  ("causative_passive_te", "使役受身のて形。〜させられて、後に続く"),
  ("causative_passive", "使役受身。意に反して〜させられる"),
  ("causative_past", "使役の過去。〜させた／〜するのを許した"),
  ("causative_te", "使役のて形。〜させて、後に続く"),
  ("causative", "使役。人に〜させる、または〜するのを許す"),
  ("passive_past", "受身の過去。主語が〜された"),
  ("passive_te", "受身のて形。〜されて、後に続く"),
  ("passive", "受身。主語が〜される（尊敬の意味にもなる）"),
  ("potential", "可能。〜できる（一段動詞では受身と同形）"),
  ("dictionary_ichidan", "「〜れる」で終わる一段動詞の辞書形"),
  ("negative_past", "否定の過去。〜しなかった"),
  ("negative_te", "否定のて形。〜しないで、後に続く"),
  ("negative", "普通体の否定。〜しない"),
  ("polite_negative_past", "丁寧な否定の過去。〜しませんでした"),
  ("polite_negative", "丁寧な否定。〜しません"),
  ("polite_past", "丁寧な過去。〜しました"),
  ("polite", "丁寧形。改まった場面で使う非過去形"),
  ("te", "接続の形。依頼・動作の連続・補助動詞に使う"),
  ("ta", "普通体の過去・完了"),
  ("conditional", "仮定。〜すれば"),
  ("volitional", "意志・勧誘。〜しよう"),
  ("dictionary_form", "辞書に載っている普通体の非過去形"),
  ("終止形-一般", "辞書に載っている普通体の非過去形"),
  ("基本形", "辞書に載っている普通体の非過去形"),
  ("連用形-一般", "連用形。ます等の助動詞が付く"),
  ("連用形", "連用形。ます等の助動詞が付く"),
  ("連用形-促音便", "連用形の促音便。た・ての前で「っ」になる"),
  ("連用形-イ音便", "連用形のイ音便。た・ての前で「い」になる"),
  ("連用形-撥音便", "連用形の撥音便。だ・での前で「ん」になる"),
  ("連用タ接続", "た・ての前に使う連用形"),
  ("未然形-一般", "未然形。ない・受身・使役の語尾が付く"),
  ("未然形", "未然形。ない・受身・使役の語尾が付く"),
  ("仮定形-一般", "仮定形。ばが付く"),
  ("仮定形", "仮定形。ばが付く"),
];

const GENERIC_EXPLANATION: &str = "形態素解析器が報告した活用形";

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
  table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Display label of a detected form; unknown tokenizer tags are returned as is.
pub fn form_label(form: &DetectedForm) -> String {
  let key = form.key();
  lookup(FORM_LABELS, key).unwrap_or(key).to_string()
}

/// One-line explanation of a detected form.
pub fn form_explanation(form: &DetectedForm) -> &'static str {
  lookup(FORM_EXPLANATIONS, form.key()).unwrap_or(GENERIC_EXPLANATION)
}

/// Display label of a conjugation class.
pub fn class_label(class: &ConjugationClass) -> String {
  match class {
    ConjugationClass::Godan => "五段動詞".to_string(),
    ConjugationClass::Ichidan => "一段動詞".to_string(),
    ConjugationClass::SuruIrregular => "サ行変格活用".to_string(),
    ConjugationClass::KuruIrregular => "カ行変格活用".to_string(),
    ConjugationClass::Unknown(tag) if tag.is_empty() => "不明".to_string(),
    ConjugationClass::Unknown(tag) => tag.clone(),
  }
}

/// Display label of the independence / transitivity tag.
pub fn transitivity_label(tag: &str) -> String {
  match tag {
    "" => "不明".to_string(),
    "一般" | "自立" => "自立動詞".to_string(),
    "非自立可能" => "自立・補助動詞".to_string(),
    "非自立" => "補助動詞".to_string(),
    "接尾" => "接尾動詞".to_string(),
    other => other.to_string(),
  }
}
