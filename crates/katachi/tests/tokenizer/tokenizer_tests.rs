//! tokenizer モジュール用統合テスト
//! tests/tokenizer/tokenizer_tests.rs

use std::sync::Arc;

use vibrato_rkyv::Dictionary;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

use katachi::analysis::reading::katakana_to_hiragana;
use katachi::dictionary::{DictionaryManager, default_cache_dir};
use katachi::tokenizer::{MorphemeTokenizer, VibratoMorphemeTokenizer};

/// キャッシュ済みの UniDic をロードする。無ければ None（テストはスキップ）
fn setup_cached_dictionary() -> Option<Arc<Dictionary>> {
  let cache_dir = default_cache_dir().ok()?;
  if !cache_dir.join(PresetDictionaryKind::UnidicCwj.name()).exists() {
    eprintln!("辞書キャッシュが存在しないためスキップ");
    return None;
  }

  let manager = DictionaryManager::with_preset(PresetDictionaryKind::UnidicCwj)
    .expect("DictionaryManager 構築失敗");
  Some(manager.load().expect("辞書ロード失敗"))
}

/// 活用した動詞の先頭形態素から辞書形と辞書形の読みが取れることを確認。
#[test]
fn inflected_verb_head_has_dictionary_reading() {
  let Some(dict) = setup_cached_dictionary() else {
    return;
  };

  let tokenizer = VibratoMorphemeTokenizer::from_shared_dictionary(dict);
  let morphemes = tokenizer.tokenize("書いて");

  assert!(!morphemes.is_empty(), "形態素が空です");

  let head = &morphemes[0];
  println!("head: {:?}", head);
  assert_eq!(head.dictionary_form, "書く");
  let reading = head.dictionary_reading.as_deref().map(katakana_to_hiragana);
  assert_eq!(reading.as_deref(), Some("かく"));
  assert_eq!(head.pos_tag(0), Some("動詞"));
}

/// 表層形を連結すると入力に戻ることを確認。
#[test]
fn surfaces_cover_input() {
  let Some(dict) = setup_cached_dictionary() else {
    return;
  };

  let tokenizer = VibratoMorphemeTokenizer::from_shared_dictionary(dict);
  let text = "食べさせられた";
  let morphemes = tokenizer.tokenize(text);

  let joined: String = morphemes.iter().map(|m| m.surface.as_str()).collect();
  assert_eq!(joined, text);
  assert!(morphemes.iter().all(|m| m.pos_tags.len() >= 6));
}

/// 空文字列は空の形態素列になる。
#[test]
fn empty_text_yields_no_morphemes() {
  let Some(dict) = setup_cached_dictionary() else {
    return;
  };

  let tokenizer = VibratoMorphemeTokenizer::from_shared_dictionary(dict);
  assert!(tokenizer.tokenize("").is_empty());
}
