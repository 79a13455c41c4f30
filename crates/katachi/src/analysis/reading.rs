//! Reading reconstruction
//!
//! Derives the reading of an inflected surface form from the reading of its
//! dictionary form. The kanji stem keeps its dictionary pronunciation and the
//! kana tail, which carries the inflection, is taken verbatim from the surface.
//!
//! ```text
//! surface   書いて   dictionary 書く / かく
//!           ^^ stem boundary after 書
//! reading   か + いて = かいて
//! ```

use tracing::debug;

/// First and last code points converted by [`katakana_to_hiragana`] (ァ..=ヶ).
const KATAKANA_CONVERTIBLE: std::ops::RangeInclusive<char> = '\u{30A1}'..='\u{30F6}';

/// Distance between a katakana code point and its hiragana counterpart.
const KATAKANA_OFFSET: u32 = 0x60;

/// Returns `true` for characters of the hiragana block.
pub fn is_hiragana(c: char) -> bool {
  ('\u{3041}'..='\u{309F}').contains(&c)
}

/// Returns `true` for characters of the katakana block (including `ー`).
pub fn is_katakana(c: char) -> bool {
  ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// Returns `true` for hiragana or katakana.
pub fn is_kana(c: char) -> bool {
  is_hiragana(c) || is_katakana(c)
}

/// Returns `true` if `text` is non-empty and made of kana only.
pub fn is_kana_only(text: &str) -> bool {
  !text.is_empty() && text.chars().all(is_kana)
}

/// Converts katakana to hiragana by subtracting 0x60 from each convertible
/// katakana code point. Other characters (including `ー`) are kept as is.
pub fn katakana_to_hiragana(text: &str) -> String {
  text
    .chars()
    .map(|c| {
      if KATAKANA_CONVERTIBLE.contains(&c) {
        char::from_u32(c as u32 - KATAKANA_OFFSET).unwrap_or(c)
      } else {
        c
      }
    })
    .collect()
}

/// Reconstructs the reading of `surface` from the dictionary form and its reading.
///
/// All kana in `dictionary_reading` are expected in the same script as the
/// kana tail of `surface` (normally hiragana, see [`katakana_to_hiragana`]).
///
/// Never fails: when no boundary can be established, the dictionary reading
/// is returned unmodified as an approximation.
pub fn reconstruct(surface: &str, dictionary_form: &str, dictionary_reading: &str) -> String {
  if surface == dictionary_form {
    return dictionary_reading.to_string();
  }

  let reconstructed = match dictionary_form.char_indices().find(|(_, c)| is_kana(*c)) {
    Some((stem_end, first_kana)) => {
      reconstruct_from_stem(surface, dictionary_form, dictionary_reading, stem_end, first_kana)
    }
    None => reconstruct_pure_kanji(surface, dictionary_form, dictionary_reading),
  };

  match reconstructed {
    Some(reading) => reading,
    None => {
      debug!(
        surface = %surface,
        dictionary_form = %dictionary_form,
        "No stem boundary found, falling back to dictionary reading"
      );
      dictionary_reading.to_string()
    }
  }
}

/// Kanji stem followed by kana: `書く` + `かく` + `書いて`.
fn reconstruct_from_stem(
  surface: &str,
  dictionary_form: &str,
  dictionary_reading: &str,
  stem_end: usize,
  first_kana: char,
) -> Option<String> {
  let stem = &dictionary_form[..stem_end];

  // Kana-only dictionary form: the surface is its own reading.
  if stem.is_empty() {
    return is_kana_only(surface).then(|| surface.to_string());
  }

  // Surface written in kana (e.g. かいて for 書く).
  if !surface.starts_with(stem) {
    return is_kana_only(surface).then(|| surface.to_string());
  }

  // Every stem character is read with at least one kana.
  let min_offset = stem.chars().count();
  let stem_reading_end = dictionary_reading
    .char_indices()
    .skip(min_offset)
    .find(|(_, c)| *c == first_kana)
    .map(|(i, _)| i)?;

  let stem_reading = &dictionary_reading[..stem_reading_end];
  let tail = &surface[stem_end..];

  if tail.chars().all(is_kana) {
    return Some(format!("{stem_reading}{tail}"));
  }

  // Compound with a later kanji (取り消す → 取り消した): align on the common prefix.
  reconstruct_from_common_prefix(surface, dictionary_form, dictionary_reading)
}

/// Dictionary form without kana: `勉強` + `べんきょう` + `勉強して`.
fn reconstruct_pure_kanji(
  surface: &str,
  dictionary_form: &str,
  dictionary_reading: &str,
) -> Option<String> {
  let (kana_start, _) = surface.char_indices().find(|(_, c)| is_kana(*c))?;
  let (head, tail) = surface.split_at(kana_start);

  if head != dictionary_form || !tail.chars().all(is_kana) {
    return None;
  }

  Some(format!("{dictionary_reading}{tail}"))
}

/// Keeps the reading of the longest common prefix and replaces the differing
/// kana tail of the dictionary form with the one observed on the surface.
fn reconstruct_from_common_prefix(
  surface: &str,
  dictionary_form: &str,
  dictionary_reading: &str,
) -> Option<String> {
  let common = surface
    .char_indices()
    .zip(dictionary_form.chars())
    .take_while(|((_, a), b)| a == b)
    .last()
    .map(|((i, c), _)| i + c.len_utf8())
    .unwrap_or(0);

  let dictionary_tail = &dictionary_form[common..];
  let surface_tail = &surface[common..];

  if !dictionary_tail.chars().all(is_kana) || !surface_tail.chars().all(is_kana) {
    return None;
  }

  let stem_reading = dictionary_reading.strip_suffix(dictionary_tail)?;
  Some(format!("{stem_reading}{surface_tail}"))
}
