//! Integer ↔ German number word conversion.
//!
//! Supported range is -999..=999. Magnitudes of 1000 and above are encoded as
//! their plain decimal digits; this is a fallback, not a German spelling.
//!
//! Decoding is permissive about input shape (case, surrounding whitespace,
//! digit strings) but strict about compound structure: `einundzwanzig` is 21,
//! while `einundhundert` or `zehnundzwanzig` are misses.

use crate::lexicon::{atom_value, atom_word, unit_in_compound, HUNDERT, MINUS_PREFIX, UND};

/// German spelling of `value`.
pub fn encode_number(value: i64) -> String {
  if value < 0 {
    return match value.checked_neg() {
      Some(n) => format!("{}{}", MINUS_PREFIX, encode_number(n)),
      None => value.to_string(),
    };
  }

  if let Some(word) = atom_word(value) {
    return word.to_string();
  }

  if value < 100 {
    let ones = value % 10;
    let tens = value / 10 * 10;
    // Teens and decades are atoms, so both lookups hit here.
    return match (unit_in_compound(ones), atom_word(tens)) {
      (Some(unit), Some(decade)) => format!("{unit}{UND}{decade}"),
      _ => value.to_string(),
    };
  }

  if value < 1000 {
    let hundreds = value / 100;
    let remainder = value % 100;
    let prefix = if hundreds == 1 {
      HUNDERT.to_string()
    } else {
      match atom_word(hundreds) {
        Some(w) => format!("{w}{HUNDERT}"),
        None => return value.to_string(),
      }
    };
    if remainder == 0 {
      return prefix;
    }
    return format!("{}{}", prefix, encode_number(remainder));
  }

  value.to_string()
}

/// Integer value of a German number word, or `None` when it cannot be read.
pub fn decode_german_word(text: &str) -> Option<i64> {
  let normalized = text.trim().to_lowercase();
  decode_normalized(&normalized)
}

fn decode_normalized(s: &str) -> Option<i64> {
  if s.is_empty() {
    return None;
  }

  if let Some(v) = atom_value(s) {
    return Some(v);
  }

  if let Some(rest) = s.strip_prefix(MINUS_PREFIX) {
    return decode_normalized(rest.trim_start()).and_then(i64::checked_neg);
  }

  // The shape check lets strings like "hunderteins" (which contain "und"
  // inside "hundert") fall through to the hundreds rule.
  if let Some((left, right)) = s.split_once(UND) {
    if let (Some(unit), Some(decade)) = (decode_normalized(left), decode_normalized(right)) {
      if (1..=9).contains(&unit) && (20..=90).contains(&decade) && decade % 10 == 0 {
        return Some(unit + decade);
      }
    }
  }

  if let Some((left, right)) = s.split_once(HUNDERT) {
    let multiplier = if left.is_empty() { 1 } else { decode_normalized(left)? };
    let remainder = if right.is_empty() { 0 } else { decode_normalized(right)? };
    if (1..=9).contains(&multiplier) && (0..=99).contains(&remainder) {
      return Some(multiplier * 100 + remainder);
    }
    return None;
  }

  s.parse::<i64>().ok()
}

/// Read a learner's free-text answer as digits or as a German number word.
pub fn normalize_answer(text: &str) -> Option<i64> {
  let trimmed = text.trim();
  if trimmed.is_empty() {
    return None;
  }
  trimmed.parse::<i64>().ok().or_else(|| decode_german_word(trimmed))
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn encodes_atoms_verbatim() {
    let cases = [
      (0, "null"), (1, "eins"), (2, "zwei"), (3, "drei"), (4, "vier"),
      (5, "fünf"), (6, "sechs"), (7, "sieben"), (8, "acht"), (9, "neun"),
      (10, "zehn"), (11, "elf"), (12, "zwölf"), (20, "zwanzig"),
      (30, "dreißig"), (40, "vierzig"), (50, "fünfzig"), (60, "sechzig"),
      (70, "siebzig"), (80, "achtzig"), (90, "neunzig"), (100, "hundert"),
    ];
    for (n, word) in cases {
      assert_eq!(encode_number(n), word);
    }
  }

  #[test]
  fn encodes_compounds_in_unit_and_ten_order() {
    assert_eq!(encode_number(21), "einundzwanzig");
    assert_eq!(encode_number(31), "einunddreißig");
    assert_eq!(encode_number(99), "neunundneunzig");
    assert_eq!(encode_number(16), "sechzehn");
    assert_eq!(encode_number(100), "hundert");
    assert_eq!(encode_number(101), "hunderteins");
    assert_eq!(encode_number(121), "hunderteinundzwanzig");
    assert_eq!(encode_number(200), "zweihundert");
    assert_eq!(encode_number(999), "neunhundertneunundneunzig");
  }

  #[test]
  fn never_uses_standalone_one_inside_compounds() {
    for n in 13..=999 {
      assert!(!encode_number(n).contains("einsund"), "{n} -> {}", encode_number(n));
    }
  }

  #[test]
  fn encodes_negatives_and_large_values() {
    assert_eq!(encode_number(-5), "minus fünf");
    assert_eq!(encode_number(-21), "minus einundzwanzig");
    assert_eq!(encode_number(1000), "1000");
    assert_eq!(encode_number(10_000), "10000");
    assert_eq!(encode_number(i64::MIN), i64::MIN.to_string());
  }

  #[test]
  fn round_trips_zero_to_999() {
    for n in 0..=999 {
      assert_eq!(decode_german_word(&encode_number(n)), Some(n), "{}", encode_number(n));
    }
  }

  #[test]
  fn round_trips_negative_spellings() {
    for n in -999..0 {
      assert_eq!(decode_german_word(&encode_number(n)), Some(n));
    }
  }

  #[test]
  fn decodes_with_case_and_whitespace_noise() {
    assert_eq!(decode_german_word("einundzwanzig"), Some(21));
    assert_eq!(decode_german_word("  Zweihundert "), Some(200));
    assert_eq!(decode_german_word("hundert"), Some(100));
    assert_eq!(decode_german_word("einhundert"), Some(100));
    assert_eq!(decode_german_word("21"), Some(21));
    assert_eq!(decode_german_word("ein"), Some(1));
  }

  #[test]
  fn decode_misses_yield_none() {
    assert_eq!(decode_german_word("notaword"), None);
    assert_eq!(decode_german_word(""), None);
    assert_eq!(decode_german_word("   "), None);
    assert_eq!(decode_german_word("21abc"), None);
    assert_eq!(decode_german_word("und"), None);
    assert_eq!(decode_german_word("hundertfoo"), None);
  }

  #[test]
  fn rejects_malformed_compounds() {
    assert_eq!(decode_german_word("einundhundert"), None);
    assert_eq!(decode_german_word("zehnundzwanzig"), None);
    assert_eq!(decode_german_word("einundzehn"), None);
    assert_eq!(decode_german_word("zwanzigundeins"), None);
    assert_eq!(decode_german_word("hunderthundert"), None);
    assert_eq!(decode_german_word("zehnhundert"), None);
  }

  #[test]
  fn normalizes_digits_and_words() {
    assert_eq!(normalize_answer("drei"), Some(3));
    assert_eq!(normalize_answer("3"), Some(3));
    assert_eq!(normalize_answer(" 42 "), Some(42));
    assert_eq!(normalize_answer("-4"), Some(-4));
    assert_eq!(normalize_answer("Vierundvierzig"), Some(44));
    assert_eq!(normalize_answer(""), None);
    assert_eq!(normalize_answer("  "), None);
    assert_eq!(normalize_answer("drei?"), None);
  }
}
