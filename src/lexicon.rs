//! Fixed German number words used as building blocks by the codec.
//!
//! Atoms: 0..=19, the decades 20..=90 and 100. Everything else is composed.
//! The inverse table also knows the bound form `ein`, which only ever appears
//! inside compounds (`einundzwanzig`), never as a standalone answer.

const ATOMS: &[(i64, &str)] = &[
  (0, "null"),
  (1, "eins"),
  (2, "zwei"),
  (3, "drei"),
  (4, "vier"),
  (5, "fünf"),
  (6, "sechs"),
  (7, "sieben"),
  (8, "acht"),
  (9, "neun"),
  (10, "zehn"),
  (11, "elf"),
  (12, "zwölf"),
  (13, "dreizehn"),
  (14, "vierzehn"),
  (15, "fünfzehn"),
  (16, "sechzehn"),
  (17, "siebzehn"),
  (18, "achtzehn"),
  (19, "neunzehn"),
  (20, "zwanzig"),
  (30, "dreißig"),
  (40, "vierzig"),
  (50, "fünfzig"),
  (60, "sechzig"),
  (70, "siebzig"),
  (80, "achtzig"),
  (90, "neunzig"),
  (100, "hundert"),
];

/// Bound unit form used in front of `und` and `hundert`.
pub const BOUND_ONE: &str = "ein";

pub const UND: &str = "und";
pub const HUNDERT: &str = "hundert";
pub const MINUS_PREFIX: &str = "minus ";

/// Spelling of an atomic value, if `value` is one.
pub fn atom_word(value: i64) -> Option<&'static str> {
  ATOMS.iter().find(|(v, _)| *v == value).map(|(_, w)| *w)
}

/// Value of an atomic spelling (expects lowercase, trimmed input).
pub fn atom_value(word: &str) -> Option<i64> {
  if word == BOUND_ONE {
    return Some(1);
  }
  ATOMS.iter().find(|(_, w)| *w == word).map(|(v, _)| *v)
}

/// Spelling of a single digit 1..=9 for use inside a compound.
/// `1` becomes the bound form `ein`.
pub fn unit_in_compound(digit: i64) -> Option<&'static str> {
  match digit {
    1 => Some(BOUND_ONE),
    2..=9 => atom_word(digit),
    _ => None,
  }
}
