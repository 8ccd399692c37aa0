//! Domain models: difficulty tiers, arithmetic operators and the question itself.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Difficulty tier bounding the operand range of generated questions.
/// Deserializes through `FromStr`, so config files and API payloads accept
/// the same (case-insensitive) names.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Tier {
  Easy,
  #[default]
  Medium,
  Hard,
}

impl Tier {
  pub const ALL: [Tier; 3] = [Tier::Easy, Tier::Medium, Tier::Hard];

  /// Closed operand range `(min, max)`.
  pub fn range(self) -> (i64, i64) {
    match self {
      Tier::Easy => (1, 10),
      Tier::Medium => (1, 50),
      Tier::Hard => (1, 100),
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Tier::Easy => "easy",
      Tier::Medium => "medium",
      Tier::Hard => "hard",
    }
  }
}

impl fmt::Display for Tier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
pub struct UnknownTier(pub String);

impl FromStr for Tier {
  type Err = UnknownTier;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = s.trim().to_lowercase();
    Tier::ALL
      .into_iter()
      .find(|t| t.as_str() == wanted)
      .ok_or_else(|| UnknownTier(s.to_string()))
  }
}

impl TryFrom<String> for Tier {
  type Error = UnknownTier;

  fn try_from(s: String) -> Result<Self, Self::Error> {
    s.parse()
  }
}

/// Arithmetic operator. Generation only ever draws add/subtract/multiply;
/// `Divide` exists for the German operator vocabulary.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
  Add,
  Subtract,
  Multiply,
  Divide,
}

impl Operator {
  /// Operators the generator draws from.
  pub const GENERATED: [Operator; 3] = [Operator::Add, Operator::Subtract, Operator::Multiply];

  pub fn symbol(self) -> &'static str {
    match self {
      Operator::Add => "+",
      Operator::Subtract => "-",
      Operator::Multiply => "*",
      Operator::Divide => "/",
    }
  }

  pub fn to_german(self) -> &'static str {
    match self {
      Operator::Add => "plus",
      Operator::Subtract => "minus",
      Operator::Multiply => "mal",
      Operator::Divide => "geteilt durch",
    }
  }

  /// Checked evaluation. Overflow, division by zero and inexact division yield `None`.
  pub fn apply(self, a: i64, b: i64) -> Option<i64> {
    match self {
      Operator::Add => a.checked_add(b),
      Operator::Subtract => a.checked_sub(b),
      Operator::Multiply => a.checked_mul(b),
      Operator::Divide => {
        if b != 0 && a.checked_rem(b)? == 0 { a.checked_div(b) } else { None }
      }
    }
  }
}

/// A generated arithmetic exercise.
///
/// `first_operand`/`second_operand` are the pair answers are validated against.
/// The generator stores them already ordered for subtraction, so they match
/// the display operands for every question it produces.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArithmeticQuestion {
  pub first_operand: i64,
  pub second_operand: i64,
  pub operator: Operator,
  pub display_first_operand: i64,
  pub display_second_operand: i64,
  pub correct_answer: i64,
  pub rendered_prompt: String,
}
