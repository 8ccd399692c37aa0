//! Arithmetic exercise generation and answer validation.
//!
//! Everything here is a pure function over its inputs plus an RNG; session
//! state (score, current phase) is kept by `session`.

use rand::{seq::SliceRandom, Rng};
use serde::Serialize;

use crate::codec::{encode_number, normalize_answer};
use crate::domain::{ArithmeticQuestion, Operator, Tier};

/// German name of an operator.
pub fn operator_to_german(operator: Operator) -> &'static str {
  operator.to_german()
}

/// Generate a question using the thread-local RNG.
pub fn generate_question(tier: Tier) -> ArithmeticQuestion {
  generate_question_with(tier, &mut rand::thread_rng())
}

/// Generate a question drawing operands and operator from `rng`.
pub fn generate_question_with<R: Rng>(tier: Tier, rng: &mut R) -> ArithmeticQuestion {
  let (min, max) = tier.range();
  // Tier operands never overflow add/subtract/multiply, so the first draw
  // always builds; the loop only guards the type.
  loop {
    let a = rng.gen_range(min..=max);
    let b = rng.gen_range(min..=max);
    let operator = *Operator::GENERATED
      .choose(&mut *rng)
      .unwrap_or(&Operator::Add);

    let (first, second) = match operator {
      Operator::Subtract => (a.max(b), a.min(b)),
      _ => (a, b),
    };
    if let Some(question) = build_question(first, second, operator) {
      return question;
    }
  }
}

/// Assemble a question from an operand pair in prompt order.
/// `None` when the operation has no integer result (overflow, inexact or
/// zero division).
pub fn build_question(first: i64, second: i64, operator: Operator) -> Option<ArithmeticQuestion> {
  let correct_answer = operator.apply(first, second)?;
  Some(ArithmeticQuestion {
    first_operand: first,
    second_operand: second,
    operator,
    display_first_operand: first,
    display_second_operand: second,
    correct_answer,
    rendered_prompt: render_prompt(first, operator, second),
  })
}

/// `"<first> <operator> <second> = ?"` in German words.
pub fn render_prompt(first: i64, operator: Operator, second: i64) -> String {
  format!(
    "{} {} {} = ?",
    encode_number(first),
    operator_to_german(operator),
    encode_number(second)
  )
}

/// The value answers are graded against: the operator applied to the stored
/// operands (not `correct_answer`, not the display pair).
pub fn expected_answer(question: &ArithmeticQuestion) -> Option<i64> {
  question.operator.apply(question.first_operand, question.second_operand)
}

/// Check a free-text answer against the question's stored operands.
/// Unreadable answers are simply wrong.
pub fn validate_answer(answer: &str, question: &ArithmeticQuestion) -> bool {
  match (normalize_answer(answer), expected_answer(question)) {
    (Some(given), Some(expected)) => given == expected,
    _ => false,
  }
}

/// The expected answer in digits and in German, shown after a miss.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Reveal {
  pub value: i64,
  pub german: String,
}

/// `None` when the stored operands cannot be evaluated; there is then no
/// answer the validator would accept.
pub fn reveal(question: &ArithmeticQuestion) -> Option<Reveal> {
  expected_answer(question).map(|value| Reveal { value, german: encode_number(value) })
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use rand::{rngs::StdRng, SeedableRng};

  fn seven_minus_three() -> ArithmeticQuestion {
    ArithmeticQuestion {
      first_operand: 7,
      second_operand: 3,
      operator: Operator::Subtract,
      display_first_operand: 7,
      display_second_operand: 3,
      correct_answer: 4,
      rendered_prompt: "sieben minus drei = ?".into(),
    }
  }

  #[test]
  fn operator_vocabulary() {
    assert_eq!(operator_to_german(Operator::Add), "plus");
    assert_eq!(operator_to_german(Operator::Subtract), "minus");
    assert_eq!(operator_to_german(Operator::Multiply), "mal");
    assert_eq!(operator_to_german(Operator::Divide), "geteilt durch");
  }

  #[test]
  fn easy_questions_hold_generation_invariants() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
      let q = generate_question_with(Tier::Easy, &mut rng);
      for op in [q.first_operand, q.second_operand, q.display_first_operand, q.display_second_operand] {
        assert!((1..=10).contains(&op), "operand {op} out of easy range");
      }
      assert_ne!(q.operator, Operator::Divide);
      match q.operator {
        Operator::Subtract => {
          assert!(q.display_first_operand >= q.display_second_operand);
          assert!(q.correct_answer >= 0);
        }
        Operator::Multiply => assert_eq!(q.correct_answer, q.first_operand * q.second_operand),
        Operator::Add => assert_eq!(q.correct_answer, q.first_operand + q.second_operand),
        Operator::Divide => unreachable!(),
      }
    }
  }

  #[test]
  fn generated_questions_accept_their_own_answer() {
    for tier in Tier::ALL {
      for _ in 0..300 {
        let q = generate_question(tier);
        assert!(validate_answer(&q.correct_answer.to_string(), &q), "{q:?}");
        if q.correct_answer < 1000 {
          assert!(validate_answer(&encode_number(q.correct_answer), &q), "{q:?}");
        }
      }
    }
  }

  #[test]
  fn all_operators_show_up() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
      seen.insert(generate_question_with(Tier::Medium, &mut rng).operator);
    }
    assert_eq!(seen.len(), 3);
  }

  #[test]
  fn prompt_is_rendered_in_german() {
    let q = build_question(21, 4, Operator::Multiply).unwrap();
    assert_eq!(q.rendered_prompt, "einundzwanzig mal vier = ?");
    assert_eq!(q.correct_answer, 84);
    let q = build_question(100, 99, Operator::Subtract).unwrap();
    assert_eq!(q.rendered_prompt, "hundert minus neunundneunzig = ?");
  }

  #[test]
  fn validates_fixed_subtraction() {
    let q = seven_minus_three();
    assert!(validate_answer("4", &q));
    assert!(validate_answer("vier", &q));
    assert!(validate_answer("  Vier ", &q));
    assert!(!validate_answer("5", &q));
    assert!(!validate_answer("", &q));
    assert!(!validate_answer("fünf", &q));
  }

  #[test]
  fn validation_uses_stored_operands_not_display() {
    let mut q = seven_minus_three();
    q.first_operand = 3;
    q.second_operand = 7;
    assert!(validate_answer("-4", &q));
    assert!(!validate_answer("4", &q));
  }

  #[test]
  fn division_only_accepts_exact_results() {
    assert_eq!(Operator::Divide.apply(12, 4), Some(3));
    assert_eq!(Operator::Divide.apply(10, 4), None);
    assert_eq!(Operator::Divide.apply(10, 0), None);
    let q = build_question(12, 4, Operator::Divide).unwrap();
    assert_eq!(q.rendered_prompt, "zwölf geteilt durch vier = ?");
    assert!(validate_answer("drei", &q));
  }

  #[test]
  fn non_evaluable_operands_build_no_question() {
    assert_eq!(build_question(10, 4, Operator::Divide), None);
    assert_eq!(build_question(10, 0, Operator::Divide), None);
    assert_eq!(build_question(i64::MAX, 2, Operator::Multiply), None);
  }

  #[test]
  fn no_reveal_for_unevaluable_stored_question() {
    let mut q = seven_minus_three();
    q.operator = Operator::Divide;
    assert_eq!(reveal(&q), None);
    assert!(!validate_answer("0", &q));
  }

  #[test]
  fn reveal_falls_back_to_digits_past_999() {
    let q = build_question(100, 100, Operator::Multiply).unwrap();
    assert_eq!(reveal(&q), Some(Reveal { value: 10_000, german: "10000".into() }));
    assert_eq!(reveal(&seven_minus_three()).map(|r| r.german), Some("vier".to_string()));
  }

  #[test]
  fn revealed_answer_is_the_one_validation_accepts() {
    let mut q = seven_minus_three();
    q.first_operand = 3;
    q.second_operand = 7;
    let shown = reveal(&q).unwrap();
    assert_eq!(shown, Reveal { value: -4, german: "minus vier".into() });
    assert!(validate_answer(&shown.value.to_string(), &q));
    assert!(validate_answer(&shown.german, &q));
    assert!(!validate_answer("vier", &q));
  }

  #[test]
  fn switching_tiers_changes_range_immediately() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
      let q = generate_question_with(Tier::Easy, &mut rng);
      assert!(q.first_operand <= 10 && q.second_operand <= 10);
    }
    let mut saw_large = false;
    for _ in 0..200 {
      let q = generate_question_with(Tier::Hard, &mut rng);
      assert!((1..=100).contains(&q.first_operand));
      assert!((1..=100).contains(&q.second_operand));
      saw_large |= q.first_operand > 10 || q.second_operand > 10;
    }
    assert!(saw_large);
  }
}
