//! Practice session: the answer/result cycle of the calculation exercise.
//!
//! `Session` is a plain value. Every transition takes `self` by value and
//! returns the next session, so the caller decides where the state lives
//! (the service keeps them in `AppState`, a UI could keep one in memory).
//!
//!   AwaitingAnswer --submit--> ShowingResult --next--> AwaitingAnswer

use rand::Rng;
use serde::Serialize;

use crate::domain::{ArithmeticQuestion, Tier};
use crate::exercise::{generate_question_with, reveal, validate_answer, Reveal};

#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct Score {
  pub correct: u32,
  pub total: u32,
}

impl Score {
  /// Rounded percentage of correct answers, `None` before the first answer.
  pub fn accuracy_percent(&self) -> Option<u32> {
    if self.total == 0 {
      return None;
    }
    Some((f64::from(self.correct) * 100.0 / f64::from(self.total)).round() as u32)
  }

  fn record(self, correct: bool) -> Self {
    Score {
      correct: self.correct + u32::from(correct),
      total: self.total + 1,
    }
  }
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Phase {
  AwaitingAnswer,
  ShowingResult { answer: String, correct: bool },
}

#[derive(Clone, Debug, Serialize)]
pub struct Session {
  pub id: String,
  pub difficulty: Tier,
  pub question: ArithmeticQuestion,
  pub phase: Phase,
  pub score: Score,
}

/// Result of `Session::submit`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
  /// Answer checked; the session now shows the result.
  Checked { correct: bool, expected: Option<Reveal> },
  /// Blank answer; nothing changed.
  Ignored,
  /// The current question was already answered; call `next` first.
  AlreadyAnswered,
}

impl Session {
  pub fn start<R: Rng>(id: impl Into<String>, difficulty: Tier, rng: &mut R) -> Self {
    Session {
      id: id.into(),
      difficulty,
      question: generate_question_with(difficulty, rng),
      phase: Phase::AwaitingAnswer,
      score: Score::default(),
    }
  }

  pub fn submit(self, answer: &str) -> (Self, SubmitOutcome) {
    if matches!(self.phase, Phase::ShowingResult { .. }) {
      return (self, SubmitOutcome::AlreadyAnswered);
    }
    if answer.trim().is_empty() {
      return (self, SubmitOutcome::Ignored);
    }

    let correct = validate_answer(answer, &self.question);
    let expected = reveal(&self.question);
    let next = Session {
      score: self.score.record(correct),
      phase: Phase::ShowingResult { answer: answer.to_string(), correct },
      ..self
    };
    (next, SubmitOutcome::Checked { correct, expected })
  }

  /// Fresh question of the current difficulty; valid from either phase.
  pub fn next<R: Rng>(self, rng: &mut R) -> Self {
    Session {
      question: generate_question_with(self.difficulty, rng),
      phase: Phase::AwaitingAnswer,
      ..self
    }
  }

  /// Switch tier and immediately replace the question. The score carries over.
  pub fn change_difficulty<R: Rng>(self, difficulty: Tier, rng: &mut R) -> Self {
    Session { difficulty, ..self }.next(rng)
  }

  pub fn reset_score<R: Rng>(self, rng: &mut R) -> Self {
    Session { score: Score::default(), ..self }.next(rng)
  }
}
