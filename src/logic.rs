//! Core behaviors shared by both HTTP and WebSocket handlers.
//!
//! This includes:
//!   - Number word conversion (encode/decode)
//!   - Stateless question generation and validation
//!   - Practice-session transitions (start, submit, next, difficulty, reset)

use tracing::{debug, info, instrument};

use crate::codec::{decode_german_word, encode_number};
use crate::domain::Tier;
use crate::error::{ApiError, Result};
use crate::exercise::{generate_question, reveal, validate_answer};
use crate::protocol::*;
use crate::session::SubmitOutcome;
use crate::state::AppState;

pub fn do_encode(value: i64) -> EncodeOut {
  EncodeOut { value, german: encode_number(value) }
}

pub fn do_decode(text: String) -> DecodeOut {
  let value = decode_german_word(&text);
  debug!(target: "zahlen_backend", %text, ?value, "Decoded number word");
  DecodeOut { text, value }
}

/// Parse a client-supplied difficulty, using the configured default when absent.
pub fn resolve_difficulty(state: &AppState, requested: Option<&str>) -> Result<Tier> {
  let parsed = requested
    .filter(|s| !s.trim().is_empty())
    .map(str::parse::<Tier>)
    .transpose()?;
  Ok(state.difficulty_or_default(parsed))
}

#[instrument(level = "info", skip(state))]
pub fn new_question(state: &AppState, difficulty: Option<&str>) -> Result<StatelessQuestionOut> {
  let difficulty = resolve_difficulty(state, difficulty)?;
  let question = generate_question(difficulty);
  debug!(target: "exercise", %difficulty, prompt = %question.rendered_prompt, "Stateless question generated");
  Ok(StatelessQuestionOut { difficulty, question })
}

#[instrument(level = "info", skip(body), fields(answer_len = body.answer.len()))]
pub fn check_answer(body: &ValidateIn) -> ValidateOut {
  let correct = validate_answer(&body.answer, &body.question);
  info!(target: "exercise", %correct, "Stateless answer evaluated");
  ValidateOut { correct, expected: reveal(&body.question) }
}

#[instrument(level = "info", skip(state))]
pub async fn start_session(state: &AppState, difficulty: Option<&str>) -> Result<SessionOut> {
  let difficulty = resolve_difficulty(state, difficulty)?;
  let session = state.start_session(difficulty).await;
  let live = state.session_count().await;
  info!(target: "exercise", id = %session.id, %difficulty, live_sessions = live, "Session started");
  Ok(to_out(&session))
}

#[instrument(level = "info", skip(state), fields(%session_id))]
pub async fn session_view(state: &AppState, session_id: &str) -> Result<SessionOut> {
  state
    .get_session(session_id)
    .await
    .map(|s| to_out(&s))
    .ok_or_else(|| unknown_session(session_id))
}

#[instrument(level = "info", skip(state, answer), fields(%session_id, answer_len = answer.len()))]
pub async fn submit_answer(state: &AppState, session_id: &str, answer: &str) -> Result<AnswerOut> {
  let (session, outcome) = state
    .update_session(session_id, |s, _| s.submit(answer))
    .await
    .ok_or_else(|| unknown_session(session_id))?;

  match outcome {
    SubmitOutcome::Checked { correct, expected } => {
      info!(target: "exercise", id = %session_id, %correct, correct_total = session.score.correct, total = session.score.total, "Answer evaluated");
      Ok(AnswerOut { correct, expected, session: to_out(&session) })
    }
    SubmitOutcome::Ignored => Err(ApiError::BadRequest("answer is empty".into())),
    SubmitOutcome::AlreadyAnswered => Err(ApiError::Conflict(
      "question already answered; request the next question".into(),
    )),
  }
}

#[instrument(level = "info", skip(state), fields(%session_id))]
pub async fn next_question(state: &AppState, session_id: &str) -> Result<SessionOut> {
  let (session, ()) = state
    .update_session(session_id, |s, rng| (s.next(rng), ()))
    .await
    .ok_or_else(|| unknown_session(session_id))?;
  debug!(target: "exercise", id = %session_id, prompt = %session.question.rendered_prompt, "Next question");
  Ok(to_out(&session))
}

#[instrument(level = "info", skip(state), fields(%session_id))]
pub async fn change_difficulty(state: &AppState, session_id: &str, difficulty: &str) -> Result<SessionOut> {
  let difficulty: Tier = difficulty.parse()?;
  let (session, ()) = state
    .update_session(session_id, |s, rng| (s.change_difficulty(difficulty, rng), ()))
    .await
    .ok_or_else(|| unknown_session(session_id))?;
  info!(target: "exercise", id = %session_id, %difficulty, "Difficulty changed");
  Ok(to_out(&session))
}

#[instrument(level = "info", skip(state), fields(%session_id))]
pub async fn reset_score(state: &AppState, session_id: &str) -> Result<SessionOut> {
  let (session, ()) = state
    .update_session(session_id, |s, rng| (s.reset_score(rng), ()))
    .await
    .ok_or_else(|| unknown_session(session_id))?;
  info!(target: "exercise", id = %session_id, "Score reset");
  Ok(to_out(&session))
}

fn unknown_session(id: &str) -> ApiError {
  ApiError::NotFound(format!("session {}", id))
}
