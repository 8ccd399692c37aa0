//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.

use std::sync::Arc;
use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use tracing::{info, instrument};

use crate::error::Result;
use crate::logic::*;
use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", fields(value = q.value))]
pub async fn http_get_encode(Query(q): Query<EncodeQuery>) -> Json<EncodeOut> {
  Json(do_encode(q.value))
}

#[instrument(level = "info", skip(body), fields(text_len = body.text.len()))]
pub async fn http_post_decode(Json(body): Json<DecodeIn>) -> Json<DecodeOut> {
  Json(do_decode(body.text))
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_question(
  State(state): State<Arc<AppState>>,
  Query(q): Query<DifficultyQuery>,
) -> Result<Json<StatelessQuestionOut>> {
  let out = new_question(&state, q.difficulty.as_deref())?;
  info!(target: "exercise", difficulty = %out.difficulty, "HTTP stateless question served");
  Ok(Json(out))
}

#[instrument(level = "info", skip(body))]
pub async fn http_post_validate(Json(body): Json<ValidateIn>) -> Json<ValidateOut> {
  Json(check_answer(&body))
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_post_session(
  State(state): State<Arc<AppState>>,
  body: Option<Json<StartSessionIn>>,
) -> Result<Json<SessionOut>> {
  let body = body.map(|Json(b)| b).unwrap_or_default();
  Ok(Json(start_session(&state, body.difficulty.as_deref()).await?))
}

#[instrument(level = "info", skip(state), fields(%id))]
pub async fn http_get_session(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<Json<SessionOut>> {
  Ok(Json(session_view(&state, &id).await?))
}

#[instrument(level = "info", skip(state, body), fields(%id, answer_len = body.answer.len()))]
pub async fn http_post_answer(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Json(body): Json<AnswerIn>,
) -> Result<Json<AnswerOut>> {
  Ok(Json(submit_answer(&state, &id, &body.answer).await?))
}

#[instrument(level = "info", skip(state), fields(%id))]
pub async fn http_post_next(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<Json<SessionOut>> {
  Ok(Json(next_question(&state, &id).await?))
}

#[instrument(level = "info", skip(state, body), fields(%id, difficulty = %body.difficulty))]
pub async fn http_post_difficulty(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Json(body): Json<ChangeDifficultyIn>,
) -> Result<Json<SessionOut>> {
  Ok(Json(change_difficulty(&state, &id, &body.difficulty).await?))
}

#[instrument(level = "info", skip(state), fields(%id))]
pub async fn http_post_reset(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<Json<SessionOut>> {
  Ok(Json(reset_score(&state, &id).await?))
}
