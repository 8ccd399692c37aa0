//! HTTP-facing errors. The number/exercise core never fails; these cover the
//! service around it (unknown sessions, bad difficulty names, phase misuse).

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::UnknownTier;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error("Not found: {0}")]
  NotFound(String),

  #[error("Bad request: {0}")]
  BadRequest(String),

  #[error("Conflict: {0}")]
  Conflict(String),
}

impl From<UnknownTier> for ApiError {
  fn from(e: UnknownTier) -> Self {
    ApiError::BadRequest(e.to_string())
  }
}

#[derive(Serialize)]
struct ErrorResponse {
  error: String,
  message: String,
}

impl ApiError {
  pub fn status(&self) -> (StatusCode, &'static str) {
    match self {
      ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
      ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
      ApiError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, error_type) = self.status();
    let body = Json(ErrorResponse {
      error: error_type.to_string(),
      message: self.to_string(),
    });
    (status, body).into_response()
  }
}

pub type Result<T> = std::result::Result<T, ApiError>;
