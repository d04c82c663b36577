//! Error types and axum `IntoResponse` implementation.
//!
//! Every failure renders as `{"error": "..."}`; the status code is the only
//! thing separating a participant mistake from a broken store.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use enquete_core::candidate::Purpose;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("no link provided")]
  NoLinkProvided,
  #[error("link not found")]
  LinkNotFound,
  #[error("this link does not give access to that page")]
  Forbidden,
  #[error("not found")]
  NotFound,
  #[error("select a candidate first")]
  NoCandidate,
  #[error("{candidate:?} is not a valid {purpose} choice")]
  InvalidCandidate { purpose: Purpose, candidate: String },
  #[error("{0} vote already recorded for this link")]
  AlreadyVoted(Purpose),
  #[error("bad request: {0}")]
  BadRequest(String),
  #[error("render error: {0}")]
  Render(String),
  #[error("export error: {0}")]
  Export(#[from] enquete_export::Error),
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Error::Store(Box::new(e))
  }

  fn status(&self) -> StatusCode {
    match self {
      Error::NoLinkProvided => StatusCode::UNAUTHORIZED,
      Error::LinkNotFound | Error::NotFound => StatusCode::NOT_FOUND,
      Error::Forbidden => StatusCode::FORBIDDEN,
      Error::NoCandidate
      | Error::InvalidCandidate { .. }
      | Error::BadRequest(_) => StatusCode::BAD_REQUEST,
      Error::AlreadyVoted(_) => StatusCode::CONFLICT,
      Error::Render(_) | Error::Export(_) | Error::Store(_) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      tracing::error!(error = %self, "request failed");
    }
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}
