//! Admin handlers for configuration, the token pool and the vote tables.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/admin/config` | Current display configuration |
//! | `PUT`    | `/admin/config` | Body: `{"show_real":false,"favored_candidate":"..."}` |
//! | `GET`    | `/admin/tokens` | Every token with its flags |
//! | `POST`   | `/admin/tokens` | Body: `{"count":1000}`; 201 + created tokens |
//! | `POST`   | `/admin/tokens/reset` | Clear every usage flag; 204 |
//! | `GET`    | `/admin/votes/{purpose}` | Raw vote rows |
//! | `DELETE` | `/admin/votes/{purpose}` | Clear that vote table; 204 |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use enquete_core::{
  candidate::{Purpose, REAL_CANDIDATES},
  config::PollConfig,
  store::PollStore,
  token::{Token, VoteRecord},
};
use serde::Deserialize;

use crate::{AppState, auth::AdminAccess, error::Error};

/// Batch size offered by default on the token creation form.
pub const DEFAULT_TOKEN_BATCH: usize = 1000;

// ─── Configuration ────────────────────────────────────────────────────────────

/// `GET /admin/config`
pub async fn get_config<S>(
  State(state): State<AppState<S>>,
  _admin: AdminAccess,
) -> Result<Json<PollConfig>, Error>
where
  S: PollStore + Clone + 'static,
{
  let config = state.store.load_config().await.map_err(Error::store)?;
  Ok(Json(config))
}

#[derive(Debug, Deserialize)]
pub struct ConfigBody {
  pub show_real:         bool,
  #[serde(default)]
  pub favored_candidate: Option<String>,
}

/// `PUT /admin/config`
///
/// The favored candidate, when given, must be one of the real candidates.
/// It is saved even when `show_real` is true.
pub async fn put_config<S>(
  State(state): State<AppState<S>>,
  _admin: AdminAccess,
  Json(body): Json<ConfigBody>,
) -> Result<Json<PollConfig>, Error>
where
  S: PollStore + Clone + 'static,
{
  if let Some(favored) = &body.favored_candidate
    && !REAL_CANDIDATES.contains(&favored.as_str())
  {
    return Err(Error::BadRequest(format!(
      "{favored:?} is not one of the candidates"
    )));
  }

  let config = state
    .store
    .save_config(body.show_real, body.favored_candidate)
    .await
    .map_err(Error::store)?;

  tracing::info!(
    show_real = config.show_real,
    favored = config.favored_candidate.as_deref().unwrap_or("-"),
    "configuration saved"
  );
  Ok(Json(config))
}

// ─── Tokens ───────────────────────────────────────────────────────────────────

/// `GET /admin/tokens`
pub async fn list_tokens<S>(
  State(state): State<AppState<S>>,
  _admin: AdminAccess,
) -> Result<Json<Vec<Token>>, Error>
where
  S: PollStore + Clone + 'static,
{
  let tokens = state.store.list_tokens().await.map_err(Error::store)?;
  Ok(Json(tokens))
}

#[derive(Debug, Deserialize)]
pub struct CreateTokensBody {
  #[serde(default = "default_batch")]
  pub count: usize,
}

fn default_batch() -> usize { DEFAULT_TOKEN_BATCH }

/// `POST /admin/tokens` with body `{"count":N}`, at least 1.
pub async fn create_tokens<S>(
  State(state): State<AppState<S>>,
  _admin: AdminAccess,
  Json(body): Json<CreateTokensBody>,
) -> Result<impl IntoResponse, Error>
where
  S: PollStore + Clone + 'static,
{
  if body.count == 0 {
    return Err(Error::BadRequest("count must be at least 1".to_string()));
  }

  let tokens = state
    .store
    .create_tokens(body.count)
    .await
    .map_err(Error::store)?;

  tracing::info!(count = tokens.len(), "tokens created");
  Ok((StatusCode::CREATED, Json(tokens)))
}

/// `POST /admin/tokens/reset`
pub async fn reset_tokens<S>(
  State(state): State<AppState<S>>,
  _admin: AdminAccess,
) -> Result<StatusCode, Error>
where
  S: PollStore + Clone + 'static,
{
  state.store.reset_all_usage().await.map_err(Error::store)?;
  tracing::warn!("all token usage flags cleared");
  Ok(StatusCode::NO_CONTENT)
}

// ─── Votes ────────────────────────────────────────────────────────────────────

/// `GET /admin/votes/{purpose}`
pub async fn list_votes<S>(
  State(state): State<AppState<S>>,
  _admin: AdminAccess,
  Path(purpose): Path<Purpose>,
) -> Result<Json<Vec<VoteRecord>>, Error>
where
  S: PollStore + Clone + 'static,
{
  let votes = state.store.list_votes(purpose).await.map_err(Error::store)?;
  Ok(Json(votes))
}

/// `DELETE /admin/votes/{purpose}`
pub async fn clear_votes<S>(
  State(state): State<AppState<S>>,
  _admin: AdminAccess,
  Path(purpose): Path<Purpose>,
) -> Result<StatusCode, Error>
where
  S: PollStore + Clone + 'static,
{
  state.store.clear_votes(purpose).await.map_err(Error::store)?;
  tracing::warn!(%purpose, "vote table cleared");
  Ok(StatusCode::NO_CONTENT)
}
