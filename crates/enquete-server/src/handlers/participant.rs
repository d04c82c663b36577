//! Participant handlers: token status and the two voting steps.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/poll` | Token flags, the pending step and its choices |
//! | `POST` | `/poll/{purpose}` | Body: `{"candidate":"..."}`; 201 + receipt |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use enquete_core::{
  candidate::Purpose,
  store::PollStore,
  token::{Token, VoteRecord},
};
use serde::{Deserialize, Serialize};

use crate::{AppState, auth::ParticipantAccess, error::Error};

// ─── Status ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PollStatus {
  pub token:              String,
  pub used_for_intention: bool,
  pub used_for_rejection: bool,
  /// The next step to complete, intention first. `None` once both are done.
  pub pending:            Option<Purpose>,
  /// Choices offered for the pending step.
  pub choices:            &'static [&'static str],
}

impl From<Token> for PollStatus {
  fn from(token: Token) -> Self {
    let pending = token.pending_step();
    Self {
      used_for_intention: token.used_for_intention,
      used_for_rejection: token.used_for_rejection,
      token: token.id,
      pending,
      choices: pending.map(Purpose::choices).unwrap_or(&[]),
    }
  }
}

/// `GET /poll?token=<token>`
pub async fn status(ParticipantAccess(token): ParticipantAccess) -> Json<PollStatus> {
  Json(PollStatus::from(token))
}

// ─── Vote ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct VoteBody {
  #[serde(default)]
  pub candidate: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VoteReceipt {
  pub record: VoteRecord,
  /// The step still pending after this vote, if any.
  pub next:   Option<Purpose>,
}

/// `POST /poll/{purpose}?token=<token>`
///
/// The closed-set check lives here, not in the store. The vote row and the
/// token flag are two separate writes.
pub async fn vote<S>(
  State(state): State<AppState<S>>,
  ParticipantAccess(mut token): ParticipantAccess,
  Path(purpose): Path<Purpose>,
  Json(body): Json<VoteBody>,
) -> Result<impl IntoResponse, Error>
where
  S: PollStore + Clone + 'static,
{
  let candidate = body
    .candidate
    .map(|c| c.trim().to_owned())
    .filter(|c| !c.is_empty())
    .ok_or(Error::NoCandidate)?;

  if !purpose.is_valid_choice(&candidate) {
    return Err(Error::InvalidCandidate { purpose, candidate });
  }
  if token.is_used_for(purpose) {
    return Err(Error::AlreadyVoted(purpose));
  }

  let record = state
    .store
    .record_vote(purpose, &candidate, &token.id)
    .await
    .map_err(Error::store)?;

  state
    .store
    .mark_used(&token.id, purpose)
    .await
    .map_err(Error::store)?;

  tracing::info!(%purpose, record_id = record.id, "vote recorded");

  match purpose {
    Purpose::Intention => token.used_for_intention = true,
    Purpose::Rejection => token.used_for_rejection = true,
  }

  Ok((
    StatusCode::CREATED,
    Json(VoteReceipt { record, next: token.pending_step() }),
  ))
}
