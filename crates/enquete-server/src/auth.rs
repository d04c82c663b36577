//! Link-based access control.
//!
//! Every page is reached through a link carrying a `?token=` query
//! parameter. The value decides the role: the configured admin key, the
//! configured results key, or a participant token present in the store.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use enquete_core::{store::PollStore, token::Token};
use serde::Deserialize;

use crate::{AppState, error::Error};

/// Shared secrets that unlock the admin and results-only views.
#[derive(Clone)]
pub struct AccessKeys {
  pub admin_key:   String,
  pub results_key: String,
}

/// Who is behind a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
  Admin,
  Results,
  Participant(Token),
}

#[derive(Debug, Deserialize)]
struct LinkParams {
  token: Option<String>,
}

/// Resolve the role for a presented link value.
///
/// The value is compared exactly as presented; only an absent or empty
/// value counts as no link.
pub async fn resolve_role<S>(
  store:     &S,
  keys:      &AccessKeys,
  presented: Option<&str>,
) -> Result<Role, Error>
where
  S: PollStore,
{
  let value = presented
    .filter(|v| !v.is_empty())
    .ok_or(Error::NoLinkProvided)?;

  if value == keys.admin_key {
    return Ok(Role::Admin);
  }
  if value == keys.results_key {
    return Ok(Role::Results);
  }

  store
    .lookup(value)
    .await
    .map_err(Error::store)?
    .map(Role::Participant)
    .ok_or(Error::LinkNotFound)
}

async fn role_from_parts<S>(parts: &Parts, state: &AppState<S>) -> Result<Role, Error>
where
  S: PollStore,
{
  let Query(params) = Query::<LinkParams>::try_from_uri(&parts.uri)
    .map_err(|e| Error::BadRequest(e.body_text()))?;
  resolve_role(state.store.as_ref(), &state.keys, params.token.as_deref()).await
}

// ─── Extractors ──────────────────────────────────────────────────────────────

/// Any valid link.
pub struct Access(pub Role);

/// Only the admin key.
pub struct AdminAccess;

/// Only a participant token; carries the token state read for this request.
pub struct ParticipantAccess(pub Token);

impl<S> FromRequestParts<AppState<S>> for Access
where
  S: PollStore + 'static,
{
  type Rejection = Error;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    Ok(Access(role_from_parts(parts, state).await?))
  }
}

impl<S> FromRequestParts<AppState<S>> for AdminAccess
where
  S: PollStore + 'static,
{
  type Rejection = Error;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    match role_from_parts(parts, state).await? {
      Role::Admin => Ok(AdminAccess),
      _ => Err(Error::Forbidden),
    }
  }
}

impl<S> FromRequestParts<AppState<S>> for ParticipantAccess
where
  S: PollStore + 'static,
{
  type Rejection = Error;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    match role_from_parts(parts, state).await? {
      Role::Participant(token) => Ok(ParticipantAccess(token)),
      _ => Err(Error::Forbidden),
    }
  }
}
