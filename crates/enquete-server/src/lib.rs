//! HTTP layer for Enquete.
//!
//! Exposes an axum [`Router`] serving the participant voting flow, the
//! results charts and the admin console, backed by any [`PollStore`].
//! Every route authenticates through the `?token=` link parameter.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod render;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use enquete_core::store::PollStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use auth::AccessKeys;
use handlers::{admin, export, participant, results};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `ENQUETE_*` environment variables.
#[derive(Deserialize)]
pub struct ServerConfig {
  pub host:        String,
  pub port:        u16,
  pub store_path:  PathBuf,
  pub admin_key:   String,
  pub results_key: String,
}

impl ServerConfig {
  pub fn access_keys(&self) -> AccessKeys {
    AccessKeys {
      admin_key:   self.admin_key.clone(),
      results_key: self.results_key.clone(),
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: PollStore> {
  pub store: Arc<S>,
  pub keys:  Arc<AccessKeys>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the poll server.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: PollStore + Clone + 'static,
{
  Router::new()
    .route("/poll",                    get(participant::status))
    .route("/poll/{purpose}",          post(participant::vote::<S>))
    .route("/results",                 get(results::charts::<S>))
    .route("/results/{file}",          get(results::chart_svg::<S>))
    .route("/admin/config",            get(admin::get_config::<S>).put(admin::put_config::<S>))
    .route("/admin/tokens",            get(admin::list_tokens::<S>).post(admin::create_tokens::<S>))
    .route("/admin/tokens/reset",      post(admin::reset_tokens::<S>))
    .route("/admin/votes/{purpose}",   get(admin::list_votes::<S>).delete(admin::clear_votes::<S>))
    .route("/admin/export/{file}",     get(export::download::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
