//! Results handlers: displayed tallies as chart descriptions or SVG.
//!
//! Any valid link may read results. The stored configuration decides
//! whether the genuine counts or the skewed ones are shown.

use axum::{
  Json,
  body::Body,
  extract::{Path, State},
  http::{StatusCode, header},
  response::Response,
};
use enquete_core::{
  candidate::Purpose,
  chart::Chart,
  config::PollConfig,
  store::PollStore,
  tally::displayed_tally,
};
use serde::Serialize;

use crate::{AppState, auth::Access, error::Error, render::pie_svg};

#[derive(Debug, Serialize)]
pub struct ResultsView {
  pub intention: Chart,
  pub rejection: Chart,
}

async fn displayed_chart<S>(
  store:   &S,
  purpose: Purpose,
  config:  &PollConfig,
) -> Result<Chart, Error>
where
  S: PollStore,
{
  let tally = store.count_votes(purpose).await.map_err(Error::store)?;
  Ok(Chart::from_tally(purpose, &displayed_tally(tally, purpose, config)))
}

/// `GET /results?token=<link>`
pub async fn charts<S>(
  State(state): State<AppState<S>>,
  Access(_role): Access,
) -> Result<Json<ResultsView>, Error>
where
  S: PollStore + Clone + 'static,
{
  let config = state.store.load_config().await.map_err(Error::store)?;
  let store = state.store.as_ref();

  Ok(Json(ResultsView {
    intention: displayed_chart(store, Purpose::Intention, &config).await?,
    rejection: displayed_chart(store, Purpose::Rejection, &config).await?,
  }))
}

/// `GET /results/{purpose}.svg?token=<link>`
pub async fn chart_svg<S>(
  State(state): State<AppState<S>>,
  Access(_role): Access,
  Path(file): Path<String>,
) -> Result<Response, Error>
where
  S: PollStore + Clone + 'static,
{
  let purpose: Purpose = file
    .strip_suffix(".svg")
    .and_then(|p| p.parse().ok())
    .ok_or(Error::NotFound)?;

  let config = state.store.load_config().await.map_err(Error::store)?;
  let chart = displayed_chart(state.store.as_ref(), purpose, &config).await?;
  let svg = pie_svg(&chart)?;

  Response::builder()
    .status(StatusCode::OK)
    .header(header::CONTENT_TYPE, "image/svg+xml")
    .header(header::CACHE_CONTROL, "no-store")
    .body(Body::from(svg))
    .map_err(|e| Error::Render(e.to_string()))
}
