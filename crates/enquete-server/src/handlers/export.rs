//! Download handler for tabular exports.
//!
//! `GET /admin/export/{table}.{csv|xlsx}` where `table` is one of `tokens`,
//! `intention`, `rejection` or `config`.

use axum::{
  body::Body,
  extract::{Path, State},
  http::{StatusCode, header},
  response::Response,
};
use enquete_core::store::PollStore;
use enquete_export::{
  Table, TableKind,
  table::{config_table, tokens_table, votes_table},
};

use crate::{AppState, auth::AdminAccess, error::Error};

async fn snapshot<S>(store: &S, kind: TableKind) -> Result<Table, Error>
where
  S: PollStore,
{
  let table = match kind {
    TableKind::Tokens => {
      tokens_table(&store.list_tokens().await.map_err(Error::store)?)
    }
    TableKind::Votes(purpose) => {
      votes_table(&store.list_votes(purpose).await.map_err(Error::store)?)
    }
    TableKind::Config => {
      config_table(&store.load_config().await.map_err(Error::store)?)
    }
  };
  Ok(table)
}

/// `GET /admin/export/{file}`
pub async fn download<S>(
  State(state): State<AppState<S>>,
  _admin: AdminAccess,
  Path(file): Path<String>,
) -> Result<Response, Error>
where
  S: PollStore + Clone + 'static,
{
  let (kind, format) =
    enquete_export::parse_file_name(&file).map_err(|_| Error::NotFound)?;

  let table = snapshot(state.store.as_ref(), kind).await?;
  let bytes = format.encode(&table)?;
  let filename = format!("{}.{}", kind.file_stem(), format.extension());

  tracing::info!(%filename, rows = table.rows.len(), "export downloaded");

  Response::builder()
    .status(StatusCode::OK)
    .header(header::CONTENT_TYPE, format.mime())
    .header(
      header::CONTENT_DISPOSITION,
      format!("attachment; filename=\"{filename}\""),
    )
    .body(Body::from(bytes))
    .map_err(|e| Error::Render(e.to_string()))
}
