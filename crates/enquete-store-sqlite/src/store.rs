//! [`SqliteStore`], the SQLite implementation of [`PollStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use enquete_core::{
  candidate::Purpose,
  config::PollConfig,
  store::PollStore,
  tally::Tally,
  token::{Token, VoteRecord},
};

use crate::{
  encode::{encode_dt, flag_column, token_from_row, votes_table, RawConfig},
  schema::{DEFAULT_CONFIG, SCHEMA},
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A poll store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Create missing tables and seed the default configuration row.
  pub(crate) async fn init_schema(&self) -> Result<()> {
    let now = encode_dt(Utc::now());
    self
      .conn
      .call(move |conn| {
        conn.execute_batch(SCHEMA)?;
        conn.execute(DEFAULT_CONFIG, rusqlite::params![now])?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── PollStore impl ──────────────────────────────────────────────────────────

impl PollStore for SqliteStore {
  type Error = Error;

  // ── Tokens ────────────────────────────────────────────────────────────────

  async fn create_tokens(&self, n: usize) -> Result<Vec<Token>> {
    let tokens: Vec<Token> = (0..n)
      .map(|_| Token::fresh(Uuid::new_v4().hyphenated().to_string()))
      .collect();
    let ids: Vec<String> = tokens.iter().map(|t| t.id.clone()).collect();

    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        {
          let mut stmt = tx.prepare("INSERT INTO tokens (token) VALUES (?1)")?;
          for id in &ids {
            stmt.execute(rusqlite::params![id])?;
          }
        }
        tx.commit()?;
        Ok(())
      })
      .await?;

    tracing::debug!(count = n, "inserted tokens");
    Ok(tokens)
  }

  async fn lookup(&self, token_id: &str) -> Result<Option<Token>> {
    let id = token_id.to_owned();

    let token = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT token, used_for_intention, used_for_rejection
             FROM tokens WHERE token = ?1",
            rusqlite::params![id],
            token_from_row,
          )
          .optional()?)
      })
      .await?;

    Ok(token)
  }

  async fn list_tokens(&self) -> Result<Vec<Token>> {
    let tokens = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT token, used_for_intention, used_for_rejection
           FROM tokens ORDER BY rowid",
        )?;
        let rows = stmt
          .query_map([], token_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(tokens)
  }

  async fn mark_used(&self, token_id: &str, purpose: Purpose) -> Result<()> {
    let id = token_id.to_owned();
    let sql = format!("UPDATE tokens SET {} = 1 WHERE token = ?1", flag_column(purpose));

    self
      .conn
      .call(move |conn| {
        conn.execute(&sql, rusqlite::params![id])?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn reset_all_usage(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute(
          "UPDATE tokens SET used_for_intention = 0, used_for_rejection = 0",
          [],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Votes ─────────────────────────────────────────────────────────────────

  async fn record_vote(
    &self,
    purpose:   Purpose,
    candidate: &str,
    token_id:  &str,
  ) -> Result<VoteRecord> {
    let candidate = candidate.to_owned();
    let token = token_id.to_owned();
    let sql = format!(
      "INSERT INTO {} (candidate, token) VALUES (?1, ?2)",
      votes_table(purpose)
    );

    let record = self
      .conn
      .call(move |conn| {
        conn.execute(&sql, rusqlite::params![candidate, token])?;
        Ok(VoteRecord { id: conn.last_insert_rowid(), candidate, token })
      })
      .await?;

    Ok(record)
  }

  async fn list_votes(&self, purpose: Purpose) -> Result<Vec<VoteRecord>> {
    let sql = format!(
      "SELECT id, candidate, token FROM {} ORDER BY id",
      votes_table(purpose)
    );

    let records = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], |row| {
            Ok(VoteRecord {
              id:        row.get(0)?,
              candidate: row.get(1)?,
              token:     row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(records)
  }

  async fn count_votes(&self, purpose: Purpose) -> Result<Tally> {
    // MIN(id) keeps candidates in order of first appearance.
    let sql = format!(
      "SELECT candidate, COUNT(*) FROM {}
       GROUP BY candidate
       ORDER BY MIN(id)",
      votes_table(purpose)
    );

    let pairs: Vec<(String, i64)> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(pairs.into_iter().map(|(c, n)| (c, n.max(0) as u64)).collect())
  }

  async fn clear_votes(&self, purpose: Purpose) -> Result<()> {
    let sql = format!("DELETE FROM {}", votes_table(purpose));

    self
      .conn
      .call(move |conn| {
        conn.execute(&sql, [])?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Configuration ─────────────────────────────────────────────────────────

  async fn load_config(&self) -> Result<PollConfig> {
    let raw: Option<RawConfig> = self
      .conn
      .call(|conn| {
        Ok(conn
          .query_row(
            "SELECT show_real, favored_candidate, updated_at
             FROM configuration WHERE id = 1",
            [],
            RawConfig::from_row,
          )
          .optional()?)
      })
      .await?;

    raw
      .ok_or(Error::Core(enquete_core::Error::MissingConfig))?
      .into_config()
  }

  async fn save_config(
    &self,
    show_real:         bool,
    favored_candidate: Option<String>,
  ) -> Result<PollConfig> {
    let config = PollConfig { show_real, favored_candidate, updated_at: Utc::now() };

    let favored = config.favored_candidate.clone();
    let at_str  = encode_dt(config.updated_at);

    let updated = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE configuration
           SET show_real = ?1, favored_candidate = ?2, updated_at = ?3
           WHERE id = 1",
          rusqlite::params![show_real, favored, at_str],
        )?)
      })
      .await?;

    if updated == 0 {
      return Err(Error::Core(enquete_core::Error::MissingConfig));
    }
    Ok(config)
  }
}
