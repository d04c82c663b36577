//! Encoding and decoding helpers between domain types and SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings. Booleans are stored as 0/1
//! integers. Each [`Purpose`] owns one vote table and one token flag column.

use chrono::{DateTime, Utc};
use enquete_core::{candidate::Purpose, config::PollConfig, token::Token};

use crate::{Error, Result};

// ─── Purpose ──────────────────────────────────────────────────────────────────

pub fn votes_table(purpose: Purpose) -> &'static str {
  match purpose {
    Purpose::Intention => "intention_votes",
    Purpose::Rejection => "rejection_votes",
  }
}

pub fn flag_column(purpose: Purpose) -> &'static str {
  match purpose {
    Purpose::Intention => "used_for_intention",
    Purpose::Rejection => "used_for_rejection",
  }
}

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Rows ─────────────────────────────────────────────────────────────────────

pub fn token_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Token> {
  Ok(Token {
    id:                 row.get(0)?,
    used_for_intention: row.get(1)?,
    used_for_rejection: row.get(2)?,
  })
}

/// Raw configuration row before timestamp decoding.
pub struct RawConfig {
  pub show_real:         bool,
  pub favored_candidate: Option<String>,
  pub updated_at:        String,
}

impl RawConfig {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      show_real:         row.get(0)?,
      favored_candidate: row.get(1)?,
      updated_at:        row.get(2)?,
    })
  }

  pub fn into_config(self) -> Result<PollConfig> {
    Ok(PollConfig {
      show_real:         self.show_real,
      favored_candidate: self.favored_candidate,
      updated_at:        decode_dt(&self.updated_at)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn dt_round_trips_through_rfc3339() {
    let now = Utc::now();
    assert_eq!(decode_dt(&encode_dt(now)).unwrap(), now);
  }

  #[test]
  fn sqlite_default_timestamp_is_rejected() {
    assert!(matches!(
      decode_dt("2024-09-01 12:00:00"),
      Err(Error::DateParse(_))
    ));
  }
}
