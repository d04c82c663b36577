//! Tabular snapshots of the store, ready for serialisation.
//!
//! Column names follow the store's column names. Booleans are written as
//! `1`/`0`, the way SQLite hands them back.

use enquete_core::{
  config::PollConfig,
  token::{Token, VoteRecord},
};

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
  Text(String),
  Integer(i64),
  Null,
}

impl From<bool> for Cell {
  fn from(b: bool) -> Self { Cell::Integer(i64::from(b)) }
}

impl From<i64> for Cell {
  fn from(n: i64) -> Self { Cell::Integer(n) }
}

impl From<String> for Cell {
  fn from(s: String) -> Self { Cell::Text(s) }
}

impl From<Option<String>> for Cell {
  fn from(s: Option<String>) -> Self { s.map_or(Cell::Null, Cell::Text) }
}

/// A header row plus data rows. No index column is ever added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
  pub headers: Vec<&'static str>,
  pub rows:    Vec<Vec<Cell>>,
}

pub fn tokens_table(tokens: &[Token]) -> Table {
  Table {
    headers: vec!["token", "used_for_intention", "used_for_rejection"],
    rows:    tokens
      .iter()
      .map(|t| {
        vec![
          Cell::from(t.id.clone()),
          Cell::from(t.used_for_intention),
          Cell::from(t.used_for_rejection),
        ]
      })
      .collect(),
  }
}

/// The intention or rejection table; both share one layout.
pub fn votes_table(records: &[VoteRecord]) -> Table {
  Table {
    headers: vec!["id", "candidate", "token"],
    rows:    records
      .iter()
      .map(|r| {
        vec![
          Cell::from(r.id),
          Cell::from(r.candidate.clone()),
          Cell::from(r.token.clone()),
        ]
      })
      .collect(),
  }
}

/// The single configuration row.
pub fn config_table(config: &PollConfig) -> Table {
  Table {
    headers: vec!["id", "show_real", "favored_candidate", "updated_at"],
    rows:    vec![vec![
      Cell::Integer(1),
      Cell::from(config.show_real),
      Cell::from(config.favored_candidate.clone()),
      Cell::Text(config.updated_at.format("%Y-%m-%d %H:%M:%S").to_string()),
    ]],
  }
}
