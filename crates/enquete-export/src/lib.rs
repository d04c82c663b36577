//! Tabular export codec for Enquete.
//!
//! Turns store snapshots (tokens, vote tables, configuration) into CSV or
//! XLSX bytes. Pure synchronous; no HTTP or database dependencies.
//!
//! # Quick start
//!
//! ```no_run
//! use enquete_export::{Format, table};
//!
//! let bytes = Format::Csv.encode(&table::tokens_table(&[])).unwrap();
//! assert_eq!(bytes, b"token,used_for_intention,used_for_rejection\n");
//! ```

mod delimited;
pub mod error;
mod spreadsheet;
pub mod table;

use std::str::FromStr;

pub use delimited::to_csv;
pub use error::{Error, Result};
pub use spreadsheet::to_xlsx;
pub use table::{Cell, Table};

use enquete_core::candidate::Purpose;

// ─── Table kind ──────────────────────────────────────────────────────────────

/// Which store table an export covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
  Tokens,
  Votes(Purpose),
  Config,
}

impl TableKind {
  /// Download file name without extension.
  pub fn file_stem(self) -> &'static str {
    match self {
      Self::Tokens => "tokens",
      Self::Votes(Purpose::Intention) => "intencao_votos",
      Self::Votes(Purpose::Rejection) => "rejeicao",
      Self::Config => "configuracao",
    }
  }
}

impl FromStr for TableKind {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "tokens" => Ok(Self::Tokens),
      "intention" => Ok(Self::Votes(Purpose::Intention)),
      "rejection" => Ok(Self::Votes(Purpose::Rejection)),
      "config" => Ok(Self::Config),
      other => Err(Error::UnknownTable(other.to_owned())),
    }
  }
}

// ─── Format ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
  Csv,
  Xlsx,
}

impl Format {
  pub fn extension(self) -> &'static str {
    match self {
      Self::Csv => "csv",
      Self::Xlsx => "xlsx",
    }
  }

  pub fn mime(self) -> &'static str {
    match self {
      Self::Csv => "text/csv",
      Self::Xlsx => {
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
      }
    }
  }

  pub fn encode(self, table: &Table) -> Result<Vec<u8>> {
    match self {
      Self::Csv => to_csv(table),
      Self::Xlsx => to_xlsx(table),
    }
  }
}

impl FromStr for Format {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "csv" => Ok(Self::Csv),
      "xlsx" => Ok(Self::Xlsx),
      other => Err(Error::UnknownFormat(other.to_owned())),
    }
  }
}

/// Split a download name such as `tokens.csv` into its table and format.
pub fn parse_file_name(name: &str) -> Result<(TableKind, Format)> {
  let (stem, ext) = name
    .rsplit_once('.')
    .ok_or_else(|| Error::UnknownFormat(name.to_owned()))?;
  Ok((stem.parse()?, ext.parse()?))
}
