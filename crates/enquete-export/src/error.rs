//! Error types for the enquete-export codec.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("CSV error: {0}")]
  Csv(#[from] csv::Error),

  #[error("spreadsheet error: {0}")]
  Xlsx(#[from] rust_xlsxwriter::XlsxError),

  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("unknown export table: {0:?}")]
  UnknownTable(String),

  #[error("unknown export format: {0:?}")]
  UnknownFormat(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
