//! Error types for `enquete-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The single configuration row is absent. Only possible if the schema
  /// was initialised by something other than the store itself.
  #[error("no configuration row")]
  MissingConfig,

  #[error("unknown vote purpose: {0:?}")]
  UnknownPurpose(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
