//! The `PollStore` trait.
//!
//! Implemented by storage backends (e.g. `enquete-store-sqlite`). The server
//! depends on this abstraction, not on any concrete backend.
//!
//! Every method is a single independent write or read. Nothing here groups
//! a vote insert with the matching token flag update; callers issue them as
//! two sequential operations.

use std::future::Future;

use crate::{
  candidate::Purpose,
  config::PollConfig,
  tally::Tally,
  token::{Token, VoteRecord},
};

/// Abstraction over an Enquete storage backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait PollStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Tokens ────────────────────────────────────────────────────────────

  /// Generate `n` fresh UUID v4 tokens with both usage flags cleared.
  ///
  /// A primary-key collision is surfaced as an error, never retried.
  fn create_tokens(
    &self,
    n: usize,
  ) -> impl Future<Output = Result<Vec<Token>, Self::Error>> + Send + '_;

  /// Look a token up by its text. Returns `None` if it does not exist.
  fn lookup<'a>(
    &'a self,
    token_id: &'a str,
  ) -> impl Future<Output = Result<Option<Token>, Self::Error>> + Send + 'a;

  /// All tokens in creation order.
  fn list_tokens(
    &self,
  ) -> impl Future<Output = Result<Vec<Token>, Self::Error>> + Send + '_;

  /// Set the usage flag for `purpose`. Idempotent; an unknown token is a
  /// no-op.
  fn mark_used<'a>(
    &'a self,
    token_id: &'a str,
    purpose: Purpose,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Clear both usage flags on every token. Vote rows are untouched.
  fn reset_all_usage(
    &self,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Votes ─────────────────────────────────────────────────────────────

  /// Append one vote row. The candidate is not checked against any closed
  /// set.
  fn record_vote<'a>(
    &'a self,
    purpose: Purpose,
    candidate: &'a str,
    token_id: &'a str,
  ) -> impl Future<Output = Result<VoteRecord, Self::Error>> + Send + 'a;

  /// All rows of the `purpose` table, ordered by id.
  fn list_votes(
    &self,
    purpose: Purpose,
  ) -> impl Future<Output = Result<Vec<VoteRecord>, Self::Error>> + Send + '_;

  /// Per-candidate counts for `purpose`, in first-appearance order.
  fn count_votes(
    &self,
    purpose: Purpose,
  ) -> impl Future<Output = Result<Tally, Self::Error>> + Send + '_;

  /// Delete every row of the `purpose` table. Token flags are untouched.
  fn clear_votes(
    &self,
    purpose: Purpose,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Configuration ─────────────────────────────────────────────────────

  /// Read the single configuration row.
  fn load_config(
    &self,
  ) -> impl Future<Output = Result<PollConfig, Self::Error>> + Send + '_;

  /// Overwrite the configuration row and refresh its timestamp.
  fn save_config(
    &self,
    show_real: bool,
    favored_candidate: Option<String>,
  ) -> impl Future<Output = Result<PollConfig, Self::Error>> + Send + '_;
}
