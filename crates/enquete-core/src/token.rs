//! Tokens and the vote rows recorded against them.

use serde::{Deserialize, Serialize};

use crate::candidate::Purpose;

/// A single-use participant credential. Each purpose may be consumed once.
///
/// Tokens are never deleted; a bulk reset only clears the usage flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
  /// Hyphenated UUID v4 text.
  pub id:                 String,
  pub used_for_intention: bool,
  pub used_for_rejection: bool,
}

impl Token {
  /// A freshly created token with both flags cleared.
  pub fn fresh(id: impl Into<String>) -> Self {
    Self {
      id:                 id.into(),
      used_for_intention: false,
      used_for_rejection: false,
    }
  }

  pub fn is_used_for(&self, purpose: Purpose) -> bool {
    match purpose {
      Purpose::Intention => self.used_for_intention,
      Purpose::Rejection => self.used_for_rejection,
    }
  }

  /// The next step this participant has not completed yet, intention first.
  pub fn pending_step(&self) -> Option<Purpose> {
    Purpose::ALL.into_iter().find(|p| !self.is_used_for(*p))
  }
}

/// One row of the intention or rejection table. Append-only; nothing
/// prevents two rows for the same token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
  pub id:        i64,
  pub candidate: String,
  pub token:     String,
}
