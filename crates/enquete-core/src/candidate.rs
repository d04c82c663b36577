//! Candidate closed sets and the vote purpose discriminant.
//!
//! The closed sets are enforced by the presentation layer only. Storage
//! accepts any candidate string.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

// ─── Closed sets ─────────────────────────────────────────────────────────────

/// The three real candidates. A favored candidate is expected to be one of
/// these.
pub const REAL_CANDIDATES: [&str; 3] =
  ["Fabio de Paula", "Coronel Crispim", "Prof Eudes"];

/// Choice recorded when a participant votes blank or null.
pub const BLANK_OR_NULL: &str = "Branco/Nulo";

/// Choice recorded when a participant has not decided yet.
pub const UNDECIDED: &str = "Indeciso";

/// Every choice offered on the intention step.
pub const INTENTION_CHOICES: [&str; 5] = [
  REAL_CANDIDATES[0],
  REAL_CANDIDATES[1],
  REAL_CANDIDATES[2],
  BLANK_OR_NULL,
  UNDECIDED,
];

/// Every choice offered on the rejection step.
pub const REJECTION_CHOICES: [&str; 3] = REAL_CANDIDATES;

// ─── Purpose ─────────────────────────────────────────────────────────────────

/// Which of the two poll questions a vote (or a token flag) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
  Intention,
  Rejection,
}

impl Purpose {
  pub const ALL: [Purpose; 2] = [Purpose::Intention, Purpose::Rejection];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Intention => "intention",
      Self::Rejection => "rejection",
    }
  }

  /// The closed set of choices offered for this purpose.
  pub fn choices(self) -> &'static [&'static str] {
    match self {
      Self::Intention => &INTENTION_CHOICES,
      Self::Rejection => &REJECTION_CHOICES,
    }
  }

  pub fn is_valid_choice(self, candidate: &str) -> bool {
    self.choices().contains(&candidate)
  }
}

impl fmt::Display for Purpose {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Purpose {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "intention" => Ok(Self::Intention),
      "rejection" => Ok(Self::Rejection),
      other => Err(Error::UnknownPurpose(other.to_owned())),
    }
  }
}
