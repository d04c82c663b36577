//! The single-row display configuration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether displayed results are genuine, and which candidate to favor when
/// they are not.
///
/// `favored_candidate` is only consulted when `show_real` is `false`. The
/// two fields are not cross-validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollConfig {
  pub show_real:         bool,
  pub favored_candidate: Option<String>,
  pub updated_at:        DateTime<Utc>,
}

impl PollConfig {
  /// The candidate the skew transform should favor, if skewing is enabled.
  pub fn skew_target(&self) -> Option<&str> {
    if self.show_real {
      None
    } else {
      self.favored_candidate.as_deref()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn cfg(show_real: bool, favored: Option<&str>) -> PollConfig {
    PollConfig {
      show_real,
      favored_candidate: favored.map(str::to_owned),
      updated_at: Utc::now(),
    }
  }

  #[test]
  fn favored_is_ignored_when_showing_real_results() {
    assert_eq!(cfg(true, Some("Prof Eudes")).skew_target(), None);
  }

  #[test]
  fn favored_applies_when_not_showing_real_results() {
    assert_eq!(
      cfg(false, Some("Prof Eudes")).skew_target(),
      Some("Prof Eudes")
    );
    assert_eq!(cfg(false, None).skew_target(), None);
  }
}
