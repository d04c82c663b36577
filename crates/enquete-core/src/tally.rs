//! Vote aggregation and the displayed-result skew transform.
//!
//! A [`Tally`] keeps candidates in order of first appearance in the record
//! set. Every tie-break below ("the first candidate holding the maximum")
//! refers to that order, so it must be preserved by whoever builds a tally.

use serde::{Deserialize, Serialize};

use crate::{candidate::Purpose, config::PollConfig, token::VoteRecord};

// ─── Tally ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateCount {
  pub candidate: String,
  pub count:     u64,
}

/// Per-candidate vote counts in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tally {
  entries: Vec<CandidateCount>,
}

impl Tally {
  pub fn new() -> Self { Self::default() }

  pub fn entries(&self) -> &[CandidateCount] { &self.entries }

  pub fn is_empty(&self) -> bool { self.entries.is_empty() }

  pub fn len(&self) -> usize { self.entries.len() }

  pub fn get(&self, candidate: &str) -> Option<u64> {
    self.position(candidate).map(|i| self.entries[i].count)
  }

  /// Sum of all counts, i.e. the number of participants shown.
  pub fn total(&self) -> u64 { self.entries.iter().map(|e| e.count).sum() }

  /// Add `n` votes for `candidate`, appending it if unseen.
  pub fn add(&mut self, candidate: &str, n: u64) {
    match self.position(candidate) {
      Some(i) => self.entries[i].count += n,
      None => self.entries.push(CandidateCount {
        candidate: candidate.to_owned(),
        count:     n,
      }),
    }
  }

  fn position(&self, candidate: &str) -> Option<usize> {
    self.entries.iter().position(|e| e.candidate == candidate)
  }

  /// Index of the first entry holding the maximum count.
  fn leader(&self) -> Option<usize> {
    let max = self.entries.iter().map(|e| e.count).max()?;
    self.entries.iter().position(|e| e.count == max)
  }
}

impl<S: AsRef<str>> FromIterator<(S, u64)> for Tally {
  fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
    let mut tally = Tally::new();
    for (candidate, n) in iter {
      tally.add(candidate.as_ref(), n);
    }
    tally
  }
}

// ─── Aggregation ─────────────────────────────────────────────────────────────

/// Group vote rows by candidate. Order follows the first appearance of each
/// candidate in `records`.
pub fn aggregate<'a>(records: impl IntoIterator<Item = &'a VoteRecord>) -> Tally {
  records.into_iter().map(|r| (r.candidate.as_str(), 1)).collect()
}

// ─── Skew ────────────────────────────────────────────────────────────────────

/// Give `favored` the highest observed count.
///
/// The first candidate holding the maximum receives the favored candidate's
/// original count. When the favored candidate already leads, nothing changes.
/// A missing or unknown `favored` leaves the tally as is.
pub fn apply_intention_skew(mut tally: Tally, favored: Option<&str>) -> Tally {
  let Some(fav) = favored.and_then(|f| tally.position(f)) else {
    return tally;
  };
  let Some(leader) = tally.leader() else {
    return tally;
  };

  let max_count = tally.entries[leader].count;
  let favored_count = tally.entries[fav].count;
  tally.entries[leader].count = favored_count;
  tally.entries[fav].count = max_count;
  tally
}

/// Keep `favored` from showing as the most rejected candidate.
///
/// Only acts when the favored candidate is the first candidate holding the
/// maximum. It then swaps counts with the first candidate holding the
/// highest count strictly below the maximum. If there is no such candidate
/// (a single entry, or everyone tied) nothing changes. When some other
/// candidate is the most rejected, the real counts stand.
pub fn apply_rejection_skew(mut tally: Tally, favored: Option<&str>) -> Tally {
  let Some(fav) = favored.and_then(|f| tally.position(f)) else {
    return tally;
  };
  let Some(most_rejected) = tally.leader() else {
    return tally;
  };
  if most_rejected != fav {
    return tally;
  }

  let max_count = tally.entries[most_rejected].count;
  let Some(second_count) = tally
    .entries
    .iter()
    .map(|e| e.count)
    .filter(|c| *c != max_count)
    .max()
  else {
    return tally;
  };
  let Some(second) = tally.entries.iter().position(|e| e.count == second_count)
  else {
    return tally;
  };

  tally.entries[second].count = max_count;
  tally.entries[fav].count = second_count;
  tally
}

/// The tally that should be displayed for `purpose` under `config`.
pub fn displayed_tally(tally: Tally, purpose: Purpose, config: &PollConfig) -> Tally {
  match config.skew_target() {
    None => tally,
    Some(favored) => match purpose {
      Purpose::Intention => apply_intention_skew(tally, Some(favored)),
      Purpose::Rejection => apply_rejection_skew(tally, Some(favored)),
    },
  }
}
