//! Integration tests for `SqliteStore` against an in-memory database.

use enquete_core::{
  candidate::{Purpose, REAL_CANDIDATES},
  store::PollStore,
  tally::{aggregate, apply_intention_skew, Tally},
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

// ─── Tokens ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_tokens_are_fresh_and_unique() {
  let s = store().await;
  let created = s.create_tokens(25).await.unwrap();
  assert_eq!(created.len(), 25);

  let listed = s.list_tokens().await.unwrap();
  assert_eq!(listed, created);
  assert!(listed.iter().all(|t| !t.used_for_intention && !t.used_for_rejection));

  let mut ids: Vec<_> = listed.iter().map(|t| t.id.clone()).collect();
  ids.sort();
  ids.dedup();
  assert_eq!(ids.len(), 25);
}

#[tokio::test]
async fn create_zero_tokens_is_empty() {
  let s = store().await;
  assert!(s.create_tokens(0).await.unwrap().is_empty());
  assert!(s.list_tokens().await.unwrap().is_empty());
}

#[tokio::test]
async fn lookup_unknown_returns_none() {
  let s = store().await;
  assert!(s.lookup("not-a-token").await.unwrap().is_none());
}

#[tokio::test]
async fn mark_used_sets_only_that_flag() {
  let s = store().await;
  let t = s.create_tokens(1).await.unwrap().remove(0);

  s.mark_used(&t.id, Purpose::Rejection).await.unwrap();
  let fetched = s.lookup(&t.id).await.unwrap().unwrap();
  assert!(!fetched.used_for_intention);
  assert!(fetched.used_for_rejection);
}

#[tokio::test]
async fn mark_used_is_idempotent() {
  let s = store().await;
  let t = s.create_tokens(1).await.unwrap().remove(0);

  s.mark_used(&t.id, Purpose::Intention).await.unwrap();
  s.mark_used(&t.id, Purpose::Intention).await.unwrap();
  let fetched = s.lookup(&t.id).await.unwrap().unwrap();
  assert!(fetched.used_for_intention);
  assert!(!fetched.used_for_rejection);
}

#[tokio::test]
async fn mark_used_unknown_token_is_noop() {
  let s = store().await;
  s.mark_used("ghost", Purpose::Intention).await.unwrap();
  assert!(s.list_tokens().await.unwrap().is_empty());
}

#[tokio::test]
async fn reset_clears_flags_but_keeps_votes() {
  let s = store().await;
  let tokens = s.create_tokens(3).await.unwrap();
  for t in &tokens {
    s.record_vote(Purpose::Intention, REAL_CANDIDATES[0], &t.id)
      .await
      .unwrap();
    s.mark_used(&t.id, Purpose::Intention).await.unwrap();
    s.mark_used(&t.id, Purpose::Rejection).await.unwrap();
  }

  s.reset_all_usage().await.unwrap();

  let listed = s.list_tokens().await.unwrap();
  assert_eq!(listed.len(), 3);
  assert!(listed.iter().all(|t| !t.used_for_intention && !t.used_for_rejection));
  assert_eq!(s.list_votes(Purpose::Intention).await.unwrap().len(), 3);
}

// ─── Votes ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn record_vote_goes_to_the_purpose_table() {
  let s = store().await;
  let a = s.record_vote(Purpose::Intention, "A", "t1").await.unwrap();
  let b = s.record_vote(Purpose::Rejection, "B", "t1").await.unwrap();

  assert_eq!(a.candidate, "A");
  assert_eq!(b.token, "t1");

  let intention = s.list_votes(Purpose::Intention).await.unwrap();
  let rejection = s.list_votes(Purpose::Rejection).await.unwrap();
  assert_eq!(intention, vec![a]);
  assert_eq!(rejection, vec![b]);
}

#[tokio::test]
async fn record_vote_accepts_any_candidate_and_duplicates() {
  let s = store().await;
  s.record_vote(Purpose::Rejection, "Nobody In Particular", "t1")
    .await
    .unwrap();
  s.record_vote(Purpose::Rejection, "Nobody In Particular", "t1")
    .await
    .unwrap();

  let rows = s.list_votes(Purpose::Rejection).await.unwrap();
  assert_eq!(rows.len(), 2);
  assert!(rows[0].id < rows[1].id);
}

#[tokio::test]
async fn count_votes_matches_aggregate_order() {
  let s = store().await;
  for c in ["B", "A", "B", "C", "A", "B"] {
    s.record_vote(Purpose::Intention, c, "t").await.unwrap();
  }

  let counted = s.count_votes(Purpose::Intention).await.unwrap();
  let rows = s.list_votes(Purpose::Intention).await.unwrap();
  assert_eq!(counted, aggregate(&rows));
  assert_eq!(counted, [("B", 3u64), ("A", 2), ("C", 1)].into_iter().collect::<Tally>());
}

#[tokio::test]
async fn clear_votes_only_touches_one_table() {
  let s = store().await;
  s.record_vote(Purpose::Intention, "A", "t").await.unwrap();
  s.record_vote(Purpose::Rejection, "B", "t").await.unwrap();

  s.clear_votes(Purpose::Intention).await.unwrap();

  assert!(s.count_votes(Purpose::Intention).await.unwrap().is_empty());
  assert_eq!(s.count_votes(Purpose::Rejection).await.unwrap().total(), 1);
}

// ─── Configuration ───────────────────────────────────────────────────────────

#[tokio::test]
async fn default_config_shows_real_results() {
  let s = store().await;
  let cfg = s.load_config().await.unwrap();
  assert!(cfg.show_real);
  assert!(cfg.favored_candidate.is_none());
}

#[tokio::test]
async fn save_then_load_config() {
  let s = store().await;
  let saved = s
    .save_config(false, Some("Prof Eudes".into()))
    .await
    .unwrap();

  let loaded = s.load_config().await.unwrap();
  assert!(!loaded.show_real);
  assert_eq!(loaded.favored_candidate.as_deref(), Some("Prof Eudes"));
  assert_eq!(loaded.updated_at, saved.updated_at);
}

#[tokio::test]
async fn save_config_does_not_cross_validate() {
  let s = store().await;
  s.save_config(true, Some("Coronel Crispim".into()))
    .await
    .unwrap();
  let loaded = s.load_config().await.unwrap();
  assert!(loaded.show_real);
  assert_eq!(loaded.favored_candidate.as_deref(), Some("Coronel Crispim"));
}

#[tokio::test]
async fn reopening_schema_keeps_saved_config() {
  let s = store().await;
  s.save_config(false, Some("Fabio de Paula".into()))
    .await
    .unwrap();

  // A second initialisation must not overwrite the existing row.
  s.init_schema_again().await;
  let loaded = s.load_config().await.unwrap();
  assert!(!loaded.show_real);
}

#[tokio::test]
async fn missing_config_row_is_reported() {
  let s = store().await;
  s.delete_config_row().await;

  let err = s.load_config().await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(enquete_core::Error::MissingConfig)
  ));
}

// ─── End to end ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn token_vote_and_flag_scenario() {
  let s = store().await;
  let t1 = s.create_tokens(1).await.unwrap().remove(0);

  s.record_vote(Purpose::Intention, "Fabio de Paula", &t1.id)
    .await
    .unwrap();

  let counts = s.count_votes(Purpose::Intention).await.unwrap();
  assert_eq!(apply_intention_skew(counts.clone(), None), counts);
  assert_eq!(counts.get("Fabio de Paula"), Some(1));
  assert_eq!(counts.len(), 1);

  s.mark_used(&t1.id, Purpose::Intention).await.unwrap();
  let fetched = s.lookup(&t1.id).await.unwrap().unwrap();
  assert!(fetched.used_for_intention);
  assert!(!fetched.used_for_rejection);
}

// ─── Test-only helpers ───────────────────────────────────────────────────────

impl SqliteStore {
  async fn init_schema_again(&self) { self.init_schema().await.unwrap(); }

  async fn delete_config_row(&self) {
    self
      .conn
      .call(|conn| {
        conn.execute("DELETE FROM configuration", [])?;
        Ok(())
      })
      .await
      .unwrap();
  }
}
