//! SQL schema for the Enquete SQLite store.
//!
//! Executed at every connection startup; every statement is idempotent.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS tokens (
    token              TEXT PRIMARY KEY,
    used_for_intention INTEGER NOT NULL DEFAULT 0,
    used_for_rejection INTEGER NOT NULL DEFAULT 0
);

-- Vote tables are append-only apart from the admin bulk clear.
-- No uniqueness on token: repeat submission is guarded by the token flags.
CREATE TABLE IF NOT EXISTS intention_votes (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    candidate TEXT NOT NULL,
    token     TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS rejection_votes (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    candidate TEXT NOT NULL,
    token     TEXT NOT NULL
);

-- Exactly one row, id = 1.
CREATE TABLE IF NOT EXISTS configuration (
    id                INTEGER PRIMARY KEY,
    show_real         INTEGER NOT NULL,
    favored_candidate TEXT,
    updated_at        TEXT NOT NULL   -- RFC 3339 UTC
);

PRAGMA user_version = 1;
";

/// Seed the configuration row on first run. `?1` is the current timestamp.
pub const DEFAULT_CONFIG: &str = "
INSERT OR IGNORE INTO configuration (id, show_real, favored_candidate, updated_at)
VALUES (1, 1, NULL, ?1)
";
