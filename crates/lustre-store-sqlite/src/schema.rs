//! SQL schema for the Lustre SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// Visibility decisions (no-index, 410) are never stored — they are derived
/// at read time from the timestamp columns, so there is no column for them
/// to drift in.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS jobs (
    job_id          TEXT PRIMARY KEY,
    title           TEXT NOT NULL,
    category        TEXT,            -- role token, e.g. 'nails'
    location        TEXT NOT NULL,   -- free-form 'City, State[, Country]'
    description     TEXT NOT NULL DEFAULT '',
    employment_type TEXT,
    organization    TEXT,
    status          TEXT NOT NULL DEFAULT 'active',
    created_at      TEXT,            -- ISO 8601 UTC; set once, never updated
    expires_at      TEXT,
    updated_at      TEXT             -- stamped on every status change
);

CREATE INDEX IF NOT EXISTS jobs_status_idx  ON jobs(status);
CREATE INDEX IF NOT EXISTS jobs_created_idx ON jobs(created_at);

PRAGMA user_version = 1;
";
