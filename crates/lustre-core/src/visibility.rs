//! The listing-visibility policy.
//!
//! A posting moves one way through three states, driven purely by elapsed
//! time and status:
//!
//! ```text
//! Listed ──(past valid_through, or marked filled/closed)──▶ NoIndex
//! NoIndex ──(30-day grace elapses)──▶ Gone (HTTP 410)
//! ```
//!
//! There is no transition back to `Listed`; re-activating a listing is a new
//! record with a fresh `created_at`. Every decision here is computed at read
//! time from the record's timestamps and the supplied clock — never stored,
//! so it cannot drift from the timestamps it derives from.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::job::JobPosting;

/// Validity window for postings without an explicit `expires_at`.
pub const DEFAULT_VALID_DAYS: i64 = 45;

/// Days a filled/expired posting stays reachable (200, no-index) before its
/// URL must answer 410 Gone.
pub const GONE_GRACE_DAYS: i64 = 30;

// ─── Derived values ──────────────────────────────────────────────────────────

/// The posting's effective validity deadline.
///
/// `expires_at` wins when set; otherwise `created_at` plus
/// [`DEFAULT_VALID_DAYS`]. A malformed record with neither timestamp falls
/// back to `now` — visibility logic must never be the reason a page render
/// fails.
pub fn valid_through(job: &JobPosting, now: DateTime<Utc>) -> DateTime<Utc> {
  if let Some(expires) = job.expires_at {
    return expires;
  }
  match job.created_at {
    Some(created) => created + Duration::days(DEFAULT_VALID_DAYS),
    None => now,
  }
}

/// True when the posting's status is filled or closed (case handled at
/// parse time).
pub fn is_filled(job: &JobPosting) -> bool { job.status.is_filled() }

/// The search-engine gate: filled or expired postings must never be indexed,
/// so crawlers are not served stale or dead listings.
pub fn should_no_index(job: &JobPosting, now: DateTime<Utc>) -> bool {
  is_filled(job) || now > valid_through(job, now)
}

/// True once the posting's URL must answer 410 Gone instead of a page.
///
/// The cutoff basis is `updated_at` (fallback `now`) for filled postings,
/// else `valid_through`; [`GONE_GRACE_DAYS`] later the resource is Gone.
/// The `now` fallback means a filled posting with no recorded mutation time
/// never reaches 410 — the storage layer is responsible for stamping
/// `updated_at` whenever status changes.
pub fn should_return_410(job: &JobPosting, now: DateTime<Utc>) -> bool {
  let basis = if is_filled(job) {
    job.updated_at.unwrap_or(now)
  } else {
    valid_through(job, now)
  };
  now > basis + Duration::days(GONE_GRACE_DAYS)
}

// ─── State machine ───────────────────────────────────────────────────────────

/// The posting's lifecycle position, computed at read time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityState {
  /// Reachable and indexable.
  Listed,
  /// Reachable (200) but flagged `noindex` for crawlers.
  NoIndex,
  /// Permanently removed; the server must answer 410.
  Gone,
}

impl VisibilityState {
  pub fn is_indexable(self) -> bool { matches!(self, Self::Listed) }
}

/// Evaluate the full state machine for `job` at `now`.
pub fn evaluate(job: &JobPosting, now: DateTime<Utc>) -> VisibilityState {
  if should_return_410(job, now) {
    VisibilityState::Gone
  } else if should_no_index(job, now) {
    VisibilityState::NoIndex
  } else {
    VisibilityState::Listed
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
