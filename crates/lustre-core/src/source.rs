//! The `JobSource` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `lustre-store-sqlite`).
//! Higher layers (`lustre-edge`, `lustre-api`) depend on this abstraction,
//! not on any concrete backend. Visibility decisions are never part of the
//! storage contract — callers derive them from the returned records and a
//! clock.

use std::future::Future;

use uuid::Uuid;

use crate::job::{JobPosting, JobStatus, NewJob};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`JobSource::list_jobs`].
#[derive(Debug, Clone, Default)]
pub struct JobQuery {
  /// Free-text filter applied over title and description.
  pub text:          Option<String>,
  /// Restrict to postings whose alias-normalized location slug matches.
  pub location_slug: Option<String>,
  /// Restrict to a role/category token, matched case-insensitively.
  pub role:          Option<String>,
  pub status:        Option<JobStatus>,
  pub limit:         Option<usize>,
  pub offset:        Option<usize>,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the marketplace job store.
///
/// `add_job` and `set_status` exist for seeding and for the admin surface;
/// the serving path only reads. All methods return `Send` futures so the
/// trait can be used in multi-threaded async runtimes (tokio with `axum`).
pub trait JobSource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new posting. The store assigns `id` and `created_at`.
  fn add_job(
    &self,
    input: NewJob,
  ) -> impl Future<Output = Result<JobPosting, Self::Error>> + Send + '_;

  /// Retrieve a posting by id. Returns `None` if not found.
  fn get_job(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<JobPosting>, Self::Error>> + Send + '_;

  /// List postings matching `query`, newest first.
  fn list_jobs<'a>(
    &'a self,
    query: &'a JobQuery,
  ) -> impl Future<Output = Result<Vec<JobPosting>, Self::Error>> + Send + 'a;

  /// Change a posting's status, stamping `updated_at` in the same write.
  ///
  /// The stamp is what gives filled postings a real 410-cutoff basis; a
  /// store that skipped it would leave them reachable forever.
  fn set_status(
    &self,
    id: Uuid,
    status: JobStatus,
  ) -> impl Future<Output = Result<JobPosting, Self::Error>> + Send + '_;
}
