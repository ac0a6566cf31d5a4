//! ETag computation for job detail pages.
//!
//! ETags are SHA-256 hashes over the posting's id, last-mutation time, and
//! status. Stable: the same record always hashes to the same tag, and any
//! mutation (which stamps `updated_at`) or status change produces a new one.

use lustre_core::job::JobPosting;
use sha2::{Digest, Sha256};

/// Compute a strong ETag for `job`.
pub fn compute_etag(job: &JobPosting) -> String {
  let mut hasher = Sha256::new();
  hasher.update(job.id.as_bytes());
  if let Some(ts) = job.updated_at.or(job.created_at) {
    hasher.update(ts.timestamp_micros().to_le_bytes());
  }
  hasher.update(job.status.as_str().as_bytes());
  let hash = hasher.finalize();
  format!("\"{}\"", hex::encode(hash))
}
