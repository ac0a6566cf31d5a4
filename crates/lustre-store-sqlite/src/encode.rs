//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings. UUIDs are stored as
//! hyphenated lowercase strings. Decoding timestamps is lenient by design:
//! upstream data quality is uneven, and the visibility policy degrades on a
//! missing timestamp rather than failing a read.

use chrono::{DateTime, Utc};
use lustre_core::job::{JobPosting, JobStatus};
use uuid::Uuid;

use crate::Result;

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc>
// ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

/// Lenient decode: anything unparseable coerces to `None`.
pub fn decode_dt_opt(s: Option<&str>) -> Option<DateTime<Utc>> {
  s.and_then(|s| {
    DateTime::parse_from_rfc3339(s)
      .map(|dt| dt.with_timezone(&Utc))
      .ok()
  })
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw strings read directly from a `jobs` row.
pub struct RawJobRow {
  pub job_id:          String,
  pub title:           String,
  pub category:        Option<String>,
  pub location:        String,
  pub description:     String,
  pub employment_type: Option<String>,
  pub organization:    Option<String>,
  pub status:          String,
  pub created_at:      Option<String>,
  pub expires_at:      Option<String>,
  pub updated_at:      Option<String>,
}

impl RawJobRow {
  /// Coerce the row into the typed model. Only an unparseable `job_id` is an
  /// error; every other data-quality issue degrades (bad timestamps to
  /// `None`, unknown status strings to [`JobStatus::Other`]).
  pub fn into_job(self) -> Result<JobPosting> {
    Ok(JobPosting {
      id:              decode_uuid(&self.job_id)?,
      title:           self.title,
      category:        self.category,
      location:        self.location,
      description:     self.description,
      employment_type: self.employment_type,
      organization:    self.organization,
      created_at:      decode_dt_opt(self.created_at.as_deref()),
      expires_at:      decode_dt_opt(self.expires_at.as_deref()),
      updated_at:      decode_dt_opt(self.updated_at.as_deref()),
      status:          JobStatus::parse(&self.status),
    })
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
