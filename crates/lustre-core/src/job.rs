//! The job-posting record — the unit everything else in Lustre reads.
//!
//! A posting is owned by the external marketplace database; this crate only
//! ever consumes it. Timestamps are optional because upstream records are
//! loosely typed: the storage boundary coerces anything unparseable to `None`
//! and the visibility policy degrades to "now" rather than failing a render.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::slug;

// ─── Status ──────────────────────────────────────────────────────────────────

/// Listing status as reported by the marketplace.
///
/// The enumeration is open: upstream writes free-form strings, so unknown
/// values round-trip verbatim through [`JobStatus::Other`]. Matching is
/// case-insensitive; `Filled` and `Closed` are equivalent for policy
/// purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
  Active,
  Filled,
  Closed,
  Expired,
  Other(String),
}

impl JobStatus {
  /// Parse a status string, case-insensitively. Total — unknown values land
  /// in [`JobStatus::Other`] with their original (trimmed) spelling.
  pub fn parse(s: &str) -> Self {
    let trimmed = s.trim();
    match trimmed.to_ascii_lowercase().as_str() {
      "active" => Self::Active,
      "filled" => Self::Filled,
      "closed" => Self::Closed,
      "expired" => Self::Expired,
      _ => Self::Other(trimmed.to_string()),
    }
  }

  /// The string stored in the database `status` column.
  pub fn as_str(&self) -> &str {
    match self {
      Self::Active => "active",
      Self::Filled => "filled",
      Self::Closed => "closed",
      Self::Expired => "expired",
      Self::Other(s) => s,
    }
  }

  /// A filled or closed posting is "filled" for visibility purposes.
  pub fn is_filled(&self) -> bool {
    matches!(self, Self::Filled | Self::Closed)
  }
}

impl From<String> for JobStatus {
  fn from(s: String) -> Self { Self::parse(&s) }
}

impl From<JobStatus> for String {
  fn from(s: JobStatus) -> Self { s.as_str().to_string() }
}

// ─── JobPosting ──────────────────────────────────────────────────────────────

/// A job posting as read from the marketplace store.
///
/// `created_at` is set once at creation and never changes. `updated_at`
/// tracks the last mutation and is the 410-cutoff basis for filled postings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
  pub id:              Uuid,
  pub title:           String,
  /// Role/category token from a closed upstream enumeration, e.g. "nails".
  pub category:        Option<String>,
  /// Free-form "City, State[, Country]" display string.
  pub location:        String,
  /// Raw, possibly HTML-bearing text. Strip before embedding anywhere
  /// machine-readable.
  pub description:     String,
  pub employment_type: Option<String>,
  /// Hiring salon/business name, if the posting carries one.
  pub organization:    Option<String>,
  pub created_at:      Option<DateTime<Utc>>,
  /// Explicit expiry; when absent, validity derives from `created_at`.
  pub expires_at:      Option<DateTime<Utc>>,
  pub updated_at:      Option<DateTime<Utc>>,
  pub status:          JobStatus,
}

impl JobPosting {
  /// The alias-normalized slug of this posting's location.
  ///
  /// Derived on every call — never persisted, so it cannot drift from the
  /// `location` string it comes from.
  pub fn location_slug(&self) -> String { slug::normalize(&self.location) }
}

// ─── NewJob ──────────────────────────────────────────────────────────────────

/// Input to [`crate::source::JobSource::add_job`].
/// `id` and `created_at` are always assigned by the store.
#[derive(Debug, Clone)]
pub struct NewJob {
  pub title:           String,
  pub category:        Option<String>,
  pub location:        String,
  pub description:     String,
  pub employment_type: Option<String>,
  pub organization:    Option<String>,
  pub expires_at:      Option<DateTime<Utc>>,
  pub status:          JobStatus,
}

impl NewJob {
  /// Convenience constructor with all optional fields defaulted and status
  /// `Active`.
  pub fn new(
    title: impl Into<String>,
    location: impl Into<String>,
  ) -> Self {
    Self {
      title:           title.into(),
      category:        None,
      location:        location.into(),
      description:     String::new(),
      employment_type: None,
      organization:    None,
      expires_at:      None,
      status:          JobStatus::Active,
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_parse_is_case_insensitive() {
    assert_eq!(JobStatus::parse("FILLED"), JobStatus::Filled);
    assert_eq!(JobStatus::parse("Closed"), JobStatus::Closed);
    assert_eq!(JobStatus::parse(" active "), JobStatus::Active);
  }

  #[test]
  fn unknown_status_round_trips_verbatim() {
    let s = JobStatus::parse("Paused");
    assert_eq!(s, JobStatus::Other("Paused".to_string()));
    assert_eq!(s.as_str(), "Paused");
  }

  #[test]
  fn filled_and_closed_are_filled() {
    assert!(JobStatus::Filled.is_filled());
    assert!(JobStatus::Closed.is_filled());
    assert!(!JobStatus::Active.is_filled());
    assert!(!JobStatus::Expired.is_filled());
    assert!(!JobStatus::Other("paused".into()).is_filled());
  }

  #[test]
  fn status_serde_round_trip() {
    let json = serde_json::to_string(&JobStatus::Filled).unwrap();
    assert_eq!(json, "\"filled\"");
    let back: JobStatus = serde_json::from_str("\"CLOSED\"").unwrap();
    assert_eq!(back, JobStatus::Closed);
  }

  #[test]
  fn location_slug_is_derived_from_location() {
    let mut job = JobPosting {
      id:              Uuid::nil(),
      title:           "Nail tech".into(),
      category:        Some("nails".into()),
      location:        "Saint Louis, MO".into(),
      description:     String::new(),
      employment_type: None,
      organization:    None,
      created_at:      None,
      expires_at:      None,
      updated_at:      None,
      status:          JobStatus::Active,
    };
    assert_eq!(job.location_slug(), "st-louis-mo");

    job.location = "Fort Worth, TX".into();
    assert_eq!(job.location_slug(), "ft-worth-tx");
  }
}
