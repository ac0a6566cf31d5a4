//! Integration tests for `SqliteJobs` against an in-memory database.

use lustre_core::{
  job::{JobStatus, NewJob},
  source::{JobQuery, JobSource},
};
use uuid::Uuid;

use crate::SqliteJobs;

async fn store() -> SqliteJobs {
  SqliteJobs::open_in_memory()
    .await
    .expect("in-memory store")
}

fn nail_job(location: &str) -> NewJob {
  NewJob {
    title:           "Nail artist".into(),
    category:        Some("nails".into()),
    location:        location.into(),
    description:     "Chair rental available".into(),
    employment_type: None,
    organization:    None,
    expires_at:      None,
    status:          JobStatus::Active,
  }
}

// ─── Add / get ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_get_job() {
  let s = store().await;

  let job = s.add_job(nail_job("Austin, TX")).await.unwrap();
  assert!(job.created_at.is_some());
  assert!(job.updated_at.is_none());

  let fetched = s.get_job(job.id).await.unwrap();
  assert!(fetched.is_some());
  let fetched = fetched.unwrap();
  assert_eq!(fetched.id, job.id);
  assert_eq!(fetched.title, "Nail artist");
  assert_eq!(fetched.status, JobStatus::Active);
}

#[tokio::test]
async fn get_job_missing_returns_none() {
  let s = store().await;
  let result = s.get_job(Uuid::new_v4()).await.unwrap();
  assert!(result.is_none());
}

// ─── Listing ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_jobs_all() {
  let s = store().await;
  s.add_job(nail_job("Austin, TX")).await.unwrap();
  s.add_job(nail_job("Dallas, TX")).await.unwrap();
  s.add_job(nail_job("Houston, TX")).await.unwrap();

  let all = s.list_jobs(&JobQuery::default()).await.unwrap();
  assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn list_jobs_filtered_by_location_slug() {
  let s = store().await;
  s.add_job(nail_job("Saint Louis, MO")).await.unwrap();
  s.add_job(nail_job("Fort Worth, TX")).await.unwrap();

  // The stored location is free-form; the filter matches on the derived,
  // alias-normalized slug.
  let query = JobQuery {
    location_slug: Some("st-louis-mo".into()),
    ..Default::default()
  };
  let matches = s.list_jobs(&query).await.unwrap();
  assert_eq!(matches.len(), 1);
  assert_eq!(matches[0].location, "Saint Louis, MO");
}

#[tokio::test]
async fn list_jobs_filtered_by_role_case_insensitively() {
  let s = store().await;
  s.add_job(nail_job("Austin, TX")).await.unwrap();
  let mut hair = nail_job("Austin, TX");
  hair.category = Some("Hair".into());
  s.add_job(hair).await.unwrap();

  let query = JobQuery { role: Some("hair".into()), ..Default::default() };
  let matches = s.list_jobs(&query).await.unwrap();
  assert_eq!(matches.len(), 1);
  assert_eq!(matches[0].category.as_deref(), Some("Hair"));
}

#[tokio::test]
async fn list_jobs_filtered_by_text() {
  let s = store().await;
  s.add_job(nail_job("Austin, TX")).await.unwrap();
  let mut other = nail_job("Austin, TX");
  other.title = "Front desk".into();
  other.description = "Reception and booking".into();
  s.add_job(other).await.unwrap();

  let query = JobQuery { text: Some("booking".into()), ..Default::default() };
  let matches = s.list_jobs(&query).await.unwrap();
  assert_eq!(matches.len(), 1);
  assert_eq!(matches[0].title, "Front desk");
}

#[tokio::test]
async fn list_jobs_respects_limit_and_offset() {
  let s = store().await;
  for _ in 0..5 {
    s.add_job(nail_job("Austin, TX")).await.unwrap();
  }

  let query = JobQuery {
    limit: Some(2),
    offset: Some(1),
    ..Default::default()
  };
  let page = s.list_jobs(&query).await.unwrap();
  assert_eq!(page.len(), 2);
}

// ─── Status transitions ──────────────────────────────────────────────────────

#[tokio::test]
async fn set_status_stamps_updated_at() {
  let s = store().await;
  let job = s.add_job(nail_job("Austin, TX")).await.unwrap();
  assert!(job.updated_at.is_none());

  let filled = s.set_status(job.id, JobStatus::Filled).await.unwrap();
  assert_eq!(filled.status, JobStatus::Filled);
  assert!(filled.updated_at.is_some());
}

#[tokio::test]
async fn set_status_on_missing_job_errors() {
  let s = store().await;
  let result = s.set_status(Uuid::new_v4(), JobStatus::Filled).await;
  assert!(result.is_err());
}

#[tokio::test]
async fn status_round_trips_unknown_values() {
  let s = store().await;
  let job = s.add_job(nail_job("Austin, TX")).await.unwrap();

  let updated = s
    .set_status(job.id, JobStatus::Other("Paused".into()))
    .await
    .unwrap();
  assert_eq!(updated.status, JobStatus::Other("Paused".into()));
}
