//! Handlers for `/jobs` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/jobs` | Query params mirror [`JobQuery`] |
//! | `POST` | `/jobs` | Body: a [`NewJobBody`] |
//! | `GET`  | `/jobs/:id` | Record + computed visibility; 404 if not found |
//! | `POST` | `/jobs/:id/status` | Body: `{"status":"filled"}` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::{DateTime, Utc};
use lustre_core::{
  job::{JobPosting, JobStatus, NewJob},
  route,
  source::{JobQuery, JobSource},
  visibility::{self, VisibilityState},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

// ─── Response shape ───────────────────────────────────────────────────────────

/// A job record with its visibility derived at response time.
///
/// The flags are never stored anywhere — each response recomputes them from
/// the record's timestamps, so they cannot drift.
#[derive(Debug, Serialize)]
pub struct JobWithVisibility {
  #[serde(flatten)]
  pub job:            JobPosting,
  pub visibility:     VisibilityState,
  pub valid_through:  DateTime<Utc>,
  pub no_index:       bool,
  /// Canonical detail-page path for client-side links.
  pub canonical_path: String,
}

impl JobWithVisibility {
  fn derive(job: JobPosting, now: DateTime<Utc>) -> Self {
    let visibility = visibility::evaluate(&job, now);
    let valid_through = visibility::valid_through(&job, now);
    let no_index = visibility::should_no_index(&job, now);
    let canonical_path = route::job_detail(job.id).path;
    Self { job, visibility, valid_through, no_index, canonical_path }
  }
}

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  /// Free-text filter over title and description.
  pub text:     Option<String>,
  /// Free-form location; normalized to a slug before matching.
  pub location: Option<String>,
  pub role:     Option<String>,
  pub status:   Option<String>,
  pub limit:    Option<usize>,
  pub offset:   Option<usize>,
}

/// `GET /jobs[?text=...][&location=...][&role=...][&status=...]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<JobWithVisibility>>, ApiError>
where
  S: JobSource,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let query = JobQuery {
    text:          params.text,
    location_slug: params
      .location
      .as_deref()
      .map(lustre_core::slug::normalize),
    role:          params.role,
    status:        params.status.as_deref().map(JobStatus::parse),
    limit:         params.limit,
    offset:        params.offset,
  };

  let jobs = store
    .list_jobs(&query)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  let now = Utc::now();
  Ok(Json(
    jobs
      .into_iter()
      .map(|job| JobWithVisibility::derive(job, now))
      .collect(),
  ))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct NewJobBody {
  pub title:           String,
  pub location:        String,
  #[serde(default)]
  pub category:        Option<String>,
  #[serde(default)]
  pub description:     Option<String>,
  #[serde(default)]
  pub employment_type: Option<String>,
  #[serde(default)]
  pub organization:    Option<String>,
  #[serde(default)]
  pub expires_at:      Option<DateTime<Utc>>,
}

/// `POST /jobs`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewJobBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: JobSource,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  if body.title.trim().is_empty() {
    return Err(ApiError::BadRequest("title must not be empty".into()));
  }

  let input = NewJob {
    title:           body.title,
    category:        body.category,
    location:        body.location,
    description:     body.description.unwrap_or_default(),
    employment_type: body.employment_type,
    organization:    body.organization,
    expires_at:      body.expires_at,
    status:          JobStatus::Active,
  };

  let job = store
    .add_job(input)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok((StatusCode::CREATED, Json(JobWithVisibility::derive(job, Utc::now()))))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /jobs/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<JobWithVisibility>, ApiError>
where
  S: JobSource,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let job = store
    .get_job(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("job {id} not found")))?;

  Ok(Json(JobWithVisibility::derive(job, Utc::now())))
}

// ─── Set status ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SetStatusBody {
  pub status: String,
}

/// `POST /jobs/:id/status` — body: `{"status":"filled"}`
pub async fn set_status<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<SetStatusBody>,
) -> Result<Json<JobWithVisibility>, ApiError>
where
  S: JobSource,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let job = store
    .set_status(id, JobStatus::parse(&body.status))
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(Json(JobWithVisibility::derive(job, Utc::now())))
}
