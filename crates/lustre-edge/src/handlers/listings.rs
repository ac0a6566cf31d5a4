//! Listing pages: city jobs, role-in-city jobs, artists by specialty.
//!
//! Each handler canonicalizes its own address first: a request whose
//! city/role segment is not already in canonical form answers 301 to the
//! canonical path before any data is fetched. The redirect middleware
//! catches the known alias spellings; this check catches everything else
//! ("Saint%20Louis, MO", uppercase roles) so the same page can never be
//! crawled under two addresses.

use axum::{
  body::Body,
  extract::{Path, State},
  http::{StatusCode, header},
  response::Response,
};
use chrono::Utc;
use lustre_core::{
  job::JobPosting,
  route::{self, CanonicalRoute},
  slug,
  source::{JobQuery, JobSource},
  visibility,
};
use lustre_seo::{head, text};

use crate::{AppState, error::Error, handlers, redirects};

// ─── City jobs: /jobs/in/:city ───────────────────────────────────────────────

pub async fn city_jobs<S>(
  State(state): State<AppState<S>>,
  Path(city): Path<String>,
) -> Result<Response, Error>
where
  S: JobSource + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let canonical = route::city_jobs(&city);
  if let Some(redirect) = canonicalize(&city, None, &canonical) {
    return Ok(redirect);
  }

  let query = JobQuery {
    location_slug: Some(slug::normalize(&city)),
    ..Default::default()
  };
  let jobs = list_indexed(&state, &query).await?;

  let title = format!("Beauty jobs in {}", display_place(&city));
  let page_head = head::listing_page_head(&title, &canonical, &state.site);
  Ok(listing_response(&page_head, &title, &jobs))
}

// ─── Role in city: /jobs/:role/:city ─────────────────────────────────────────

pub async fn role_city_jobs<S>(
  State(state): State<AppState<S>>,
  Path((role, city)): Path<(String, String)>,
) -> Result<Response, Error>
where
  S: JobSource + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let canonical = route::role_city_jobs(&role, &city);
  if let Some(redirect) = canonicalize(&city, Some(&role), &canonical) {
    return Ok(redirect);
  }

  let query = JobQuery {
    location_slug: Some(slug::normalize(&city)),
    role: Some(role.clone()),
    ..Default::default()
  };
  let jobs = list_indexed(&state, &query).await?;

  let title =
    format!("{} jobs in {}", capitalize(&role), display_place(&city));
  let page_head = head::listing_page_head(&title, &canonical, &state.site);
  Ok(listing_response(&page_head, &title, &jobs))
}

// ─── Artists by specialty: /artists/:specialty/:city ─────────────────────────

/// The artist directory itself is rendered by the client application; this
/// page exists so the canonical address serves a crawlable head.
pub async fn artists_city<S>(
  State(state): State<AppState<S>>,
  Path((specialty, city)): Path<(String, String)>,
) -> Result<Response, Error>
where
  S: JobSource + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let canonical = route::artists_city(&specialty, &city);
  if let Some(redirect) = canonicalize(&city, Some(&specialty), &canonical) {
    return Ok(redirect);
  }

  let title = format!(
    "{} artists in {}",
    capitalize(&specialty),
    display_place(&city)
  );
  let page_head = head::listing_page_head(&title, &canonical, &state.site);
  let body = format!("<h1>{}</h1>\n<div id=\"app\"></div>", text::escape_html(&title));
  Ok(html_response(handlers::render_page(&page_head, &body)))
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// 301 to the canonical path when the requested segments aren't already
/// canonical.
fn canonicalize(
  city: &str,
  token: Option<&str>,
  canonical: &CanonicalRoute,
) -> Option<Response> {
  let city_canonical = city == slug::normalize(city);
  let token_canonical =
    token.is_none_or(|t| t == t.trim().to_lowercase());
  if city_canonical && token_canonical {
    None
  } else {
    Some(redirects::moved_permanently(&canonical.path))
  }
}

async fn list_indexed<S>(
  state: &AppState<S>,
  query: &JobQuery,
) -> Result<Vec<JobPosting>, Error>
where
  S: JobSource + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let now = Utc::now();
  let mut jobs = state
    .jobs
    .list_jobs(query)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  // Listing pages only surface postings a crawler may index.
  jobs.retain(|job| visibility::evaluate(job, now).is_indexable());
  Ok(jobs)
}

fn listing_response(
  page_head: &lustre_seo::head::PageHead,
  title: &str,
  jobs: &[JobPosting],
) -> Response {
  let mut body = format!("<h1>{}</h1>\n<ul class=\"listings\">\n", text::escape_html(title));
  for job in jobs {
    body.push_str(&format!(
      "<li><a href=\"{}\">{}</a></li>\n",
      route::job_detail(job.id).path,
      text::escape_html(&job.title),
    ));
  }
  body.push_str("</ul>");
  html_response(handlers::render_page(page_head, &body))
}

fn html_response(html: String) -> Response {
  Response::builder()
    .status(StatusCode::OK)
    .header(header::CONTENT_TYPE, handlers::CONTENT_TYPE_HTML)
    .header(header::CONTENT_LENGTH, html.len())
    .body(Body::from(html))
    .unwrap()
}

/// Human-readable form of a canonical city slug: `st-louis-mo` → `st louis mo`.
fn display_place(city: &str) -> String {
  slug::normalize(city).replace('-', " ")
}

fn capitalize(token: &str) -> String {
  let lower = token.trim().to_lowercase();
  let mut chars = lower.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => lower,
  }
}
