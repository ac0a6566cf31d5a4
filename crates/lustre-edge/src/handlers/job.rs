//! The job detail page: `GET /jobs/:id`.
//!
//! Status selection happens before any rendering: a posting past its grace
//! window answers 410 Gone, everything else renders at 200 with the robots
//! directive carrying the no-index decision.

use axum::{
  body::Body,
  extract::{Path, State},
  http::{StatusCode, header},
  response::Response,
};
use chrono::Utc;
use lustre_core::{source::JobSource, visibility};
use lustre_seo::{head, text};
use uuid::Uuid;

use crate::{AppState, error::Error, etag::compute_etag, handlers};

pub async fn detail<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<Uuid>,
) -> Result<Response, Error>
where
  S: JobSource + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let job = state
    .jobs
    .get_job(id)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?
    .ok_or(Error::NotFound)?;

  let now = Utc::now();
  if visibility::should_return_410(&job, now) {
    return Err(Error::Gone);
  }

  let page_head = head::job_page_head(&job, &state.site, now);

  let mut body = format!(
    "<article>\n<h1>{}</h1>\n<p class=\"location\">{}</p>\n",
    text::escape_html(&job.title),
    text::escape_html(&job.location),
  );
  if visibility::should_no_index(&job, now) {
    body.push_str("<p class=\"notice\">This position is no longer accepting applicants.</p>\n");
  }
  body.push_str(&format!(
    "<div class=\"description\"><p>{}</p></div>\n</article>",
    text::escape_html(&text::strip_html(&job.description)),
  ));

  let html = handlers::render_page(&page_head, &body);
  let etag = compute_etag(&job);

  let response = Response::builder()
    .status(StatusCode::OK)
    .header(header::CONTENT_TYPE, handlers::CONTENT_TYPE_HTML)
    .header(header::ETAG, &etag)
    .header(header::CONTENT_LENGTH, html.len())
    .body(Body::from(html))
    .unwrap();

  Ok(response)
}
