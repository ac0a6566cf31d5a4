//! Crawler artifacts: `GET /robots.txt`, `GET /sitemap.xml`, and the
//! deploy-time writer behind `server --write-artifacts`.

use std::path::Path;

use axum::{
  body::Body,
  extract::State,
  http::{StatusCode, header},
  response::Response,
};
use chrono::Utc;
use lustre_core::source::{JobQuery, JobSource};
use lustre_seo::{Site, robots, sitemap};

use crate::{AppState, error::Error, redirects};

// ─── Handlers ────────────────────────────────────────────────────────────────

pub async fn robots_txt<S>(
  State(state): State<AppState<S>>,
) -> Result<Response, Error>
where
  S: JobSource + Clone + Send + Sync + 'static,
{
  Ok(text_response("text/plain; charset=utf-8", robots::render(&state.site)))
}

pub async fn sitemap_xml<S>(
  State(state): State<AppState<S>>,
) -> Result<Response, Error>
where
  S: JobSource + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let xml = render_sitemap(state.jobs.as_ref(), &state.site).await?;
  Ok(text_response("application/xml; charset=utf-8", xml))
}

async fn render_sitemap<S>(jobs: &S, site: &Site) -> Result<String, Error>
where
  S: JobSource,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let all = jobs
    .list_jobs(&JobQuery::default())
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  let entries = sitemap::job_entries(&all, site, Utc::now());
  Ok(sitemap::render(&entries))
}

fn text_response(content_type: &'static str, body: String) -> Response {
  Response::builder()
    .status(StatusCode::OK)
    .header(header::CONTENT_TYPE, content_type)
    .header(header::CONTENT_LENGTH, body.len())
    .body(Body::from(body))
    .unwrap()
}

// ─── Deploy-time writer ──────────────────────────────────────────────────────

/// Write `redirects.json`, `robots.txt`, and `sitemap.xml` into `dir` for
/// the hosting platform to pick up at deploy time.
pub async fn write_artifacts<S>(
  dir: &Path,
  site: &Site,
  jobs: &S,
) -> anyhow::Result<()>
where
  S: JobSource,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  std::fs::create_dir_all(dir)?;

  let rules = redirects::rules(&site.host);
  let redirects_json = serde_json::to_string_pretty(&rules)?;
  std::fs::write(dir.join("redirects.json"), redirects_json)?;

  std::fs::write(dir.join("robots.txt"), robots::render(site))?;

  let xml = render_sitemap(jobs, site)
    .await
    .map_err(|e| anyhow::anyhow!("sitemap: {e}"))?;
  std::fs::write(dir.join("sitemap.xml"), xml)?;

  tracing::info!("wrote redirects.json, robots.txt, sitemap.xml to {dir:?}");
  Ok(())
}
