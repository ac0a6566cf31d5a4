//! HTTP edge layer for Lustre.
//!
//! Exposes an axum [`Router`] that canonicalizes every request against the
//! redirect table, serves listing and detail pages with status codes chosen
//! by the visibility policy (200 / 301 / 410), and emits the crawler
//! artifacts (robots.txt, sitemap.xml). Backed by any
//! [`JobSource`](lustre_core::source::JobSource).

pub mod error;
pub mod etag;
pub mod handlers;
pub mod redirects;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, middleware, routing::get};
use lustre_core::source::JobSource;
use lustre_seo::Site;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use handlers::{artifacts, auth, job, listings};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  /// Public site name used in JSON-LD identifiers, e.g. "Lustre".
  pub site_name:  String,
  /// Public apex host, e.g. "lustre.example" — no scheme, no `www.`.
  pub site_host:  String,
  pub store_path: PathBuf,
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: JobSource> {
  pub jobs:      Arc<S>,
  pub site:      Arc<Site>,
  pub config:    Arc<ServerConfig>,
  /// Built once from the site host; evaluated on every request.
  pub redirects: Arc<Vec<redirects::RedirectRule>>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build an axum [`Router`] for the edge server.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: JobSource + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // The literal `in` segment wins over `{role}`, and a single-segment
    // `{id}` never collides with the two-segment listing routes.
    .route("/jobs/{id}",                 get(job::detail::<S>))
    .route("/jobs/in/{city}",            get(listings::city_jobs::<S>))
    .route("/jobs/{role}/{city}",        get(listings::role_city_jobs::<S>))
    .route("/artists/{specialty}/{city}", get(listings::artists_city::<S>))
    .route("/auth/sign-in",              get(auth::sign_in::<S>))
    .route("/auth/sign-up",              get(auth::sign_up::<S>))
    .route("/robots.txt",                get(artifacts::robots_txt::<S>))
    .route("/sitemap.xml",               get(artifacts::sitemap_xml::<S>))
    .with_state(state.clone())
    .nest("/api", lustre_api::api_router(state.jobs.clone()))
    .layer(middleware::from_fn_with_state(state, redirects::apply::<S>))
    .layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────
