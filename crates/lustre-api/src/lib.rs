//! JSON REST API for Lustre.
//!
//! Exposes an axum [`Router`] backed by any [`lustre_core::source::JobSource`].
//! Job reads come back with their computed visibility attached, and the
//! `/routes/*` endpoints hand client-side link-building code the same
//! canonical routes the server itself uses. Auth, TLS, and transport
//! concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", lustre_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod jobs;
pub mod routes;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use lustre_core::source::JobSource;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: JobSource + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Jobs
    .route("/jobs", get(jobs::list::<S>).post(jobs::create::<S>))
    .route("/jobs/{id}", get(jobs::get_one::<S>))
    .route("/jobs/{id}/status", post(jobs::set_status::<S>))
    // Canonical route descriptors
    .route("/routes/city-jobs", get(routes::city_jobs))
    .route("/routes/role-city-jobs", get(routes::role_city_jobs))
    .route("/routes/artists-city", get(routes::artists_city))
    .with_state(store)
}
