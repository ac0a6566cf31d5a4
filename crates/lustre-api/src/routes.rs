//! Handlers for `/routes` endpoints — canonical route descriptors.
//!
//! Client-side link-building code asks these endpoints for the same
//! `{path, permanent}` descriptors the server renders with, instead of
//! string-building URLs of its own that could drift from the canonical
//! forms.

use axum::{Json, extract::Query};
use lustre_core::route::{self, CanonicalRoute};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct CityParams {
  /// Free-form city/state, e.g. `Saint Louis, MO`.
  pub location: String,
}

/// `GET /routes/city-jobs?location=...`
pub async fn city_jobs(
  Query(params): Query<CityParams>,
) -> Result<Json<CanonicalRoute>, ApiError> {
  Ok(Json(route::city_jobs(&params.location)))
}

#[derive(Debug, Deserialize)]
pub struct RoleCityParams {
  pub role:     String,
  pub location: String,
}

/// `GET /routes/role-city-jobs?role=...&location=...`
pub async fn role_city_jobs(
  Query(params): Query<RoleCityParams>,
) -> Result<Json<CanonicalRoute>, ApiError> {
  Ok(Json(route::role_city_jobs(&params.role, &params.location)))
}

#[derive(Debug, Deserialize)]
pub struct SpecialtyCityParams {
  pub specialty: String,
  pub location:  String,
}

/// `GET /routes/artists-city?specialty=...&location=...`
pub async fn artists_city(
  Query(params): Query<SpecialtyCityParams>,
) -> Result<Json<CanonicalRoute>, ApiError> {
  Ok(Json(route::artists_city(&params.specialty, &params.location)))
}
