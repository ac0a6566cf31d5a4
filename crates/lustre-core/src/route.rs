//! Canonical route derivation for listing pages.
//!
//! Every logical listing resource has exactly one authoritative path; all
//! alias spellings must 301 there. The builders below are pure: the same
//! inputs always produce the same route.

use serde::Serialize;
use uuid::Uuid;

use crate::slug;

/// A canonical site-relative address.
///
/// `permanent` is always `true`: a non-canonical variant of this resource
/// must redirect here with a 301, never a 302, because canonicalization
/// decisions are durable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalRoute {
  pub path:      String,
  pub permanent: bool,
}

impl CanonicalRoute {
  fn new(path: String) -> Self {
    Self { path, permanent: true }
  }
}

/// Canonical path for the all-jobs-in-a-city page: `/jobs/in/<slug>`.
pub fn city_jobs(city_state: &str) -> CanonicalRoute {
  CanonicalRoute::new(format!("/jobs/in/{}", slug::normalize(city_state)))
}

/// Canonical path for a role-in-city page: `/jobs/<role>/<slug>`.
///
/// `role` comes from a closed upstream enumeration and is lowercased
/// verbatim, not slugified; malformed tokens pass through lowercased as-is.
pub fn role_city_jobs(role: &str, city_state: &str) -> CanonicalRoute {
  CanonicalRoute::new(format!(
    "/jobs/{}/{}",
    role.trim().to_lowercase(),
    slug::normalize(city_state)
  ))
}

/// Canonical path for an artists-by-specialty page:
/// `/artists/<specialty>/<slug>`.
pub fn artists_city(specialty: &str, city_state: &str) -> CanonicalRoute {
  CanonicalRoute::new(format!(
    "/artists/{}/{}",
    specialty.trim().to_lowercase(),
    slug::normalize(city_state)
  ))
}

/// Canonical path for a single posting's detail page: `/jobs/<id>`.
pub fn job_detail(id: Uuid) -> CanonicalRoute {
  CanonicalRoute::new(format!("/jobs/{id}"))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn city_jobs_normalizes_aliases() {
    let route = city_jobs("saint-louis-mo");
    assert_eq!(route.path, "/jobs/in/st-louis-mo");
    assert!(route.permanent);
  }

  #[test]
  fn role_city_jobs_lowercases_role_and_normalizes_city() {
    let route = role_city_jobs("nails", "fort-worth-tx");
    assert_eq!(route.path, "/jobs/nails/ft-worth-tx");
    assert!(route.permanent);

    let route = role_city_jobs("Hair", "Saint Paul, MN");
    assert_eq!(route.path, "/jobs/hair/st-paul-mn");
  }

  #[test]
  fn artists_city_normalizes() {
    let route = artists_city("nails", "saint-paul-mn");
    assert_eq!(route.path, "/artists/nails/st-paul-mn");
    assert!(route.permanent);
  }

  #[test]
  fn job_detail_contains_jobs_segment() {
    let id = Uuid::nil();
    let route = job_detail(id);
    assert!(route.path.starts_with("/jobs/"));
    assert!(route.path.contains(&id.to_string()));
  }

  #[test]
  fn equivalent_inputs_share_one_route() {
    assert_eq!(city_jobs("Saint Louis, MO"), city_jobs("st louis mo"));
    assert_eq!(
      role_city_jobs("NAILS", "Fort Worth TX"),
      role_city_jobs("nails", "ft-worth-tx"),
    );
  }
}
