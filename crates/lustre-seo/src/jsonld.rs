//! JSON-LD structured data for job postings.
//!
//! Emits the schema.org `JobPosting` shape search engines consume for rich
//! job results. Field names follow schema.org's camelCase/`@`-prefixed
//! conventions via serde renames; the Rust side stays snake_case.

use chrono::{DateTime, Utc};
use lustre_core::{job::JobPosting, route, visibility};
use serde::Serialize;

use crate::{Site, text};

pub const SCHEMA_ORG: &str = "https://schema.org";

/// Employment type emitted when the posting doesn't carry one.
const DEFAULT_EMPLOYMENT_TYPE: &str = "FULL_TIME";

// ─── Node types ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Organization {
  #[serde(rename = "@type")]
  pub node_type: &'static str,
  pub name:      String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostalAddress {
  #[serde(rename = "@type")]
  pub node_type:        &'static str,
  #[serde(rename = "addressLocality", skip_serializing_if = "Option::is_none")]
  pub address_locality: Option<String>,
  #[serde(rename = "addressRegion", skip_serializing_if = "Option::is_none")]
  pub address_region:   Option<String>,
  #[serde(rename = "addressCountry", skip_serializing_if = "Option::is_none")]
  pub address_country:  Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Place {
  #[serde(rename = "@type")]
  pub node_type: &'static str,
  pub address:   PostalAddress,
}

/// The `identifier` node: `{@type: PropertyValue, name: <site>, value: <id>}`.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyValue {
  #[serde(rename = "@type")]
  pub node_type: &'static str,
  pub name:      String,
  pub value:     String,
}

// ─── JobPosting node ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct JobPostingLd {
  #[serde(rename = "@context")]
  pub context:             &'static str,
  #[serde(rename = "@type")]
  pub node_type:           &'static str,
  pub title:               String,
  /// Plain text — stripped of markup before it gets here.
  pub description:         String,
  #[serde(rename = "datePosted")]
  pub date_posted:         String,
  #[serde(rename = "validThrough")]
  pub valid_through:       String,
  #[serde(rename = "employmentType")]
  pub employment_type:     String,
  #[serde(rename = "hiringOrganization")]
  pub hiring_organization: Organization,
  #[serde(rename = "jobLocation")]
  pub job_location:        Place,
  pub identifier:          PropertyValue,
  /// Canonical detail-page URL; always under `/jobs/`.
  pub url:                 String,
}

/// Build the JSON-LD node for `job` as seen at `now`.
///
/// `datePosted` falls back to `now` for records missing `created_at`, the
/// same degradation the visibility policy applies.
pub fn job_posting(
  job: &JobPosting,
  site: &Site,
  now: DateTime<Utc>,
) -> JobPostingLd {
  let (locality, region, country) = split_location(&job.location);

  JobPostingLd {
    context:             SCHEMA_ORG,
    node_type:           "JobPosting",
    title:               job.title.clone(),
    description:         text::strip_html(&job.description),
    date_posted:         job.created_at.unwrap_or(now).to_rfc3339(),
    valid_through:       visibility::valid_through(job, now).to_rfc3339(),
    employment_type:     job
      .employment_type
      .clone()
      .unwrap_or_else(|| DEFAULT_EMPLOYMENT_TYPE.to_string()),
    hiring_organization: Organization {
      node_type: "Organization",
      name:      job
        .organization
        .clone()
        .unwrap_or_else(|| site.name.clone()),
    },
    job_location:        Place {
      node_type: "Place",
      address:   PostalAddress {
        node_type:        "PostalAddress",
        address_locality: locality,
        address_region:   region,
        address_country:  country,
      },
    },
    identifier:          PropertyValue {
      node_type: "PropertyValue",
      name:      site.name.clone(),
      value:     job.id.to_string(),
    },
    url:                 site.canonical_url(&route::job_detail(job.id).path),
  }
}

/// Split a free-form "City, State[, Country]" string into its components.
/// Missing parts come back as `None`; a string with no commas is all city.
fn split_location(
  location: &str,
) -> (Option<String>, Option<String>, Option<String>) {
  let mut parts = location
    .split(',')
    .map(|p| p.trim())
    .filter(|p| !p.is_empty());
  let city = parts.next().map(str::to_string);
  let region = parts.next().map(str::to_string);
  let country = parts.next().map(str::to_string);
  (city, region, country)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use chrono::TimeZone;
  use lustre_core::job::JobStatus;
  use uuid::Uuid;

  use super::*;

  fn make_job() -> JobPosting {
    JobPosting {
      id:              Uuid::new_v4(),
      title:           "Senior Nail Artist".into(),
      category:        Some("nails".into()),
      location:        "Saint Louis, MO, US".into(),
      description:     "<p>Chair rental <b>available</b></p>".into(),
      employment_type: Some("PART_TIME".into()),
      organization:    Some("Glow Studio".into()),
      created_at:      Some(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()),
      expires_at:      None,
      updated_at:      None,
      status:          JobStatus::Active,
    }
  }

  fn site() -> Site { Site::new("Lustre", "lustre.example") }

  fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap()
  }

  #[test]
  fn node_carries_required_fields() {
    let ld = job_posting(&make_job(), &site(), now());
    let value = serde_json::to_value(&ld).unwrap();

    assert_eq!(value["@type"], "JobPosting");
    assert_eq!(value["@context"], SCHEMA_ORG);
    assert_eq!(value["title"], "Senior Nail Artist");
    assert!(!value["datePosted"].as_str().unwrap().is_empty());
    assert!(!value["validThrough"].as_str().unwrap().is_empty());
    assert_eq!(value["employmentType"], "PART_TIME");
    assert_eq!(value["hiringOrganization"]["name"], "Glow Studio");
    assert_eq!(value["jobLocation"]["address"]["addressLocality"], "Saint Louis");
    assert_eq!(value["jobLocation"]["address"]["addressRegion"], "MO");
  }

  #[test]
  fn identifier_is_a_property_value_node() {
    let job = make_job();
    let ld = job_posting(&job, &site(), now());
    let value = serde_json::to_value(&ld).unwrap();

    assert_eq!(value["identifier"]["@type"], "PropertyValue");
    assert_eq!(value["identifier"]["name"], "Lustre");
    assert_eq!(value["identifier"]["value"], job.id.to_string());
  }

  #[test]
  fn description_is_plain_text() {
    let ld = job_posting(&make_job(), &site(), now());
    assert_eq!(ld.description, "Chair rental available");
    assert!(!ld.description.contains('<'));
    assert!(!ld.description.contains('>'));
  }

  #[test]
  fn url_is_canonical_and_under_jobs() {
    let job = make_job();
    let ld = job_posting(&job, &site(), now());
    assert!(ld.url.starts_with("https://www.lustre.example/jobs/"));
    assert!(ld.url.contains(&job.id.to_string()));
  }

  #[test]
  fn missing_fields_fall_back() {
    let mut job = make_job();
    job.created_at = None;
    job.employment_type = None;
    job.organization = None;

    let ld = job_posting(&job, &site(), now());
    assert_eq!(ld.date_posted, now().to_rfc3339());
    assert_eq!(ld.employment_type, "FULL_TIME");
    assert_eq!(ld.hiring_organization.name, "Lustre");
  }

  #[test]
  fn location_without_commas_is_all_city() {
    let (city, region, country) = split_location("Brooklyn");
    assert_eq!(city.as_deref(), Some("Brooklyn"));
    assert_eq!(region, None);
    assert_eq!(country, None);
  }
}
