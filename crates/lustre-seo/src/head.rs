//! Document-head rendering.
//!
//! A [`PageHead`] is the computed read model for a page's `<head>` — title,
//! meta description, robots directive, canonical link, and at most one
//! JSON-LD block. Rendering is a pure function of the inputs: re-rendering
//! the same job at the same instant yields the identical fragment, with
//! exactly one canonical link and one structured-data script tag, so
//! repeated renders can never accumulate duplicate tags.

use chrono::{DateTime, Utc};
use lustre_core::{
  job::JobPosting,
  route::{self, CanonicalRoute},
  visibility,
};

use crate::{Site, jsonld, text};

// ─── Robots directive ────────────────────────────────────────────────────────

/// The crawler-visibility flags behind the `robots` meta tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobotsDirective {
  pub index:  bool,
  pub follow: bool,
}

impl RobotsDirective {
  pub fn indexable() -> Self {
    Self { index: true, follow: true }
  }

  /// Reachable but de-listed: filled/expired postings stay at 200 while
  /// crawlers are told not to index them.
  pub fn no_index() -> Self {
    Self { index: false, follow: true }
  }

  /// Account-only pages (sign-in / sign-up) are never indexed nor followed,
  /// regardless of any job state.
  pub fn account_page() -> Self {
    Self { index: false, follow: false }
  }

  /// The `content` value of the robots meta tag.
  pub fn render(&self) -> &'static str {
    match (self.index, self.follow) {
      (true, true) => "index, follow",
      (false, true) => "noindex, follow",
      (true, false) => "index, nofollow",
      (false, false) => "noindex, nofollow",
    }
  }
}

// ─── PageHead ────────────────────────────────────────────────────────────────

/// Everything a page contributes to the document `<head>`.
#[derive(Debug, Clone)]
pub struct PageHead {
  pub title:       String,
  pub description: Option<String>,
  pub robots:      RobotsDirective,
  /// Absolute canonical URL — always the `https://www.` form.
  pub canonical:   String,
  /// Serialized JSON-LD, if the page carries structured data.
  pub json_ld:     Option<String>,
}

impl PageHead {
  /// Render the head fragment. Deterministic; one canonical link, at most
  /// one JSON-LD script tag.
  pub fn render(&self) -> String {
    let mut out = String::new();

    out.push_str(&format!("<title>{}</title>\n", text::escape_html(&self.title)));
    if let Some(ref desc) = self.description {
      out.push_str(&format!(
        "<meta name=\"description\" content=\"{}\">\n",
        text::escape_html(desc)
      ));
    }
    out.push_str(&format!(
      "<meta name=\"robots\" content=\"{}\">\n",
      self.robots.render()
    ));
    out.push_str(&format!(
      "<link rel=\"canonical\" href=\"{}\">\n",
      text::escape_html(&self.canonical)
    ));
    if let Some(ref ld) = self.json_ld {
      out.push_str(&format!(
        "<script type=\"application/ld+json\">{ld}</script>\n"
      ));
    }

    out
  }
}

// ─── Builders ────────────────────────────────────────────────────────────────

/// Head for a posting's detail page at `now`.
///
/// The robots directive follows the visibility policy; the JSON-LD block is
/// emitted for every reachable posting so a still-cached Gone-adjacent page
/// carries consistent data until the 410 takes over.
pub fn job_page_head(
  job: &JobPosting,
  site: &Site,
  now: DateTime<Utc>,
) -> PageHead {
  let robots = if visibility::should_no_index(job, now) {
    RobotsDirective::no_index()
  } else {
    RobotsDirective::indexable()
  };

  let ld = jsonld::job_posting(job, site, now);
  // Serializing a struct of strings cannot fail.
  let json_ld = serde_json::to_string(&ld).expect("JSON-LD serialization");

  PageHead {
    title:       format!("{} — {}", job.title, site.name),
    description: Some(text::strip_html(&job.description)),
    robots,
    canonical:   site.canonical_url(&route::job_detail(job.id).path),
    json_ld:     Some(json_ld),
  }
}

/// Head for a listing page (city, role-city, artists-city).
pub fn listing_page_head(
  title: impl Into<String>,
  canonical_route: &CanonicalRoute,
  site: &Site,
) -> PageHead {
  PageHead {
    title:       title.into(),
    description: None,
    robots:      RobotsDirective::indexable(),
    canonical:   site.canonical_url(&canonical_route.path),
    json_ld:     None,
  }
}

/// Head for an account-only page (sign-in / sign-up): always
/// `noindex, nofollow`, canonical carries no query string so it can never
/// encode a redirect loop back to itself.
pub fn account_page_head(
  title: impl Into<String>,
  path: &str,
  site: &Site,
) -> PageHead {
  PageHead {
    title:       title.into(),
    description: None,
    robots:      RobotsDirective::account_page(),
    canonical:   site.canonical_url(path),
    json_ld:     None,
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
