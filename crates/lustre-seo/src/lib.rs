//! SEO metadata emitters for Lustre.
//!
//! Converts [`lustre_core`] job records into the machine-readable surfaces a
//! search crawler consumes: document-head fragments, JSON-LD structured
//! data, robots directives, sitemap XML, and robots.txt. Pure synchronous;
//! no HTTP or database dependencies.
//!
//! # Quick start
//!
//! ```no_run
//! use chrono::Utc;
//! use lustre_seo::{Site, head};
//!
//! # fn job() -> lustre_core::job::JobPosting { unimplemented!() }
//! let site = Site::new("Lustre", "lustre.example");
//! let page = head::job_page_head(&job(), &site, Utc::now());
//! println!("{}", page.render());
//! ```

pub mod head;
pub mod jsonld;
pub mod robots;
pub mod sitemap;
pub mod text;

// ─── Site identity ───────────────────────────────────────────────────────────

/// The site's public identity: display name plus apex host.
///
/// Everything emitted from this crate addresses the site through
/// [`Site::canonical_url`], so every absolute URL a crawler sees carries the
/// `https://www.` host — never the bare apex.
#[derive(Debug, Clone)]
pub struct Site {
  pub name: String,
  /// Apex host, e.g. `lustre.example` — no scheme, no `www.` prefix.
  pub host: String,
}

impl Site {
  /// Build a site identity, stripping any scheme or `www.` prefix from
  /// `host` so configuration typos cannot produce a double prefix.
  pub fn new(name: impl Into<String>, host: impl Into<String>) -> Self {
    let raw: String = host.into();
    let host = raw
      .trim()
      .trim_start_matches("https://")
      .trim_start_matches("http://")
      .trim_start_matches("www.")
      .trim_end_matches('/')
      .to_string();
    Self { name: name.into(), host }
  }

  /// The canonical origin: `https://www.<host>`.
  pub fn canonical_base(&self) -> String {
    format!("https://www.{}", self.host)
  }

  /// Absolute canonical URL for a site-relative `path`.
  pub fn canonical_url(&self, path: &str) -> String {
    if path.starts_with('/') {
      format!("{}{}", self.canonical_base(), path)
    } else {
      format!("{}/{}", self.canonical_base(), path)
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn canonical_base_always_carries_www() {
    for input in [
      "lustre.example",
      "www.lustre.example",
      "https://lustre.example",
      "https://www.lustre.example/",
    ] {
      let site = Site::new("Lustre", input);
      assert_eq!(
        site.canonical_base(),
        "https://www.lustre.example",
        "for input {input:?}"
      );
    }
  }

  #[test]
  fn canonical_url_joins_paths() {
    let site = Site::new("Lustre", "lustre.example");
    assert_eq!(
      site.canonical_url("/jobs/in/st-louis-mo"),
      "https://www.lustre.example/jobs/in/st-louis-mo"
    );
    assert_eq!(
      site.canonical_url("sitemap.xml"),
      "https://www.lustre.example/sitemap.xml"
    );
  }
}
