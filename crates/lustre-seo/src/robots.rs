//! robots.txt generation.
//!
//! Account-only paths are disallowed for all agents, and the `Sitemap:`
//! lines point at the canonical `www` host — the same origin every other
//! emitter in this crate uses.

use crate::Site;

/// Paths crawlers are told to stay out of.
const DISALLOWED: &[&str] = &["/auth/", "/account/", "/api/"];

/// Render the robots.txt body for `site`.
pub fn render(site: &Site) -> String {
  let mut out = String::from("User-agent: *\n");
  for path in DISALLOWED {
    out.push_str(&format!("Disallow: {path}\n"));
  }
  out.push('\n');
  out.push_str(&format!("Sitemap: {}\n", site.canonical_url("/sitemap.xml")));
  out
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sitemap_line_uses_the_canonical_host() {
    let out = render(&Site::new("Lustre", "lustre.example"));
    assert!(out.contains("Sitemap: https://www.lustre.example/sitemap.xml\n"));
  }

  #[test]
  fn account_paths_are_disallowed() {
    let out = render(&Site::new("Lustre", "lustre.example"));
    assert!(out.contains("Disallow: /auth/\n"));
    assert!(out.contains("Disallow: /account/\n"));
  }

  #[test]
  fn applies_to_all_agents() {
    let out = render(&Site::new("Lustre", "lustre.example"));
    assert!(out.starts_with("User-agent: *\n"));
  }
}
