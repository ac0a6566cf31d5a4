//! Sitemap XML generation.
//!
//! Uses `quick-xml`'s writer API. Every `<loc>` goes through
//! [`Site::canonical_url`], so the sitemap can only ever advertise the
//! canonical `https://www.` host, and only indexable postings are listed —
//! a sitemap entry for a no-index page would send crawlers contradictory
//! signals.

use std::io::Cursor;

use chrono::{DateTime, Utc};
use lustre_core::{job::JobPosting, route, visibility};
use quick_xml::{
  Writer,
  events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use crate::Site;

pub const NS_SITEMAP: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// ─── Entries ─────────────────────────────────────────────────────────────────

/// One `<url>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
  /// Absolute canonical URL.
  pub loc:     String,
  pub lastmod: Option<DateTime<Utc>>,
}

/// Sitemap entries for every indexable posting in `jobs` at `now`.
///
/// Filled, expired, and gone postings are skipped entirely.
pub fn job_entries(
  jobs: &[JobPosting],
  site: &Site,
  now: DateTime<Utc>,
) -> Vec<SitemapEntry> {
  jobs
    .iter()
    .filter(|job| visibility::evaluate(job, now).is_indexable())
    .map(|job| SitemapEntry {
      loc:     site.canonical_url(&route::job_detail(job.id).path),
      lastmod: job.updated_at.or(job.created_at),
    })
    .collect()
}

// ─── Rendering ───────────────────────────────────────────────────────────────

/// Render a `<urlset>` document for `entries`.
pub fn render(entries: &[SitemapEntry]) -> String {
  let cursor = Cursor::new(Vec::new());
  let mut writer = Writer::new(cursor);

  writer
    .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
    .unwrap();

  let mut urlset = BytesStart::new("urlset");
  urlset.push_attribute(("xmlns", NS_SITEMAP));
  writer.write_event(Event::Start(urlset)).unwrap();

  for entry in entries {
    write_start(&mut writer, "url");
    write_text_elem(&mut writer, "loc", &entry.loc);
    if let Some(lastmod) = entry.lastmod {
      write_text_elem(&mut writer, "lastmod", &lastmod.to_rfc3339());
    }
    write_end(&mut writer, "url");
  }

  writer
    .write_event(Event::End(BytesEnd::new("urlset")))
    .unwrap();

  // The writer only ever targets an in-memory cursor; both unwraps are
  // infallible.
  String::from_utf8(writer.into_inner().into_inner()).unwrap()
}

// ─── XML writer helpers ──────────────────────────────────────────────────────

fn write_start(w: &mut Writer<Cursor<Vec<u8>>>, tag: &str) {
  w.write_event(Event::Start(BytesStart::new(tag))).unwrap();
}

fn write_end(w: &mut Writer<Cursor<Vec<u8>>>, tag: &str) {
  w.write_event(Event::End(BytesEnd::new(tag))).unwrap();
}

fn write_text_elem(w: &mut Writer<Cursor<Vec<u8>>>, tag: &str, text: &str) {
  write_start(w, tag);
  w.write_event(Event::Text(BytesText::new(text))).unwrap();
  write_end(w, tag);
}

// ─── Tests ───────────────────────────────────────────────────────────────────
