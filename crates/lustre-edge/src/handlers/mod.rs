pub mod artifacts;
pub mod auth;
pub mod job;
pub mod listings;

use lustre_seo::head::PageHead;

pub(super) const CONTENT_TYPE_HTML: &str = "text/html; charset=utf-8";

/// Assemble a full HTML document from a rendered head fragment and a body.
///
/// The head fragment already carries the title, robots directive, canonical
/// link, and any JSON-LD block; this wrapper never adds a second copy of
/// any of them.
pub(super) fn render_page(head: &PageHead, body: &str) -> String {
  format!(
    "<!doctype html>\n<html lang=\"en\">\n<head>\n\
     <meta charset=\"utf-8\">\n\
     <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
     {}</head>\n<body>\n{}\n</body>\n</html>\n",
    head.render(),
    body,
  )
}
