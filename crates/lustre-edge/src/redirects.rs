//! The declarative redirect table.
//!
//! One list of rules serves two consumers: the hosting platform reads it as
//! a JSON artifact at deploy time, and the in-process middleware evaluates
//! the same rules before any page handler runs. Every rule is permanent —
//! these are durable canonicalization decisions, never transient routing —
//! so a match always answers 301.
//!
//! Rule sources use a small pattern language: literal text plus `(.*)`
//! capture groups, interpolated into the destination as `$1`, `$2`, …
//! Captures match lazily (shortest span up to the next literal); a trailing
//! capture takes the rest of the path.

use axum::{
  body::Body,
  extract::{Request, State},
  http::{HeaderValue, StatusCode, header},
  middleware::Next,
  response::{IntoResponse, Response},
};
use lustre_core::source::JobSource;
use serde::Serialize;

use crate::AppState;

// ─── Rule types ──────────────────────────────────────────────────────────────

/// A host-matching condition, serialized in the hosting platform's
/// `has`-array form.
#[derive(Debug, Clone, Serialize)]
pub struct HostMatch {
  #[serde(rename = "type")]
  pub kind:  &'static str,
  pub value: String,
}

impl HostMatch {
  fn host(value: impl Into<String>) -> Self {
    Self { kind: "host", value: value.into() }
  }
}

/// One redirect rule. `permanent` is `true` for every rule in the table.
#[derive(Debug, Clone, Serialize)]
pub struct RedirectRule {
  pub source:      String,
  pub destination: String,
  pub permanent:   bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub has:         Option<Vec<HostMatch>>,
}

impl RedirectRule {
  fn new(source: &str, destination: String) -> Self {
    Self {
      source: source.to_string(),
      destination,
      permanent: true,
      has: None,
    }
  }

  fn with_host(mut self, host: impl Into<String>) -> Self {
    self.has = Some(vec![HostMatch::host(host)]);
    self
  }
}

// ─── The table ───────────────────────────────────────────────────────────────

/// Build the full redirect table for `apex_host` (e.g. `lustre.example`).
///
/// The apex→www rule is always index 0 so host canonicalization happens
/// before any path rewriting.
pub fn rules(apex_host: &str) -> Vec<RedirectRule> {
  let mut out = vec![
    // Host canonicalization: bare apex → www, path preserved.
    RedirectRule::new("/(.*)", format!("https://www.{apex_host}/$1"))
      .with_host(apex_host),
    // Legacy auth paths.
    RedirectRule::new("/login", "/auth/sign-in".to_string()),
    RedirectRule::new("/sign-in", "/auth/sign-in".to_string()),
    RedirectRule::new("/sign-in/(.*)", "/auth/sign-in/$1".to_string()),
  ];

  // Alias city slugs across every listing path family.
  for (alias, canonical) in lustre_core::slug::ALIASES {
    out.push(RedirectRule::new(
      &format!("/jobs/in/{alias}-(.*)"),
      format!("/jobs/in/{canonical}-$1"),
    ));
    out.push(RedirectRule::new(
      &format!("/jobs/(.*)/{alias}-(.*)"),
      format!("/jobs/$1/{canonical}-$2"),
    ));
    out.push(RedirectRule::new(
      &format!("/artists/(.*)/{alias}-(.*)"),
      format!("/artists/$1/{canonical}-$2"),
    ));
  }

  out
}

// ─── Pattern matching ────────────────────────────────────────────────────────

/// Match `path` against `pattern`, returning the captured groups.
///
/// `pattern` is literal text with `(.*)` capture groups. Captures are lazy:
/// each one extends to the first occurrence of the next literal chunk. A
/// capture at the end of the pattern takes the remainder (possibly empty).
fn match_pattern(pattern: &str, path: &str) -> Option<Vec<String>> {
  let chunks: Vec<&str> = pattern.split("(.*)").collect();

  // No capture groups: exact literal match.
  if chunks.len() == 1 {
    return (pattern == path).then(Vec::new);
  }

  let mut rest = path.strip_prefix(chunks[0])?;
  let mut captures = Vec::with_capacity(chunks.len() - 1);

  for (i, chunk) in chunks.iter().enumerate().skip(1) {
    let last = i == chunks.len() - 1;
    if last && chunk.is_empty() {
      // Trailing capture: take everything left.
      captures.push(rest.to_string());
      rest = "";
    } else {
      let at = rest.find(chunk)?;
      captures.push(rest[..at].to_string());
      rest = &rest[at + chunk.len()..];
      if last && !rest.is_empty() {
        return None;
      }
    }
  }

  Some(captures)
}

/// Interpolate `$1`, `$2`, … into `destination`.
fn interpolate(destination: &str, captures: &[String]) -> String {
  let mut out = destination.to_string();
  // Highest group first so `$12` is never clobbered by `$1`.
  for (i, capture) in captures.iter().enumerate().rev() {
    out = out.replace(&format!("${}", i + 1), capture);
  }
  out
}

/// Evaluate `rules` for a request to `host` + `path`.
///
/// Returns the redirect destination of the first matching rule, or `None`
/// when the request is already canonical.
pub fn match_redirect(
  rules: &[RedirectRule],
  host: Option<&str>,
  path: &str,
) -> Option<String> {
  for rule in rules {
    if let Some(ref conditions) = rule.has {
      let Some(host) = host else { continue };
      if !conditions.iter().all(|c| c.kind == "host" && c.value == host) {
        continue;
      }
    }
    if let Some(captures) = match_pattern(&rule.source, path) {
      return Some(interpolate(&rule.destination, &captures));
    }
  }
  None
}

// ─── Middleware ──────────────────────────────────────────────────────────────

/// A 301 response. `axum::response::Redirect::permanent` answers 308; the
/// canonicalization contract requires 301 specifically.
pub fn moved_permanently(location: &str) -> Response {
  let mut res = StatusCode::MOVED_PERMANENTLY.into_response();
  if let Ok(value) = HeaderValue::from_str(location) {
    res.headers_mut().insert(header::LOCATION, value);
  }
  res
}

/// Evaluate the redirect table before any handler runs.
pub async fn apply<S>(
  State(state): State<AppState<S>>,
  req: Request<Body>,
  next: Next,
) -> Response
where
  S: JobSource + Clone + Send + Sync + 'static,
{
  let host = req
    .headers()
    .get(header::HOST)
    .and_then(|v| v.to_str().ok())
    .map(|h| h.to_string());

  if let Some(dest) =
    match_redirect(&state.redirects, host.as_deref(), req.uri().path())
  {
    return moved_permanently(&dest);
  }

  next.run(req).await
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  const HOST: &str = "lustre.example";

  #[test]
  fn every_rule_is_permanent() {
    for rule in rules(HOST) {
      assert!(rule.permanent, "non-permanent rule: {}", rule.source);
    }
  }

  #[test]
  fn apex_rule_is_first_and_targets_www() {
    let table = rules(HOST);
    let first = &table[0];
    assert_eq!(first.destination, "https://www.lustre.example/$1");
    assert!(first.has.is_some());
    let has = first.has.as_ref().unwrap();
    assert_eq!(has[0].kind, "host");
    assert_eq!(has[0].value, HOST);
  }

  #[test]
  fn apex_host_redirects_preserving_path() {
    let table = rules(HOST);
    let dest = match_redirect(&table, Some(HOST), "/jobs/in/st-louis-mo");
    assert_eq!(
      dest.as_deref(),
      Some("https://www.lustre.example/jobs/in/st-louis-mo")
    );
  }

  #[test]
  fn www_host_is_not_redirected_for_canonical_paths() {
    let table = rules(HOST);
    let dest =
      match_redirect(&table, Some("www.lustre.example"), "/jobs/in/st-louis-mo");
    assert_eq!(dest, None);
  }

  #[test]
  fn legacy_auth_paths_redirect() {
    let table = rules(HOST);
    let www = Some("www.lustre.example");
    assert_eq!(
      match_redirect(&table, www, "/login").as_deref(),
      Some("/auth/sign-in")
    );
    assert_eq!(
      match_redirect(&table, www, "/sign-in").as_deref(),
      Some("/auth/sign-in")
    );
    assert_eq!(
      match_redirect(&table, www, "/sign-in/reset").as_deref(),
      Some("/auth/sign-in/reset")
    );
  }

  #[test]
  fn alias_city_slugs_redirect_across_path_families() {
    let table = rules(HOST);
    let www = Some("www.lustre.example");
    assert_eq!(
      match_redirect(&table, www, "/jobs/in/saint-louis-mo").as_deref(),
      Some("/jobs/in/st-louis-mo")
    );
    assert_eq!(
      match_redirect(&table, www, "/jobs/nails/fort-worth-tx").as_deref(),
      Some("/jobs/nails/ft-worth-tx")
    );
    assert_eq!(
      match_redirect(&table, www, "/artists/nails/saint-paul-mn").as_deref(),
      Some("/artists/nails/st-paul-mn")
    );
  }

  #[test]
  fn canonical_slugs_do_not_match_alias_rules() {
    let table = rules(HOST);
    let www = Some("www.lustre.example");
    assert_eq!(match_redirect(&table, www, "/jobs/in/st-louis-mo"), None);
    assert_eq!(match_redirect(&table, www, "/jobs/nails/ft-worth-tx"), None);
  }

  #[test]
  fn match_pattern_literal() {
    assert_eq!(match_pattern("/login", "/login"), Some(vec![]));
    assert_eq!(match_pattern("/login", "/login/x"), None);
  }

  #[test]
  fn match_pattern_trailing_capture() {
    assert_eq!(
      match_pattern("/sign-in/(.*)", "/sign-in/reset/token"),
      Some(vec!["reset/token".to_string()])
    );
  }

  #[test]
  fn match_pattern_two_captures() {
    assert_eq!(
      match_pattern("/jobs/(.*)/saint-(.*)", "/jobs/nails/saint-paul-mn"),
      Some(vec!["nails".to_string(), "paul-mn".to_string()])
    );
  }

  #[test]
  fn match_pattern_requires_prefix() {
    assert_eq!(match_pattern("/jobs/in/saint-(.*)", "/artists/saint-x"), None);
  }

  #[test]
  fn interpolate_replaces_groups_in_order() {
    assert_eq!(
      interpolate("/jobs/$1/st-$2", &["nails".into(), "paul-mn".into()]),
      "/jobs/nails/st-paul-mn"
    );
  }

  #[test]
  fn table_serializes_for_the_hosting_platform() {
    let table = rules(HOST);
    let json = serde_json::to_value(&table).unwrap();
    let first = &json[0];
    assert_eq!(first["permanent"], true);
    assert_eq!(first["has"][0]["type"], "host");
    // Path-only rules omit `has` entirely.
    assert!(json[1].get("has").is_none());
  }
}
