//! Account pages: `GET /auth/sign-in`, `GET /auth/sign-up`.
//!
//! The forms themselves belong to the hosted auth provider and the client
//! application; these handlers exist so the canonical auth paths resolve
//! with the right head — always `noindex, nofollow`, whatever any job's
//! state is.

use axum::{
  body::Body,
  extract::State,
  http::{StatusCode, header},
  response::Response,
};
use lustre_core::source::JobSource;
use lustre_seo::head;

use crate::{AppState, error::Error, handlers};

pub async fn sign_in<S>(
  State(state): State<AppState<S>>,
) -> Result<Response, Error>
where
  S: JobSource + Clone + Send + Sync + 'static,
{
  account_page(&state, "Sign in", "/auth/sign-in")
}

pub async fn sign_up<S>(
  State(state): State<AppState<S>>,
) -> Result<Response, Error>
where
  S: JobSource + Clone + Send + Sync + 'static,
{
  account_page(&state, "Sign up", "/auth/sign-up")
}

fn account_page<S>(
  state: &AppState<S>,
  title: &str,
  path: &str,
) -> Result<Response, Error>
where
  S: JobSource + Clone + Send + Sync + 'static,
{
  let page_head = head::account_page_head(title, path, &state.site);
  let body = format!("<h1>{title}</h1>\n<div id=\"app\"></div>");
  let html = handlers::render_page(&page_head, &body);

  Ok(
    Response::builder()
      .status(StatusCode::OK)
      .header(header::CONTENT_TYPE, handlers::CONTENT_TYPE_HTML)
      .header(header::CONTENT_LENGTH, html.len())
      .body(Body::from(html))
      .unwrap(),
  )
}
