//! Error types and axum `IntoResponse` implementation.

use axum::{
  http::{HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("not found")]
  NotFound,
  /// The resource existed and has been permanently removed. Served as 410 so
  /// crawlers de-list immediately instead of retrying a 404.
  #[error("gone")]
  Gone,
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::NotFound => (StatusCode::NOT_FOUND, "Not Found").into_response(),
      Error::Gone => {
        let body = "<!doctype html>\n<html><head><title>Listing removed</title>\
                    <meta name=\"robots\" content=\"noindex\"></head>\
                    <body><h1>410 Gone</h1>\
                    <p>This listing has been permanently removed.</p>\
                    </body></html>\n";
        let mut res = (StatusCode::GONE, body).into_response();
        res.headers_mut().insert(
          header::CONTENT_TYPE,
          HeaderValue::from_static("text/html; charset=utf-8"),
        );
        res
      }
      Error::Store(e) => {
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
      }
    }
  }
}
