//! Error type for `lustre-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("job not found: {0}")]
  JobNotFound(uuid::Uuid),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
