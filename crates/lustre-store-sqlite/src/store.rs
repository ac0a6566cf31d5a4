//! [`SqliteJobs`] — the SQLite implementation of [`JobSource`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use lustre_core::{
  job::{JobPosting, JobStatus, NewJob},
  source::{JobQuery, JobSource},
};

use crate::{
  Error, Result,
  encode::{RawJobRow, encode_dt, encode_uuid},
  schema::SCHEMA,
};

const JOB_COLUMNS: &str = "job_id, title, category, location, description, \
                           employment_type, organization, status, \
                           created_at, expires_at, updated_at";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Lustre job store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteJobs {
  conn: tokio_rusqlite::Connection,
}

impl SqliteJobs {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

/// Map a `SELECT <JOB_COLUMNS>` row into a [`RawJobRow`].
fn job_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawJobRow> {
  Ok(RawJobRow {
    job_id:          row.get(0)?,
    title:           row.get(1)?,
    category:        row.get(2)?,
    location:        row.get(3)?,
    description:     row.get(4)?,
    employment_type: row.get(5)?,
    organization:    row.get(6)?,
    status:          row.get(7)?,
    created_at:      row.get(8)?,
    expires_at:      row.get(9)?,
    updated_at:      row.get(10)?,
  })
}

// ─── JobSource impl ──────────────────────────────────────────────────────────

impl JobSource for SqliteJobs {
  type Error = Error;

  async fn add_job(&self, input: NewJob) -> Result<JobPosting> {
    let job = JobPosting {
      id:              Uuid::new_v4(),
      title:           input.title,
      category:        input.category,
      location:        input.location,
      description:     input.description,
      employment_type: input.employment_type,
      organization:    input.organization,
      created_at:      Some(Utc::now()),
      expires_at:      input.expires_at,
      updated_at:      None,
      status:          input.status,
    };

    let id_str       = encode_uuid(job.id);
    let title        = job.title.clone();
    let category     = job.category.clone();
    let location     = job.location.clone();
    let description  = job.description.clone();
    let employment   = job.employment_type.clone();
    let organization = job.organization.clone();
    let status_str   = job.status.as_str().to_owned();
    let created_str  = job.created_at.map(encode_dt);
    let expires_str  = job.expires_at.map(encode_dt);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO jobs (
             job_id, title, category, location, description,
             employment_type, organization, status,
             created_at, expires_at, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, NULL)",
          rusqlite::params![
            id_str,
            title,
            category,
            location,
            description,
            employment,
            organization,
            status_str,
            created_str,
            expires_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(job)
  }

  async fn get_job(&self, id: Uuid) -> Result<Option<JobPosting>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawJobRow> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {JOB_COLUMNS} FROM jobs WHERE job_id = ?1"),
              rusqlite::params![id_str],
              job_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawJobRow::into_job).transpose()
  }

  async fn list_jobs<'a>(&'a self, query: &'a JobQuery) -> Result<Vec<JobPosting>> {
    // Text, role, and status filters run in SQL. The location-slug filter
    // cannot: slugs are derived, never stored, so it runs over the decoded
    // rows below — as do limit/offset, which must apply after it.
    let mut clauses: Vec<&str> = Vec::new();
    let mut params: Vec<String> = Vec::new();

    if let Some(ref text) = query.text {
      clauses.push("(title LIKE ? OR description LIKE ?)");
      let pattern = format!("%{text}%");
      params.push(pattern.clone());
      params.push(pattern);
    }
    if let Some(ref role) = query.role {
      clauses.push("LOWER(category) = LOWER(?)");
      params.push(role.clone());
    }
    if let Some(ref status) = query.status {
      clauses.push("status = ?");
      params.push(status.as_str().to_owned());
    }

    let mut sql = format!("SELECT {JOB_COLUMNS} FROM jobs");
    if !clauses.is_empty() {
      sql.push_str(" WHERE ");
      sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY created_at DESC");

    let raws: Vec<RawJobRow> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params.iter()), job_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    let mut jobs = raws
      .into_iter()
      .map(RawJobRow::into_job)
      .collect::<Result<Vec<_>>>()?;

    if let Some(ref slug) = query.location_slug {
      jobs.retain(|job| job.location_slug() == *slug);
    }

    let offset = query.offset.unwrap_or(0);
    let jobs: Vec<JobPosting> = match query.limit {
      Some(limit) => jobs.into_iter().skip(offset).take(limit).collect(),
      None => jobs.into_iter().skip(offset).collect(),
    };

    Ok(jobs)
  }

  async fn set_status(&self, id: Uuid, status: JobStatus) -> Result<JobPosting> {
    let id_str     = encode_uuid(id);
    let status_str = status.as_str().to_owned();
    let now_str    = encode_dt(Utc::now());

    // `updated_at` is stamped in the same statement as the status write so a
    // filled posting always has a real 410-cutoff basis.
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE jobs SET status = ?2, updated_at = ?3 WHERE job_id = ?1",
          rusqlite::params![id_str, status_str, now_str],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(Error::JobNotFound(id));
    }

    self.get_job(id).await?.ok_or(Error::JobNotFound(id))
  }
}
