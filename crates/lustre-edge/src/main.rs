//! lustre-edge server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens an
//! in-process SQLite job store, and serves the marketplace's SEO surface
//! over HTTP.
//!
//! # Deploy-time artifacts
//!
//! To write `redirects.json`, `robots.txt`, and `sitemap.xml` for the
//! hosting platform instead of serving:
//!
//! ```
//! cargo run -p lustre-edge --bin server -- --write-artifacts dist/
//! ```

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use lustre_edge::{AppState, ServerConfig, handlers::artifacts, redirects};
use lustre_seo::Site;
use lustre_store_sqlite::SqliteJobs;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Lustre edge server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Write the deploy-time artifacts into this directory and exit.
  #[arg(long, value_name = "DIR")]
  write_artifacts: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("LUSTRE"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Expand `~` in store path.
  let store_path = expand_tilde(&server_cfg.store_path);

  // Open SQLite store.
  let store = SqliteJobs::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let site = Site::new(&server_cfg.site_name, &server_cfg.site_host);

  // Helper mode: write deploy artifacts and exit.
  if let Some(ref dir) = cli.write_artifacts {
    artifacts::write_artifacts(dir, &site, &store).await?;
    return Ok(());
  }

  // Build application state.
  let state = AppState {
    jobs:      Arc::new(store),
    site:      Arc::new(site),
    redirects: Arc::new(redirects::rules(&server_cfg.site_host)),
    config:    Arc::new(server_cfg.clone()),
  };

  let app = lustre_edge::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
