//! medrec server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), loads the
//! seed document into an in-memory store, and serves the JSON API over HTTP.
//!
//! ```
//! cargo run -p medrec-server --bin server -- --config config.toml
//! ```

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use medrec_core::PatientService;
use medrec_server::{ServerConfig, app, open_store};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "medrec patient record server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("MEDREC"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // All records are loaded before the listener exists.
  let store = open_store(&server_cfg).with_context(|| {
    format!("failed to load seed from {:?}", server_cfg.seed_path)
  })?;
  tracing::info!(
    patients = store.patient_count(),
    episodes = store.episode_count(),
    join_policy = ?server_cfg.join_policy,
    "record store ready"
  );

  let service = PatientService::with_policy(store, server_cfg.join_policy);
  let app = app(service);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
