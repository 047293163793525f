//! Server wiring for medrec: configuration, store start-up and the HTTP
//! application.

pub mod seed;

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use medrec_core::{JoinPolicy, PatientService};
use medrec_store_memory::MemoryStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use seed::{Seed, SeedError};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `MEDREC_*` environment variables.
#[derive(Deserialize, Clone, Debug)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:        String,
  #[serde(default = "default_port")]
  pub port:        u16,
  /// JSON seed document loaded before serving. Absent means an empty store.
  #[serde(default)]
  pub seed_path:   Option<PathBuf>,
  #[serde(default)]
  pub join_policy: JoinPolicy,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 8080 }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:        default_host(),
      port:        default_port(),
      seed_path:   None,
      join_policy: JoinPolicy::default(),
    }
  }
}

// ─── Start-up ─────────────────────────────────────────────────────────────────

/// Build the store for `config`, loading the seed document if one is set.
pub fn open_store(config: &ServerConfig) -> Result<Arc<MemoryStore>, SeedError> {
  let store = MemoryStore::new();
  if let Some(path) = &config.seed_path {
    Seed::from_path(&expand_tilde(path))?.load_into(&store);
  }
  Ok(Arc::new(store))
}

/// The full HTTP application: the JSON API under `/api`, with request
/// tracing.
pub fn app(service: PatientService<MemoryStore>) -> Router {
  Router::new()
    .nest("/api", medrec_api::api_router(service))
    .layer(TraceLayer::new_for_http())
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Tests ────────────────────────────────────────────────────────────────────
