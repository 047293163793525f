//! Seed documents: the records a server loads before it starts listening.
//!
//! A seed is a JSON object with `Patients` and `Episodes` arrays using the
//! same field names as the API payload. Either array may be omitted.

use std::path::{Path, PathBuf};

use medrec_core::{
  patient::{Episode, Patient},
  store::RecordStore,
};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
  #[error("failed to read seed file {path:?}: {source}")]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("malformed seed document: {0}")]
  Json(#[from] serde_json::Error),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Seed {
  #[serde(default)]
  pub patients: Vec<Patient>,
  #[serde(default)]
  pub episodes: Vec<Episode>,
}

impl Seed {
  pub fn from_json(s: &str) -> Result<Self, SeedError> {
    Ok(serde_json::from_str(s)?)
  }

  pub fn from_path(path: &Path) -> Result<Self, SeedError> {
    let text = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_json(&text)
  }

  /// Append every record to `store`, in document order.
  pub fn load_into<S: RecordStore + ?Sized>(self, store: &S) {
    for patient in self.patients {
      store.add_patient(patient);
    }
    for episode in self.episodes {
      store.add_episode(episode);
    }
  }
}
