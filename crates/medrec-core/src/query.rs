//! The patient query: joins patients to their episodes.
//!
//! The join is relational. Every (patient, episode) pair whose identifiers
//! agree is produced, patients in insertion order and, for each patient row,
//! that patient's episodes in insertion order. The first pair supplies the
//! demographics; every pair contributes its episode.
//!
//! Two consequences are kept on purpose:
//!
//! - Under [`JoinPolicy::Inner`] a patient with no episodes produces no pairs
//!   and is reported as not found.
//! - Duplicate patient rows each join the full episode sequence, so the
//!   episodes appear once per duplicate row.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  patient::{Episode, PatientRecord},
  store::RecordStore,
};

// ─── Policy ──────────────────────────────────────────────────────────────────

/// How a patient with zero episodes is treated.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum JoinPolicy {
  /// Only patients with at least one episode are found.
  #[default]
  Inner,
  /// Any stored patient is found; `episodes` may be empty.
  Outer,
}

// ─── Service ─────────────────────────────────────────────────────────────────

/// Answers "fetch patient by identifier" against a [`RecordStore`].
pub struct PatientService<S> {
  store:  Arc<S>,
  policy: JoinPolicy,
}

impl<S> Clone for PatientService<S> {
  fn clone(&self) -> Self {
    Self {
      store:  Arc::clone(&self.store),
      policy: self.policy,
    }
  }
}

impl<S: RecordStore> PatientService<S> {
  /// A service using the default [`JoinPolicy::Inner`].
  pub fn new(store: Arc<S>) -> Self {
    Self::with_policy(store, JoinPolicy::default())
  }

  pub fn with_policy(store: Arc<S>, policy: JoinPolicy) -> Self {
    Self { store, policy }
  }

  pub fn store(&self) -> &Arc<S> { &self.store }

  pub fn policy(&self) -> JoinPolicy { self.policy }

  /// Fetch a patient joined with all of their episodes.
  ///
  /// Returns [`Error::PatientNotFound`] when the join yields nothing for
  /// `patient_id`. That is the only failure.
  pub fn get_patient(&self, patient_id: i32) -> Result<PatientRecord> {
    // Lookup for the requested key, in episode insertion order.
    let matching: Vec<Episode> = self
      .store
      .episodes()
      .into_iter()
      .filter(|e| e.patient_id == patient_id)
      .collect();

    if matching.is_empty() && self.policy == JoinPolicy::Inner {
      return Err(Error::PatientNotFound(patient_id));
    }

    let mut rows = self
      .store
      .patients()
      .into_iter()
      .filter(|p| p.patient_id == patient_id);

    let patient = rows.next().ok_or(Error::PatientNotFound(patient_id))?;
    let row_count = 1 + rows.count();

    let mut episodes = Vec::with_capacity(matching.len() * row_count);
    for _ in 0..row_count {
      episodes.extend(matching.iter().cloned());
    }

    Ok(PatientRecord { patient, episodes })
  }
}
