//! The `RecordStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `medrec-store-memory`).
//! [`PatientService`](crate::PatientService) depends on this abstraction, not
//! on any concrete backend, so a persistent store can replace the in-memory
//! one without touching the join.

use crate::patient::{Episode, Patient};

/// Abstraction over a holder of two append-only containers: patients and
/// episodes.
///
/// No method validates its input and none can fail. Uniqueness of
/// identifiers is the caller's responsibility.
pub trait RecordStore: Send + Sync {
  /// Append a patient. Duplicate identifiers are accepted as-is.
  fn add_patient(&self, patient: Patient);

  /// Append an episode. The owning patient need not exist.
  fn add_episode(&self, episode: Episode);

  /// Snapshot of every patient, in insertion order.
  fn patients(&self) -> Vec<Patient>;

  /// Snapshot of every episode, in insertion order.
  fn episodes(&self) -> Vec<Episode>;
}
