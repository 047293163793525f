//! [`MemoryStore`]: the in-memory implementation of [`RecordStore`].

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use medrec_core::{
  patient::{Episode, Patient},
  store::RecordStore,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A record store holding both containers in memory.
///
/// Each container sits behind its own lock, so concurrent readers never see
/// a half-appended record. Share it between handlers with an `Arc`.
#[derive(Debug, Default)]
pub struct MemoryStore {
  patients: RwLock<Vec<Patient>>,
  episodes: RwLock<Vec<Episode>>,
}

impl MemoryStore {
  /// An empty store.
  pub fn new() -> Self { Self::default() }

  /// A store pre-filled with `patients` and `episodes`, kept in the given
  /// order.
  pub fn from_records(patients: Vec<Patient>, episodes: Vec<Episode>) -> Self {
    Self {
      patients: RwLock::new(patients),
      episodes: RwLock::new(episodes),
    }
  }

  pub fn patient_count(&self) -> usize { read(&self.patients).len() }

  pub fn episode_count(&self) -> usize { read(&self.episodes).len() }
}

// A panic while holding a lock cannot leave a partial record behind: every
// write is a single `Vec::push`. Poisoning is therefore ignored.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
  lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
  lock.write().unwrap_or_else(PoisonError::into_inner)
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for MemoryStore {
  fn add_patient(&self, patient: Patient) { write(&self.patients).push(patient); }

  fn add_episode(&self, episode: Episode) { write(&self.episodes).push(episode); }

  fn patients(&self) -> Vec<Patient> { read(&self.patients).clone() }

  fn episodes(&self) -> Vec<Episode> { read(&self.episodes).clone() }
}
