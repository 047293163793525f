//! Patient and episode records.
//!
//! Stored records are flat: a [`Patient`] carries only demographics and an
//! [`Episode`] points back at its patient by identifier. The nested
//! [`PatientRecord`] exists only as a query result.
//!
//! Field names serialise in `PascalCase` to match the wire format consumers
//! already depend on (`PatientId`, `NhsNumber`, `AdmissionDate`, ...).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ─── Patient ─────────────────────────────────────────────────────────────────

/// Demographic data for a single patient.
///
/// `patient_id` is assigned by whoever loads the data; the store never
/// generates or deduplicates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Patient {
  pub patient_id:    i32,
  pub first_name:    String,
  pub last_name:     String,
  pub date_of_birth: NaiveDate,
  /// National health identifier; the format is not validated.
  pub nhs_number:    String,
}

// ─── Episode ─────────────────────────────────────────────────────────────────

/// A single clinical admission event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Episode {
  pub episode_id:     i32,
  /// Owning patient. Not enforced: an episode whose patient does not exist
  /// is simply never joined.
  pub patient_id:     i32,
  pub admission_date: DateTime<Utc>,
  pub diagnosis:      String,
}

// ─── PatientRecord ───────────────────────────────────────────────────────────

/// A patient joined with their episodes. Computed on read, never stored.
///
/// Serialises as the patient's fields plus an `Episodes` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PatientRecord {
  #[serde(flatten)]
  pub patient:  Patient,
  /// Episodes in join-production order.
  pub episodes: Vec<Episode>,
}

impl PatientRecord {
  pub fn patient_id(&self) -> i32 { self.patient.patient_id }
}
