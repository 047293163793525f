//! Handlers for `/patients` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/patients/:patient_id` | Patient with episodes; 404 if the join is empty |

use axum::{
  Json,
  extract::{Path, State, rejection::PathRejection},
};
use medrec_core::{PatientService, patient::PatientRecord, store::RecordStore};

use crate::error::ApiError;

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /patients/:patient_id`
pub async fn get_one<S>(
  State(service): State<PatientService<S>>,
  path: Result<Path<i32>, PathRejection>,
) -> Result<Json<PatientRecord>, ApiError>
where
  S: RecordStore + 'static,
{
  let Path(patient_id) = path?;

  let record = service.get_patient(patient_id).inspect_err(|_| {
    tracing::debug!(patient_id, "no patient joined for identifier");
  })?;

  tracing::debug!(
    patient_id,
    episodes = record.episodes.len(),
    "patient record served"
  );
  Ok(Json(record))
}
