//! JSON REST API for medrec.
//!
//! Exposes an axum [`Router`] backed by a [`PatientService`] over any
//! [`medrec_core::store::RecordStore`]. TLS and transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", medrec_api::api_router(service.clone()))
//! ```

pub mod error;
pub mod patients;

use axum::{Router, routing::get};
use medrec_core::{PatientService, store::RecordStore};

pub use error::ApiError;

/// Build a fully-materialised API router for `service`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(service: PatientService<S>) -> Router<()>
where
  S: RecordStore + 'static,
{
  Router::new()
    .route("/patients/{patient_id}", get(patients::get_one::<S>))
    .with_state(service)
}

// ─── Integration tests ────────────────────────────────────────────────────────
