//! Error types for `medrec-core`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  /// No patient row joined with the requested identifier.
  #[error("patient not found: {0}")]
  PatientNotFound(i32),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
