//! Core types and trait definitions for the medrec patient record service.
//!
//! This crate is deliberately free of HTTP and runtime dependencies. The
//! storage backends and the API layer depend on it; it depends on nothing
//! proprietary.

pub mod error;
pub mod patient;
pub mod query;
pub mod store;

pub use error::{Error, Result};
pub use query::{JoinPolicy, PatientService};
