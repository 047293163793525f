//! In-memory backend for the medrec record store.
//!
//! Records live for as long as the process does. There is no persistence
//! and no eviction.

mod store;

pub use store::MemoryStore;

#[cfg(test)]
mod tests;
