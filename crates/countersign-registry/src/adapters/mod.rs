//! # Adapters Module
//!
//! Concrete implementations of the registry's outbound ports, plus the
//! raw-byte call handler.
//!
//! ## Modules
//!
//! - `assets`: token issuers (sequential counter, recording test double)
//! - `file`: file-backed key-value store with snapshot persistence
//! - `handler`: raw-byte request dispatch with per-call ids
//! - `memory`: in-memory key-value store
//! - `payments`: companion payment policy

pub mod assets;
pub mod file;
pub mod handler;
pub mod memory;
pub mod payments;

pub use assets::{RecordingAssetIssuer, SequentialAssetIssuer};
pub use file::FileBackedKVStore;
pub use handler::{CallId, CallOutcome, RegistryCall, RegistryCallHandler};
pub use memory::InMemoryKVStore;
pub use payments::StandardPaymentPolicy;
